pub mod about_modal;
pub mod intro_overlay;

pub use about_modal::AboutModal;
pub use intro_overlay::IntroOverlay;
