pub mod controller;
pub mod surface;

pub use controller::PlannerController;
pub use surface::{Action, PlannerSurface};
