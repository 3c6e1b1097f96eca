pub mod action_bar;
pub mod analysis_view;
pub mod history_sidebar;
pub mod planner_header;
pub mod push_success_modal;
pub mod requirement_form;
pub mod settings_modal;

pub use action_bar::ActionBar;
pub use analysis_view::AnalysisView;
pub use history_sidebar::HistorySidebar;
pub use planner_header::PlannerHeader;
pub use push_success_modal::PushSuccessModal;
pub use requirement_form::RequirementForm;
pub use settings_modal::SettingsModal;
