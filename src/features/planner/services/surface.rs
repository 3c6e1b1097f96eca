use crate::core::models::{BackendHealth, HistoryEntry, TaskBreakdown};

/// Controls that show an in-flight state while their request is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Submit,
    GenerateCode,
    PushGithub,
    SaveSettings,
}

impl Action {
    pub fn idle_label(&self) -> &'static str {
        match self {
            Action::Submit => "Generate Plan",
            Action::GenerateCode => "Generate Codebase",
            Action::PushGithub => "Push to GitHub",
            Action::SaveSettings => "Save",
        }
    }

    pub fn busy_label(&self) -> &'static str {
        match self {
            Action::Submit => "Processing...",
            Action::GenerateCode => "Generating...",
            Action::PushGithub => "Pushing...",
            Action::SaveSettings => "Saving...",
        }
    }

    pub fn label(&self, busy: bool) -> &'static str {
        if busy {
            self.busy_label()
        } else {
            self.idle_label()
        }
    }

    #[cfg(test)]
    pub fn all() -> [Action; 4] {
        [Action::Submit, Action::GenerateCode, Action::PushGithub, Action::SaveSettings]
    }
}

/// Everything the planner controller can do to the page.
pub trait PlannerSurface {
    fn set_busy(&self, action: Action, busy: bool);
    fn show_output(&self);
    fn set_loading(&self, loading: bool);
    fn clear_breakdown(&self);
    fn render(&self, breakdown: TaskBreakdown);
    fn set_requirement(&self, text: &str);
    fn push_history(&self, entry: HistoryEntry);
    fn clear_history(&self);
    fn reveal_push(&self);
    fn show_push_success(&self, repo_url: &str);
    fn set_sidebar_collapsed(&self, collapsed: bool);
    fn set_token_input(&self, token: &str);
    fn open_settings(&self);
    fn close_settings(&self);
    fn set_backend_health(&self, health: Option<BackendHealth>);
    fn alert(&self, message: &str);
    fn prompt(&self, message: &str) -> Option<String>;
    fn save_file(&self, filename: &str, mime: &str, bytes: &[u8]);
    fn open_url(&self, url: &str);
}
