use crate::config::DEFAULT_LANGUAGE;

/// Page-lifetime state owned by the planner controller.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub tasks: Vec<String>,
    pub language: String,
    pub github_token: String,
    pub sidebar_collapsed: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            github_token: String::new(),
            sidebar_collapsed: false,
        }
    }
}
