use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub requirement: String,
    pub preview: String,
    pub tasks: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(requirement: &str, tasks: Vec<String>, preview_chars: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            requirement: requirement.to_string(),
            preview: preview(requirement, preview_chars),
            tasks,
            created_at: Utc::now(),
        }
    }
}

// The ellipsis is appended even to short requirements.
fn preview(requirement: &str, max_chars: usize) -> String {
    let head: String = requirement.chars().take(max_chars).collect();
    format!("{}...", head)
}
