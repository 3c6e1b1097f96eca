pub mod analysis;
pub mod health;
pub mod history;
pub mod session;

pub use analysis::{reveal_delay, scalar_text, tasks_markdown, RequirementAnalysis, TaskBreakdown, TechStack};
pub use health::BackendHealth;
pub use history::HistoryEntry;
pub use session::SessionState;
