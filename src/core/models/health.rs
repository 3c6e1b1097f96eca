use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct BackendHealth {
    pub status: String,
    pub mongodb: bool,
    pub task_planner: bool,
    pub dev_bot: bool,
    pub github: bool,
}

impl BackendHealth {
    pub fn services(&self) -> [(&'static str, bool); 4] {
        [
            ("Planner", self.task_planner),
            ("DevBot", self.dev_bot),
            ("GitHub", self.github),
            ("MongoDB", self.mongodb),
        ]
    }
}
