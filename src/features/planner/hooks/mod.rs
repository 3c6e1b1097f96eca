pub mod use_planner;

pub use use_planner::*;
