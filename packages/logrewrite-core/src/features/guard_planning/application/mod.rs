//! Application layer for guard planning

mod fluent;
mod level_alignment;
mod planner;

pub use fluent::DeferredRewriter;
pub use level_alignment::GuardLevelAligner;
pub use planner::GuardPlanner;
