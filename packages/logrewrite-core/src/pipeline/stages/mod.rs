//! Pipeline stages
//!
//! - `template_stage`: per-call message rewrites
//! - `guard_stage`: per-block level alignment and guard planning

mod guard_stage;
mod template_stage;

pub use guard_stage::GuardStage;
pub use template_stage::TemplateStage;

use super::result::RewriteStats;
use crate::features::concatenation::HostTemplate;

/// Mutable state threaded through the stages of one unit
#[derive(Debug, Default)]
pub struct PassContext {
    pub stats: RewriteStats,
    pub warnings: Vec<String>,
    pub host_templates: Vec<HostTemplate>,
}

impl PassContext {
    pub fn warn(&mut self, warning: String) {
        tracing::debug!("rewrite_skipped ({})", warning);
        self.warnings.push(warning);
    }
}
