/*
 * logrewrite-core - Logging call-site rewriting
 *
 * Feature-First Layout:
 * - shared/      : Tree views (Expression, LogCall, Statement, TypeDescriptor)
 * - features/    : classification → concatenation → reorder → guard_planning,
 *                  plus call_matching for logger recognition
 * - config/      : Presets, pass configs, YAML
 * - pipeline/    : Unit processor, stats, batch processing
 *
 * Every pass is a pure tree-to-tree function; units are independent and are
 * processed in parallel with rayon.
 */

#![allow(clippy::should_implement_trait)] // from_str returns Option
#![allow(clippy::module_inception)]
#![allow(clippy::new_without_default)]
#![allow(clippy::unnecessary_map_or)] // map_or style for compatibility
#![allow(clippy::manual_map)]

pub mod config;
pub mod errors;
pub mod features;
pub mod pipeline;
pub mod shared;

pub use config::{ConfigError, GuardConfig, Preset, RewriteConfig, TemplateConfig};
pub use errors::{Result, RewriteError};
pub use features::call_matching::{LogCallMatcher, LoggerApi, LoggingFramework};
pub use features::classification::{Cost, ExpressionClassifier};
pub use features::concatenation::{ConcatenationCompiler, HostTemplate, TemplateResult};
pub use features::guard_planning::GuardPlanner;
pub use pipeline::{process_units, ProcessResult, RewriteStats, UnitProcessor};
pub use shared::models::{
    CompilationUnit, Expression, GuardedBlock, LogCall, LogLevel, Statement, TypeDescriptor,
};

/// Compile a message expression (usually a `+` chain) into a template
pub fn compile_message(expr: &Expression) -> TemplateResult {
    ConcatenationCompiler::new().compile(expr)
}

pub fn classify(expr: &Expression) -> Cost {
    ExpressionClassifier::new().classify(expr)
}

/// Guard every eligible run of expensive calls in one block
///
/// Statements come back unchanged if planning hits an inconsistent state.
pub fn plan_guards<P>(statements: &[Statement], level_predicate: P) -> Vec<Statement>
where
    P: Fn(LogLevel) -> bool,
{
    match GuardPlanner::new(level_predicate).plan(statements) {
        Ok(plan) => plan.statements,
        Err(err) => {
            tracing::warn!("plan_guards_failed ({})", err);
            statements.to_vec()
        }
    }
}
