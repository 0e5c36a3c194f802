//! Guard level alignment
//!
//! `if (log.isDebugEnabled()) { log.info(..); }` checks the wrong level: the
//! check is re-levelled to the most severe level logged anywhere in the body.
//! Calls inside catch clauses do not count.

use crate::features::call_matching::LoggingFramework;
use crate::shared::models::{ExprKind, GuardedBlock, Statement};

#[derive(Debug, Clone, Copy, Default)]
pub struct GuardLevelAligner {
    framework: Option<LoggingFramework>,
}

impl GuardLevelAligner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_framework(mut self, framework: LoggingFramework) -> Self {
        self.framework = Some(framework);
        self
    }

    /// Aligned guard, or `None` when it already matches or cannot be fixed
    pub fn align_guard(&self, guard: &GuardedBlock) -> Option<GuardedBlock> {
        let target = guard.log_calls().into_iter().map(|call| call.level).max()?;
        if target == guard.level {
            return None;
        }
        let check = match self.framework {
            Some(framework) => framework.enablement_check(target)?,
            None => target.enablement_method(),
        };

        let mut condition = guard.condition.clone();
        match &mut condition.kind {
            ExprKind::MethodCall(call) => call.name = check.to_string(),
            _ => return None,
        }
        Some(GuardedBlock {
            level: target,
            condition,
            body: guard.body.clone(),
        })
    }

    /// Align every guard in a block; returns the block and the number of
    /// guards changed
    pub fn align(&self, statements: &[Statement]) -> (Vec<Statement>, usize) {
        let mut realigned = 0;
        let aligned = statements
            .iter()
            .map(|statement| match statement {
                Statement::Guarded(guard) => match self.align_guard(guard) {
                    Some(fixed) => {
                        realigned += 1;
                        Statement::Guarded(fixed)
                    }
                    None => statement.clone(),
                },
                other => other.clone(),
            })
            .collect();
        (aligned, realigned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{Expression, LogCall, LogLevel, OpaqueStatement, TypeDescriptor};

    fn logger() -> Expression {
        Expression::ident("log", TypeDescriptor::class("org.apache.log4j.Logger"))
    }

    fn log(level: LogLevel) -> Statement {
        Statement::Log(LogCall::new(logger(), level, vec![Expression::string_lit("x")]))
    }

    fn guard(level: LogLevel, body: Vec<Statement>) -> GuardedBlock {
        GuardedBlock::synthesize(&logger(), level, level.enablement_method(), body)
    }

    #[test]
    fn test_guard_realigned_to_body() {
        let fixed = GuardLevelAligner::new()
            .align_guard(&guard(LogLevel::Debug, vec![log(LogLevel::Info)]))
            .unwrap();
        assert_eq!(fixed.level, LogLevel::Info);
        assert_eq!(fixed.condition.render(), "log.isInfoEnabled()");
    }

    #[test]
    fn test_most_severe_level_wins() {
        let fixed = GuardLevelAligner::new()
            .align_guard(&guard(
                LogLevel::Info,
                vec![log(LogLevel::Trace), log(LogLevel::Debug)],
            ))
            .unwrap();
        assert_eq!(fixed.level, LogLevel::Debug);
    }

    #[test]
    fn test_matching_or_empty_guards_untouched() {
        let aligner = GuardLevelAligner::new();
        assert!(aligner
            .align_guard(&guard(LogLevel::Info, vec![log(LogLevel::Info)]))
            .is_none());
        assert!(aligner
            .align_guard(&guard(LogLevel::Info, vec![Statement::other("x++;")]))
            .is_none());
    }

    #[test]
    fn test_missing_check_leaves_guard() {
        let aligner = GuardLevelAligner::new().with_framework(LoggingFramework::Log4j1);
        assert!(aligner
            .align_guard(&guard(LogLevel::Info, vec![log(LogLevel::Warn)]))
            .is_none());
    }

    #[test]
    fn test_align_block() {
        let block = vec![
            Statement::Guarded(guard(LogLevel::Trace, vec![log(LogLevel::Debug)])),
            log(LogLevel::Info),
        ];
        let (aligned, count) = GuardLevelAligner::new().align(&block);
        assert_eq!(count, 1);
        assert_eq!(aligned[1], block[1]);
        assert!(matches!(&aligned[0], Statement::Guarded(g) if g.level == LogLevel::Debug));
    }

    #[test]
    fn test_nested_calls_drive_alignment() {
        let loop_body = Statement::Other(
            OpaqueStatement::new("for (Item item : items)").with_child(vec![log(LogLevel::Info)]),
        );
        let fixed = GuardLevelAligner::new()
            .align_guard(&guard(LogLevel::Debug, vec![loop_body]))
            .unwrap();
        assert_eq!(fixed.level, LogLevel::Info);
        assert_eq!(fixed.condition.render(), "log.isInfoEnabled()");
    }

    #[test]
    fn test_catch_clause_calls_ignored() {
        let body = vec![
            Statement::Other(OpaqueStatement::new("try").with_child(vec![log(LogLevel::Debug)])),
            Statement::Other(
                OpaqueStatement::new("catch (Exception e)").with_child(vec![log(LogLevel::Error)]),
            ),
        ];
        let aligner = GuardLevelAligner::new();
        assert!(aligner.align_guard(&guard(LogLevel::Debug, body.clone())).is_none());
        let fixed = aligner.align_guard(&guard(LogLevel::Trace, body)).unwrap();
        assert_eq!(fixed.level, LogLevel::Debug);
    }
}
