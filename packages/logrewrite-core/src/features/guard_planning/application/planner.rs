//! Guard-insertion planner
//!
//! Scans a block once, left to right, with one run accumulator:
//!
//! ```text
//!            ┌──────── same level ────────┐
//!            ▼                            │
//!   NONE ──LEVEL(l)──▶ LEVEL(l) ──────────┘
//!    ▲                   │
//!    └── other stmt / ───┘  flush: wrap run in one guard
//!        other level
//! ```
//!
//! Bare calls at an eligible level and existing single-level guards join the
//! run at their level. A flushed run is wrapped when it holds an expensive
//! call or an existing guard; a run of cheap calls is emitted bare. Blocks
//! without a bare expensive call are returned untouched, which makes the
//! planner idempotent.

use crate::errors::{Result, RewriteError};
use crate::features::call_matching::LoggingFramework;
use crate::features::classification::ExpressionClassifier;
use crate::features::guard_planning::domain::{AccumulatorState, BlockPlan, Kind};
use crate::shared::models::{GuardedBlock, LogCall, LogLevel, Statement};

pub struct GuardPlanner<P> {
    level_predicate: P,
    /// Restrict to one framework's loggers; `None` accepts any logger
    framework: Option<LoggingFramework>,
    classifier: ExpressionClassifier,
}

impl<P> GuardPlanner<P>
where
    P: Fn(LogLevel) -> bool,
{
    pub fn new(level_predicate: P) -> Self {
        Self {
            level_predicate,
            framework: None,
            classifier: ExpressionClassifier::new(),
        }
    }

    pub fn with_framework(mut self, framework: LoggingFramework) -> Self {
        self.framework = Some(framework);
        self
    }

    fn recognizes(&self, call: &LogCall) -> bool {
        self.framework
            .map_or(true, |framework| framework.matches(&call.logger.ty))
    }

    fn enablement_check(&self, level: LogLevel) -> Option<&'static str> {
        match self.framework {
            Some(framework) => framework.enablement_check(level),
            None => Some(level.enablement_method()),
        }
    }

    fn is_eligible(&self, level: LogLevel) -> bool {
        (self.level_predicate)(level) && self.enablement_check(level).is_some()
    }

    fn is_bare_expensive(&self, statement: &Statement) -> bool {
        match statement {
            Statement::Log(call) => {
                self.recognizes(call)
                    && self.is_eligible(call.level)
                    && self.classifier.call_cost(call).is_expensive()
            }
            _ => false,
        }
    }

    pub fn kind_of(&self, statement: &Statement) -> Kind {
        match statement {
            Statement::Log(call) if self.recognizes(call) && self.is_eligible(call.level) => {
                Kind::Level(call.level)
            }
            Statement::Guarded(guard) if self.is_eligible(guard.level) => {
                let single_level = !guard.body.is_empty()
                    && guard.body.iter().all(|s| {
                        matches!(s, Statement::Log(call)
                            if call.level == guard.level && self.recognizes(call))
                    });
                if single_level {
                    Kind::Level(guard.level)
                } else {
                    Kind::None
                }
            }
            _ => Kind::None,
        }
    }

    /// Whether the block holds anything new to guard
    pub fn needs_planning(&self, statements: &[Statement]) -> bool {
        statements.iter().any(|s| self.is_bare_expensive(s))
    }

    pub fn plan(&self, statements: &[Statement]) -> Result<BlockPlan> {
        if !self.needs_planning(statements) {
            return Ok(BlockPlan::unchanged(statements));
        }

        let mut plan = BlockPlan::default();
        let mut state = AccumulatorState::new();
        for statement in statements {
            match self.kind_of(statement) {
                Kind::None => {
                    self.flush(&mut state, &mut plan)?;
                    plan.statements.push(statement.clone());
                }
                Kind::Level(level) => {
                    if state.current_level != Some(level) {
                        self.flush(&mut state, &mut plan)?;
                    }
                    state.push(level, statement.clone())?;
                }
            }
        }
        self.flush(&mut state, &mut plan)?;

        plan.changed = plan.statements.as_slice() != statements;
        tracing::trace!(
            "guard_plan (statements={}, inserted={}, merged={})",
            statements.len(),
            plan.guards_inserted,
            plan.guards_merged
        );
        Ok(plan)
    }

    fn flush(&self, state: &mut AccumulatorState, plan: &mut BlockPlan) -> Result<()> {
        let Some(run) = state.take()? else {
            return Ok(());
        };

        let has_expensive = run.statements.iter().any(|s| {
            matches!(s, Statement::Log(call) if self.classifier.call_cost(call).is_expensive())
        });
        if !has_expensive && run.absorbed_guards == 0 {
            plan.statements.extend(run.statements);
            return Ok(());
        }

        let reused = run.reused_guard.is_some();
        let guard = match run.reused_guard {
            Some(guard) => GuardedBlock {
                body: run.statements,
                ..guard
            },
            None => {
                let logger = run
                    .statements
                    .iter()
                    .find_map(Statement::first_logger)
                    .cloned()
                    .ok_or_else(|| RewriteError::invariant("run without a logger"))?;
                let check = self.enablement_check(run.level).ok_or_else(|| {
                    RewriteError::invariant(format!("no enablement check for {}", run.level))
                })?;
                plan.guards_inserted += 1;
                GuardedBlock::synthesize(&logger, run.level, check, run.statements)
            }
        };
        plan.guards_merged += run.absorbed_guards - usize::from(reused);
        plan.statements.push(Statement::Guarded(guard));
        Ok(())
    }
}
