//! Domain models for guard planning
//!
//! Pure state; no knowledge of loggers or configuration.

use crate::errors::{Result, RewriteError};
use crate::shared::models::{GuardedBlock, LogLevel, Statement};
use serde::{Deserialize, Serialize};

/// Planner classification of one statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Unrelated; passed through as is
    None,
    /// Joins (or starts) a run at this level
    Level(LogLevel),
}

/// Run currently being accumulated
///
/// `current_level` is `None` exactly when `buffered` is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccumulatorState {
    pub current_level: Option<LogLevel>,
    pub buffered: Vec<Statement>,
    /// Guard the run began with, reused when the run is flushed
    pub reused_guard: Option<GuardedBlock>,
    /// Pre-existing guards absorbed into the run, including `reused_guard`
    pub absorbed_guards: usize,
}

impl AccumulatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.current_level.is_none()
    }

    /// Push a statement at `level`; the caller flushes on level changes
    pub fn push(&mut self, level: LogLevel, statement: Statement) -> Result<()> {
        if self.current_level.is_some_and(|current| current != level) {
            return Err(RewriteError::invariant(format!(
                "pushed {} statement into a {:?} run",
                level, self.current_level
            )));
        }
        match statement {
            Statement::Guarded(GuardedBlock {
                level: guard_level,
                condition,
                body,
            }) => {
                if self.buffered.is_empty() {
                    self.reused_guard = Some(GuardedBlock {
                        level: guard_level,
                        condition,
                        body: Vec::new(),
                    });
                }
                self.absorbed_guards += 1;
                self.buffered.extend(body);
            }
            other => self.buffered.push(other),
        }
        if !self.buffered.is_empty() {
            self.current_level = Some(level);
        }
        self.check()
    }

    /// Take the buffered run and reset to NONE
    pub fn take(&mut self) -> Result<Option<Run>> {
        self.check()?;
        let Some(level) = self.current_level.take() else {
            return Ok(None);
        };
        let run = Run {
            level,
            statements: std::mem::take(&mut self.buffered),
            reused_guard: self.reused_guard.take(),
            absorbed_guards: std::mem::take(&mut self.absorbed_guards),
        };
        Ok(Some(run))
    }

    fn check(&self) -> Result<()> {
        let consistent = self.current_level.is_none() == self.buffered.is_empty();
        debug_assert!(
            consistent,
            "accumulator level {:?} with {} buffered statements",
            self.current_level,
            self.buffered.len()
        );
        if consistent {
            Ok(())
        } else {
            Err(RewriteError::invariant(format!(
                "accumulator level {:?} with {} buffered statements",
                self.current_level,
                self.buffered.len()
            )))
        }
    }
}

/// A flushed run
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub level: LogLevel,
    pub statements: Vec<Statement>,
    pub reused_guard: Option<GuardedBlock>,
    pub absorbed_guards: usize,
}

/// Result of planning one block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockPlan {
    pub statements: Vec<Statement>,
    pub changed: bool,
    pub guards_inserted: usize,
    pub guards_merged: usize,
    pub deferred_chains: usize,
}

impl BlockPlan {
    pub fn unchanged(statements: &[Statement]) -> Self {
        Self {
            statements: statements.to_vec(),
            ..Default::default()
        }
    }
}
