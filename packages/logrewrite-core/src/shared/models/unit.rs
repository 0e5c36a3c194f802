//! Compilation unit: the scope of one rewrite pass

use super::expression::Expression;
use super::statement::Statement;
use serde::{Deserialize, Serialize};

/// Top-level statement blocks (method bodies, initializers) of one source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub path: String,
    pub blocks: Vec<Vec<Statement>>,
}

impl CompilationUnit {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            blocks: Vec::new(),
        }
    }

    pub fn with_block(mut self, block: Vec<Statement>) -> Self {
        self.blocks.push(block);
        self
    }

    /// Logger of the first logging construct, in source order
    pub fn first_logger(&self) -> Option<&Expression> {
        self.blocks
            .iter()
            .flatten()
            .find_map(Statement::first_logger)
    }

    /// First logger, in source order, accepted by `accept`
    pub fn find_logger<F>(&self, accept: &F) -> Option<&Expression>
    where
        F: Fn(&Expression) -> bool,
    {
        self.blocks
            .iter()
            .flatten()
            .find_map(|statement| statement.find_logger(accept))
    }
}
