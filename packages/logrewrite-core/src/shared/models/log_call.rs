//! Recognised logging invocation

use super::expression::Expression;
use super::level::LogLevel;
use super::types::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `logger.<level>([marker,] message, args...)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogCall {
    pub logger: Expression,
    pub level: LogLevel,
    pub arguments: Vec<Expression>,
    /// First argument is a marker and the message follows it
    pub has_leading_marker: bool,
}

impl LogCall {
    pub fn new(logger: Expression, level: LogLevel, arguments: Vec<Expression>) -> Self {
        let has_leading_marker = arguments.len() > 1 && arguments[0].ty.is_marker();
        Self {
            logger,
            level,
            arguments,
            has_leading_marker,
        }
    }

    pub fn message_index(&self) -> usize {
        usize::from(self.has_leading_marker)
    }

    pub fn message(&self) -> Option<&Expression> {
        self.arguments.get(self.message_index())
    }

    /// Arguments before the message (the marker, if any)
    pub fn leading_args(&self) -> &[Expression] {
        let end = self.message_index().min(self.arguments.len());
        &self.arguments[..end]
    }

    /// Arguments after the message
    pub fn trailing_args(&self) -> &[Expression] {
        let start = (self.message_index() + 1).min(self.arguments.len());
        &self.arguments[start..]
    }

    /// Override marker detection for frameworks with their own marker types
    pub fn with_leading_marker(mut self, has_leading_marker: bool) -> Self {
        self.has_leading_marker = has_leading_marker && self.arguments.len() > 1;
        self
    }

    /// Same call with a new argument list
    pub fn with_arguments(&self, arguments: Vec<Expression>) -> Self {
        Self {
            logger: self.logger.clone(),
            level: self.level,
            has_leading_marker: self.has_leading_marker && arguments.len() > 1,
            arguments,
        }
    }

    pub fn to_expression(&self) -> Expression {
        Expression::call(
            Some(self.logger.clone()),
            self.level.as_str(),
            self.arguments.clone(),
            TypeDescriptor::Unknown,
        )
    }
}

impl fmt::Display for LogCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};", self.to_expression())
    }
}
