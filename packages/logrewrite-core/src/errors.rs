//! Error types for logrewrite-core
//!
//! Every rewrite error is recoverable: the caller leaves the affected call or
//! block as it was. Only configuration errors reach library users.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for rewrite operations
#[derive(Debug, Error)]
pub enum RewriteError {
    /// Template markers do not line up with the arguments that fill them
    #[error("Malformed template: {markers} markers for {arguments} arguments")]
    MalformedTemplate { markers: usize, arguments: usize },

    /// Raw arguments whose position relative to new markers cannot be kept
    #[error("Cannot place {count} extra argument(s) after the message")]
    UnplaceableArguments { count: usize },

    /// Planner state became inconsistent
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RewriteError {
    pub fn invariant(msg: impl Into<String>) -> Self {
        RewriteError::InvariantViolation(msg.into())
    }

    /// Recovered locally by keeping the original code
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RewriteError::Config(_))
    }
}

/// Result type alias for rewrite operations
pub type Result<T> = std::result::Result<T, RewriteError>;
