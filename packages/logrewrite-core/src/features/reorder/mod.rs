//! Template Argument Reordering
//!
//! Builds the final argument list of a rewritten log call and completes
//! exception logging for calls that only pass an exception's message.

mod exception_completion;
mod reorderer;

pub use exception_completion::complete_exception;
pub use reorderer::ArgumentReorderer;
