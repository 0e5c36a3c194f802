//! Call Matching
//!
//! Recognises logging constructs and selects the logging API strategy for a
//! compilation unit.
//!
//! - [`LoggingFramework`]: closed set of supported logging libraries
//! - [`LoggerApi`]: framework plus probed capabilities, chosen once per unit
//! - [`LogCallMatcher`]: turns engine expressions into statement views

mod framework;
mod matcher;

pub use framework::{LoggerApi, LoggingFramework};
pub use matcher::LogCallMatcher;
