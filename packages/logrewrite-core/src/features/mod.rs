//! Feature modules (vertical slices)
//!
//! - `classification`: Cheap / Expensive verdicts for expressions
//! - `call_matching`: logging API strategy and call-shape matching
//! - `concatenation`: `+` messages to `{}` templates
//! - `reorder`: final argument order of rewritten calls
//! - `guard_planning`: enablement guards and deferred chains

pub mod call_matching;
pub mod classification;
pub mod concatenation;
pub mod guard_planning;
pub mod reorder;
