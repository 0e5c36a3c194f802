//! Rewrite pipeline
//!
//! ```text
//! CompilationUnit
//!   └─ LoggerApi::select           (framework + deferred probe)
//!        └─ per block, innermost first
//!             ├─ TemplateStage      (each recognised call)
//!             └─ GuardStage         (align → guards | deferred chains)
//!   → ProcessResult                (unit, stats, warnings)
//! ```

pub mod processor;
pub mod result;
pub mod stages;

pub use processor::{process_units, UnitProcessor};
pub use result::{ProcessResult, RewriteStats};
