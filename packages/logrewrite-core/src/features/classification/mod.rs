//! Expression Classification
//!
//! Labels any expression `Cheap` or `Expensive`. Both the message compiler
//! and the guard planner consult this to decide whether evaluating a log
//! argument eagerly is worth protecting.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Domain Layer                            │
//! │  - Cost (Cheap / Expensive)             │
//! └─────────────────────────────────────────┘
//!                   ▲
//!                   │
//! ┌─────────────────────────────────────────┐
//! │ Infrastructure Layer                    │
//! │  - ExpressionClassifier (rule chain)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The getter rule is a naming heuristic: `getX()` on a plain receiver is
//! assumed side-effect free and trivial. No deeper analysis is attempted.

pub mod domain;
pub mod infrastructure;

pub use domain::Cost;
pub use infrastructure::ExpressionClassifier;
