//! Guard-Insertion Planning
//!
//! Keeps expensive log arguments from being evaluated when their level is
//! disabled, either by wrapping runs of log calls in a single
//! `if (log.is<Level>Enabled())` block or, when the logger has a fluent
//! builder API, by deferring expensive values behind suppliers.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ Application Layer                             │
//! │  - GuardPlanner       (run state machine)     │
//! │  - DeferredRewriter   (fluent chains)         │
//! │  - GuardLevelAligner  (fix mismatched checks) │
//! └───────────────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌───────────────────────────────────────────────┐
//! │ Domain Layer                                  │
//! │  - Kind, AccumulatorState, Run, BlockPlan     │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Statements are never reordered; only contiguous same-level runs merge.

pub mod application;
pub mod domain;

pub use application::{DeferredRewriter, GuardLevelAligner, GuardPlanner};
pub use domain::{AccumulatorState, BlockPlan, Kind, Run};
