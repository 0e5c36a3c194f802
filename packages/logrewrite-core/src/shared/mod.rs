//! Shared module - Common types and utilities
//!
//! Types shared by every feature. Nothing here depends on a feature module.

pub mod models;
pub mod text;

// Re-exports for convenience
pub use models::*;
