//! Concatenation Compiler
//!
//! Turns ad hoc string-concatenation log messages into parameterized
//! templates: `"Hello " + name` becomes `"Hello {}", name`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Application Layer                       │
//! │  - MessageRewriter (one log call)       │
//! └─────────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │ Infrastructure Layer                    │
//! │  - ConcatenationCompiler (+ tree walk)  │
//! │  - format_string (String.format)        │
//! │  - to_string, escape                    │
//! └─────────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │ Domain Layer                            │
//! │  - Segment, TemplateResult              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use logrewrite_core::features::concatenation::ConcatenationCompiler;
//! use logrewrite_core::shared::models::{Expression, TypeDescriptor};
//!
//! let name = Expression::ident("name", TypeDescriptor::string());
//! let message = Expression::concat(Expression::string_lit("Hello "), name.clone());
//!
//! let result = ConcatenationCompiler::new().compile(&message);
//! assert_eq!(result.template, "Hello {}");
//! assert_eq!(result.placeholder_args, vec![name]);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer
pub use application::{CallRewrite, MessageRewriteUseCase, MessageRewriter};

// Re-exports for convenience
pub use domain::{count_markers, HostTemplate, Segment, TemplateResult, MARKER};

// Re-export infrastructure
pub use infrastructure::{ConcatenationCompiler, DEFAULT_INTRODUCER};
