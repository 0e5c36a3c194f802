//! Shared models

pub mod expression;
mod level;
mod log_call;
pub mod statement;
pub mod types;
mod unit;

pub use expression::{BinaryOp, ExprKind, Expression, Literal, LiteralKind, MethodCall};
pub use level::LogLevel;
pub use log_call::LogCall;
pub use statement::{
    render_block, ChainStep, DeferredChain, GuardedBlock, OpaqueStatement, Statement,
};
pub use types::{
    ClassType, PrimitiveType, TypeDescriptor, STRING as STRING_FQN, THROWABLE as THROWABLE_FQN,
};
pub use unit::CompilationUnit;
