//! Infrastructure layer for expression classification

mod classifier;

pub use classifier::ExpressionClassifier;
