//! Concatenation-to-template compiler
//!
//! In-order walk of a `+` tree. String literal leaves become template text
//! (adjacent literals merge), every other leaf becomes a `{}` marker plus a
//! placeholder argument. Only `+` nodes whose result is a String are walked
//! into; numeric additions like `a + b` inside `"sum " + (a + b)` are leaves.

use crate::features::concatenation::domain::{Segment, TemplateResult};
use crate::shared::models::{ExprKind, Expression};

/// Leaf produced by the walk, before text merging
#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Text(String),
    Arg(Expression),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConcatenationCompiler;

impl ConcatenationCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Compile a concatenation (or a single expression) into a template
    pub fn compile(&self, root: &Expression) -> TemplateResult {
        let (segments, placeholder_args) = assemble(flatten(root));
        TemplateResult::new(segments, placeholder_args)
    }

    /// Compile a call's message, taking `final_raw_arg` as the trailing
    /// exception when it is exception-typed
    ///
    /// Only the call's last argument outside the message can be the cause;
    /// exception operands inside the concatenation are ordinary placeholders.
    pub fn compile_with_trailing(
        &self,
        root: &Expression,
        final_raw_arg: Option<&Expression>,
    ) -> TemplateResult {
        let trailing = final_raw_arg.filter(|arg| arg.ty.is_exception()).cloned();
        self.compile(root).with_trailing_exception(trailing)
    }
}

fn flatten(expr: &Expression) -> Vec<Piece> {
    if expr.is_string_concat() {
        if let ExprKind::Binary { left, right, .. } = &expr.kind {
            let mut pieces = flatten(left);
            pieces.extend(flatten(right));
            return pieces;
        }
    }
    match expr.as_string_literal() {
        Some(text) => vec![Piece::Text(text.to_string())],
        None => vec![Piece::Arg(expr.clone())],
    }
}

fn assemble(pieces: Vec<Piece>) -> (Vec<Segment>, Vec<Expression>) {
    pieces
        .into_iter()
        .fold((Vec::new(), Vec::new()), |(mut segments, mut args), piece| {
            match piece {
                Piece::Text(text) if text.is_empty() => {}
                Piece::Text(text) => match segments.last_mut() {
                    Some(Segment::Text(previous)) => previous.push_str(&text),
                    _ => segments.push(Segment::Text(text)),
                },
                Piece::Arg(expr) => {
                    segments.push(Segment::Placeholder);
                    args.push(expr);
                }
            }
            (segments, args)
        })
}
