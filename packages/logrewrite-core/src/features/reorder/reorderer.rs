//! Final argument assembly
//!
//! `[leading marker] + [template literal] + [placeholder args] + [exception]`

use crate::errors::{Result, RewriteError};
use crate::features::concatenation::TemplateResult;
use crate::shared::models::Expression;

#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentReorderer;

impl ArgumentReorderer {
    pub fn new() -> Self {
        Self
    }

    /// Assemble the new argument list for a call whose message compiled to
    /// `result`
    ///
    /// Fails when markers and placeholder arguments disagree, or when the
    /// original call carries raw arguments after the message other than a
    /// single trailing exception.
    pub fn reorder(&self, original_args: &[Expression], result: &TemplateResult) -> Result<Vec<Expression>> {
        let markers = result.marker_count();
        if markers != result.placeholder_args.len() {
            return Err(RewriteError::MalformedTemplate {
                markers,
                arguments: result.placeholder_args.len(),
            });
        }

        let leading = leading_marker(original_args);
        let message_index = usize::from(leading.is_some());
        let rest = original_args.get(message_index + 1..).unwrap_or(&[]);

        let trailing = match rest {
            [] => result.trailing_exception.clone(),
            [last] if last.ty.is_exception() => {
                Some(result.trailing_exception.clone().unwrap_or_else(|| last.clone()))
            }
            extra => {
                return Err(RewriteError::UnplaceableArguments { count: extra.len() });
            }
        };

        let mut args = Vec::with_capacity(result.placeholder_args.len() + 3);
        args.extend(leading.cloned());
        args.push(result.template_literal());
        args.extend(result.placeholder_args.iter().cloned());
        args.extend(trailing);
        Ok(args)
    }
}

/// First argument when it is a marker followed by a message
fn leading_marker(args: &[Expression]) -> Option<&Expression> {
    match args {
        [first, _, ..] if first.ty.is_marker() => Some(first),
        _ => None,
    }
}
