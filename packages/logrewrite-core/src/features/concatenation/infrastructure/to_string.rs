//! Redundant `toString()` removal from placeholder arguments
//!
//! The logging API stringifies placeholder arguments itself, and only when
//! the message is actually emitted.

use crate::shared::models::{ExprKind, Expression};

/// `x.toString()` becomes `x`; any other expression is returned unchanged
///
/// Exception receivers are kept: as the last argument a bare exception would
/// be taken as the cause instead of filling a placeholder.
pub fn strip_to_string(expr: &Expression) -> Expression {
    if let ExprKind::MethodCall(call) = &expr.kind {
        if call.name == "toString" && !call.is_static && call.args.is_empty() {
            if let Some(target) = call.target.as_deref() {
                if !target.ty.is_exception() {
                    return target.clone();
                }
            }
        }
    }
    expr.clone()
}
