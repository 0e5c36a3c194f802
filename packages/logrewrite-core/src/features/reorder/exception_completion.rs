//! Pass the exception itself instead of only its message
//!
//! `log.error("failed: {}", e.getMessage())` keeps the message and gains `e`
//! as the cause; `log.error("failed", e.getMessage())` has no marker for the
//! message, so `e` replaces it. `log.error(e.getMessage())` becomes
//! `log.error("", e)`.

use crate::features::concatenation::count_markers;
use crate::shared::models::{ExprKind, Expression, LogCall};

const MESSAGE_ACCESSORS: &[&str] = &["getMessage", "getLocalizedMessage"];

/// Receiver of `ex.getMessage()` / `ex.getLocalizedMessage()`
fn message_accessor_receiver(expr: &Expression) -> Option<&Expression> {
    let ExprKind::MethodCall(call) = &expr.kind else {
        return None;
    };
    if call.is_static || !call.args.is_empty() || !MESSAGE_ACCESSORS.contains(&call.name.as_str()) {
        return None;
    }
    call.target.as_deref().filter(|t| t.ty.is_exception())
}

/// Rewritten call, or `None` when the last argument is not an exception
/// message accessor
pub fn complete_exception(call: &LogCall) -> Option<LogCall> {
    let last = call.arguments.last()?;
    let exception = message_accessor_receiver(last)?.clone();

    if call.trailing_args().is_empty() {
        let mut args = call.leading_args().to_vec();
        args.push(Expression::string_lit(""));
        args.push(exception);
        return Some(call.with_arguments(args));
    }

    let template = call.message()?.as_string_literal()?;
    let mut args = call.arguments.clone();
    if count_markers(template) >= call.trailing_args().len() {
        args.push(exception);
    } else if let Some(slot) = args.last_mut() {
        *slot = exception;
    }
    Some(call.with_arguments(args))
}
