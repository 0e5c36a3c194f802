//! Expression cost classifier
//!
//! Rules, first match wins:
//! 1. literals, identifiers, field accesses are cheap
//! 2. a zero-argument instance getter (`getX()`, `isX()`) on an implicit,
//!    identifier or field receiver is cheap
//! 3. a boolean or arithmetic binary with cheap operands is cheap; a String
//!    concatenation is cheap only when every leaf is a literal
//! 4. everything else is expensive

use crate::features::classification::domain::Cost;
use crate::shared::models::{BinaryOp, ExprKind, Expression, LogCall, MethodCall};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionClassifier;

impl ExpressionClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, expr: &Expression) -> Cost {
        match &expr.kind {
            ExprKind::Literal(_) | ExprKind::Identifier { .. } | ExprKind::FieldAccess { .. } => {
                Cost::Cheap
            }
            ExprKind::MethodCall(call) if is_cheap_getter(call) => Cost::Cheap,
            ExprKind::Binary { op, left, right } => {
                if *op == BinaryOp::Add && expr.ty.is_string() {
                    if is_constant(expr) {
                        Cost::Cheap
                    } else {
                        Cost::Expensive
                    }
                } else {
                    self.classify(left).combine(self.classify(right))
                }
            }
            _ => Cost::Expensive,
        }
    }

    /// Cost of evaluating every argument of a log call
    pub fn call_cost(&self, call: &LogCall) -> Cost {
        call.arguments
            .iter()
            .map(|arg| self.classify(arg))
            .fold(Cost::Cheap, Cost::combine)
    }
}

fn is_cheap_getter(call: &MethodCall) -> bool {
    if call.is_static || !call.args.is_empty() || call.param_count != 0 {
        return false;
    }
    if !is_getter_name(&call.name) {
        return false;
    }
    match call.target.as_deref() {
        None => true,
        Some(target) => matches!(
            target.kind,
            ExprKind::Identifier { .. } | ExprKind::FieldAccess { .. }
        ),
    }
}

/// `getX` / `isX`; the bare names `get` and `is` do not count
fn is_getter_name(name: &str) -> bool {
    (name.starts_with("get") && name.len() > 3) || (name.starts_with("is") && name.len() > 2)
}

/// Compile-time constant built only from literals
fn is_constant(expr: &Expression) -> bool {
    match &expr.kind {
        ExprKind::Literal(_) => true,
        ExprKind::Binary { left, right, .. } => is_constant(left) && is_constant(right),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{LogLevel, TypeDescriptor};

    fn classify(expr: &Expression) -> Cost {
        ExpressionClassifier::new().classify(expr)
    }

    fn input() -> Expression {
        Expression::ident("input", TypeDescriptor::string())
    }

    fn getter(target: Option<Expression>, name: &str) -> Expression {
        Expression::call(target, name, vec![], TypeDescriptor::string())
    }

    fn bool_binary(op: BinaryOp, left: Expression, right: Expression) -> Expression {
        Expression::binary(op, left, right, TypeDescriptor::boolean())
    }

    #[test]
    fn test_leaves_are_cheap() {
        assert_eq!(classify(&input()), Cost::Cheap);
        assert_eq!(classify(&Expression::string_lit("foo")), Cost::Cheap);
        assert_eq!(classify(&Expression::null_lit()), Cost::Cheap);
        let field = Expression::field(
            Expression::ident("this", TypeDescriptor::Unknown),
            "name",
            TypeDescriptor::string(),
        );
        assert_eq!(classify(&field), Cost::Cheap);
    }

    #[test]
    fn test_getters() {
        assert_eq!(classify(&getter(None, "getClass")), Cost::Cheap);
        let log = Expression::ident("log", TypeDescriptor::class("org.slf4j.Logger"));
        assert_eq!(classify(&getter(Some(log), "getName")), Cost::Cheap);
        assert_eq!(classify(&getter(None, "isReady")), Cost::Cheap);
    }

    #[test]
    fn test_non_getters_are_expensive() {
        assert_eq!(classify(&getter(None, "notAGetter")), Cost::Expensive);

        let optional = Expression::ident("optional", TypeDescriptor::class("java.util.Optional"));
        assert_eq!(classify(&getter(Some(optional), "get")), Cost::Expensive);

        let bytes = Expression::call(
            Some(input()),
            "getBytes",
            vec![Expression::ident("UTF_16", TypeDescriptor::Unknown)],
            TypeDescriptor::Unknown,
        );
        assert_eq!(classify(&bytes), Cost::Expensive);

        let static_getter = Expression::static_call(
            "com.acme.A",
            "getExpensive",
            vec![],
            TypeDescriptor::string(),
        );
        assert_eq!(classify(&static_getter), Cost::Expensive);
    }

    #[test]
    fn test_getter_receiver_must_be_simple() {
        let chained = getter(Some(getter(None, "getClass")), "getName");
        assert_eq!(classify(&chained), Cost::Expensive);

        let on_literal = getter(Some(Expression::string_lit("foo")), "getBytes");
        assert_eq!(classify(&on_literal), Cost::Expensive);

        let on_new = getter(Some(Expression::new_object("com.acme.A", vec![])), "getClass");
        assert_eq!(classify(&on_new), Cost::Expensive);
        assert_eq!(
            classify(&Expression::new_object("com.acme.A", vec![])),
            Cost::Expensive
        );
    }

    #[test]
    fn test_string_concatenation() {
        let constant = Expression::concat(
            Expression::concat(Expression::string_lit("one"), Expression::string_lit("two")),
            Expression::string_lit("three"),
        );
        assert_eq!(classify(&constant), Cost::Cheap);
        assert_eq!(
            classify(&Expression::concat(Expression::string_lit("one"), Expression::int_lit(1))),
            Cost::Cheap
        );
        assert_eq!(
            classify(&Expression::concat(Expression::int_lit(342), input())),
            Cost::Expensive
        );
        assert_eq!(
            classify(&Expression::concat(
                Expression::string_lit("foo"),
                getter(None, "getClass")
            )),
            Cost::Expensive
        );
    }

    #[test]
    fn test_arithmetic_and_boolean() {
        let sum = Expression::binary(
            BinaryOp::Add,
            Expression::int_lit(34),
            Expression::int_lit(78),
            TypeDescriptor::int(),
        );
        assert_eq!(classify(&sum), Cost::Cheap);

        let flag = Expression::ident("boolVariable", TypeDescriptor::boolean());
        let is_something = Expression::call(None, "isSomething", vec![], TypeDescriptor::boolean());
        assert_eq!(
            classify(&bool_binary(
                BinaryOp::And,
                Expression::bool_lit(true),
                Expression::bool_lit(false)
            )),
            Cost::Cheap
        );
        assert_eq!(
            classify(&bool_binary(
                BinaryOp::Or,
                bool_binary(BinaryOp::And, Expression::bool_lit(true), flag),
                is_something.clone()
            )),
            Cost::Cheap
        );

        let with_arg = Expression::call(
            None,
            "isSomething",
            vec![Expression::int_lit(1)],
            TypeDescriptor::boolean(),
        );
        assert_eq!(
            classify(&bool_binary(BinaryOp::And, Expression::bool_lit(true), with_arg)),
            Cost::Expensive
        );
    }

    #[test]
    fn test_unknown_shapes_default_to_expensive() {
        assert_eq!(
            classify(&Expression::opaque("a ? b : c", TypeDescriptor::Unknown)),
            Cost::Expensive
        );
        assert_eq!(classify(&Expression::supplier(input())), Cost::Expensive);
    }

    #[test]
    fn test_call_cost() {
        let logger = Expression::ident("log", TypeDescriptor::class("org.slf4j.Logger"));
        let cheap = LogCall::new(
            logger.clone(),
            LogLevel::Info,
            vec![Expression::string_lit("a {}"), input()],
        );
        let expensive = LogCall::new(
            logger,
            LogLevel::Info,
            vec![Expression::string_lit("a {}"), getter(None, "compute")],
        );
        let classifier = ExpressionClassifier::new();
        assert_eq!(classifier.call_cost(&cheap), Cost::Cheap);
        assert_eq!(classifier.call_cost(&expensive), Cost::Expensive);
    }
}
