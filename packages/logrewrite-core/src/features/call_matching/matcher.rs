//! Call-shape matching
//!
//! Adapter between the engine's raw expressions and the statement views the
//! passes work on. The engine walks its tree and asks the matcher what each
//! expression statement or `if` statement is.

use super::framework::LoggingFramework;
use crate::shared::models::{
    ExprKind, Expression, GuardedBlock, LogCall, LogLevel, OpaqueStatement, Statement,
};

#[derive(Debug, Clone)]
pub struct LogCallMatcher {
    frameworks: Vec<LoggingFramework>,
}

impl LogCallMatcher {
    pub fn new(framework: LoggingFramework) -> Self {
        Self {
            frameworks: vec![framework],
        }
    }

    /// Recognise calls on any supported logger type
    pub fn any() -> Self {
        Self {
            frameworks: LoggingFramework::ALL.to_vec(),
        }
    }

    fn is_logger(&self, expr: &Expression) -> bool {
        self.frameworks.iter().any(|f| f.matches(&expr.ty))
    }

    fn is_marker(&self, expr: &Expression) -> bool {
        self.frameworks.iter().any(|f| f.is_marker(&expr.ty))
    }

    /// `logger.<level>(args...)` with at least one argument
    pub fn match_call(&self, expr: &Expression) -> Option<LogCall> {
        let ExprKind::MethodCall(call) = &expr.kind else {
            return None;
        };
        if call.is_static || call.args.is_empty() {
            return None;
        }
        let level = LogLevel::from_method_name(&call.name)?;
        let logger = call.target.as_deref().filter(|t| self.is_logger(t))?;
        let marker_first = self.is_marker(&call.args[0]);
        let log_call = LogCall::new(logger.clone(), level, call.args.clone());
        Some(log_call.with_leading_marker(marker_first))
    }

    /// `logger.is<Level>Enabled()`
    pub fn match_enablement_check(&self, expr: &Expression) -> Option<LogLevel> {
        let ExprKind::MethodCall(call) = &expr.kind else {
            return None;
        };
        if !call.args.is_empty() {
            return None;
        }
        let level = LogLevel::from_enablement_method(&call.name)?;
        call.target
            .as_deref()
            .filter(|t| self.is_logger(t))
            .map(|_| level)
    }

    /// Whether an enablement check appears anywhere in `expr`
    pub fn mentions_enablement(&self, expr: &Expression) -> bool {
        if self.match_enablement_check(expr).is_some() {
            return true;
        }
        match &expr.kind {
            ExprKind::Binary { left, right, .. } => {
                self.mentions_enablement(left) || self.mentions_enablement(right)
            }
            ExprKind::MethodCall(call) => {
                call.target
                    .as_deref()
                    .is_some_and(|t| self.mentions_enablement(t))
                    || call.args.iter().any(|a| self.mentions_enablement(a))
            }
            ExprKind::FieldAccess { target, .. } => self.mentions_enablement(target),
            ExprKind::Lambda { body, .. } => self.mentions_enablement(body),
            ExprKind::New { args, .. } => args.iter().any(|a| self.mentions_enablement(a)),
            _ => false,
        }
    }

    /// View of an expression statement
    pub fn statement_for_expression(&self, expr: Expression) -> Statement {
        match self.match_call(&expr) {
            Some(call) => Statement::Log(call),
            None => Statement::Other(OpaqueStatement::new(format!("{};", expr))),
        }
    }

    /// View of an `if` statement
    ///
    /// Only a condition that is exactly one enablement check, without an else
    /// branch, is a guard. Any other condition mentioning an enablement check
    /// is ambiguous and marked so that nothing descends into it.
    pub fn statement_for_if(
        &self,
        condition: Expression,
        then_body: Vec<Statement>,
        else_body: Option<Vec<Statement>>,
    ) -> Statement {
        if else_body.is_none() {
            if let Some(level) = self.match_enablement_check(&condition) {
                return Statement::Guarded(GuardedBlock {
                    level,
                    condition,
                    body: then_body,
                });
            }
        }
        let references_enablement = self.mentions_enablement(&condition);
        let mut children = vec![then_body];
        children.extend(else_body);
        Statement::Other(OpaqueStatement {
            source: format!("if ({})", condition),
            children,
            references_enablement,
        })
    }
}

impl Default for LogCallMatcher {
    fn default() -> Self {
        Self::any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{BinaryOp, TypeDescriptor};

    fn slf4j() -> Expression {
        Expression::ident("log", TypeDescriptor::class("org.slf4j.Logger"))
    }

    fn log4j2() -> Expression {
        Expression::ident("log", TypeDescriptor::class("org.apache.logging.log4j.Logger"))
    }

    fn info(logger: Expression, args: Vec<Expression>) -> Expression {
        Expression::call(Some(logger), "info", args, TypeDescriptor::Unknown)
    }

    fn check(logger: Expression, name: &str) -> Expression {
        Expression::call(Some(logger), name, vec![], TypeDescriptor::boolean())
    }

    #[test]
    fn test_match_call() {
        let matcher = LogCallMatcher::any();
        let call = matcher
            .match_call(&info(slf4j(), vec![Expression::string_lit("hi")]))
            .unwrap();
        assert_eq!(call.level, LogLevel::Info);
        assert_eq!(call.arguments.len(), 1);

        assert!(matcher.match_call(&info(slf4j(), vec![])).is_none());
        let not_logger = Expression::ident("out", TypeDescriptor::class("java.io.PrintStream"));
        assert!(matcher
            .match_call(&info(not_logger, vec![Expression::string_lit("hi")]))
            .is_none());
    }

    #[test]
    fn test_marker_detected_per_framework() {
        let marker = Expression::ident("AUDIT", TypeDescriptor::class("org.slf4j.Marker"));
        let args = vec![marker, Expression::string_lit("hi")];

        let call = LogCallMatcher::new(LoggingFramework::Slf4j)
            .match_call(&info(slf4j(), args.clone()))
            .unwrap();
        assert!(call.has_leading_marker);
        assert_eq!(call.message(), Some(&args[1]));

        let foreign_marker = Expression::ident("AUDIT", TypeDescriptor::class("org.slf4j.Marker"));
        let call = LogCallMatcher::new(LoggingFramework::Log4j2)
            .match_call(&info(log4j2(), vec![foreign_marker, Expression::string_lit("hi")]))
            .unwrap();
        assert!(!call.has_leading_marker);
    }

    #[test]
    fn test_framework_restriction() {
        let matcher = LogCallMatcher::new(LoggingFramework::Slf4j);
        assert!(matcher
            .match_call(&info(log4j2(), vec![Expression::string_lit("hi")]))
            .is_none());
        assert!(matcher.match_enablement_check(&check(log4j2(), "isInfoEnabled")).is_none());
    }

    #[test]
    fn test_if_with_single_check_is_guard() {
        let matcher = LogCallMatcher::any();
        let stmt = matcher.statement_for_if(check(slf4j(), "isDebugEnabled"), vec![], None);
        assert!(matches!(stmt, Statement::Guarded(ref g) if g.level == LogLevel::Debug));
    }

    #[test]
    fn test_if_with_else_is_not_guard() {
        let matcher = LogCallMatcher::any();
        let stmt = matcher.statement_for_if(
            check(slf4j(), "isDebugEnabled"),
            vec![],
            Some(vec![Statement::other("x++;")]),
        );
        match stmt {
            Statement::Other(other) => {
                assert!(other.references_enablement);
                assert_eq!(other.children.len(), 2);
            }
            other => panic!("expected opaque statement, got {:?}", other),
        }
    }

    #[test]
    fn test_compound_condition_is_ambiguous() {
        let matcher = LogCallMatcher::any();
        let condition = Expression::binary(
            BinaryOp::And,
            Expression::binary(
                BinaryOp::Eq,
                Expression::int_lit(1),
                Expression::int_lit(1),
                TypeDescriptor::boolean(),
            ),
            check(slf4j(), "isInfoEnabled"),
            TypeDescriptor::boolean(),
        );
        match matcher.statement_for_if(condition, vec![], None) {
            Statement::Other(other) => {
                assert!(other.references_enablement);
                assert_eq!(other.source, "if (1 == 1 && log.isInfoEnabled())");
            }
            other => panic!("expected opaque statement, got {:?}", other),
        }
    }

    #[test]
    fn test_unrelated_if() {
        let matcher = LogCallMatcher::any();
        let stmt = matcher.statement_for_if(
            Expression::ident("ready", TypeDescriptor::boolean()),
            vec![],
            None,
        );
        assert!(matches!(stmt, Statement::Other(ref o) if !o.references_enablement));
    }
}
