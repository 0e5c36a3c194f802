//! Expression fixtures

use logrewrite_core::shared::models::{Expression, TypeDescriptor};

pub const SLF4J_LOGGER: &str = "org.slf4j.Logger";
pub const LOG4J2_LOGGER: &str = "org.apache.logging.log4j.Logger";
pub const LOG4J1_LOGGER: &str = "org.apache.log4j.Logger";

/// `log` of type `org.slf4j.Logger` without the fluent API
pub fn slf4j_logger() -> Expression {
    Expression::ident("log", TypeDescriptor::class(SLF4J_LOGGER))
}

/// `log` of an SLF4J 2.x logger exposing `atInfo()` and friends
pub fn fluent_logger() -> Expression {
    Expression::ident(
        "log",
        TypeDescriptor::class(SLF4J_LOGGER).with_members(["atTrace", "atDebug", "atInfo"]),
    )
}

pub fn log4j2_logger() -> Expression {
    Expression::ident("log", TypeDescriptor::class(LOG4J2_LOGGER))
}

pub fn log4j1_logger() -> Expression {
    Expression::ident("log", TypeDescriptor::class(LOG4J1_LOGGER))
}

pub fn exception(name: &str) -> Expression {
    Expression::ident(name, TypeDescriptor::exception("java.io.IOException"))
}

pub fn string_var(name: &str) -> Expression {
    Expression::ident(name, TypeDescriptor::string())
}

pub fn int_var(name: &str) -> Expression {
    Expression::ident(name, TypeDescriptor::int())
}

/// `name()`: a call with no getter prefix
pub fn expensive_call(name: &str) -> Expression {
    Expression::call(None, name, vec![], TypeDescriptor::string())
}

/// `target.getX()`
pub fn getter(target: Expression, name: &str) -> Expression {
    Expression::call(Some(target), name, vec![], TypeDescriptor::string())
}

/// Left-nested `a + b + c ...`
pub fn concat_all(parts: Vec<Expression>) -> Expression {
    let mut iter = parts.into_iter();
    let first = iter.next().unwrap_or_else(|| Expression::string_lit(""));
    iter.fold(first, Expression::concat)
}
