//! Statement views the rewrites operate on
//!
//! A block is a `Vec<Statement>`. Only logging-related statements are
//! modelled precisely; anything else is [`Statement::Other`], which may still
//! carry nested blocks (bodies of loops, unrelated `if`s, lambdas) so that
//! the processor can recurse into them.

use super::expression::Expression;
use super::level::LogLevel;
use super::log_call::LogCall;
use super::types::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// `if (<logger>.is<Level>Enabled()) { body }` with no else branch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuardedBlock {
    pub level: LogLevel,
    /// The enablement check, kept verbatim so a reused guard renders as written
    pub condition: Expression,
    pub body: Vec<Statement>,
}

impl GuardedBlock {
    /// Build a fresh guard calling `check` on `logger`
    pub fn synthesize(logger: &Expression, level: LogLevel, check: &str, body: Vec<Statement>) -> Self {
        Self {
            level,
            condition: Expression::call(
                Some(logger.clone()),
                check,
                Vec::new(),
                TypeDescriptor::boolean(),
            ),
            body,
        }
    }

    /// Log calls anywhere in the body, catch clauses excluded
    pub fn log_calls(&self) -> Vec<&LogCall> {
        let mut calls = Vec::new();
        collect_log_calls(&self.body, &mut calls);
        calls
    }
}

fn collect_log_calls<'a>(block: &'a [Statement], calls: &mut Vec<&'a LogCall>) {
    for statement in block {
        match statement {
            Statement::Log(call) => calls.push(call),
            Statement::Guarded(guard) => collect_log_calls(&guard.body, calls),
            Statement::Other(other) if !other.is_catch() => {
                for child in &other.children {
                    collect_log_calls(child, calls);
                }
            }
            Statement::Other(_) | Statement::Deferred(_) => {}
        }
    }
}

/// One link of a fluent logging chain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainStep {
    AddMarker(Expression),
    AddArgument(Expression),
    SetCause(Expression),
}

impl ChainStep {
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::AddMarker(_) => "addMarker",
            Self::AddArgument(_) => "addArgument",
            Self::SetCause(_) => "setCause",
        }
    }

    pub fn argument(&self) -> &Expression {
        match self {
            Self::AddMarker(e) | Self::AddArgument(e) | Self::SetCause(e) => e,
        }
    }
}

/// `logger.at<Level>().addArgument(..)...log(message)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeferredChain {
    pub logger: Expression,
    pub level: LogLevel,
    pub steps: Vec<ChainStep>,
    pub message: Expression,
}

impl DeferredChain {
    pub fn to_expression(&self) -> Expression {
        let start = Expression::call(
            Some(self.logger.clone()),
            self.level.fluent_method(),
            Vec::new(),
            TypeDescriptor::Unknown,
        );
        let chained = self.steps.iter().fold(start, |receiver, step| {
            Expression::call(
                Some(receiver),
                step.method_name(),
                vec![step.argument().clone()],
                TypeDescriptor::Unknown,
            )
        });
        Expression::call(
            Some(chained),
            "log",
            vec![self.message.clone()],
            TypeDescriptor::Unknown,
        )
    }
}

/// Statement the rewrites do not interpret
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpaqueStatement {
    pub source: String,
    #[serde(default)]
    pub children: Vec<Vec<Statement>>,
    /// Condition mentions an enablement check alongside something else
    #[serde(default)]
    pub references_enablement: bool,
}

impl OpaqueStatement {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn with_child(mut self, block: Vec<Statement>) -> Self {
        self.children.push(block);
        self
    }

    /// `catch (..) { .. }` clause of a try statement
    pub fn is_catch(&self) -> bool {
        self.source.trim_start().starts_with("catch")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Statement {
    Log(LogCall),
    Guarded(GuardedBlock),
    Deferred(DeferredChain),
    Other(OpaqueStatement),
}

impl Statement {
    pub fn other(source: impl Into<String>) -> Self {
        Self::Other(OpaqueStatement::new(source))
    }

    pub fn as_log(&self) -> Option<&LogCall> {
        match self {
            Self::Log(call) => Some(call),
            _ => None,
        }
    }

    /// Logger expression of the first logging construct in this statement
    pub fn first_logger(&self) -> Option<&Expression> {
        self.find_logger(&|_: &Expression| true)
    }

    /// First logger expression, in source order, accepted by `accept`
    pub fn find_logger<F>(&self, accept: &F) -> Option<&Expression>
    where
        F: Fn(&Expression) -> bool,
    {
        match self {
            Self::Log(call) => Some(&call.logger).filter(|l| accept(*l)),
            Self::Deferred(chain) => Some(&chain.logger).filter(|l| accept(*l)),
            Self::Guarded(guard) => guard
                .condition
                .as_method_call()
                .and_then(|c| c.target.as_deref())
                .filter(|l| accept(*l))
                .or_else(|| guard.body.iter().find_map(|s| s.find_logger(accept))),
            Self::Other(other) => other
                .children
                .iter()
                .flatten()
                .find_map(|s| s.find_logger(accept)),
        }
    }

    /// Java-like rendering at the given indentation depth
    pub fn render(&self, depth: usize) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_indented(&mut out, depth);
        out
    }

    fn write_indented(&self, out: &mut String, depth: usize) -> fmt::Result {
        let pad = "    ".repeat(depth);
        match self {
            Self::Log(call) => writeln!(out, "{}{}", pad, call),
            Self::Deferred(chain) => writeln!(out, "{}{};", pad, chain.to_expression()),
            Self::Guarded(guard) => {
                writeln!(out, "{}if ({}) {{", pad, guard.condition)?;
                for stmt in &guard.body {
                    stmt.write_indented(out, depth + 1)?;
                }
                writeln!(out, "{}}}", pad)
            }
            Self::Other(other) if other.children.is_empty() => {
                writeln!(out, "{}{}", pad, other.source)
            }
            Self::Other(other) => {
                writeln!(out, "{}{} {{", pad, other.source)?;
                for (i, block) in other.children.iter().enumerate() {
                    if i > 0 {
                        writeln!(out, "{}}} {{", pad)?;
                    }
                    for stmt in block {
                        stmt.write_indented(out, depth + 1)?;
                    }
                }
                writeln!(out, "{}}}", pad)
            }
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(0))
    }
}

/// Render a whole block
pub fn render_block(statements: &[Statement]) -> String {
    statements.iter().map(|s| s.render(0)).collect()
}
