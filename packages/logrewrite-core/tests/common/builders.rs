//! Test data builders

use super::fixtures::slf4j_logger;
use logrewrite_core::shared::models::{
    CompilationUnit, Expression, GuardedBlock, LogCall, LogLevel, OpaqueStatement, Statement,
};

/// Builder for LogCall
#[derive(Debug, Clone)]
pub struct LogCallBuilder {
    logger: Expression,
    level: LogLevel,
    arguments: Vec<Expression>,
}

impl LogCallBuilder {
    pub fn new(level: LogLevel) -> Self {
        Self {
            logger: slf4j_logger(),
            level,
            arguments: Vec::new(),
        }
    }

    pub fn with_logger(mut self, logger: Expression) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.arguments.push(Expression::string_lit(message));
        self
    }

    pub fn with_arg(mut self, arg: Expression) -> Self {
        self.arguments.push(arg);
        self
    }

    pub fn with_args(mut self, args: Vec<Expression>) -> Self {
        self.arguments.extend(args);
        self
    }

    pub fn build(self) -> LogCall {
        LogCall::new(self.logger, self.level, self.arguments)
    }

    pub fn statement(self) -> Statement {
        Statement::Log(self.build())
    }
}

/// `if (log.is<Level>Enabled()) { body }`
pub fn guard(level: LogLevel, body: Vec<Statement>) -> Statement {
    guard_on(&slf4j_logger(), level, body)
}

pub fn guard_on(logger: &Expression, level: LogLevel, body: Vec<Statement>) -> Statement {
    Statement::Guarded(GuardedBlock::synthesize(
        logger,
        level,
        level.enablement_method(),
        body,
    ))
}

/// Opaque statement with nested blocks, e.g. a loop or an unrelated `if`
pub fn nested(source: &str, blocks: Vec<Vec<Statement>>) -> Statement {
    let statement = blocks
        .into_iter()
        .fold(OpaqueStatement::new(source), OpaqueStatement::with_child);
    Statement::Other(statement)
}

pub fn unit(blocks: Vec<Vec<Statement>>) -> CompilationUnit {
    blocks
        .into_iter()
        .fold(CompilationUnit::new("src/main/java/Service.java"), CompilationUnit::with_block)
}
