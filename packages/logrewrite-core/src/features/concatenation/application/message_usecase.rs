//! Message Rewrite UseCase
//!
//! Rewrites one log call's message into placeholder form:
//! 1. `String.format` messages or `+` concatenations compile to templates
//! 2. a lone non-String message gets an implicit `"{}"` template
//! 3. `toString()` is stripped from placeholder arguments
//! 4. exception messages are completed with the exception itself

use crate::config::TemplateConfig;
use crate::errors::Result;
use crate::features::concatenation::domain::{HostTemplate, TemplateResult};
use crate::features::concatenation::infrastructure::{
    convert_format, match_format_call, strip_to_string, ConcatenationCompiler,
};
use crate::features::reorder::{complete_exception, ArgumentReorderer};
use crate::shared::models::{Expression, LogCall, TypeDescriptor};

/// Outcome for one call
#[derive(Debug, Clone, PartialEq)]
pub enum CallRewrite {
    Unchanged,
    Rewritten(LogCall),
}

impl CallRewrite {
    pub fn is_rewritten(&self) -> bool {
        matches!(self, Self::Rewritten(_))
    }
}

/// Message Rewrite UseCase Trait
pub trait MessageRewriteUseCase: Send + Sync {
    /// `Err` means the call must be left as it is
    fn rewrite_call(&self, call: &LogCall) -> Result<CallRewrite>;
}

/// Message Rewrite UseCase Implementation
#[derive(Debug, Clone, Default)]
pub struct MessageRewriter {
    config: TemplateConfig,
    compiler: ConcatenationCompiler,
    reorderer: ArgumentReorderer,
}

impl MessageRewriter {
    pub fn new(config: TemplateConfig) -> Self {
        Self {
            config,
            compiler: ConcatenationCompiler::new(),
            reorderer: ArgumentReorderer::new(),
        }
    }

    /// Template for the call's message, if it needs one
    fn message_template(&self, call: &LogCall) -> Option<TemplateResult> {
        let message = call.message()?;
        let trailing = call.trailing_args();

        if self.config.convert_format_strings {
            if let Some((format, args)) = match_format_call(message) {
                let exception = trailing.last().filter(|a| a.ty.is_exception()).cloned();
                return convert_format(format, args)
                    .map(|result| result.with_trailing_exception(exception));
            }
        }

        if message.is_string_concat() {
            return Some(self.compiler.compile_with_trailing(message, trailing.last()));
        }

        if needs_implicit_template(message) && trailing.is_empty() {
            return Some(self.compiler.compile(message));
        }
        None
    }

    /// Engine template code for the call's compiled message, using the
    /// configured introducer
    pub fn host_template(&self, call: &LogCall) -> Option<HostTemplate> {
        self.message_template(call)
            .map(|result| result.host_template(self.config.introducer))
    }

    fn template_call(&self, call: &LogCall) -> Result<Option<LogCall>> {
        let Some(result) = self.message_template(call) else {
            return Ok(None);
        };
        let args = self.reorderer.reorder(&call.arguments, &result)?;
        if args == call.arguments {
            return Ok(None);
        }
        Ok(Some(call.with_arguments(args)))
    }

    fn strip_arguments(&self, call: &LogCall) -> Option<LogCall> {
        call.message()?.as_string_literal()?;
        let start = call.message_index() + 1;
        let mut args = call.arguments.clone();
        let mut changed = false;
        for arg in args.iter_mut().skip(start) {
            let stripped = strip_to_string(arg);
            if stripped != *arg {
                *arg = stripped;
                changed = true;
            }
        }
        changed.then(|| call.with_arguments(args))
    }
}

/// Messages that are not already strings get `"{}"` with the value as its
/// argument; suppliers, markers and exceptions are left alone
fn needs_implicit_template(message: &Expression) -> bool {
    if message.is_lambda() || message.ty.is_string() {
        return false;
    }
    if message.ty.is_exception() || message.ty.is_marker() {
        return false;
    }
    !matches!(message.ty, TypeDescriptor::Unknown)
}

impl MessageRewriteUseCase for MessageRewriter {
    fn rewrite_call(&self, call: &LogCall) -> Result<CallRewrite> {
        let mut current = call.clone();
        let mut changed = false;

        if let Some(templated) = self.template_call(&current)? {
            current = templated;
            changed = true;
        }
        if self.config.strip_to_string {
            if let Some(stripped) = self.strip_arguments(&current) {
                current = stripped;
                changed = true;
            }
        }
        if self.config.complete_exception_logging {
            if let Some(completed) = complete_exception(&current) {
                current = completed;
                changed = true;
            }
        }

        Ok(if changed {
            CallRewrite::Rewritten(current)
        } else {
            CallRewrite::Unchanged
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RewriteError;
    use crate::shared::models::{LogLevel, STRING_FQN};
    use pretty_assertions::assert_eq;

    fn logger() -> Expression {
        Expression::ident("log", TypeDescriptor::class("org.slf4j.Logger"))
    }

    fn name() -> Expression {
        Expression::ident("name", TypeDescriptor::string())
    }

    fn ex() -> Expression {
        Expression::ident("ex", TypeDescriptor::exception("java.lang.Exception"))
    }

    fn info(args: Vec<Expression>) -> LogCall {
        LogCall::new(logger(), LogLevel::Info, args)
    }

    fn rewrite(call: &LogCall) -> CallRewrite {
        MessageRewriter::new(TemplateConfig::default())
            .rewrite_call(call)
            .unwrap()
    }

    fn rewritten_args(call: &LogCall) -> Vec<Expression> {
        match rewrite(call) {
            CallRewrite::Rewritten(c) => c.arguments,
            CallRewrite::Unchanged => panic!("expected a rewrite of {}", call),
        }
    }

    #[test]
    fn test_concatenation() {
        let call = info(vec![Expression::concat(Expression::string_lit("Hello "), name())]);
        assert_eq!(rewritten_args(&call), vec![Expression::string_lit("Hello {}"), name()]);
    }

    #[test]
    fn test_already_parameterized_is_unchanged() {
        let call = info(vec![Expression::string_lit("Hello {}"), name()]);
        assert_eq!(rewrite(&call), CallRewrite::Unchanged);
    }

    #[test]
    fn test_string_method_message_is_unchanged() {
        let message = Expression::call(Some(name()), "trim", vec![], TypeDescriptor::string());
        assert_eq!(rewrite(&info(vec![message])), CallRewrite::Unchanged);
    }

    #[test]
    fn test_sole_exception_is_unchanged() {
        assert_eq!(rewrite(&info(vec![ex()])), CallRewrite::Unchanged);
    }

    #[test]
    fn test_implicit_placeholder() {
        let user = Expression::ident("test", TypeDescriptor::class("com.acme.Test"));
        assert_eq!(
            rewritten_args(&info(vec![user.clone()])),
            vec![Expression::string_lit("{}"), user]
        );
    }

    #[test]
    fn test_format_string() {
        let format = Expression::static_call(
            STRING_FQN,
            "format",
            vec![Expression::string_lit("user %s"), name()],
            TypeDescriptor::string(),
        );
        assert_eq!(
            rewritten_args(&info(vec![format, ex()])),
            vec![Expression::string_lit("user {}"), name(), ex()]
        );
    }

    #[test]
    fn test_format_strings_can_be_disabled() {
        let format = Expression::static_call(
            STRING_FQN,
            "format",
            vec![Expression::string_lit("user %s"), name()],
            TypeDescriptor::string(),
        );
        let config = TemplateConfig::default().convert_format_strings(false);
        let result = MessageRewriter::new(config)
            .rewrite_call(&info(vec![format]))
            .unwrap();
        assert_eq!(result, CallRewrite::Unchanged);
    }

    #[test]
    fn test_to_string_stripped_after_templating() {
        let user = Expression::ident("user", TypeDescriptor::class("com.acme.User"));
        let to_string = Expression::call(Some(user.clone()), "toString", vec![], TypeDescriptor::string());
        let call = info(vec![Expression::concat(Expression::string_lit("user "), to_string)]);
        assert_eq!(rewritten_args(&call), vec![Expression::string_lit("user {}"), user]);
    }

    #[test]
    fn test_exception_message_completed() {
        let get_message = Expression::call(Some(ex()), "getMessage", vec![], TypeDescriptor::string());
        let call = info(vec![Expression::concat(
            Expression::string_lit("Error message : "),
            get_message.clone(),
        )]);
        assert_eq!(
            rewritten_args(&call),
            vec![Expression::string_lit("Error message : {}"), get_message, ex()]
        );
    }

    #[test]
    fn test_malformed_template_is_an_error() {
        let call = info(vec![Expression::concat(Expression::string_lit("braces {} "), name())]);
        let err = MessageRewriter::new(TemplateConfig::default())
            .rewrite_call(&call)
            .unwrap_err();
        assert!(matches!(err, RewriteError::MalformedTemplate { .. }));
    }

    #[test]
    fn test_host_template_uses_configured_introducer() {
        let message = Expression::concat(Expression::string_lit("cost $5 for "), name());
        let call = info(vec![message]);
        let rewriter = MessageRewriter::new(TemplateConfig::default().introducer('$'));
        let host = rewriter.host_template(&call).unwrap();
        assert_eq!(host.code, "\"cost \\$5 for {}\", ${any()}");
        assert_eq!(host.parameters, vec![name()]);

        let literal = info(vec![Expression::string_lit("done")]);
        assert_eq!(rewriter.host_template(&literal), None);
    }
}
