//! Deferred-evaluation rewrite for loggers with a fluent builder API
//!
//! ```text
//! log.info("user {} has {}", name, loadRoles(name), ex);
//!   ↓
//! log.atInfo().addArgument(name).addArgument(() -> loadRoles(name)).setCause(ex).log("user {} has {}");
//! ```
//!
//! Each call is rewritten on its own; runs and guards are not involved.

use crate::features::call_matching::LoggingFramework;
use crate::features::classification::ExpressionClassifier;
use crate::features::concatenation::count_markers;
use crate::features::guard_planning::domain::BlockPlan;
use crate::shared::models::{ChainStep, DeferredChain, Expression, LogCall, LogLevel, Statement};

pub struct DeferredRewriter<P> {
    level_predicate: P,
    framework: Option<LoggingFramework>,
    classifier: ExpressionClassifier,
}

impl<P> DeferredRewriter<P>
where
    P: Fn(LogLevel) -> bool,
{
    pub fn new(level_predicate: P) -> Self {
        Self {
            level_predicate,
            framework: None,
            classifier: ExpressionClassifier::new(),
        }
    }

    pub fn with_framework(mut self, framework: LoggingFramework) -> Self {
        self.framework = Some(framework);
        self
    }

    fn should_defer(&self, call: &LogCall) -> bool {
        (self.level_predicate)(call.level)
            && self
                .framework
                .map_or(true, |framework| framework.matches(&call.logger.ty))
            && self.classifier.call_cost(call).is_expensive()
    }

    /// Thunk for expensive values, the value itself otherwise
    fn defer(&self, expr: &Expression) -> Expression {
        if self.classifier.classify(expr).is_expensive() {
            Expression::supplier(expr.clone())
        } else {
            expr.clone()
        }
    }

    pub fn to_chain(&self, call: &LogCall) -> Option<DeferredChain> {
        let message = call.message()?;
        let trailing = call.trailing_args();

        let mut steps: Vec<ChainStep> = call
            .leading_args()
            .iter()
            .cloned()
            .map(ChainStep::AddMarker)
            .collect();

        let placeholders = message.as_string_literal().map(count_markers);
        let (arguments, cause) = match trailing.split_last() {
            Some((last, rest))
                if last.ty.is_exception()
                    && placeholders.map_or(true, |markers| markers < trailing.len()) =>
            {
                (rest, Some(last))
            }
            _ => (trailing, None),
        };

        steps.extend(arguments.iter().map(|arg| ChainStep::AddArgument(self.defer(arg))));
        steps.extend(cause.cloned().map(ChainStep::SetCause));

        Some(DeferredChain {
            logger: call.logger.clone(),
            level: call.level,
            steps,
            message: self.defer(message),
        })
    }

    pub fn rewrite(&self, statements: &[Statement]) -> BlockPlan {
        let mut plan = BlockPlan::default();
        for statement in statements {
            let chain = match statement {
                Statement::Log(call) if self.should_defer(call) => self.to_chain(call),
                _ => None,
            };
            match chain {
                Some(chain) => {
                    plan.deferred_chains += 1;
                    plan.statements.push(Statement::Deferred(chain));
                }
                None => plan.statements.push(statement.clone()),
            }
        }
        plan.changed = plan.deferred_chains > 0;
        plan
    }
}
