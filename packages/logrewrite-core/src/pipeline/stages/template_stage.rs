//! Message template stage

use super::PassContext;
use crate::config::TemplateConfig;
use crate::features::call_matching::LoggingFramework;
use crate::features::concatenation::{CallRewrite, MessageRewriteUseCase, MessageRewriter};
use crate::shared::models::LogCall;

pub struct TemplateStage {
    framework: LoggingFramework,
    rewriter: MessageRewriter,
}

impl TemplateStage {
    /// `None` when templates are disabled or the framework has no placeholders
    pub fn for_framework(config: &TemplateConfig, framework: LoggingFramework) -> Option<Self> {
        if !config.enabled || !framework.supports_templates() {
            return None;
        }
        Some(Self {
            framework,
            rewriter: MessageRewriter::new(config.clone()),
        })
    }

    pub fn rewrite_call(&self, call: &LogCall, ctx: &mut PassContext) -> LogCall {
        if !self.framework.matches(&call.logger.ty) {
            return call.clone();
        }
        match self.rewriter.rewrite_call(call) {
            Ok(CallRewrite::Rewritten(rewritten)) => {
                ctx.stats.templated += 1;
                ctx.host_templates.extend(self.rewriter.host_template(call));
                rewritten
            }
            Ok(CallRewrite::Unchanged) => call.clone(),
            Err(err) => {
                ctx.stats.malformed_skipped += 1;
                ctx.warn(format!("{} kept: {}", call, err));
                call.clone()
            }
        }
    }
}
