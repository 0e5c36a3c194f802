//! Guard stage: level alignment, then guards or deferred chains

use super::PassContext;
use crate::config::GuardConfig;
use crate::features::call_matching::LoggerApi;
use crate::features::guard_planning::{DeferredRewriter, GuardLevelAligner, GuardPlanner};
use crate::shared::models::{LogLevel, Statement};

pub struct GuardStage {
    config: GuardConfig,
    api: LoggerApi,
}

impl GuardStage {
    pub fn new(config: &GuardConfig, api: LoggerApi) -> Option<Self> {
        config.enabled.then(|| Self {
            config: config.clone(),
            api,
        })
    }

    pub fn uses_deferred(&self) -> bool {
        self.api.deferred && self.config.prefer_deferred
    }

    pub fn run(&self, block: Vec<Statement>, ctx: &mut PassContext) -> Vec<Statement> {
        let framework = self.api.framework;
        let block = if self.config.align_levels {
            let (aligned, realigned) = GuardLevelAligner::new()
                .with_framework(framework)
                .align(&block);
            ctx.stats.guards_realigned += realigned;
            aligned
        } else {
            block
        };

        let eligible = |level: LogLevel| self.config.is_eligible(level);

        if self.uses_deferred() {
            let plan = DeferredRewriter::new(eligible)
                .with_framework(framework)
                .rewrite(&block);
            ctx.stats.deferred_chains += plan.deferred_chains;
            return plan.statements;
        }

        match GuardPlanner::new(eligible)
            .with_framework(framework)
            .plan(&block)
        {
            Ok(plan) => {
                ctx.stats.guards_inserted += plan.guards_inserted;
                ctx.stats.guards_merged += plan.guards_merged;
                plan.statements
            }
            Err(err) => {
                ctx.warn(format!("block of {} statements kept: {}", block.len(), err));
                block
            }
        }
    }
}
