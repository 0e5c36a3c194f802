//! Unit processor
//!
//! Runs both passes over every block of a compilation unit, innermost blocks
//! included, and over a batch of units in parallel.

use super::result::ProcessResult;
use super::stages::{GuardStage, PassContext, TemplateStage};
use crate::config::RewriteConfig;
use crate::errors::Result;
use crate::features::call_matching::LoggerApi;
use crate::shared::models::{CompilationUnit, GuardedBlock, OpaqueStatement, Statement};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub struct UnitProcessor {
    config: RewriteConfig,
}

/// Stages resolved for one unit
struct UnitPass {
    templates: Option<TemplateStage>,
    guards: Option<GuardStage>,
}

impl UnitProcessor {
    pub fn new(config: RewriteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RewriteConfig {
        &self.config
    }

    pub fn process(&self, unit: &CompilationUnit) -> ProcessResult {
        let Some(api) = LoggerApi::select(unit, self.config.framework) else {
            tracing::trace!("unit_skipped (path={}, reason=no logger)", unit.path);
            return ProcessResult::untouched(unit.clone());
        };

        let pass = UnitPass {
            templates: TemplateStage::for_framework(&self.config.template, api.framework),
            guards: GuardStage::new(&self.config.guards, api),
        };
        let mut ctx = PassContext::default();
        let blocks = unit
            .blocks
            .iter()
            .map(|block| pass.rewrite_block(block, &mut ctx))
            .collect();

        tracing::debug!(
            "unit_processed (path={}, framework={}, deferred={}, templated={}, guards={}, chains={})",
            unit.path,
            api.framework,
            api.deferred,
            ctx.stats.templated,
            ctx.stats.guards_inserted,
            ctx.stats.deferred_chains
        );

        ProcessResult {
            unit: CompilationUnit {
                path: unit.path.clone(),
                blocks,
            },
            api: Some(api),
            stats: ctx.stats,
            warnings: ctx.warnings,
            host_templates: ctx.host_templates,
        }
    }
}

impl UnitPass {
    fn rewrite_block(&self, block: &[Statement], ctx: &mut PassContext) -> Vec<Statement> {
        let templated: Vec<Statement> = block
            .iter()
            .map(|statement| self.rewrite_statement(statement, ctx, false))
            .collect();
        let rewritten = match &self.guards {
            Some(stage) => stage.run(templated, ctx),
            None => templated,
        };
        if rewritten.as_slice() != block {
            ctx.stats.blocks_changed += 1;
        }
        rewritten
    }

    fn rewrite_statement(
        &self,
        statement: &Statement,
        ctx: &mut PassContext,
        inside_guard: bool,
    ) -> Statement {
        match statement {
            Statement::Log(call) => match &self.templates {
                Some(stage) => Statement::Log(stage.rewrite_call(call, ctx)),
                None => statement.clone(),
            },
            Statement::Guarded(guard) => Statement::Guarded(GuardedBlock {
                level: guard.level,
                condition: guard.condition.clone(),
                body: guard
                    .body
                    .iter()
                    .map(|inner| self.rewrite_statement(inner, ctx, true))
                    .collect(),
            }),
            Statement::Other(opaque)
                if !opaque.references_enablement && !opaque.children.is_empty() =>
            {
                let children = opaque
                    .children
                    .iter()
                    .map(|child| {
                        if inside_guard {
                            child
                                .iter()
                                .map(|inner| self.rewrite_statement(inner, ctx, true))
                                .collect::<Vec<_>>()
                        } else {
                            self.rewrite_block(child, ctx)
                        }
                    })
                    .collect();
                Statement::Other(OpaqueStatement {
                    source: opaque.source.clone(),
                    children,
                    references_enablement: false,
                })
            }
            _ => statement.clone(),
        }
    }
}

/// Process a batch of units with one configuration
pub fn process_units(
    units: Vec<CompilationUnit>,
    config: &RewriteConfig,
) -> Result<Vec<ProcessResult>> {
    let processor = UnitProcessor::new(config.clone())?;

    #[cfg(feature = "parallel")]
    let results: Vec<ProcessResult> = units
        .par_iter()
        .map(|unit| processor.process(unit))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<ProcessResult> = units.iter().map(|unit| processor.process(unit)).collect();

    tracing::info!(
        "batch_processed (units={}, changed={})",
        results.len(),
        results.iter().filter(|r| r.is_changed()).count()
    );
    Ok(results)
}
