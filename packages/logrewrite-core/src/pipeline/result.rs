//! Pipeline result types

use crate::features::call_matching::LoggerApi;
use crate::features::concatenation::HostTemplate;
use crate::shared::models::CompilationUnit;
use serde::{Deserialize, Serialize};

/// Counters for one unit (or a whole batch, once merged)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteStats {
    /// Calls whose message or arguments were rewritten
    pub templated: usize,
    /// Calls left alone because their template could not be assembled
    pub malformed_skipped: usize,
    pub guards_inserted: usize,
    pub guards_merged: usize,
    pub guards_realigned: usize,
    pub deferred_chains: usize,
    /// Blocks (including nested ones) that differ after the pass
    pub blocks_changed: usize,
}

impl RewriteStats {
    pub fn merge(&mut self, other: &RewriteStats) {
        self.templated += other.templated;
        self.malformed_skipped += other.malformed_skipped;
        self.guards_inserted += other.guards_inserted;
        self.guards_merged += other.guards_merged;
        self.guards_realigned += other.guards_realigned;
        self.deferred_chains += other.deferred_chains;
        self.blocks_changed += other.blocks_changed;
    }

    /// Sum over a batch
    pub fn total<'a>(results: impl IntoIterator<Item = &'a ProcessResult>) -> RewriteStats {
        results.into_iter().fold(RewriteStats::default(), |mut acc, r| {
            acc.merge(&r.stats);
            acc
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub unit: CompilationUnit,
    /// Strategy used; `None` when nothing in the unit logs
    pub api: Option<LoggerApi>,
    pub stats: RewriteStats,
    /// Recovered conditions (calls or blocks kept as they were)
    pub warnings: Vec<String>,
    /// Engine template code for every compiled message, in visit order
    #[serde(default)]
    pub host_templates: Vec<HostTemplate>,
}

impl ProcessResult {
    pub fn untouched(unit: CompilationUnit) -> Self {
        Self {
            unit,
            api: None,
            stats: RewriteStats::default(),
            warnings: Vec::new(),
            host_templates: Vec::new(),
        }
    }

    pub fn is_changed(&self) -> bool {
        self.stats.blocks_changed > 0
    }
}
