//! Configuration I/O
//!
//! Defines YAML schema types. Loading and saving live in `rewrite_config.rs`.

use super::pass_configs::{GuardConfig, TemplateConfig};
use crate::features::call_matching::LoggingFramework;
use serde::{Deserialize, Serialize};

pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    /// Base preset
    pub preset: String,

    /// Logging API override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<LoggingFramework>,

    /// Fine-grained overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<ConfigOverrides>,
}

/// Configuration overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guards: Option<GuardConfig>,
}
