//! Top-level rewrite configuration
//!
//! Layered like:
//! 1. preset (`Preset::Full` by default)
//! 2. per-pass overrides via closure builders
//! 3. YAML file (`version: 1`)
//!
//! ```rust
//! use logrewrite_core::config::{Preset, RewriteConfig};
//! use logrewrite_core::shared::models::LogLevel;
//!
//! let config = RewriteConfig::preset(Preset::Full)
//!     .guards(|g| g.max_level(LogLevel::Debug))
//!     .template(|t| t.strip_to_string(false));
//! assert!(config.validate().is_ok());
//! ```

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ConfigOverrides, SUPPORTED_VERSIONS};
use super::pass_configs::{GuardConfig, TemplateConfig};
use super::preset::Preset;
use super::validation::OverrideSection;
use crate::features::call_matching::LoggingFramework;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteConfig {
    preset: Preset,

    /// Force a logging API instead of detecting it per unit
    pub framework: Option<LoggingFramework>,

    pub template: TemplateConfig,
    pub guards: GuardConfig,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl RewriteConfig {
    /// Level 1: start from a preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            framework: None,
            template: TemplateConfig::from_preset(preset),
            guards: GuardConfig::from_preset(preset),
        }
    }

    pub fn get_preset(&self) -> Preset {
        self.preset
    }

    pub fn framework(mut self, framework: LoggingFramework) -> Self {
        self.framework = Some(framework);
        self
    }

    /// Level 2: override the template pass
    pub fn template<F>(mut self, f: F) -> Self
    where
        F: FnOnce(TemplateConfig) -> TemplateConfig,
    {
        self.template = f(self.template);
        self
    }

    /// Level 2: override the guard pass
    pub fn guards<F>(mut self, f: F) -> Self
    where
        F: FnOnce(GuardConfig) -> GuardConfig,
    {
        self.guards = f(self.guards);
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.template.validate()?;
        self.guards.validate()?;
        Ok(())
    }

    /// Level 3: load from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&export.preset)
            .map_err(|_| ConfigError::UnknownPreset(export.preset.clone()))?;

        let mut config = Self::preset(preset);
        config.framework = export.framework;
        if let Some(overrides) = export.overrides {
            if let Some(template) = overrides.template {
                config.template = template;
            }
            if let Some(guards) = overrides.guards {
                config.guards = guards;
            }
        }

        config.validate()?;
        tracing::debug!(
            "rewrite_config_loaded (preset={}, framework={:?})",
            config.preset,
            config.framework
        );
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: self.preset.to_string(),
            framework: self.framework,
            overrides: Some(ConfigOverrides {
                template: Some(self.template.clone()),
                guards: Some(self.guards.clone()),
            }),
        };
        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }

    /// Get a human-readable description of the configuration
    pub fn describe(&self) -> String {
        let framework = self
            .framework
            .map(|f| f.to_string())
            .unwrap_or_else(|| "auto".to_string());
        format!(
            "preset={} framework={} templates={} guards={} (max_level={}, deferred={})",
            self.preset,
            framework,
            self.template.enabled,
            self.guards.enabled,
            self.guards.max_level,
            self.guards.prefer_deferred
        )
    }
}
