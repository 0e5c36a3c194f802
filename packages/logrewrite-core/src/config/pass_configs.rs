//! Pass-specific configuration types
//!
//! Each rewrite pass has its own configuration struct with validation.

use super::error::ConfigResult;
use super::preset::Preset;
use super::validation::OverrideSection;
use crate::features::concatenation::DEFAULT_INTRODUCER;
use crate::shared::models::LogLevel;
use serde::{Deserialize, Serialize};

// ============================================================================
// Message Template Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Rewrite concatenated messages into placeholder templates
    pub enabled: bool,

    /// Parameter-slot introducer of the engine's template syntax
    pub introducer: char,

    /// Drop `.toString()` from placeholder arguments
    pub strip_to_string: bool,

    /// Convert `String.format(..)` messages
    pub convert_format_strings: bool,

    /// Pass the exception when only its message is logged
    pub complete_exception_logging: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            introducer: DEFAULT_INTRODUCER,
            strip_to_string: true,
            convert_format_strings: true,
            complete_exception_logging: true,
        }
    }
}

impl TemplateConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            enabled: preset.templates_enabled(),
            ..Self::default()
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn introducer(mut self, introducer: char) -> Self {
        self.introducer = introducer;
        self
    }

    pub fn strip_to_string(mut self, enabled: bool) -> Self {
        self.strip_to_string = enabled;
        self
    }

    pub fn convert_format_strings(mut self, enabled: bool) -> Self {
        self.convert_format_strings = enabled;
        self
    }

    pub fn complete_exception_logging(mut self, enabled: bool) -> Self {
        self.complete_exception_logging = enabled;
        self
    }
}

// ============================================================================
// Guard Planning Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Protect expensive log calls
    pub enabled: bool,

    /// Most severe level that is still guarded (warn and error are rarely
    /// disabled)
    pub max_level: LogLevel,

    /// Use fluent deferred chains when the logger supports them
    pub prefer_deferred: bool,

    /// Re-level guards whose check does not match their body
    pub align_levels: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_level: LogLevel::Info,
            prefer_deferred: true,
            align_levels: true,
        }
    }
}

impl GuardConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            enabled: preset.guards_enabled(),
            ..Self::default()
        }
    }

    /// Level predicate handed to the planner
    pub fn is_eligible(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn max_level(mut self, level: LogLevel) -> Self {
        self.max_level = level;
        self
    }

    pub fn prefer_deferred(mut self, enabled: bool) -> Self {
        self.prefer_deferred = enabled;
        self
    }

    pub fn align_levels(mut self, enabled: bool) -> Self {
        self.align_levels = enabled;
        self
    }
}

impl OverrideSection for TemplateConfig {
    const SECTION: &'static str = "template";

    fn validate(&self) -> ConfigResult<()> {
        let c = self.introducer;
        if c.is_alphanumeric() || c.is_whitespace() || matches!(c, '{' | '}' | '"' | '\\') {
            return Err(Self::invalid(
                "introducer",
                format!("'{}' cannot introduce template parameters", c),
            ));
        }
        Ok(())
    }
}

impl OverrideSection for GuardConfig {
    const SECTION: &'static str = "guards";

    fn validate(&self) -> ConfigResult<()> {
        if self.enabled && self.max_level == LogLevel::Error {
            return Err(Self::invalid(
                "max_level",
                "error-level calls are never guarded; use warn at most",
            ));
        }
        Ok(())
    }
}
