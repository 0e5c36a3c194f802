//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use serde::{Deserialize, Serialize};

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// Message templates only; no guards or fluent chains
    TemplatesOnly,

    /// Enablement guards (or fluent chains) only; messages untouched
    GuardsOnly,

    /// Every rewrite
    Full,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "templates-only" => Ok(Self::TemplatesOnly),
            "guards-only" => Ok(Self::GuardsOnly),
            "full" => Ok(Self::Full),
            _ => Err(format!(
                "Unknown preset '{}'. Valid presets: templates-only, guards-only, full",
                s
            )),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TemplatesOnly => "templates-only",
            Self::GuardsOnly => "guards-only",
            Self::Full => "full",
        }
    }

    pub fn templates_enabled(&self) -> bool {
        !matches!(self, Self::GuardsOnly)
    }

    pub fn guards_enabled(&self) -> bool {
        !matches!(self, Self::TemplatesOnly)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Full
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
