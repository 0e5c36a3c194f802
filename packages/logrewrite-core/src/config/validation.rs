//! Validation of the per-pass `overrides` sections

use super::error::{ConfigError, ConfigResult};

/// One section under `overrides:` in a YAML config file
///
/// Errors name the offending value by its dotted path, e.g.
/// `template.introducer`, so it can be found in the file.
pub trait OverrideSection {
    /// Key of the section under `overrides:`
    const SECTION: &'static str;

    fn validate(&self) -> ConfigResult<()>;

    fn field_path(field: &str) -> String {
        format!("{}.{}", Self::SECTION, field)
    }

    fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
        ConfigError::invalid(Self::field_path(field), reason)
    }
}
