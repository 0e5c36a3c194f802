//! Rewrite configuration
//!
//! ```text
//! Preset (templates-only / guards-only / full)
//!   └─ TemplateConfig, GuardConfig   (closure builders)
//!        └─ YAML v1 file             (RewriteConfig::from_yaml)
//! ```

pub mod error;
pub mod io;
pub mod pass_configs;
pub mod preset;
pub mod rewrite_config;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use pass_configs::{GuardConfig, TemplateConfig};
pub use preset::Preset;
pub use rewrite_config::RewriteConfig;
pub use validation::OverrideSection;
