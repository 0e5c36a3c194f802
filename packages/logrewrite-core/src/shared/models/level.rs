//! Log severity levels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a log call, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Method name of the plain log call (`logger.info(..)`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// `isInfoEnabled` style check name
    pub fn enablement_method(&self) -> &'static str {
        match self {
            Self::Trace => "isTraceEnabled",
            Self::Debug => "isDebugEnabled",
            Self::Info => "isInfoEnabled",
            Self::Warn => "isWarnEnabled",
            Self::Error => "isErrorEnabled",
        }
    }

    /// Entry point of the fluent builder (`logger.atInfo()`)
    pub fn fluent_method(&self) -> &'static str {
        match self {
            Self::Trace => "atTrace",
            Self::Debug => "atDebug",
            Self::Info => "atInfo",
            Self::Warn => "atWarn",
            Self::Error => "atError",
        }
    }

    pub fn from_method_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == name)
    }

    pub fn from_enablement_method(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.enablement_method() == name)
    }

    /// Parse case-insensitively (`"INFO"`, `"info"`)
    pub fn from_str(s: &str) -> Option<Self> {
        Self::from_method_name(&s.to_lowercase())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
