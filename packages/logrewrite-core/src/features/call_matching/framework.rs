//! Logging API strategy
//!
//! The supported logging libraries differ in which types they use, whether
//! messages take `{}` placeholders, which enablement checks exist, and
//! whether a fluent deferred-evaluation builder is available. The strategy is
//! chosen once per compilation unit and passed to every pass.

use crate::shared::models::{CompilationUnit, Expression, LogLevel, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingFramework {
    Slf4j,
    Log4j2,
    Log4j1,
    CommonsLogging,
}

impl LoggingFramework {
    pub const ALL: [LoggingFramework; 4] = [
        LoggingFramework::Slf4j,
        LoggingFramework::Log4j2,
        LoggingFramework::Log4j1,
        LoggingFramework::CommonsLogging,
    ];

    /// Logger types whose calls this framework recognises
    pub fn logger_types(&self) -> &'static [&'static str] {
        match self {
            Self::Slf4j => &["org.slf4j.Logger"],
            Self::Log4j2 => &["org.apache.logging.log4j.Logger"],
            Self::Log4j1 => &["org.apache.log4j.Logger", "org.apache.log4j.Category"],
            Self::CommonsLogging => &["org.apache.commons.logging.Log"],
        }
    }

    pub fn logger_type(&self) -> &'static str {
        self.logger_types()[0]
    }

    pub fn marker_type(&self) -> Option<&'static str> {
        match self {
            Self::Slf4j => Some("org.slf4j.Marker"),
            Self::Log4j2 => Some("org.apache.logging.log4j.Marker"),
            Self::Log4j1 | Self::CommonsLogging => None,
        }
    }

    /// Whether `ty` is this framework's marker type or a subtype of it
    pub fn is_marker(&self, ty: &TypeDescriptor) -> bool {
        self.marker_type().is_some_and(|marker| ty.is_assignable_to(marker))
    }

    /// Messages accept `{}` placeholders
    pub fn supports_templates(&self) -> bool {
        matches!(self, Self::Slf4j | Self::Log4j2)
    }

    /// Name of the zero-argument enablement check for `level`, if one exists
    pub fn enablement_check(&self, level: LogLevel) -> Option<&'static str> {
        match (self, level) {
            (Self::Log4j1, LogLevel::Warn | LogLevel::Error) => None,
            _ => Some(level.enablement_method()),
        }
    }

    pub fn matches(&self, ty: &TypeDescriptor) -> bool {
        self.logger_types().iter().any(|t| ty.is_assignable_to(t))
    }

    /// Framework whose logger is exactly `fqn`
    pub fn from_logger_type(fqn: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.logger_types().contains(&fqn))
    }

    /// Framework owning a logger type, supertypes included
    pub fn detect(ty: &TypeDescriptor) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.matches(ty))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slf4j => "slf4j",
            Self::Log4j2 => "log4j2",
            Self::Log4j1 => "log4j1",
            Self::CommonsLogging => "commons-logging",
        }
    }

    /// Parse case-insensitively; `log4j` is accepted for `log4j1`
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slf4j" => Some(Self::Slf4j),
            "log4j2" => Some(Self::Log4j2),
            "log4j1" | "log4j" => Some(Self::Log4j1),
            "commons-logging" | "jcl" => Some(Self::CommonsLogging),
            _ => None,
        }
    }
}

impl Default for LoggingFramework {
    fn default() -> Self {
        Self::Slf4j
    }
}

impl fmt::Display for LoggingFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Member probed on the logger type to detect the fluent builder API
const FLUENT_PROBE: &str = "atInfo";

/// Strategy selected for one compilation unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerApi {
    pub framework: LoggingFramework,
    /// The logger exposes `at<Level>()` deferred-evaluation chains
    pub deferred: bool,
}

impl LoggerApi {
    pub fn new(framework: LoggingFramework) -> Self {
        Self {
            framework,
            deferred: false,
        }
    }

    /// Probe a logger's declared type once
    pub fn probe(framework: LoggingFramework, logger_type: &TypeDescriptor) -> Self {
        let deferred =
            framework == LoggingFramework::Slf4j && logger_type.has_member(FLUENT_PROBE);
        Self {
            framework,
            deferred,
        }
    }

    /// Pick the strategy for a unit
    ///
    /// An explicit framework wins and is probed on the unit's first logger
    /// of that framework; otherwise the first logger in the unit decides.
    /// Returns `None` when nothing in the unit logs.
    pub fn select(unit: &CompilationUnit, framework: Option<LoggingFramework>) -> Option<Self> {
        match framework {
            Some(framework) => {
                let own_logger =
                    unit.find_logger(&|logger: &Expression| framework.matches(&logger.ty));
                Some(match own_logger {
                    Some(logger) => Self::probe(framework, &logger.ty),
                    None => Self::new(framework),
                })
            }
            None => {
                let ty = &unit.first_logger()?.ty;
                LoggingFramework::detect(ty).map(|f| Self::probe(f, ty))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_framework() {
        assert_eq!(
            LoggingFramework::detect(&TypeDescriptor::class("org.slf4j.Logger")),
            Some(LoggingFramework::Slf4j)
        );
        assert_eq!(
            LoggingFramework::detect(&TypeDescriptor::class("org.apache.log4j.Category")),
            Some(LoggingFramework::Log4j1)
        );
        assert_eq!(
            LoggingFramework::detect(&TypeDescriptor::class("java.util.logging.Logger")),
            None
        );
    }

    #[test]
    fn test_capabilities() {
        assert!(LoggingFramework::Slf4j.supports_templates());
        assert!(LoggingFramework::Log4j2.supports_templates());
        assert!(!LoggingFramework::Log4j1.supports_templates());
        assert!(!LoggingFramework::CommonsLogging.supports_templates());
        assert_eq!(
            LoggingFramework::Log4j1.enablement_check(LogLevel::Debug),
            Some("isDebugEnabled")
        );
        assert_eq!(LoggingFramework::Log4j1.enablement_check(LogLevel::Warn), None);
        let marker = TypeDescriptor::class("org.apache.logging.log4j.Marker");
        assert!(LoggingFramework::Log4j2.is_marker(&marker));
        assert!(!LoggingFramework::Slf4j.is_marker(&marker));
        assert!(!LoggingFramework::Log4j1.is_marker(&marker));
        assert_eq!(
            LoggingFramework::CommonsLogging.enablement_check(LogLevel::Warn),
            Some("isWarnEnabled")
        );
    }

    #[test]
    fn test_parsing() {
        assert_eq!(LoggingFramework::from_str("SLF4J"), Some(LoggingFramework::Slf4j));
        assert_eq!(LoggingFramework::from_str("log4j"), Some(LoggingFramework::Log4j1));
        assert_eq!(LoggingFramework::from_str("jul"), None);
        assert_eq!(LoggingFramework::CommonsLogging.to_string(), "commons-logging");
        assert_eq!(LoggingFramework::default(), LoggingFramework::Slf4j);
    }

    #[test]
    fn test_from_logger_type() {
        assert_eq!(
            LoggingFramework::from_logger_type("org.apache.commons.logging.Log"),
            Some(LoggingFramework::CommonsLogging)
        );
        assert_eq!(LoggingFramework::from_logger_type("org.slf4j.LoggerFactory"), None);
    }

    #[test]
    fn test_probe_fluent_api() {
        let slf4j2 = TypeDescriptor::class("org.slf4j.Logger").with_members(["info", "atInfo"]);
        let slf4j1 = TypeDescriptor::class("org.slf4j.Logger").with_members(["info"]);
        assert!(LoggerApi::probe(LoggingFramework::Slf4j, &slf4j2).deferred);
        assert!(!LoggerApi::probe(LoggingFramework::Slf4j, &slf4j1).deferred);
        assert!(!LoggerApi::probe(LoggingFramework::Log4j2, &slf4j2).deferred);
    }

    #[test]
    fn test_select_without_loggers() {
        let unit = CompilationUnit::new("Empty.java");
        assert_eq!(LoggerApi::select(&unit, None), None);
        assert_eq!(
            LoggerApi::select(&unit, Some(LoggingFramework::Log4j2)),
            Some(LoggerApi::new(LoggingFramework::Log4j2))
        );
    }

    #[test]
    fn test_select_uses_logger_of_chosen_framework() {
        use crate::shared::models::{LogCall, Statement};

        let log = |name: &str, ty: TypeDescriptor| {
            let logger = Expression::ident(name, ty);
            Statement::Log(LogCall::new(logger, LogLevel::Info, vec![Expression::string_lit("x")]))
        };
        let unit = CompilationUnit::new("Mixed.java").with_block(vec![
            log("legacy", TypeDescriptor::class("org.apache.log4j.Logger")),
            log(
                "log",
                TypeDescriptor::class("org.slf4j.Logger").with_members(["info", "atInfo"]),
            ),
        ]);

        let forced = LoggerApi::select(&unit, Some(LoggingFramework::Slf4j)).unwrap();
        assert!(forced.deferred);
        let detected = LoggerApi::select(&unit, None).unwrap();
        assert_eq!(detected, LoggerApi::new(LoggingFramework::Log4j1));
    }
}
