// qualgate-core/src/domain/environment.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported deployment environments. Anything else is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Environment {
    #[default]
    #[serde(rename = "dev", alias = "development")]
    Development,
    #[serde(rename = "prod", alias = "production")]
    Production,
}

impl Environment {
    pub const ALL: [Environment; 2] = [Environment::Development, Environment::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "dev",
            Self::Production => "prod",
        }
    }

    /// Built-in profile for this environment, before any override.
    pub fn default_profile(&self) -> EnvironmentProfile {
        match self {
            Self::Development => EnvironmentProfile {
                log_level: LogLevel::Info,
                show_invalid_rows: true,
                max_invalid_pct: 50.0,
                breach_severity: BreachSeverity::Warn,
            },
            Self::Production => EnvironmentProfile {
                log_level: LogLevel::Warning,
                show_invalid_rows: false,
                max_invalid_pct: 20.0,
                breach_severity: BreachSeverity::Fatal,
            },
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dev" | "development" => Ok(Self::Development),
            "prod" | "production" => Ok(Self::Production),
            _ => Err(format!(
                "Unknown environment: '{}' (expected dev or prod)",
                s
            )),
        }
    }
}

/// Message levels understood by the reporting port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    #[serde(alias = "warn")]
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a gate breach means for the pipeline in a given environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreachSeverity {
    Warn,
    Fatal,
}

impl fmt::Display for BreachSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warn => write!(f, "warn"),
            Self::Fatal => write!(f, "fatal"),
        }
    }
}

/// Concrete behaviour attached to an environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentProfile {
    pub log_level: LogLevel,
    pub show_invalid_rows: bool,
    pub max_invalid_pct: f64,
    pub breach_severity: BreachSeverity,
}
