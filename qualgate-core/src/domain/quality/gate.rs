// qualgate-core/src/domain/quality/gate.rs

use serde::Serialize;
use std::fmt;

use crate::domain::environment::{BreachSeverity, EnvironmentProfile};
use crate::domain::error::DomainError;
use crate::domain::quality::aggregator::QualityMetrics;

/// Gate decision severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateSeverity {
    None,
    Warn,
    Fatal,
}

impl fmt::Display for GateSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::Warn => write!(f, "WARN"),
            Self::Fatal => write!(f, "FATAL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GateConfig {
    pub max_invalid_pct: f64,
    pub breach_severity: BreachSeverity,
}

impl GateConfig {
    pub fn new(profile: &EnvironmentProfile) -> Self {
        Self {
            max_invalid_pct: profile.max_invalid_pct,
            breach_severity: profile.breach_severity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateOutcome {
    pub passed: bool,
    pub actual_pct: f64,
    pub threshold_pct: f64,
    pub severity: GateSeverity,
}

impl GateOutcome {
    /// Error carrying the human-readable gate failure message.
    pub fn to_error(&self) -> DomainError {
        DomainError::QualityGateFailed {
            actual_pct: self.actual_pct,
            threshold_pct: self.threshold_pct,
        }
    }

    pub fn failure_message(&self) -> String {
        self.to_error().to_string()
    }
}

/// Classifies metrics against a threshold. Never aborts, never logs.
pub struct QualityGate;

impl QualityGate {
    pub fn evaluate(metrics: &QualityMetrics, config: &GateConfig) -> GateOutcome {
        let actual_pct = metrics.invalid_percentage;
        // The threshold itself is a pass.
        let passed = actual_pct <= config.max_invalid_pct;

        let severity = match (passed, config.breach_severity) {
            (true, _) => GateSeverity::None,
            (false, BreachSeverity::Fatal) => GateSeverity::Fatal,
            (false, BreachSeverity::Warn) => GateSeverity::Warn,
        };

        GateOutcome {
            passed,
            actual_pct,
            threshold_pct: config.max_invalid_pct,
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::environment::Environment;

    fn metrics(valid: usize, invalid: usize) -> QualityMetrics {
        QualityMetrics::new(Environment::Development, valid, invalid)
    }

    fn config(environment: Environment) -> GateConfig {
        GateConfig::new(&environment.default_profile())
    }

    #[test]
    fn test_below_threshold_passes() {
        let outcome = QualityGate::evaluate(&metrics(9, 1), &config(Environment::Production));
        assert!(outcome.passed);
        assert_eq!(outcome.severity, GateSeverity::None);
        assert_eq!(outcome.actual_pct, 10.0);
        assert_eq!(outcome.threshold_pct, 20.0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // 8 valid / 2 invalid = exactly 20%
        let outcome = QualityGate::evaluate(&metrics(8, 2), &config(Environment::Production));
        assert!(outcome.passed);
        assert_eq!(outcome.severity, GateSeverity::None);

        let outcome = QualityGate::evaluate(&metrics(5, 5), &config(Environment::Development));
        assert!(outcome.passed);
    }

    #[test]
    fn test_breach_in_production_is_fatal() {
        let outcome = QualityGate::evaluate(&metrics(4, 6), &config(Environment::Production));
        assert!(!outcome.passed);
        assert_eq!(outcome.severity, GateSeverity::Fatal);
        assert_eq!(
            outcome.failure_message(),
            "Data quality gate failed: 60.00% invalid rows (threshold 20.0%)"
        );
    }

    #[test]
    fn test_breach_in_development_warns() {
        let outcome = QualityGate::evaluate(&metrics(4, 6), &config(Environment::Development));
        assert!(!outcome.passed);
        assert_eq!(outcome.severity, GateSeverity::Warn);
    }

    #[test]
    fn test_severity_follows_config_not_environment_name() {
        let lenient = GateConfig {
            max_invalid_pct: 0.0,
            breach_severity: BreachSeverity::Warn,
        };
        let outcome = QualityGate::evaluate(&metrics(1, 1), &lenient);
        assert_eq!(outcome.severity, GateSeverity::Warn);
    }

    #[test]
    fn test_empty_metrics_always_pass() {
        let strict = GateConfig {
            max_invalid_pct: 0.0,
            breach_severity: BreachSeverity::Fatal,
        };
        let outcome = QualityGate::evaluate(&metrics(0, 0), &strict);
        assert!(outcome.passed);
    }
}
