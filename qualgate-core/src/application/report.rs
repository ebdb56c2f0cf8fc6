// qualgate-core/src/application/report.rs

use std::path::PathBuf;

use crate::domain::configuration::Settings;
use crate::domain::quality::{GateOutcome, QualityGate, QualityMetrics};
use crate::error::QualgateError;
use crate::infrastructure::sink::{metrics_artifact_path, read_metrics};

/// A previously written metrics artifact, re-gated with the current settings.
#[derive(Debug, Clone)]
pub struct MetricsReport {
    pub path: PathBuf,
    pub metrics: QualityMetrics,
    pub gate: GateOutcome,
}

pub fn read_report(settings: &Settings) -> Result<MetricsReport, QualgateError> {
    let path = metrics_artifact_path(&settings.metrics_dir, settings.environment);
    let metrics = read_metrics(&path)?;
    let gate = QualityGate::evaluate(&metrics, &settings.gate_config());
    Ok(MetricsReport {
        path,
        metrics,
        gate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::environment::Environment;
    use crate::domain::ports::MetricsSink;
    use crate::domain::quality::GateSeverity;
    use crate::infrastructure::sink::JsonMetricsSink;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_report_regates_stored_metrics() -> Result<()> {
        let dir = tempdir()?;
        let settings = Settings::defaults(dir.path(), Environment::Production);
        JsonMetricsSink::for_environment(&settings.metrics_dir, settings.environment)
            .publish(&QualityMetrics::new(Environment::Production, 7, 3))?;

        let report = read_report(&settings)?;

        assert_eq!(report.metrics.invalid_percentage, 30.0);
        assert_eq!(report.gate.severity, GateSeverity::Fatal);
        assert!(report.path.ends_with("quality_metrics_prod.json"));
        Ok(())
    }

    #[test]
    fn test_report_without_artifact_fails() -> Result<()> {
        let dir = tempdir()?;
        let settings = Settings::defaults(dir.path(), Environment::Development);
        assert!(read_report(&settings).is_err());
        Ok(())
    }
}
