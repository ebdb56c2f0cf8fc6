// qualgate-core/src/infrastructure/sink/json.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::environment::Environment;
use crate::domain::ports::MetricsSink;
use crate::domain::quality::QualityMetrics;
use crate::error::QualgateError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

/// Conventional location of the metrics artifact for an environment.
pub fn metrics_artifact_path(metrics_dir: &Path, environment: Environment) -> PathBuf {
    metrics_dir.join(format!("quality_metrics_{}.json", environment.as_str()))
}

/// Writes metrics as pretty-printed JSON, replacing any previous artifact.
#[derive(Debug, Clone)]
pub struct JsonMetricsSink {
    path: PathBuf,
}

impl JsonMetricsSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_environment(metrics_dir: &Path, environment: Environment) -> Self {
        Self::new(metrics_artifact_path(metrics_dir, environment))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MetricsSink for JsonMetricsSink {
    fn publish(&self, metrics: &QualityMetrics) -> Result<(), QualgateError> {
        let mut content =
            serde_json::to_string_pretty(metrics).map_err(InfrastructureError::from)?;
        content.push('\n');
        atomic_write(&self.path, content)?;
        info!(path = %self.path.display(), "Metrics artifact written");
        Ok(())
    }
}

/// Reads back an artifact written by [`JsonMetricsSink`].
pub fn read_metrics(path: &Path) -> Result<QualityMetrics, QualgateError> {
    if !path.exists() {
        return Err(InfrastructureError::MetricsNotFound(path.to_path_buf()).into());
    }
    let content = fs::read_to_string(path)?;
    let metrics = serde_json::from_str(&content).map_err(InfrastructureError::from)?;
    Ok(metrics)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_artifact_path_is_per_environment() {
        let dir = Path::new("metrics");
        assert_eq!(
            metrics_artifact_path(dir, Environment::Production),
            PathBuf::from("metrics/quality_metrics_prod.json")
        );
    }

    #[test]
    fn test_publish_writes_exact_document() -> Result<()> {
        let dir = tempdir()?;
        let sink = JsonMetricsSink::for_environment(dir.path(), Environment::Development);
        let metrics = QualityMetrics::new(Environment::Development, 4, 6);

        sink.publish(&metrics)?;

        let content = fs::read_to_string(sink.path())?;
        assert_eq!(
            content,
            "{\n  \"environment\": \"dev\",\n  \"total_rows\": 10,\n  \"valid_rows\": 4,\n  \"invalid_rows\": 6,\n  \"invalid_percentage\": 60.0\n}\n"
        );
        Ok(())
    }

    #[test]
    fn test_read_back_published_metrics() -> Result<()> {
        let dir = tempdir()?;
        let sink = JsonMetricsSink::for_environment(dir.path(), Environment::Production);
        let metrics = QualityMetrics::new(Environment::Production, 2, 1);

        sink.publish(&metrics)?;

        assert_eq!(read_metrics(sink.path())?, metrics);
        Ok(())
    }

    #[test]
    fn test_read_missing_artifact() {
        let err = read_metrics(Path::new("/nope/quality_metrics_dev.json")).unwrap_err();
        assert!(matches!(
            err,
            QualgateError::Infrastructure(InfrastructureError::MetricsNotFound(_))
        ));
    }
}
