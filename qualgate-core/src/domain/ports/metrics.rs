use crate::domain::quality::QualityMetrics;
use crate::error::QualgateError;

/// Destination of the per-run metrics artifact. Written once per run.
pub trait MetricsSink: Send + Sync {
    fn publish(&self, metrics: &QualityMetrics) -> Result<(), QualgateError>;
}
