// qualgate-core/src/infrastructure/sink/mod.rs

pub mod json;

pub use json::{JsonMetricsSink, metrics_artifact_path, read_metrics};
