// src/domain/ports/mod.rs

pub mod dataset;
pub mod metrics;

pub use dataset::DatasetLoader;
pub use metrics::MetricsSink;
