// qualgate-core/src/application/mod.rs

pub mod pipeline;
pub mod report;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI write:
// `use qualgate_core::application::{run_pipeline, read_report};`
// without knowing the internal file layout.

pub use pipeline::{PipelineOutcome, PipelineStage, run_pipeline};
pub use report::{MetricsReport, read_report};
