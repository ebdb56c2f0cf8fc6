// qualgate-core/src/domain/quality/mod.rs

pub mod aggregator;
pub mod gate;
pub mod validator;

// Re-exports
pub use aggregator::{InvalidRow, QualityMetrics, QualityReport, aggregate};
pub use gate::{GateConfig, GateOutcome, GateSeverity, QualityGate};
pub use validator::{Defect, RowVerdict, ValidationResult, validate_record, validate_row};
