// qualgate-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("CSV schema mismatch: missing required column(s) {}", .missing.join(", "))]
    #[diagnostic(
        code(qualgate::domain::schema),
        help("The header must contain: customer_id, name, age, email, country.")
    )]
    SchemaError { missing: Vec<String> },

    // `{:?}` keeps the decimal point on whole thresholds (20.0, not 20)
    #[error(
        "Data quality gate failed: {actual_pct:.2}% invalid rows (threshold {threshold_pct:?}%)"
    )]
    #[diagnostic(
        code(qualgate::domain::quality_gate),
        help("Inspect the metrics artifact, fix the source data or relax max_invalid_pct.")
    )]
    QualityGateFailed { actual_pct: f64, threshold_pct: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_message_keeps_threshold_decimal() {
        let err = DomainError::QualityGateFailed {
            actual_pct: 60.0,
            threshold_pct: 20.0,
        };
        assert_eq!(
            err.to_string(),
            "Data quality gate failed: 60.00% invalid rows (threshold 20.0%)"
        );
    }

    #[test]
    fn test_gate_message_fractional_values() {
        let err = DomainError::QualityGateFailed {
            actual_pct: 33.333,
            threshold_pct: 12.5,
        };
        assert_eq!(
            err.to_string(),
            "Data quality gate failed: 33.33% invalid rows (threshold 12.5%)"
        );
    }

    #[test]
    fn test_schema_error_lists_missing_columns() {
        let err = DomainError::SchemaError {
            missing: vec!["email".into(), "country".into()],
        };
        assert!(err.to_string().contains("email, country"));
    }
}
