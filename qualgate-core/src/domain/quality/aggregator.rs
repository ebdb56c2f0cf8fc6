// qualgate-core/src/domain/quality/aggregator.rs

use serde::{Deserialize, Serialize};

use crate::domain::dataset::Record;
use crate::domain::environment::Environment;
use crate::domain::quality::validator::{Defect, RowVerdict, ValidationResult};

/// Summary of a run. Field order is the on-disk order of the metrics artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub environment: String,
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub invalid_percentage: f64,
}

impl QualityMetrics {
    pub fn new(environment: Environment, valid_rows: usize, invalid_rows: usize) -> Self {
        let total_rows = valid_rows + invalid_rows;
        Self {
            environment: environment.as_str().to_string(),
            total_rows,
            valid_rows,
            invalid_rows,
            invalid_percentage: invalid_percentage(invalid_rows, total_rows),
        }
    }
}

/// Share of invalid rows in percent, rounded to 2 decimals. 0 for an empty dataset.
pub fn invalid_percentage(invalid_rows: usize, total_rows: usize) -> f64 {
    if total_rows == 0 {
        return 0.0;
    }
    let pct = invalid_rows as f64 / total_rows as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

/// An invalid record together with the reasons it was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidRow {
    pub row: Record,
    pub errors: Vec<Defect>,
}

/// Output of the aggregation stage.
#[derive(Debug, Clone)]
pub struct QualityReport {
    pub valid_rows: Vec<Record>,
    pub invalid_rows: Vec<InvalidRow>,
    pub metrics: QualityMetrics,
}

/// Partitions validated rows, preserving source order inside each partition.
pub fn aggregate(results: Vec<ValidationResult>, environment: Environment) -> QualityReport {
    let mut valid_rows = Vec::new();
    let mut invalid_rows = Vec::new();

    for result in results {
        match result.verdict() {
            RowVerdict::Valid => valid_rows.push(result.record),
            RowVerdict::Invalid(defects) => {
                let errors = defects.to_vec();
                invalid_rows.push(InvalidRow {
                    row: result.record,
                    errors,
                });
            }
        }
    }

    let metrics = QualityMetrics::new(environment, valid_rows.len(), invalid_rows.len());

    QualityReport {
        valid_rows,
        invalid_rows,
        metrics,
    }
}
