// qualgate/src/commands/mod.rs

pub mod profiles;
pub mod report;
pub mod run;

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use qualgate_core::domain::quality::{GateOutcome, QualityMetrics};

/// Shared rendering of a metrics document plus its gate decision.
pub fn metrics_table(metrics: &QualityMetrics, gate: &GateOutcome) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value"]);

    table.add_row(vec!["environment".to_string(), metrics.environment.clone()]);
    table.add_row(vec!["total_rows".to_string(), metrics.total_rows.to_string()]);
    table.add_row(vec!["valid_rows".to_string(), metrics.valid_rows.to_string()]);
    table.add_row(vec![
        "invalid_rows".to_string(),
        metrics.invalid_rows.to_string(),
    ]);
    table.add_row(vec![
        "invalid_percentage".to_string(),
        format!("{:.2}%", metrics.invalid_percentage),
    ]);
    table.add_row(vec![
        "threshold".to_string(),
        format!("{:?}%", gate.threshold_pct),
    ]);
    table.add_row(vec!["gate".to_string(), gate.severity.to_string()]);
    table
}
