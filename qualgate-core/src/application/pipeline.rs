// qualgate-core/src/application/pipeline.rs

use std::fmt;
use tracing::{debug, instrument};

use crate::domain::configuration::Settings;
use crate::domain::ports::{DatasetLoader, MetricsSink};
use crate::domain::quality::{
    GateOutcome, GateSeverity, InvalidRow, QualityGate, QualityMetrics, aggregate,
    validate_record,
};
use crate::error::QualgateError;
use crate::ports::Reporter;

/// Stages of a single pipeline pass. There are no retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Loading,
    Validating,
    Aggregating,
    Gating,
    Failed,
    Succeeded,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Loading => "LOADING",
            Self::Validating => "VALIDATING",
            Self::Aggregating => "AGGREGATING",
            Self::Gating => "GATING",
            Self::Failed => "FAILED",
            Self::Succeeded => "SUCCEEDED",
        };
        write!(f, "{}", name)
    }
}

/// Result of a pipeline that reached `Succeeded`.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub metrics: QualityMetrics,
    pub invalid_rows: Vec<InvalidRow>,
    pub gate: GateOutcome,
}

impl PipelineOutcome {
    /// True when the gate breached without stopping the run.
    pub fn has_warning(&self) -> bool {
        self.gate.severity == GateSeverity::Warn
    }
}

struct StageTracker {
    current: PipelineStage,
}

impl StageTracker {
    fn start() -> Self {
        debug!(stage = %PipelineStage::Loading, "Pipeline stage");
        Self {
            current: PipelineStage::Loading,
        }
    }

    fn advance(&mut self, next: PipelineStage) {
        debug!(from = %self.current, to = %next, "Pipeline stage");
        self.current = next;
    }

    fn fail(&mut self, err: QualgateError) -> QualgateError {
        debug!(from = %self.current, error = %err, "Pipeline failed");
        self.current = PipelineStage::Failed;
        err
    }
}

/// Runs Loading -> Validating -> Aggregating -> Gating once.
///
/// The metrics artifact is published before the gate decides, so a fatal
/// breach still leaves it behind. Loader failures stop the run before any
/// metrics exist.
#[instrument(skip_all, fields(environment = %settings.environment))]
pub fn run_pipeline<L, S>(
    loader: &L,
    sink: &S,
    reporter: &dyn Reporter,
    settings: &Settings,
) -> Result<PipelineOutcome, QualgateError>
where
    L: DatasetLoader + ?Sized,
    S: MetricsSink + ?Sized,
{
    let mut stage = StageTracker::start();
    let source = settings.data_path.display().to_string();

    // 1. LOADING
    let dataset = match loader.load(&settings.data_path) {
        Ok(dataset) => dataset,
        Err(err) => {
            reporter.error(&format!("Failed to load dataset {}: {}", source, err));
            return Err(stage.fail(err));
        }
    };
    reporter.info(&format!("Loaded {} rows from {}", dataset.len(), source));
    if dataset.is_empty() {
        reporter.warning(&format!(
            "Dataset {} contains no rows; reporting 0% invalid",
            source
        ));
    }

    // 2. VALIDATING
    stage.advance(PipelineStage::Validating);
    let results: Vec<_> = dataset.records.into_iter().map(validate_record).collect();

    // 3. AGGREGATING
    stage.advance(PipelineStage::Aggregating);
    let report = aggregate(results, settings.environment);
    reporter.info(&format!("Valid rows: {}", report.metrics.valid_rows));
    reporter.info(&format!("Invalid rows: {}", report.metrics.invalid_rows));

    if settings.profile.show_invalid_rows {
        for item in &report.invalid_rows {
            reporter.warning(&describe_invalid_row(item));
        }
    }

    if let Err(err) = sink.publish(&report.metrics) {
        reporter.error(&format!("Failed to write quality metrics: {}", err));
        return Err(stage.fail(err));
    }

    // 4. GATING
    stage.advance(PipelineStage::Gating);
    let gate = QualityGate::evaluate(&report.metrics, &settings.gate_config());

    match gate.severity {
        GateSeverity::None => {
            reporter.info(&format!(
                "Data quality gate passed: {:.2}% invalid rows (threshold {:?}%)",
                gate.actual_pct, gate.threshold_pct
            ));
        }
        GateSeverity::Warn => {
            reporter.warning(&format!(
                "{} [{} environment, continuing]",
                gate.failure_message(),
                settings.environment
            ));
        }
        GateSeverity::Fatal => {
            reporter.error(&gate.failure_message());
            return Err(stage.fail(gate.to_error().into()));
        }
    }

    stage.advance(PipelineStage::Succeeded);
    Ok(PipelineOutcome {
        metrics: report.metrics,
        invalid_rows: report.invalid_rows,
        gate,
    })
}

fn describe_invalid_row(item: &InvalidRow) -> String {
    let reasons: Vec<&str> = item.errors.iter().map(|d| d.as_str()).collect();
    format!("Invalid row {}: {}", item.row, reasons.join("; "))
}
