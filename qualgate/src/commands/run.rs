// qualgate/src/commands/run.rs
//
// USE CASE: Validate the dataset and enforce the quality gate.

use std::path::PathBuf;

use anyhow::Context;
use miette::Diagnostic;
use qualgate_core::application::run_pipeline;
use qualgate_core::domain::LogLevel;
use qualgate_core::infrastructure::config::{SettingsOverrides, find_project_file, load_settings};
use qualgate_core::infrastructure::loader::CsvDatasetLoader;
use qualgate_core::infrastructure::logging::TracingReporter;
use qualgate_core::infrastructure::sink::JsonMetricsSink;

use crate::cli::ConfigArgs;
use crate::commands::metrics_table;

pub struct RunOptions {
    pub config: ConfigArgs,
    pub data_path: Option<PathBuf>,
    pub max_invalid_pct: Option<f64>,
    pub show_invalid_rows: Option<bool>,
    pub verbose: bool,
}

pub fn execute(options: RunOptions) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Resolve the configuration (Infra)
    let overrides = SettingsOverrides {
        data_path: options.data_path,
        max_invalid_pct: options.max_invalid_pct,
        show_invalid_rows: options.show_invalid_rows,
        ..options.config.overrides()
    };
    let settings = load_settings(&options.config.project_dir, &overrides).with_context(|| {
        format!(
            "Failed to load configuration from {:?}",
            options.config.project_dir
        )
    })?;

    // B. Logging: level comes from the environment profile
    let level = if options.verbose {
        LogLevel::Debug
    } else {
        settings.profile.log_level
    };
    crate::init_tracing(level);

    // Settings are resolved before the subscriber exists, so their own traces are lost.
    tracing::info!(
        environment = %settings.environment,
        config_file = ?find_project_file(&options.config.project_dir),
        data_path = %settings.data_path.display(),
        metrics_dir = %settings.metrics_dir.display(),
        max_invalid_pct = settings.profile.max_invalid_pct,
        show_invalid_rows = settings.profile.show_invalid_rows,
        "Resolved configuration"
    );

    println!(
        "⚙️  Environment: {} (threshold {:?}%)",
        settings.environment, settings.profile.max_invalid_pct
    );
    println!("   Dataset: {}", settings.data_path.display());

    // C. Run the Pipeline (Application Layer), adapters injected here
    let loader = CsvDatasetLoader::new();
    let sink = JsonMetricsSink::for_environment(&settings.metrics_dir, settings.environment);
    let reporter = TracingReporter;

    match run_pipeline(&loader, &sink, &reporter, &settings) {
        Ok(outcome) => {
            println!("{}", metrics_table(&outcome.metrics, &outcome.gate));
            println!("📄 Metrics written to {}", sink.path().display());
            if outcome.has_warning() {
                println!(
                    "\n⚠️  WARNING: {} (non-fatal in {})",
                    outcome.gate.failure_message(),
                    settings.environment
                );
            } else {
                println!(
                    "\n✨ SUCCESS! Quality gate passed in {:.2?}",
                    start.elapsed()
                );
            }
        }
        Err(e) => {
            eprintln!("\n💥 PIPELINE FAILED: {}", e);
            if let Some(help) = e.help() {
                eprintln!("   👉 {}", help);
            }
            if e.is_quality_gate_failure() {
                eprintln!("   📄 Metrics written to {}", sink.path().display());
            }
            // Exit with error code for CI/CD
            std::process::exit(1);
        }
    }

    Ok(())
}
