// qualgate/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use qualgate_core::domain::LogLevel;

use cli::{Cli, Commands};
use commands::run::RunOptions;

/// Installs the global subscriber once, at the binary edge.
pub(crate) fn init_tracing(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: RUN PIPELINE ---
        Commands::Run {
            config,
            data_path,
            max_invalid_pct,
            show_invalid_rows,
            hide_invalid_rows,
            verbose,
        } => {
            let show_invalid_rows = match (show_invalid_rows, hide_invalid_rows) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            commands::run::execute(RunOptions {
                config,
                data_path,
                max_invalid_pct,
                show_invalid_rows,
                verbose,
            })
        }

        // --- USE CASE: PROFILES ---
        Commands::Profiles { project_dir } => commands::profiles::execute(project_dir),

        // --- USE CASE: REPORT ---
        Commands::Report { config } => commands::report::execute(config),
    }
}
