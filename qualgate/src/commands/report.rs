// qualgate/src/commands/report.rs
//
// USE CASE: Display the last metrics artifact.

use qualgate_core::application::read_report;
use qualgate_core::infrastructure::config::load_settings;

use crate::cli::ConfigArgs;
use crate::commands::metrics_table;

pub fn execute(config: ConfigArgs) -> anyhow::Result<()> {
    let settings = load_settings(&config.project_dir, &config.overrides())?;

    match read_report(&settings) {
        Ok(report) => {
            println!("📊 {}", report.path.display());
            println!("{}", metrics_table(&report.metrics, &report.gate));
        }
        Err(e) => {
            eprintln!("❌ Report failed: {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}
