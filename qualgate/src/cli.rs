// qualgate/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use qualgate_core::domain::Environment;
use qualgate_core::infrastructure::config::SettingsOverrides;

#[derive(Parser)]
#[command(name = "qualgate")]
#[command(about = "Data quality gate for tabular customer datasets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that resolves a configuration.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Project directory (holds qualgate.yaml, relative paths start here)
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Environment profile: dev | prod
    #[arg(long, short)]
    pub env: Option<Environment>,

    /// Directory receiving the metrics artifact
    #[arg(long)]
    pub metrics_dir: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            environment: self.env,
            metrics_dir: self.metrics_dir.clone(),
            ..Default::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚦 Validates the dataset, writes quality metrics and enforces the gate
    Run {
        #[command(flatten)]
        config: ConfigArgs,

        /// CSV file to validate (default: data/customer.csv)
        #[arg(long)]
        data_path: Option<PathBuf>,

        /// Maximum share of invalid rows, in percent
        #[arg(long)]
        max_invalid_pct: Option<f64>,

        /// Log every invalid row with its reasons
        #[arg(long, conflicts_with = "hide_invalid_rows")]
        show_invalid_rows: bool,

        /// Never log invalid rows
        #[arg(long)]
        hide_invalid_rows: bool,

        /// Debug logging
        #[arg(long, short)]
        verbose: bool,
    },

    /// 📋 Shows the resolved environment profiles
    Profiles {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 📊 Prints the last metrics artifact of an environment
    Report {
        #[command(flatten)]
        config: ConfigArgs,
    },
}
