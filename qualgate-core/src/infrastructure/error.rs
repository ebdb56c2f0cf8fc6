// qualgate-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File not found: {}", .0.display())]
    #[diagnostic(
        code(qualgate::infra::not_found),
        help("Check --data-path, QUALGATE_DATA_PATH or data_path in qualgate.yaml.")
    )]
    NotFound(PathBuf),

    #[error("File System Error: {0}")]
    #[diagnostic(
        code(qualgate::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- DATA FORMATS ---
    #[error("CSV Parsing Error: {0}")]
    #[diagnostic(
        code(qualgate::infra::csv),
        help("Every row must have as many fields as the header and be valid UTF-8.")
    )]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    #[diagnostic(code(qualgate::infra::json))]
    Json(#[from] serde_json::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(qualgate::infra::yaml),
        help("Check your YAML syntax (indentation, types, unknown keys).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(qualgate::infra::config))]
    ConfigError(String),

    #[error("Invalid configuration values: {0}")]
    #[diagnostic(code(qualgate::infra::config_validation))]
    Validation(#[from] validator::ValidationErrors),

    #[error("No metrics artifact at '{}'", .0.display())]
    #[diagnostic(
        code(qualgate::infra::metrics_missing),
        help("Have you run 'qualgate run' for this environment?")
    )]
    MetricsNotFound(PathBuf),
}
