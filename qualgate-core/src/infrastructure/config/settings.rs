// qualgate-core/src/infrastructure/config/settings.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::domain::configuration::{
    CONFIG_VERSION, ProjectFile, Settings, default_data_path, default_metrics_dir,
};
use crate::domain::environment::Environment;
use crate::infrastructure::error::InfrastructureError;

pub const PROJECT_FILE_CANDIDATES: [&str; 2] = ["qualgate.yaml", "qualgate.yml"];

pub const ENV_ENVIRONMENT: &str = "QUALGATE_ENV";
pub const ENV_DATA_PATH: &str = "QUALGATE_DATA_PATH";
pub const ENV_METRICS_DIR: &str = "QUALGATE_METRICS_DIR";
pub const ENV_MAX_INVALID_PCT: &str = "QUALGATE_MAX_INVALID_PCT";

/// Values coming from the command line. They win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub environment: Option<Environment>,
    pub data_path: Option<PathBuf>,
    pub metrics_dir: Option<PathBuf>,
    pub max_invalid_pct: Option<f64>,
    pub show_invalid_rows: Option<bool>,
}

/// Resolves the run configuration from the process environment.
///
/// Layering, lowest first: built-in profile, `qualgate.yaml`,
/// `QUALGATE_*` variables, command-line overrides.
pub fn load_settings(
    project_dir: &Path,
    overrides: &SettingsOverrides,
) -> Result<Settings, InfrastructureError> {
    load_settings_with(project_dir, overrides, |key| std::env::var(key).ok())
}

/// Same as [`load_settings`] with an explicit variable lookup.
#[instrument(skip(overrides, env_lookup))]
pub fn load_settings_with<F>(
    project_dir: &Path,
    overrides: &SettingsOverrides,
    env_lookup: F,
) -> Result<Settings, InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    // 1. Project file (optional)
    let file = match find_project_file(project_dir) {
        Some(path) => {
            info!(path = ?path, "Loading project configuration");
            load_project_file(&path)?
        }
        None => {
            debug!("No project file, using built-in profiles");
            ProjectFile::default()
        }
    };

    // 2. Environment selection
    let env_environment = env_lookup(ENV_ENVIRONMENT)
        .map(|raw| raw.parse::<Environment>())
        .transpose()
        .map_err(InfrastructureError::ConfigError)?;

    let environment = overrides
        .environment
        .or(env_environment)
        .or(file.environment)
        .unwrap_or_default();

    // 3. Profile: built-in, then file, then variables, then CLI
    let mut profile = environment.default_profile();
    if let Some(file_override) = file.environments.get(environment) {
        file_override.apply_to(&mut profile);
    }

    if let Some(raw) = env_lookup(ENV_MAX_INVALID_PCT) {
        profile.max_invalid_pct = raw.trim().parse::<f64>().map_err(|e| {
            InfrastructureError::ConfigError(format!(
                "{} must be a number, got '{}': {}",
                ENV_MAX_INVALID_PCT, raw, e
            ))
        })?;
        info!(value = profile.max_invalid_pct, "Overriding max_invalid_pct via ENV");
    }
    if let Some(pct) = overrides.max_invalid_pct {
        profile.max_invalid_pct = pct;
    }
    if let Some(show) = overrides.show_invalid_rows {
        profile.show_invalid_rows = show;
    }
    check_threshold(profile.max_invalid_pct)?;

    // 4. Paths: CLI, then variables, then file, then defaults. Relative paths hang off project_dir.
    let data_path = overrides
        .data_path
        .clone()
        .or_else(|| env_lookup(ENV_DATA_PATH).map(PathBuf::from))
        .or(file.data_path)
        .unwrap_or_else(default_data_path);
    let metrics_dir = overrides
        .metrics_dir
        .clone()
        .or_else(|| env_lookup(ENV_METRICS_DIR).map(PathBuf::from))
        .or(file.metrics_dir)
        .unwrap_or_else(default_metrics_dir);

    Ok(Settings {
        version: file.version,
        environment,
        data_path: resolve(project_dir, data_path),
        metrics_dir: resolve(project_dir, metrics_dir),
        profile,
    })
}

pub fn find_project_file(project_dir: &Path) -> Option<PathBuf> {
    PROJECT_FILE_CANDIDATES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Parses and validates a project file. Unknown keys and unknown versions are errors.
pub fn load_project_file(path: &Path) -> Result<ProjectFile, InfrastructureError> {
    let content = fs::read_to_string(path)?;
    // An empty file is a valid "all defaults" configuration
    let file: ProjectFile = if content.trim().is_empty() {
        ProjectFile::default()
    } else {
        serde_yaml::from_str(&content)?
    };

    if file.version != CONFIG_VERSION {
        return Err(InfrastructureError::ConfigError(format!(
            "Unsupported configuration version {} in {:?} (expected {})",
            file.version, path, CONFIG_VERSION
        )));
    }
    file.validate()?;
    Ok(file)
}

fn check_threshold(pct: f64) -> Result<(), InfrastructureError> {
    if pct.is_finite() && (0.0..=100.0).contains(&pct) {
        Ok(())
    } else {
        Err(InfrastructureError::ConfigError(format!(
            "max_invalid_pct must be between 0 and 100, got {}",
            pct
        )))
    }
}

fn resolve(project_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        project_dir.join(path)
    }
}
