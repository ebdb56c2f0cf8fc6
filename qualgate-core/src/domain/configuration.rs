// src/domain/configuration.rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::domain::environment::{Environment, EnvironmentProfile, LogLevel};
use crate::domain::quality::GateConfig;

/// Version of the configuration layout understood by this build.
pub const CONFIG_VERSION: u32 = 1;

/// Resolved, immutable configuration of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub version: u32,
    pub environment: Environment,
    pub data_path: PathBuf,
    pub metrics_dir: PathBuf,
    pub profile: EnvironmentProfile,
}

impl Settings {
    /// Built-in settings for an environment, paths relative to `project_dir`.
    pub fn defaults(project_dir: &Path, environment: Environment) -> Self {
        Self {
            version: CONFIG_VERSION,
            environment,
            data_path: project_dir.join(default_data_path()),
            metrics_dir: project_dir.join(default_metrics_dir()),
            profile: environment.default_profile(),
        }
    }

    pub fn gate_config(&self) -> GateConfig {
        GateConfig::new(&self.profile)
    }
}

pub fn default_data_path() -> PathBuf {
    PathBuf::from("data/customer.csv")
}

pub fn default_metrics_dir() -> PathBuf {
    PathBuf::from("metrics")
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

// --- PROJECT FILE (qualgate.yaml) ---

#[derive(Debug, Deserialize, Serialize, Validate, Clone)]
#[serde(deny_unknown_fields)]
pub struct ProjectFile {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub environment: Option<Environment>,

    #[serde(default)]
    pub data_path: Option<PathBuf>,

    #[serde(default)]
    pub metrics_dir: Option<PathBuf>,

    #[validate(nested)]
    #[serde(default)]
    pub environments: EnvironmentOverrides,
}

// Manual implementation of Default: a missing file means the current version
impl Default for ProjectFile {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            environment: None,
            data_path: None,
            metrics_dir: None,
            environments: EnvironmentOverrides::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Validate, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct EnvironmentOverrides {
    #[validate(nested)]
    #[serde(default, alias = "development")]
    pub dev: Option<ProfileOverride>,

    #[validate(nested)]
    #[serde(default, alias = "production")]
    pub prod: Option<ProfileOverride>,
}

impl EnvironmentOverrides {
    pub fn get(&self, environment: Environment) -> Option<&ProfileOverride> {
        match environment {
            Environment::Development => self.dev.as_ref(),
            Environment::Production => self.prod.as_ref(),
        }
    }
}

/// Partial profile. Unset fields keep the environment's built-in value.
/// The breach severity is tied to the environment and cannot be overridden.
#[derive(Debug, Deserialize, Serialize, Validate, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProfileOverride {
    #[serde(default)]
    pub log_level: Option<LogLevel>,

    #[serde(default)]
    pub show_invalid_rows: Option<bool>,

    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default)]
    pub max_invalid_pct: Option<f64>,
}

impl ProfileOverride {
    pub fn apply_to(&self, profile: &mut EnvironmentProfile) {
        if let Some(level) = self.log_level {
            profile.log_level = level;
        }
        if let Some(show) = self.show_invalid_rows {
            profile.show_invalid_rows = show;
        }
        if let Some(pct) = self.max_invalid_pct {
            profile.max_invalid_pct = pct;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::environment::BreachSeverity;

    #[test]
    fn test_parse_full_project_file() -> anyhow::Result<()> {
        let yaml = r#"
version: 1
environment: prod
data_path: input/customers.csv
environments:
  production:
    max_invalid_pct: 10.0
    show_invalid_rows: true
  dev:
    log_level: warning
"#;
        let file: ProjectFile = serde_yaml::from_str(yaml)?;
        file.validate()?;

        assert_eq!(file.environment, Some(Environment::Production));
        assert_eq!(file.data_path, Some(PathBuf::from("input/customers.csv")));
        assert_eq!(file.metrics_dir, None);
        let prod = file.environments.get(Environment::Production);
        assert_eq!(prod.and_then(|p| p.max_invalid_pct), Some(10.0));
        let dev = file.environments.get(Environment::Development);
        assert_eq!(dev.and_then(|p| p.log_level), Some(LogLevel::Warning));
        Ok(())
    }

    #[test]
    fn test_default_project_file_is_current_version() {
        assert_eq!(ProjectFile::default().version, CONFIG_VERSION);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let yaml = "version: 1\nthreshold: 12\n";
        assert!(serde_yaml::from_str::<ProjectFile>(yaml).is_err());
    }

    #[test]
    fn test_out_of_range_threshold_fails_validation() -> anyhow::Result<()> {
        let yaml = "environments:\n  prod:\n    max_invalid_pct: 140.0\n";
        let file: ProjectFile = serde_yaml::from_str(yaml)?;
        assert!(file.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_override_keeps_unset_fields() {
        let mut profile = Environment::Production.default_profile();
        ProfileOverride {
            max_invalid_pct: Some(5.0),
            ..Default::default()
        }
        .apply_to(&mut profile);

        assert_eq!(profile.max_invalid_pct, 5.0);
        assert_eq!(profile.log_level, LogLevel::Warning);
        assert_eq!(profile.breach_severity, BreachSeverity::Fatal);
    }

    #[test]
    fn test_defaults_resolve_against_project_dir() {
        let settings = Settings::defaults(Path::new("/srv/project"), Environment::Development);
        assert_eq!(settings.version, CONFIG_VERSION);
        assert_eq!(
            settings.data_path,
            PathBuf::from("/srv/project/data/customer.csv")
        );
        assert_eq!(settings.metrics_dir, PathBuf::from("/srv/project/metrics"));
        assert_eq!(settings.gate_config().max_invalid_pct, 50.0);
    }
}
