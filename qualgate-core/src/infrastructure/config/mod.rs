pub mod settings;

pub use crate::domain::configuration::{ProjectFile, Settings};
pub use settings::{
    SettingsOverrides, find_project_file, load_project_file, load_settings, load_settings_with,
};
