// qualgate/src/commands/profiles.rs
//
// USE CASE: Show what each environment will do.

use std::path::PathBuf;

use comfy_table::{Table, presets::UTF8_FULL};
use qualgate_core::domain::Environment;
use qualgate_core::infrastructure::config::{SettingsOverrides, load_settings};

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Environment",
        "Log level",
        "Show invalid rows",
        "Max invalid %",
        "On breach",
    ]);

    for environment in Environment::ALL {
        let overrides = SettingsOverrides {
            environment: Some(environment),
            ..Default::default()
        };
        let settings = load_settings(&project_dir, &overrides)?;
        let profile = &settings.profile;
        table.add_row(vec![
            environment.to_string(),
            profile.log_level.to_string(),
            profile.show_invalid_rows.to_string(),
            format!("{:?}", profile.max_invalid_pct),
            profile.breach_severity.to_string(),
        ]);
    }

    println!("{}", table);
    Ok(())
}
