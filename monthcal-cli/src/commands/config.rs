use std::path::Path;

use anyhow::{Context, Result};
use monthcal_core::WeekStart;
use monthcal_core::config::MonthcalConfig;
use monthcal_core::store::STORAGE_KEY;
use owo_colors::OwoColorize;

/// Show where monthcal keeps things, optionally changing the week layout first.
pub fn run(config: &MonthcalConfig, week_start: Option<WeekStart>) -> Result<()> {
    let config_path = MonthcalConfig::config_path()?;

    let config = match week_start {
        Some(week_start) => set_week_start(&config_path, config, week_start)?,
        None => config.clone(),
    };

    println!("{}", describe(&config_path, &config));

    Ok(())
}

fn set_week_start(path: &Path, config: &MonthcalConfig, week_start: WeekStart) -> Result<MonthcalConfig> {
    let updated = MonthcalConfig {
        week_start,
        ..config.clone()
    };
    updated
        .save(path)
        .with_context(|| format!("Could not update {}", path.display()))?;

    println!("{}", format!("  Week now starts on {:?}", week_start).green());
    Ok(updated)
}

fn describe(config_path: &Path, config: &MonthcalConfig) -> String {
    let events_path = config.storage().path_for(STORAGE_KEY);

    [
        "Paths".bold().to_string(),
        format!("  Config:  {}", config_path.display()),
        format!("  Events:  {}", events_path.display()),
        "Settings".bold().to_string(),
        format!("  Week starts on:  {:?}", config.week_start),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn set_week_start_persists_to_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        MonthcalConfig::create_default_config(&path).unwrap();
        let config = MonthcalConfig::load_from(&path).unwrap();

        let updated = set_week_start(&path, &config, WeekStart::Monday).unwrap();
        assert_eq!(updated.week_start, WeekStart::Monday);
        assert_eq!(updated.data_dir, config.data_dir);

        let reloaded = MonthcalConfig::load_from(&path).unwrap();
        assert_eq!(reloaded.week_start, WeekStart::Monday);
    }

    #[test]
    fn describe_lists_paths_and_settings() {
        let config = MonthcalConfig {
            data_dir: PathBuf::from("/srv/cal"),
            week_start: WeekStart::Monday,
        };
        let out = describe(Path::new("/etc/monthcal.toml"), &config);

        assert!(out.contains("/etc/monthcal.toml"));
        assert!(out.contains("/srv/cal/calendar_events.json"));
        assert!(out.contains("Monday"));
    }
}
