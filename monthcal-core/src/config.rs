//! Global monthcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CalendarError, CalendarResult};
use crate::month::WeekStart;
use crate::storage::FileStorage;

static DEFAULT_DATA_DIR: &str = "~/.local/share/monthcal";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Configuration at ~/.config/monthcal/config.toml
///
/// Every key can also be set through a `MONTHCAL_`-prefixed environment
/// variable (e.g. `MONTHCAL_WEEK_START=monday`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MonthcalConfig {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub week_start: WeekStart,
}

impl Default for MonthcalConfig {
    fn default() -> Self {
        MonthcalConfig {
            data_dir: default_data_dir(),
            week_start: WeekStart::default(),
        }
    }
}

impl MonthcalConfig {
    pub fn config_path() -> CalendarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalendarError::Config("Could not determine config directory".into()))?
            .join("monthcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, creating a commented default file first if
    /// there is none.
    pub fn load() -> CalendarResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from `path` (optional) layered under the environment.
    pub fn load_from(path: &Path) -> CalendarResult<Self> {
        let config: MonthcalConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("MONTHCAL").try_parsing(false))
            .build()
            .map_err(|e| CalendarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalendarError::Config(e.to_string()))?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    /// The storage backend events persist to.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.data_path())
    }

    /// Save the config to `path`.
    pub fn save(&self, path: &Path) -> CalendarResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| CalendarError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalendarResult<()> {
        let contents = format!(
            "\
# monthcal configuration

# Where events are stored:
# data_dir = \"{}\"

# First column of the month grid (sunday or monday):
# week_start = \"sunday\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalendarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
