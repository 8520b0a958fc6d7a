//! Global rapport configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use log::info;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REMINDER_DAYS;
use crate::error::{RapportError, RapportResult};

static DEFAULT_DATA_FILE: &str = "~/.rapport/data.toml";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_reminder_days() -> u32 {
    DEFAULT_REMINDER_DAYS
}

/// Global configuration at ~/.config/rapport/config.toml
///
/// Every key can be overridden from the environment with a `RAPPORT_`
/// prefix, e.g. `RAPPORT_DATA_FILE=/tmp/people.toml`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RapportConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Reminder window given to new events that don't specify one.
    #[serde(default = "default_reminder_days")]
    pub default_reminder_days: u32,
}

impl Default for RapportConfig {
    fn default() -> Self {
        RapportConfig {
            data_file: default_data_file(),
            default_reminder_days: DEFAULT_REMINDER_DAYS,
        }
    }
}

impl RapportConfig {
    pub fn config_path() -> RapportResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RapportError::Config("Could not determine config directory".into()))?
            .join("rapport");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file first if
    /// none exists yet.
    pub fn load() -> RapportResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from `path` (optional) layered under `RAPPORT_*` env vars.
    pub fn load_from(path: &Path) -> RapportResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("RAPPORT").try_parsing(true))
            .build()
            .map_err(|e| RapportError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RapportError::Config(e.to_string()))
    }

    /// Data file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> RapportResult<()> {
        let contents = format!(
            "\
# rapport configuration

# Where your contacts and events are stored:
# data_file = \"{}\"

# Reminder window (in days) for new events:
# default_reminder_days = {}
",
            DEFAULT_DATA_FILE, DEFAULT_REMINDER_DAYS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RapportError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RapportError::Config(format!("Could not write config file: {e}")))?;

        info!("Wrote default config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rapport").join("config.toml");

        RapportConfig::create_default_config(&path).unwrap();
        let config = RapportConfig::load_from(&path).unwrap();

        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(config.default_reminder_days, 7);
    }

    #[test]
    fn test_values_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_file = \"/srv/rapport/people.toml\"\ndefault_reminder_days = 14\n",
        )
        .unwrap();

        let config = RapportConfig::load_from(&path).unwrap();

        assert_eq!(config.data_path(), PathBuf::from("/srv/rapport/people.toml"));
        assert_eq!(config.default_reminder_days, 14);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let config = RapportConfig::load_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.default_reminder_days, 7);
    }
}
