//! Society configuration.
//!
//! Holds the society-level rules the engine needs as explicit inputs:
//! handicap allowance, tee interval, first tee time and the default
//! standings filter. Nothing reads this implicitly; callers load it and
//! pass the derived values in.
//!
//! Configuration is stored at `~/.config/fairway/config.json`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::handicap::Allowance;
use crate::standings::SeasonQuery;
use crate::tee_sheet::{TeeSheetOptions, DEFAULT_INTERVAL_MINUTES};

/// Application name used for config directory paths
const APP_NAME: &str = "fairway";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub society_name: Option<String>,
    pub allowance: Allowance,
    pub tee_interval_minutes: i64,
    pub first_tee_time: String,
    pub oom_only: bool,
    /// Season shown by default; the current year when unset
    pub season: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            society_name: None,
            allowance: Allowance::default(),
            tee_interval_minutes: DEFAULT_INTERVAL_MINUTES,
            first_tee_time: "08:00".to_string(),
            oom_only: false,
            season: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, returning defaults if the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn season_query(&self, current_year: i32) -> SeasonQuery {
        SeasonQuery {
            season: self.season.unwrap_or(current_year),
            oom_only: self.oom_only,
        }
    }

    pub fn tee_sheet_options(&self, pre_grouped: bool) -> TeeSheetOptions {
        TeeSheetOptions {
            start_time: Some(self.first_tee_time.clone()),
            interval_minutes: Some(self.tee_interval_minutes),
            pre_grouped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.allowance, Allowance::STANDARD);
        assert_eq!(config.tee_interval_minutes, 10);
        assert_eq!(config.first_tee_time, "08:00");
        assert!(!config.oom_only);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"allowance": 0.9, "oom_only": true}"#)
            .expect("config should parse");
        assert_eq!(config.allowance.fraction(), 0.9);
        assert!(config.oom_only);
        assert_eq!(config.tee_interval_minutes, 10);
    }

    #[test]
    fn test_invalid_allowance_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{"allowance": 2.0}"#).is_err());
    }

    #[test]
    fn test_season_query() {
        let mut config = Config::default();
        assert_eq!(config.season_query(2025), SeasonQuery::new(2025));
        config.season = Some(2024);
        config.oom_only = true;
        assert_eq!(config.season_query(2025), SeasonQuery::new(2024).oom_only());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("fairway-config-test-missing").join(CONFIG_FILE);
        let config = Config::load_from(&path).expect("missing file is not an error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("fairway-config-test-{}", std::process::id()));
        let path = dir.join(CONFIG_FILE);
        let config = Config {
            society_name: Some("Tuesday Swingers".to_string()),
            tee_interval_minutes: 9,
            ..Config::default()
        };
        config.save_to(&path).expect("save config");
        let loaded = Config::load_from(&path).expect("load config");
        assert_eq!(loaded, config);
        let _ = std::fs::remove_dir_all(dir);
    }
}
