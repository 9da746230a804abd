// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is stored in `config.toml` inside the state directory and
//! includes:
//! - `default_period`: period used when neither the URL nor storage has one
//! - `default_comparison`: comparison used in the same situation
//! - `default_match_day_of_week`: day-of-week matching fallback
//! - `database`: optional path for the preferences database

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use dq_core::time_settings::TimeDefaults;
use dq_core::{ComparisonMode, Period};

use crate::env;
use crate::error::{Error, Result};

const STATE_DIR_NAME: &str = "dashq";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "preferences.db";

/// Configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_period")]
    pub default_period: Period,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_comparison: Option<ComparisonMode>,
    #[serde(default = "default_match_day_of_week")]
    pub default_match_day_of_week: bool,
    /// Optional path for the database (relative to the state directory or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

fn default_period() -> Period {
    TimeDefaults::default().period
}

fn default_match_day_of_week() -> bool {
    TimeDefaults::default().match_day_of_week
}

impl Default for Config {
    fn default() -> Self {
        let defaults = TimeDefaults::default();
        Config {
            default_period: defaults.period,
            default_comparison: defaults.comparison,
            default_match_day_of_week: defaults.match_day_of_week,
            database: None,
        }
    }
}

impl Config {
    /// Loads configuration from the state directory.
    ///
    /// A missing file yields the defaults.
    pub fn load(state_dir: &Path) -> Result<Self> {
        let config_path = state_dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the state directory.
    pub fn save(&self, state_dir: &Path) -> Result<()> {
        fs::create_dir_all(state_dir)?;
        let config_path = state_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Fallback time settings.
    pub fn time_defaults(&self) -> TimeDefaults {
        TimeDefaults {
            period: self.default_period,
            comparison: self.default_comparison,
            match_day_of_week: self.default_match_day_of_week,
        }
    }
}

/// Get the database path from config
pub fn get_db_path(state_dir: &Path, config: &Config) -> PathBuf {
    match &config.database {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => state_dir.join(path),
        None => state_dir.join(DB_FILE_NAME),
    }
}

/// Picks the state directory: an explicit override, then
/// `$XDG_STATE_HOME/dashq`, then `~/.local/state/dashq`.
pub fn resolve_state_dir(
    explicit: Option<PathBuf>,
    xdg_state_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Some(dir) = xdg_state_home {
        return dir.join(STATE_DIR_NAME);
    }
    home.map(|h| h.join(".local/state").join(STATE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".local/state").join(STATE_DIR_NAME))
}

/// The state directory for this process, from the environment.
pub fn state_dir() -> PathBuf {
    resolve_state_dir(env::state_dir(), env::xdg_state_home(), dirs::home_dir())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
