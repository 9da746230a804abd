// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use dq_core::period::parse_match_day_of_week;
use dq_core::{ComparisonMode, Period};

use crate::cli::ConfigCommand;
use crate::config::{state_dir, Config};
use crate::error::{Error, Result};

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand) -> Result<()> {
    let state_dir = state_dir();
    let mut config = Config::load(&state_dir)?;
    match cmd {
        ConfigCommand::Show => print!("{}", show(&config)?),
        ConfigCommand::Set { key, value } => {
            set(&mut config, &key, &value)?;
            config.save(&state_dir)?;
            println!("Set {key} = {value}");
        }
    }
    Ok(())
}

/// Renders the configuration as TOML, defaults included.
pub(crate) fn show(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
}

/// Applies one `key = value` change.
pub(crate) fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "default_period" => config.default_period = value.parse::<Period>()?,
        // `off` clears the default comparison.
        "default_comparison" => config.default_comparison = value.parse::<ComparisonMode>()?.active(),
        "default_match_day_of_week" => {
            config.default_match_day_of_week = parse_match_day_of_week(value).ok_or_else(|| {
                Error::Config(format!("default_match_day_of_week must be true or false, got '{value}'"))
            })?
        }
        "database" => config.database = Some(PathBuf::from(value)),
        _ => {
            return Err(Error::Config(format!(
                "unknown config key: '{key}'\n  hint: valid keys are: default_period, default_comparison, default_match_day_of_week, database"
            )))
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
