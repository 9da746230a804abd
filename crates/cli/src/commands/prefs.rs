// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dq_core::period::is_valid_match_day_of_week;
use dq_core::prefs::{PreferenceStore, COMPARISON_MODE_KEY, MATCH_DAY_OF_WEEK_KEY, PERIOD_KEY};
use dq_core::{ComparisonMode, Database, Period};

use crate::cli::PrefsCommand;
use crate::error::{Error, Result};

use super::open_db;

/// Storable preferences and the values each accepts.
const PREFERENCES: [(&str, fn(&str) -> bool); 3] = [
    (PERIOD_KEY, is_storable_period),
    (COMPARISON_MODE_KEY, is_storable_comparison),
    (MATCH_DAY_OF_WEEK_KEY, is_valid_match_day_of_week),
];

fn is_storable_period(value: &str) -> bool {
    value.parse::<Period>().is_ok_and(|p| p.is_persistable())
}

fn is_storable_comparison(value: &str) -> bool {
    value.parse::<ComparisonMode>().is_ok_and(|m| m.is_persistable())
}

fn validator(key: &str) -> Result<fn(&str) -> bool> {
    PREFERENCES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, valid)| *valid)
        .ok_or_else(|| Error::UnknownPreference(key.to_string()))
}

pub fn run(command: PrefsCommand) -> Result<()> {
    let (mut db, _) = open_db()?;
    match command {
        PrefsCommand::Get { key, site } => {
            if let Some(value) = get(&db, &site.domain, &key)? {
                println!("{value}");
            }
        }
        PrefsCommand::Set { key, value, site } => {
            set(&mut db, &site.domain, &key, &value)?;
            println!("Set {key} = {value} for {}", site.domain);
        }
        PrefsCommand::List { site } => {
            for (key, value) in list(&db, &site.domain)? {
                println!("{key} = {value}");
            }
        }
        PrefsCommand::Clear { site } => {
            let removed = db.clear_preferences(&site.domain)?;
            println!("Cleared {removed} preference(s) for {}", site.domain);
        }
    }
    Ok(())
}

pub(crate) fn get(store: &dyn PreferenceStore, domain: &str, key: &str) -> Result<Option<String>> {
    validator(key)?;
    Ok(store.get(domain, key))
}

pub(crate) fn set(store: &mut dyn PreferenceStore, domain: &str, key: &str, value: &str) -> Result<()> {
    let valid = validator(key)?;
    if !valid(value) {
        return Err(Error::InvalidPreferenceValue { key: key.to_string(), value: value.to_string() });
    }
    store.set(domain, key, value)?;
    Ok(())
}

/// Lists the known preferences stored for a site; stale keys are never read.
pub(crate) fn list(db: &Database, domain: &str) -> Result<Vec<(String, String)>> {
    Ok(db.list_preferences(domain)?)
}

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod tests;
