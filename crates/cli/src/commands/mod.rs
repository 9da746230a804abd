// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod decode;
pub mod encode;
pub mod migrate;
pub mod prefs;
pub mod resolve;
pub mod shift;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::Path;

use dq_core::{get_redirect_target, Database, Location, SearchRecord};

use crate::config::{get_db_path, state_dir, Config};
use crate::error::{Error, Result};

/// Helper to open the preferences database from the current environment.
pub fn open_db() -> Result<(Database, Config)> {
    let state_dir = state_dir();
    let config = Config::load(&state_dir)?;
    let db_path = get_db_path(&state_dir, &config);
    tracing::debug!("opening preferences at {}", db_path.display());
    let db = Database::open(&db_path)?;
    Ok((db, config))
}

/// Parses a URL, following the legacy rewrite when one applies.
pub fn migrated_location(url: &str) -> Location {
    let location = Location::parse(url);
    match get_redirect_target(&location) {
        Some(target) => Location::parse(&target),
        None => location,
    }
}

/// Decodes the query string of an already migrated location.
pub fn decode_location(location: &Location) -> SearchRecord {
    dq_core::parse_search(&location.search)
}

/// Reads a file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| Error::ReadInput {
            path: path.display().to_string(),
            reason: e.to_string(),
        }),
        None => std::io::read_to_string(std::io::stdin()).map_err(|e| Error::ReadInput {
            path: "stdin".to_string(),
            reason: e.to_string(),
        }),
    }
}
