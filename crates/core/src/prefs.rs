// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-site preference storage.
//!
//! Preferences are stored under `<key>__<domain>` so several sites viewed
//! from the same profile never collide. The store is an injected trait; the
//! CLI uses the SQLite-backed [`Database`](crate::db::Database) and tests use
//! [`MemoryStore`].

use std::collections::HashMap;

use crate::error::Result;

/// Stored period key.
pub const PERIOD_KEY: &str = "period";
/// Stored comparison mode key.
pub const COMPARISON_MODE_KEY: &str = "comparison_mode";
/// Stored match-day-of-week key.
pub const MATCH_DAY_OF_WEEK_KEY: &str = "comparison_match_day_of_week";
/// Every key a site may have stored, in lexical order.
pub const PREFERENCE_KEYS: [&str; 3] = [MATCH_DAY_OF_WEEK_KEY, COMPARISON_MODE_KEY, PERIOD_KEY];

/// Builds the namespaced storage key for a site.
pub fn storage_key(domain: &str, key: &str) -> String {
    format!("{key}__{domain}")
}

/// A key/value store scoped by site domain.
pub trait PreferenceStore {
    /// Reads a preference. Read failures are treated as absent values.
    fn get(&self, domain: &str, key: &str) -> Option<String>;

    /// Writes a preference.
    fn set(&mut self, domain: &str, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, domain: &str, key: &str) -> Option<String> {
        (**self).get(domain, key)
    }

    fn set(&mut self, domain: &str, key: &str, value: &str) -> Result<()> {
        (**self).set(domain, key, value)
    }
}

/// In-memory preference store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value stored under a fully namespaced key.
    pub fn raw(&self, storage_key: &str) -> Option<&str> {
        self.values.get(storage_key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, domain: &str, key: &str) -> Option<String> {
        self.values.get(&storage_key(domain, key)).cloned()
    }

    fn set(&mut self, domain: &str, key: &str, value: &str) -> Result<()> {
        self.values.insert(storage_key(domain, key), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod tests;
