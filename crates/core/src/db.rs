// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed preference storage.
//!
//! The [`Database`] struct persists per-site dashboard preferences and
//! implements [`PreferenceStore`] on top of them.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::error::Result;
use crate::prefs::{storage_key, PreferenceStore, PREFERENCE_KEYS};

/// SQL schema for the preference database.
pub const SCHEMA: &str = r#"
-- Namespaced preference values (`<key>__<domain>`)
CREATE TABLE IF NOT EXISTS preferences (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT
);
"#;

/// Run schema creation and all migrations on a database connection.
///
/// Migrations are idempotent so older databases are upgraded in place.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    migrate_add_updated_at(conn)?;
    Ok(())
}

/// Migration: Add updated_at column to databases created before it existed.
fn migrate_add_updated_at(conn: &Connection) -> Result<()> {
    let has_column: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM pragma_table_info('preferences') WHERE name = 'updated_at'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);

    if !has_column {
        conn.execute("ALTER TABLE preferences ADD COLUMN updated_at TEXT", [])?;
    }
    Ok(())
}

/// Preference database handle.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Read a value by its fully namespaced key.
    pub fn get_preference(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM preferences WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Write a value by its fully namespaced key.
    pub fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// List the known `(key, value)` pairs stored for a site, ordered by key.
    pub fn list_preferences(&self, domain: &str) -> Result<Vec<(String, String)>> {
        let mut listed = Vec::new();
        for key in PREFERENCE_KEYS {
            if let Some(value) = self.get_preference(&storage_key(domain, key))? {
                listed.push((key.to_string(), value));
            }
        }
        Ok(listed)
    }

    /// Remove every preference stored for a site. Returns the number removed.
    pub fn clear_preferences(&self, domain: &str) -> Result<usize> {
        let mut removed = 0;
        for key in PREFERENCE_KEYS {
            removed += self
                .conn
                .execute("DELETE FROM preferences WHERE key = ?1", params![storage_key(domain, key)])?;
        }
        Ok(removed)
    }
}

impl PreferenceStore for Database {
    fn get(&self, domain: &str, key: &str) -> Option<String> {
        match self.get_preference(&storage_key(domain, key)) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("failed to read preference {key} for {domain}: {e}");
                None
            }
        }
    }

    fn set(&mut self, domain: &str, key: &str, value: &str) -> Result<()> {
        self.set_preference(&storage_key(domain, key), value)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
