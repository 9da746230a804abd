// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for dq-core operations.

use thiserror::Error;

/// All possible errors that can occur in dq-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("dashboard can be filtered by only one segment\n  hint: found {found} segment clauses across the applied filters")]
    MultipleSegments { found: usize },

    #[error("invalid period: '{0}'\n  hint: valid periods are: realtime, day, 7d, 28d, 30d, 90d, month, 6mo, 12mo, year, all, custom")]
    InvalidPeriod(String),

    #[error("invalid comparison mode: '{0}'\n  hint: valid modes are: off, previous_period, year_over_year, custom")]
    InvalidComparison(String),

    #[error("invalid filter operation: '{0}'\n  hint: valid operations are: is, is_not, contains, contains_not, has_done, has_not_done")]
    InvalidOperation(String),

    #[error("invalid date: '{0}'\n  hint: dates use the YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("invalid shift direction: '{0}'\n  hint: valid directions are: prev, next")]
    InvalidDirection(String),

    #[error("malformed fragment '{fragment}': {reason}")]
    MalformedFragment { fragment: String, reason: String },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for dq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
