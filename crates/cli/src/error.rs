// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the dqrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{version} dashboard url cannot be decoded directly\n  hint: it rewrites to: {target}")]
    LegacyUrl { version: String, target: String },

    #[error("url needs rewriting: {target}")]
    RewriteNeeded { target: String },

    #[error("dashboard can be filtered by only one segment\n  hint: found {found} segment clauses across the applied filters")]
    MultipleSegments { found: usize },

    #[error("unknown preference: '{0}'\n  hint: valid preferences are: period, comparison_mode, comparison_match_day_of_week")]
    UnknownPreference(String),

    #[error("invalid value for {key}: '{value}'")]
    InvalidPreferenceValue { key: String, value: String },

    #[error("failed to read {path}: {reason}")]
    ReadInput { path: String, reason: String },

    #[error("{0}")]
    Core(dq_core::Error),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for dqrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<dq_core::Error> for Error {
    fn from(e: dq_core::Error) -> Self {
        match e {
            dq_core::Error::MultipleSegments { found } => Error::MultipleSegments { found },
            dq_core::Error::Database(e) => Error::Database(e),
            dq_core::Error::Io(e) => Error::Io(e),
            dq_core::Error::Json(e) => Error::Json(e),
            other => Error::Core(other),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
