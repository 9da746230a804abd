// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing without filesystem setup.
//!
//! This module provides a `TestContext` that wraps an in-memory preference
//! database and a default config, enabling commands to be tested without
//! touching the user's state directory.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::commands::testing::TestContext;
//!
//! #[test]
//! fn test_some_command() {
//!     let mut ctx = TestContext::new();
//!     ctx.set_pref("example.com", "period", "year");
//!
//!     // Test command logic using ctx.db and ctx.config
//! }
//! ```

use crate::config::Config;
use dq_core::prefs::PreferenceStore;
use dq_core::segment::{Segment, SegmentData, SegmentType};
use dq_core::{Database, Filter};

/// Test context providing in-memory database and default config for testing.
pub struct TestContext {
    pub db: Database,
    pub config: Config,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Create a new test context with in-memory database and default config.
    pub fn new() -> Self {
        TestContext {
            db: Database::open_in_memory().expect("Failed to create in-memory database"),
            config: Config::default(),
        }
    }

    /// Store a preference. Returns self for chaining.
    pub fn set_pref(&mut self, domain: &str, key: &str, value: &str) -> &mut Self {
        self.db.set(domain, key, value).expect("Failed to store preference");
        self
    }

    /// Read a preference.
    pub fn pref(&self, domain: &str, key: &str) -> Option<String> {
        self.db.get(domain, key)
    }
}

/// A site segment with the given filters.
pub fn segment(id: i64, name: &str, filters: Vec<Filter>) -> Segment {
    Segment::new(id, name, SegmentType::Site, SegmentData { filters, ..SegmentData::default() })
}
