// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::{today_at_offset, ClockSource};

/// The site a dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub domain: String,
    /// UTC offset of the site's timezone, in seconds.
    #[serde(default)]
    pub offset: i32,
    /// First day with recorded stats.
    pub stats_begin: NaiveDate,
}

impl Site {
    pub fn new(domain: impl Into<String>, offset: i32, stats_begin: NaiveDate) -> Self {
        Site { domain: domain.into(), offset, stats_begin }
    }

    /// Today in the site's timezone.
    pub fn today(&self, clock: &dyn ClockSource) -> NaiveDate {
        today_at_offset(clock, self.offset)
    }
}

#[cfg(test)]
#[path = "site_tests.rs"]
mod tests;
