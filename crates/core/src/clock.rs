// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wall clock access and site-local dates.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for getting the current wall clock time.
///
/// This allows injecting a fixed clock for testing.
pub trait ClockSource: Send + Sync {
    /// Returns the current time in milliseconds since Unix epoch.
    fn now_ms(&self) -> u64;
}

/// System clock implementation using `std::time::SystemTime`.
#[derive(Debug, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0)
    }
}

impl<C: ClockSource> ClockSource for &C {
    fn now_ms(&self) -> u64 {
        (*self).now_ms()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now_ms: u64,
}

impl FixedClock {
    pub fn new(now_ms: u64) -> Self {
        FixedClock { now_ms }
    }

    /// A clock frozen at noon UTC on the given date.
    pub fn at_date(date: NaiveDate) -> Self {
        let ms = date
            .and_hms_opt(12, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis().max(0) as u64)
            .unwrap_or(0);
        FixedClock { now_ms: ms }
    }
}

impl ClockSource for FixedClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

/// Returns today's date at a fixed UTC offset (in seconds).
///
/// Offsets outside ±24h fall back to UTC.
pub fn today_at_offset(clock: &dyn ClockSource, offset_seconds: i32) -> NaiveDate {
    let offset = FixedOffset::east_opt(offset_seconds).unwrap_or_else(|| Utc.fix());
    let now = DateTime::<Utc>::from_timestamp_millis(clock.now_ms() as i64).unwrap_or_default();
    now.with_timezone(&offset).date_naive()
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
