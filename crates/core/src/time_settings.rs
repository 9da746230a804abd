// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolves the effective period and comparison from URL, stored and
//! default values, and persists URL choices for later visits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::period::{parse_match_day_of_week, ComparisonMode, Period};
use crate::prefs::{PreferenceStore, COMPARISON_MODE_KEY, MATCH_DAY_OF_WEEK_KEY, PERIOD_KEY};
use crate::search::SearchRecord;

/// Raw, unvalidated time values from one source.
///
/// The range flags record whether the source also supplied the dates a
/// `custom` period or comparison needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeValues {
    pub period: Option<String>,
    pub comparison: Option<String>,
    pub match_day_of_week: Option<String>,
    pub has_date_range: bool,
    pub has_comparison_range: bool,
}

fn has_date(record: &SearchRecord, key: &str) -> bool {
    record.get_text(key).is_some_and(|v| parse_date(&v).is_some())
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

impl TimeValues {
    /// Extracts the time values carried by a decoded URL.
    pub fn from_search(record: &SearchRecord) -> Self {
        TimeValues {
            period: record.get_text("period"),
            comparison: record.get_text("comparison"),
            match_day_of_week: record.get_text("match_day_of_week"),
            has_date_range: has_date(record, "from") && has_date(record, "to"),
            has_comparison_range: has_date(record, "compare_from") && has_date(record, "compare_to"),
        }
    }

    /// Returns the period if it is valid for this source.
    pub fn valid_period(&self) -> Option<Period> {
        let value = self.period.as_deref()?;
        match value.parse::<Period>() {
            Ok(Period::Custom) if !self.has_date_range => {
                tracing::debug!("custom period without a date range");
                None
            }
            Ok(period) => Some(period),
            Err(e) => {
                tracing::debug!("{e}");
                None
            }
        }
    }

    /// Returns the comparison mode if it is valid for this source, `off` included.
    pub fn valid_comparison(&self) -> Option<ComparisonMode> {
        let value = self.comparison.as_deref()?;
        match value.parse::<ComparisonMode>() {
            Ok(ComparisonMode::Custom) if !self.has_comparison_range => {
                tracing::debug!("custom comparison without a comparison range");
                None
            }
            Ok(mode) => Some(mode),
            Err(e) => {
                tracing::debug!("{e}");
                None
            }
        }
    }

    pub fn valid_match_day_of_week(&self) -> Option<bool> {
        self.match_day_of_week.as_deref().and_then(parse_match_day_of_week)
    }
}

/// Fallbacks used when neither the URL nor storage supplies a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDefaults {
    pub period: Period,
    pub comparison: Option<ComparisonMode>,
    pub match_day_of_week: bool,
}

impl Default for TimeDefaults {
    fn default() -> Self {
        TimeDefaults {
            period: Period::Last28Days,
            comparison: None,
            match_day_of_week: true,
        }
    }
}

/// The resolved time settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSettings {
    pub period: Period,
    pub comparison: Option<ComparisonMode>,
    pub match_day_of_week: bool,
}

/// Inputs to [`get_dashboard_time_settings`].
#[derive(Debug, Clone, Copy)]
pub struct TimeSettingsInput<'a> {
    pub search_values: &'a TimeValues,
    pub stored_values: &'a TimeValues,
    pub default_values: &'a TimeDefaults,
    pub segment_is_expanded: bool,
}

/// Resolves period, comparison and day-of-week matching.
///
/// Each value comes from the URL if valid, else storage if valid, else the
/// default. Comparisons are off for `realtime` and `all` and while a segment
/// is being edited.
pub fn get_dashboard_time_settings(input: TimeSettingsInput<'_>) -> TimeSettings {
    let TimeSettingsInput { search_values, stored_values, default_values, segment_is_expanded } =
        input;

    let period = search_values
        .valid_period()
        .or_else(|| stored_values.valid_period())
        .unwrap_or(default_values.period);

    let comparison = if period.disables_comparison() || segment_is_expanded {
        None
    } else {
        match search_values.valid_comparison().or_else(|| stored_values.valid_comparison()) {
            Some(mode) => mode.active(),
            None => default_values.comparison,
        }
    };

    let match_day_of_week = search_values
        .valid_match_day_of_week()
        .or_else(|| stored_values.valid_match_day_of_week())
        .unwrap_or(default_values.match_day_of_week);

    TimeSettings { period, comparison, match_day_of_week }
}

/// Reads the stored time values for a site.
pub fn read_stored_time_values(store: &dyn PreferenceStore, domain: &str) -> TimeValues {
    TimeValues {
        period: store.get(domain, PERIOD_KEY),
        comparison: store.get(domain, COMPARISON_MODE_KEY),
        match_day_of_week: store.get(domain, MATCH_DAY_OF_WEEK_KEY),
        has_date_range: false,
        has_comparison_range: false,
    }
}

/// Stores the valid time values the URL supplied.
///
/// `custom` and `realtime` periods and `custom` comparisons are not stored.
///
/// # Errors
///
/// Propagates store write failures.
pub fn persist_time_settings(
    store: &mut dyn PreferenceStore,
    domain: &str,
    search_values: &TimeValues,
) -> Result<()> {
    if let Some(period) = search_values.valid_period().filter(Period::is_persistable) {
        store.set(domain, PERIOD_KEY, period.as_str())?;
    }
    if let Some(mode) = search_values.valid_comparison().filter(ComparisonMode::is_persistable) {
        store.set(domain, COMPARISON_MODE_KEY, mode.as_str())?;
    }
    if let Some(flag) = search_values.valid_match_day_of_week() {
        store.set(domain, MATCH_DAY_OF_WEEK_KEY, if flag { "true" } else { "false" })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "time_settings_tests.rs"]
mod tests;
