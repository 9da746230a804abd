// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time periods and comparison modes.
//!
//! Both are closed enumerations. Values arriving from a URL or from stored
//! preferences go through [`is_valid_period`], [`is_valid_comparison`] and
//! [`is_valid_match_day_of_week`] so that values written by an older release
//! degrade to "absent" instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The dashboard's reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "realtime")]
    Realtime,
    #[serde(rename = "day")]
    Day,
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "28d")]
    Last28Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "6mo")]
    Last6Months,
    #[serde(rename = "12mo")]
    Last12Months,
    #[serde(rename = "year")]
    Year,
    #[serde(rename = "all")]
    All,
    #[serde(rename = "custom")]
    Custom,
}

impl Period {
    /// Every period, in menu order.
    pub const ALL: [Period; 12] = [
        Period::Realtime,
        Period::Day,
        Period::Last7Days,
        Period::Last28Days,
        Period::Last30Days,
        Period::Last90Days,
        Period::Month,
        Period::Last6Months,
        Period::Last12Months,
        Period::Year,
        Period::All,
        Period::Custom,
    ];

    /// Returns the string representation used in URLs and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Realtime => "realtime",
            Period::Day => "day",
            Period::Last7Days => "7d",
            Period::Last28Days => "28d",
            Period::Last30Days => "30d",
            Period::Last90Days => "90d",
            Period::Month => "month",
            Period::Last6Months => "6mo",
            Period::Last12Months => "12mo",
            Period::Year => "year",
            Period::All => "all",
            Period::Custom => "custom",
        }
    }

    /// Comparisons are meaningless for realtime and all-time views.
    pub fn disables_comparison(&self) -> bool {
        matches!(self, Period::Realtime | Period::All)
    }

    /// Session-specific periods are never written to stored preferences.
    pub fn is_persistable(&self) -> bool {
        !matches!(self, Period::Realtime | Period::Custom)
    }

    /// Returns true for periods that can be stepped with prev/next.
    pub fn is_shiftable(&self) -> bool {
        matches!(self, Period::Day | Period::Month | Period::Year)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::InvalidPeriod(s.to_string()))
    }
}

/// How the current period is compared against a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    /// Comparison explicitly turned off.
    Off,
    /// The period immediately before the current one.
    PreviousPeriod,
    /// The same period one year earlier.
    YearOverYear,
    /// A user-chosen date range.
    Custom,
}

impl ComparisonMode {
    /// Returns the string representation used in URLs and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Off => "off",
            ComparisonMode::PreviousPeriod => "previous_period",
            ComparisonMode::YearOverYear => "year_over_year",
            ComparisonMode::Custom => "custom",
        }
    }

    /// Maps the `off` sentinel to None.
    pub fn active(self) -> Option<ComparisonMode> {
        match self {
            ComparisonMode::Off => None,
            mode => Some(mode),
        }
    }

    /// Custom comparison ranges are session-specific and never stored.
    pub fn is_persistable(&self) -> bool {
        !matches!(self, ComparisonMode::Custom)
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComparisonMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "off" => Ok(ComparisonMode::Off),
            "previous_period" => Ok(ComparisonMode::PreviousPeriod),
            "year_over_year" => Ok(ComparisonMode::YearOverYear),
            "custom" => Ok(ComparisonMode::Custom),
            _ => Err(Error::InvalidComparison(s.to_string())),
        }
    }
}

/// Returns true if the value names a current [`Period`].
pub fn is_valid_period(value: &str) -> bool {
    value.parse::<Period>().is_ok()
}

/// Returns true if the value names a current [`ComparisonMode`], including `off`.
pub fn is_valid_comparison(value: &str) -> bool {
    value.parse::<ComparisonMode>().is_ok()
}

/// Returns true for the literal strings `true` and `false`.
pub fn is_valid_match_day_of_week(value: &str) -> bool {
    parse_match_day_of_week(value).is_some()
}

/// Parses a stored or URL-supplied `match_day_of_week` flag.
pub fn parse_match_day_of_week(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "period_tests.rs"]
mod tests;
