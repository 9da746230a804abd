// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Previous/next navigation for calendar periods.

use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::clock::ClockSource;
use crate::error::{Error, Result};
use crate::period::Period;
use crate::query::DashboardQuery;
use crate::site::Site;

/// Which way to step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    Prev,
    Next,
}

impl ShiftDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftDirection::Prev => "prev",
            ShiftDirection::Next => "next",
        }
    }
}

impl fmt::Display for ShiftDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShiftDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "prev" | "previous" => Ok(ShiftDirection::Prev),
            "next" => Ok(ShiftDirection::Next),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

fn month_start(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

fn year_start(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), 1, 1)
}

fn step(date: NaiveDate, period: Period, direction: ShiftDirection) -> Option<NaiveDate> {
    let months = match period {
        Period::Day => {
            return match direction {
                ShiftDirection::Prev => date.pred_opt(),
                ShiftDirection::Next => date.succ_opt(),
            }
        }
        Period::Month => Months::new(1),
        Period::Year => Months::new(12),
        _ => return None,
    };
    match direction {
        ShiftDirection::Prev => date.checked_sub_months(months),
        ShiftDirection::Next => date.checked_add_months(months),
    }
}

/// Returns the anchor date of the adjacent period, if it has stats.
///
/// Only `day`, `month` and `year` can be shifted. The anchor is the date
/// itself, the first of the month or January 1st. Shifting stops at the
/// period containing `stats_begin` and at the one containing today.
pub fn get_date_for_shifted_period(
    site: &Site,
    query: &DashboardQuery,
    direction: ShiftDirection,
    clock: &dyn ClockSource,
) -> Option<NaiveDate> {
    let today = site.today(clock);
    let current = query.date.unwrap_or(today);

    let truncate: fn(NaiveDate) -> Option<NaiveDate> = match query.period {
        Period::Day => Some,
        Period::Month => month_start,
        Period::Year => year_start,
        _ => return None,
    };

    let shifted = step(truncate(current)?, query.period, direction)?;
    let earliest = truncate(site.stats_begin)?;
    let latest = truncate(today)?;

    (earliest..=latest).contains(&shifted).then_some(shifted)
}

#[cfg(test)]
#[path = "shift_tests.rs"]
mod tests;
