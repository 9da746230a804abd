// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assembles the dashboard query from a decoded URL.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::{is_segment_filter, post_process_filters, Filter};
use crate::labels::Labels;
use crate::period::{ComparisonMode, Period};
use crate::search::{ScalarValue, SearchRecord};
use crate::segment::{resolve_filters, Segment};
use crate::time_settings::{
    get_dashboard_time_settings, parse_date, TimeDefaults, TimeSettingsInput, TimeValues,
};

/// Fully resolved dashboard state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardQuery {
    pub period: Period,
    pub comparison: Option<ComparisonMode>,
    pub match_day_of_week: bool,
    pub date: Option<NaiveDate>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub compare_from: Option<NaiveDate>,
    pub compare_to: Option<NaiveDate>,
    /// Filters as they appear in the URL.
    pub filters: Vec<Filter>,
    /// Filters with the segment reference expanded.
    pub resolved_filters: Vec<Filter>,
    pub labels: Labels,
    pub with_imported: bool,
}

/// What [`build_dashboard_query`] needs besides the URL.
#[derive(Debug, Clone, Copy)]
pub struct QueryContext<'a> {
    pub segments: &'a [Segment],
    pub stored_values: &'a TimeValues,
    pub default_values: &'a TimeDefaults,
    /// The applied segment is open for editing.
    pub segment_is_expanded: bool,
}

fn date_param(record: &SearchRecord, key: &str) -> Option<NaiveDate> {
    let value = record.get_text(key)?;
    let date = parse_date(&value);
    if date.is_none() {
        tracing::debug!("ignoring {key}={value}: not a YYYY-MM-DD date");
    }
    date
}

/// Builds the dashboard query for a decoded URL.
///
/// # Errors
///
/// Returns [`crate::Error::MultipleSegments`] if the filters reference more
/// than one segment.
pub fn build_dashboard_query(record: &SearchRecord, ctx: &QueryContext<'_>) -> Result<DashboardQuery> {
    let filters = post_process_filters(&record.filters);
    let resolved_filters = resolve_filters(&filters, ctx.segments)?;

    let segment_is_expanded = ctx.segment_is_expanded && filters.iter().any(is_segment_filter);
    let settings = get_dashboard_time_settings(TimeSettingsInput {
        search_values: &TimeValues::from_search(record),
        stored_values: ctx.stored_values,
        default_values: ctx.default_values,
        segment_is_expanded,
    });

    let with_imported = record.get("with_imported").and_then(ScalarValue::as_bool).unwrap_or(true);

    Ok(DashboardQuery {
        period: settings.period,
        comparison: settings.comparison,
        match_day_of_week: settings.match_day_of_week,
        date: date_param(record, "date"),
        from: date_param(record, "from"),
        to: date_param(record, "to"),
        compare_from: date_param(record, "compare_from"),
        compare_to: date_param(record, "compare_to"),
        filters,
        resolved_filters,
        labels: record.labels.clone(),
        with_imported,
    })
}

impl DashboardQuery {
    /// Converts the query back into a record for URL encoding.
    ///
    /// Day-of-week matching is written only alongside a comparison and
    /// `with_imported` only when it is off.
    pub fn to_search_record(&self) -> SearchRecord {
        let mut record = SearchRecord::new();
        record.filters = self.filters.clone();
        record.labels = self.labels.clone();
        record.set("period", self.period.as_str());

        let dates = [
            ("date", self.date),
            ("from", self.from),
            ("to", self.to),
            ("compare_from", self.compare_from),
            ("compare_to", self.compare_to),
        ];
        for (key, date) in dates {
            if let Some(date) = date {
                record.set(key, date.format("%Y-%m-%d").to_string());
            }
        }

        if let Some(mode) = self.comparison {
            record.set("comparison", mode.as_str());
            record.set("match_day_of_week", self.match_day_of_week);
        }
        if !self.with_imported {
            record.set("with_imported", false);
        }
        record
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
