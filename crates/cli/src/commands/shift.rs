// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dq_core::prefs::PreferenceStore;
use dq_core::time_settings::{read_stored_time_values, TimeDefaults, TimeValues};
use dq_core::{
    build_dashboard_query, get_date_for_shifted_period, stringify_search, ClockSource, QueryContext,
    ShiftDirection, Site, SystemClock,
};

use crate::error::Result;

use super::{decode_location, migrated_location, open_db};

pub fn run(url: &str, site: &Site, direction: ShiftDirection) -> Result<()> {
    let (db, config) = open_db()?;
    match run_impl(&db, &config.time_defaults(), url, site, direction, &SystemClock)? {
        Some(target) => println!("{target}"),
        None => tracing::info!("no {direction} period with stats for {}", site.domain),
    }
    Ok(())
}

/// Returns the URL of the adjacent period, or None when there is nothing to show.
///
/// The resolved period is written into the URL so a period that came from
/// stored preferences survives the navigation.
pub(crate) fn run_impl(
    store: &dyn PreferenceStore,
    defaults: &TimeDefaults,
    url: &str,
    site: &Site,
    direction: ShiftDirection,
    clock: &dyn ClockSource,
) -> Result<Option<String>> {
    let location = migrated_location(url);
    let mut record = decode_location(&location);
    let stored: TimeValues = read_stored_time_values(store, &site.domain);

    let query = build_dashboard_query(
        &record,
        &QueryContext {
            segments: &[],
            stored_values: &stored,
            default_values: defaults,
            segment_is_expanded: false,
        },
    )?;

    let Some(date) = get_date_for_shifted_period(site, &query, direction, clock) else {
        return Ok(None);
    };

    record.set("period", query.period.as_str());
    record.set("date", date.format("%Y-%m-%d").to_string());
    Ok(Some(format!("{}{}{}", location.pathname, stringify_search(&record), location.hash)))
}

#[cfg(test)]
#[path = "shift_tests.rs"]
mod tests;
