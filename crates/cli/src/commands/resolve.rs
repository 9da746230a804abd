// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use dq_core::prefs::PreferenceStore;
use dq_core::time_settings::{persist_time_settings, read_stored_time_values, TimeDefaults, TimeValues};
use dq_core::{build_dashboard_query, DashboardQuery, QueryContext, Segment};

use crate::error::Result;

use super::{decode_location, migrated_location, open_db, read_input};

/// Options for [`run_impl`].
pub(crate) struct ResolveOptions<'a> {
    pub domain: &'a str,
    pub segments: &'a [Segment],
    pub expanded: bool,
    pub persist: bool,
}

pub fn run(
    url: &str,
    domain: &str,
    segments: Option<&Path>,
    expanded: bool,
    no_persist: bool,
) -> Result<()> {
    let (mut db, config) = open_db()?;
    let segments = match segments {
        Some(path) => load_segments(&read_input(Some(path))?)?,
        None => Vec::new(),
    };

    let options = ResolveOptions { domain, segments: &segments, expanded, persist: !no_persist };
    let query = run_impl(&mut db, &config.time_defaults(), url, &options)?;
    println!("{}", serde_json::to_string_pretty(&query)?);
    Ok(())
}

/// Parses a JSON array of segments as returned by the segment API.
pub(crate) fn load_segments(json: &str) -> Result<Vec<Segment>> {
    let segments: Vec<Segment> = serde_json::from_str(json)?;
    tracing::debug!("loaded {} segment(s)", segments.len());
    Ok(segments)
}

/// Migrates, decodes and resolves a URL, then stores the URL's time choices.
pub(crate) fn run_impl(
    store: &mut dyn PreferenceStore,
    defaults: &TimeDefaults,
    url: &str,
    options: &ResolveOptions<'_>,
) -> Result<DashboardQuery> {
    let record = decode_location(&migrated_location(url));
    let stored = read_stored_time_values(&*store, options.domain);

    let query = build_dashboard_query(
        &record,
        &QueryContext {
            segments: options.segments,
            stored_values: &stored,
            default_values: defaults,
            segment_is_expanded: options.expanded,
        },
    )?;

    if options.persist {
        persist_time_settings(store, options.domain, &TimeValues::from_search(&record))?;
    }
    Ok(query)
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
