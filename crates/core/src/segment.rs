// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Saved segments and segment-reference expansion.
//!
//! A segment is a named, stored set of filters and labels. A query refers
//! to one with an `["is", "segment", [<id>]]` filter; [`resolve_filters`]
//! splices the stored filters in place of that reference. This module only
//! reads a caller-supplied collection and never modifies it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::filter::{applied_filters, is_segment_filter, Filter, SEGMENT_DIMENSION};
use crate::labels::Labels;
use crate::search::SearchRecord;

/// Prefix of label keys that name a segment (`segment-<id>`).
const SEGMENT_LABEL_KEY_PREFIX: &str = "segment-";

/// Visibility of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentType {
    /// Visible only to its owner.
    Personal,
    /// Visible to everyone with access to the site.
    Site,
}

impl SegmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentType::Personal => "personal",
            SegmentType::Site => "site",
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filters and labels stored inside a segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentData {
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub labels: Labels,
}

/// A saved segment as returned by the segment API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub segment_type: SegmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inserted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub segment_data: SegmentData,
}

impl Segment {
    /// Creates a segment with no owner or timestamps.
    pub fn new(id: i64, name: impl Into<String>, segment_type: SegmentType, data: SegmentData) -> Self {
        Segment {
            id,
            name: name.into(),
            segment_type,
            owner_id: None,
            owner_name: None,
            inserted_at: None,
            updated_at: None,
            segment_data: data,
        }
    }
}

/// Returns the label key used for a segment id.
pub fn format_segment_id_as_label_key(id: &str) -> String {
    format!("{SEGMENT_LABEL_KEY_PREFIX}{id}")
}

/// Returns true if a label key names a segment.
pub fn is_segment_id_label_key(key: &str) -> bool {
    parse_segment_id_from_label_key(key).is_some()
}

/// Extracts the segment id from a `segment-<id>` label key.
pub fn parse_segment_id_from_label_key(key: &str) -> Option<i64> {
    key.strip_prefix(SEGMENT_LABEL_KEY_PREFIX)?.parse().ok()
}

/// Checks the single-segment invariant.
///
/// At most one applied segment filter may be present and it may carry only
/// one clause. Segment filters without clauses count as absent.
fn check_single_segment(filters: &[Filter]) -> Result<()> {
    let segment_filters: Vec<&Filter> = applied_filters(filters).filter(|f| is_segment_filter(f)).collect();
    let clause_count: usize = segment_filters.iter().map(|f| f.clauses.len()).sum();

    if segment_filters.len() > 1 || segment_filters.iter().any(|f| f.clauses.len() > 1) {
        return Err(Error::MultipleSegments { found: clause_count });
    }
    Ok(())
}

fn find_segment<'a>(segments: &'a [Segment], filter: &Filter) -> Option<&'a Segment> {
    let id = filter.clauses.first()?.to_string();
    segments.iter().find(|s| s.id.to_string() == id)
}

/// Expands the segment reference in a filter list.
///
/// The referenced segment's filters replace the segment filter at the same
/// position. Unknown ids leave the reference untouched.
///
/// # Errors
///
/// Returns [`Error::MultipleSegments`] if more than one segment filter is
/// present or a segment filter has more than one clause.
pub fn resolve_filters(filters: &[Filter], segments: &[Segment]) -> Result<Vec<Filter>> {
    check_single_segment(filters)?;

    let mut resolved = Vec::with_capacity(filters.len());
    for filter in filters {
        if !is_segment_filter(filter) {
            resolved.push(filter.clone());
            continue;
        }
        match find_segment(segments, filter) {
            Some(segment) => resolved.extend(segment.segment_data.filters.iter().cloned()),
            None => {
                tracing::debug!("segment {:?} not loaded, leaving reference unexpanded", filter.clauses);
                resolved.push(filter.clone());
            }
        }
    }
    Ok(resolved)
}

/// Returns the loaded segment referenced by the filters, if any.
///
/// # Errors
///
/// Returns [`Error::MultipleSegments`] when the single-segment invariant is broken.
pub fn find_applied_segment<'a>(
    filters: &[Filter],
    segments: &'a [Segment],
) -> Result<Option<&'a Segment>> {
    check_single_segment(filters)?;
    Ok(applied_filters(filters).filter(|f| is_segment_filter(f)).find_map(|f| find_segment(segments, f)))
}

/// Builds a search transform that makes the segment the only filter.
///
/// Labels are replaced by the segment's display name; other parameters are kept.
pub fn search_to_apply_single_segment_filter(
    segment: &Segment,
) -> impl Fn(&SearchRecord) -> SearchRecord + '_ {
    move |record| {
        let mut next = record.clone();
        next.filters = vec![Filter::new("is", SEGMENT_DIMENSION, [segment.id])];
        next.labels = Labels::new();
        next.labels.insert(format_segment_id_as_label_key(&segment.id.to_string()), segment.name.clone());
        next
    }
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
