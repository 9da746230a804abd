// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! First-generation dashboard URLs.
//!
//! One parameter per dimension, with the operator folded into a value prefix:
//!
//! ```text
//! ?country=US|DE&country_labels=United%20States|Germany&page=~blog&props={"author":"!Jane"}
//! ```
//!
//! | prefix | operator       |
//! |--------|----------------|
//! | `!~`   | `contains_not` |
//! | `!`    | `is_not`       |
//! | `~`    | `contains`     |
//! | none   | `is`           |

use std::collections::HashMap;

use crate::codec::{decode_uri_component, param_names};
use crate::filter::{Clause, Filter, FilterOperation, PROPS_PREFIX};
use crate::search::{ScalarValue, SearchRecord};

/// Parameter carrying custom property filters as a JSON object.
pub const PROPS_PARAM: &str = "props";

/// Dimension parameters, with the parameter holding their labels if any.
const DIMENSIONS: &[(&str, Option<&str>)] = &[
    ("goal", None),
    ("source", None),
    ("utm_medium", None),
    ("utm_source", None),
    ("utm_campaign", None),
    ("utm_content", None),
    ("utm_term", None),
    ("referrer", None),
    ("screen", None),
    ("browser", None),
    ("browser_version", None),
    ("os", None),
    ("os_version", None),
    ("country", Some("country_labels")),
    ("region", Some("region_labels")),
    ("city", Some("city_labels")),
    ("entry_page", None),
    ("exit_page", None),
    ("page", None),
    ("hostname", None),
];

fn is_dimension_param(key: &str) -> bool {
    DIMENSIONS.iter().any(|(dim, _)| *dim == key)
}

fn labels_param_for(key: &str) -> Option<&'static str> {
    DIMENSIONS.iter().find(|(dim, _)| *dim == key).and_then(|(_, labels)| *labels)
}

fn is_labels_param(key: &str) -> bool {
    DIMENSIONS.iter().any(|(_, labels)| *labels == Some(key))
}

/// Returns true if the query string uses v1 dimension parameters.
///
/// A `filters` parameter rules v1 out.
pub fn is_v1(search: &str) -> bool {
    let names = param_names(search);
    !names.iter().any(|n| n == super::v2::FILTERS_PARAM)
        && names.iter().any(|n| is_dimension_param(n) || n == PROPS_PARAM)
}

/// Splits on `|`, honouring `\|` as a literal pipe.
fn split_clauses(value: &str) -> Vec<String> {
    let mut clauses = Vec::new();
    let mut current = String::new();
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                current.push('|');
                chars.next();
            }
            '|' => clauses.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    clauses.push(current);
    clauses.retain(|c| !c.is_empty());
    clauses
}

/// Parses one v1 dimension value into a filter.
pub fn parse_legacy_filter(dimension: &str, value: &str) -> Filter {
    let (operation, rest) = if let Some(rest) = value.strip_prefix("!~") {
        (FilterOperation::ContainsNot, rest)
    } else if let Some(rest) = value.strip_prefix('!') {
        (FilterOperation::IsNot, rest)
    } else if let Some(rest) = value.strip_prefix('~') {
        (FilterOperation::Contains, rest)
    } else {
        (FilterOperation::Is, value)
    };
    Filter::new(operation.as_str(), dimension, split_clauses(rest).into_iter().map(Clause::Text))
}

/// Parses the `props` JSON object into `props:<key>` filters.
///
/// Non-string values are skipped. Malformed JSON yields no filters.
pub fn parse_legacy_props(value: &str) -> Vec<Filter> {
    let object = match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(value) {
        Ok(object) => object,
        Err(e) => {
            tracing::warn!("ignoring v1 props: {e}");
            return Vec::new();
        }
    };
    object
        .iter()
        .filter_map(|(key, value)| {
            let text = value.as_str()?;
            Some(parse_legacy_filter(&format!("{PROPS_PREFIX}{key}"), text))
        })
        .filter(Filter::is_applied)
        .collect()
}

/// Decodes a v1 query string.
pub fn parse_search_v1(search: &str) -> SearchRecord {
    let query = search.strip_prefix('?').unwrap_or(search);
    let mut pairs: Vec<(String, String)> = Vec::new();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        match (decode_uri_component(raw_key), decode_uri_component(raw_value)) {
            (Ok(key), Ok(value)) => pairs.push((key, value)),
            (Err(e), _) | (_, Err(e)) => tracing::warn!("dropping v1 parameter: {e}"),
        }
    }

    let label_values: HashMap<&str, &str> = pairs
        .iter()
        .filter(|(k, _)| is_labels_param(k))
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    let mut record = SearchRecord::new();
    for (key, value) in &pairs {
        if is_dimension_param(key) {
            let filter = parse_legacy_filter(key, value);
            if !filter.is_applied() {
                continue;
            }
            if let Some(labels) = labels_param_for(key).and_then(|p| label_values.get(p)) {
                for (clause, label) in filter.clauses.iter().zip(split_clauses(labels)) {
                    record.labels.insert(clause.to_string(), label);
                }
            }
            record.filters.push(filter);
        } else if key == PROPS_PARAM {
            record.filters.extend(parse_legacy_props(value));
        } else if !is_labels_param(key) {
            record.set(key.clone(), ScalarValue::infer(value));
        }
    }
    record
}

#[cfg(test)]
#[path = "v1_tests.rs"]
mod tests;
