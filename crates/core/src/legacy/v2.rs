// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Second-generation dashboard URLs.
//!
//! Every parameter value is a JSON→URL fragment:
//!
//! ```text
//! ?filters=((is,country,(US)))&labels=(US:United%20States)&period=7d
//! ```

use serde_json::Value;

use super::jsonurl;
use crate::codec::{decode_uri_component, raw_param};
use crate::filter::{Clause, Filter};
use crate::search::{ScalarValue, SearchRecord};

/// Parameter carrying the filter array.
pub const FILTERS_PARAM: &str = "filters";
/// Parameter carrying the label object.
pub const LABELS_PARAM: &str = "labels";

/// Parses one fragment, mapping empty or unparsable input to null.
fn parse_fragment(key: &str, raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    jsonurl::parse(raw).unwrap_or_else(|e| {
        tracing::warn!("ignoring v2 parameter '{key}': {e}");
        Value::Null
    })
}

/// Returns true if the query string carries a `filters` array.
pub fn is_v2(search: &str) -> bool {
    raw_param(search, FILTERS_PARAM)
        .is_some_and(|raw| matches!(jsonurl::parse(raw), Ok(Value::Array(_))))
}

fn clause_from_value(value: &Value) -> Option<Clause> {
    match value {
        Value::String(s) => Some(Clause::Text(s.clone())),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(Clause::Number(i)),
            None => Some(Clause::Text(n.to_string())),
        },
        Value::Bool(b) => Some(Clause::Text(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Converts a `[operator, dimension, [clause, ...]]` triple into a filter.
fn filter_from_value(value: &Value) -> Option<Filter> {
    let [operator, dimension, clauses] = value.as_array()?.as_slice() else {
        return None;
    };
    let clauses = clauses.as_array()?.iter().map(clause_from_value).collect::<Option<Vec<_>>>()?;
    Some(Filter {
        operator: text_from_value(operator)?,
        dimension: text_from_value(dimension)?,
        clauses,
    })
}

/// Decodes a v2 query string.
///
/// Malformed fragments are dropped. Scalars keep their text; the literals
/// `true` and `false` become booleans and numbers are rendered back to text.
pub fn parse_search_v2(search: &str) -> SearchRecord {
    let query = search.strip_prefix('?').unwrap_or(search);
    let mut record = SearchRecord::new();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let Ok(key) = decode_uri_component(raw_key) else {
            tracing::warn!("dropping v2 parameter with corrupt name '{raw_key}'");
            continue;
        };

        match (key.as_str(), parse_fragment(&key, raw_value)) {
            (FILTERS_PARAM, Value::Array(items)) => {
                for item in &items {
                    match filter_from_value(item) {
                        Some(filter) => record.filters.push(filter),
                        None => tracing::warn!("dropping v2 filter {item}"),
                    }
                }
            }
            (LABELS_PARAM, Value::Object(map)) => {
                for (k, v) in &map {
                    if let Some(label) = text_from_value(v) {
                        record.labels.insert(k.clone(), label);
                    }
                }
            }
            (FILTERS_PARAM | LABELS_PARAM, other) => {
                tracing::warn!("ignoring v2 '{key}' of unexpected shape: {other}");
            }
            (_, Value::Bool(b)) => record.set(key, ScalarValue::Bool(b)),
            (_, Value::Null) => {}
            (_, value) => match text_from_value(&value) {
                Some(text) => record.set(key, ScalarValue::Text(text)),
                None => tracing::debug!("ignoring composite v2 parameter '{key}'"),
            },
        }
    }
    record
}

#[cfg(test)]
#[path = "v2_tests.rs"]
mod tests;
