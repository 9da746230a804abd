// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Current URL query-string codec.
//!
//! # Grammar
//!
//! ```text
//! ?f=is,country,US&f=is,page,/blog,/about&l=US,United+States&period=7d
//! ```
//!
//! - `f` (repeatable): one filter, `operator,dimension,clause,...`
//! - `l` (repeatable): one label entry, `key,value`
//! - anything else: a scalar `key=value`
//!
//! Every component is percent-encoded on its own. `:` and `/` stay readable
//! everywhere; scalar values additionally keep `,`. A space is written as
//! `+` and a literal `+` as `%2B`.
//!
//! Decoding never fails: fragments with corrupt percent-encoding are logged
//! and dropped, filters without clauses and labels with an empty side are
//! skipped.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Error, Result};
use crate::filter::{Clause, Filter};
use crate::search::{ScalarValue, SearchRecord};

/// Parameter name for filters.
pub const FILTER_PARAM: &str = "f";
/// Parameter name for label entries.
pub const LABEL_PARAM: &str = "l";

/// Parameter names keep only RFC 3986 unreserved characters.
const NAME_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');
/// Filter and label components additionally keep `:` and `/` readable.
const COMPONENT_SET: &AsciiSet = &NAME_SET.remove(b':').remove(b'/');
/// Scalar values additionally keep `,`.
const SCALAR_SET: &AsciiSet = &COMPONENT_SET.remove(b',');

/// Percent-encodes a string, leaving the characters outside `set` readable.
///
/// Non-ASCII text is always escaped and a space becomes `+`, which forces a
/// literal `+` to `%2B`.
pub fn encode_uri_component_permissive(input: &str, set: &'static AsciiSet) -> String {
    input
        .split(' ')
        .map(|part| utf8_percent_encode(part, set).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

fn malformed(input: &str, reason: String) -> Error {
    Error::MalformedFragment { fragment: input.to_string(), reason }
}

/// Decodes one percent-encoded component, treating `+` as a space.
///
/// # Errors
///
/// Returns [`Error::MalformedFragment`] for truncated or non-hex escapes and
/// for escapes that do not form valid UTF-8.
pub fn decode_uri_component(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let bad_escape = (0..bytes.len()).find(|&i| {
        bytes[i] == b'%' && !bytes.get(i + 1..i + 3).is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    });
    if let Some(i) = bad_escape {
        return Err(malformed(input, format!("invalid percent escape at byte {i}")));
    }

    urlencoding::decode(&input.replace('+', " "))
        .map(|decoded| decoded.into_owned())
        .map_err(|_| malformed(input, "escapes do not form valid UTF-8".to_string()))
}

/// Serializes one filter as the value of an `f` parameter.
pub fn serialize_filter(filter: &Filter) -> String {
    let mut parts = Vec::with_capacity(filter.clauses.len() + 2);
    parts.push(encode_uri_component_permissive(&filter.operator, COMPONENT_SET));
    parts.push(encode_uri_component_permissive(&filter.dimension, COMPONENT_SET));
    for clause in &filter.clauses {
        parts.push(encode_uri_component_permissive(&clause.to_string(), COMPONENT_SET));
    }
    parts.join(",")
}

/// Parses the value of an `f` parameter.
///
/// Returns None when the value lacks an operator and dimension or when any
/// component is corrupt. Clauses always decode as text.
pub fn parse_filter(value: &str) -> Option<Filter> {
    let mut components = value.split(',');
    let operator = components.next()?;
    let dimension = components.next()?;

    let decoded = std::iter::once(operator)
        .chain(std::iter::once(dimension))
        .chain(components)
        .map(decode_uri_component)
        .collect::<Result<Vec<String>>>();

    match decoded {
        Ok(mut parts) => {
            let clauses = parts.split_off(2).into_iter().map(Clause::Text).collect();
            let dimension = parts.pop()?;
            let operator = parts.pop()?;
            Some(Filter { operator, dimension, clauses })
        }
        Err(e) => {
            tracing::warn!("dropping filter: {e}");
            None
        }
    }
}

/// Serializes one label entry as the value of an `l` parameter.
pub fn serialize_label_entry(key: &str, value: &str) -> String {
    format!(
        "{},{}",
        encode_uri_component_permissive(key, COMPONENT_SET),
        encode_uri_component_permissive(value, COMPONENT_SET)
    )
}

/// Parses the value of an `l` parameter into `(key, value)`.
pub fn parse_label_entry(value: &str) -> Option<(String, String)> {
    let (key, label) = value.split_once(',')?;
    match (decode_uri_component(key), decode_uri_component(label)) {
        (Ok(key), Ok(label)) => Some((key, label)),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!("dropping label: {e}");
            None
        }
    }
}

/// Decodes a query string (with or without the leading `?`).
pub fn parse_search(search: &str) -> SearchRecord {
    let query = search.strip_prefix('?').unwrap_or(search);
    let mut record = SearchRecord::new();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = match decode_uri_component(raw_key) {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!("dropping parameter: {e}");
                continue;
            }
        };

        match key.as_str() {
            FILTER_PARAM => {
                if let Some(filter) = parse_filter(raw_value).filter(Filter::is_applied) {
                    record.filters.push(filter);
                }
            }
            LABEL_PARAM => {
                if let Some((k, v)) = parse_label_entry(raw_value) {
                    if !k.is_empty() && !v.is_empty() {
                        record.labels.insert(k, v);
                    }
                }
            }
            _ => match decode_uri_component(raw_value) {
                Ok(value) => record.set(key, ScalarValue::infer(&value)),
                Err(e) => tracing::warn!("dropping parameter '{key}': {e}"),
            },
        }
    }
    record
}

/// Encodes a record as a query string.
///
/// Filters come first, then labels, then scalar parameters in record order.
/// Filters without clauses are omitted. An empty record encodes to `""`,
/// anything else starts with `?`.
pub fn stringify_search(record: &SearchRecord) -> String {
    let mut parts: Vec<String> = Vec::new();

    for filter in record.filters.iter().filter(|f| f.is_applied()) {
        parts.push(format!("{FILTER_PARAM}={}", serialize_filter(filter)));
    }
    for (key, value) in record.labels.iter() {
        parts.push(format!("{LABEL_PARAM}={}", serialize_label_entry(key, value)));
    }
    for (key, value) in &record.params {
        parts.push(format!(
            "{}={}",
            encode_uri_component_permissive(key, NAME_SET),
            encode_uri_component_permissive(&value.to_string(), SCALAR_SET)
        ));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

/// Returns the parameter names present in a query string, decoded, in order.
///
/// Corrupt names are skipped.
pub fn param_names(search: &str) -> Vec<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query
        .split('&')
        .filter(|p| !p.is_empty())
        .filter_map(|pair| decode_uri_component(pair.split_once('=').map_or(pair, |(k, _)| k)).ok())
        .collect()
}

/// Returns the raw (still encoded) value of the first occurrence of a parameter.
pub fn raw_param<'a>(search: &'a str, name: &str) -> Option<&'a str> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (decode_uri_component(key).ok()? == name).then_some(value)
    })
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
