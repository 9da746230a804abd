// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The raw record decoded from (and encoded to) a URL query string.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::filter::Filter;
use crate::labels::{LabelCleaner, Labels};

/// A scalar URL parameter value.
///
/// Only the literals `true` and `false` decode to booleans; everything else,
/// numbers included, stays text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Text(String),
}

impl ScalarValue {
    /// Infers a boolean for `true`/`false`, otherwise keeps the text.
    pub fn infer(value: &str) -> Self {
        match value {
            "true" => ScalarValue::Bool(true),
            "false" => ScalarValue::Bool(false),
            other => ScalarValue::Text(other.to_string()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(s) => Some(s),
            ScalarValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Bool(b) => Some(*b),
            ScalarValue::Text(_) => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Bool(b) => write!(f, "{b}"),
            ScalarValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::Text(s.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::Text(s)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        ScalarValue::Bool(b)
    }
}

/// Decoded URL state before time settings and segments are resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub labels: Labels,
    /// Scalar parameters in URL order.
    #[serde(default, with = "params_serde")]
    pub params: Vec<(String, ScalarValue)>,
}

impl SearchRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a scalar parameter.
    pub fn get(&self, key: &str) -> Option<&ScalarValue> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a scalar parameter as text. Booleans are rendered as `true`/`false`.
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }

    /// Sets a scalar parameter, keeping its position if it already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ScalarValue>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.params.push((key, value)),
        }
    }

    /// Removes a scalar parameter.
    pub fn remove(&mut self, key: &str) -> Option<ScalarValue> {
        let index = self.params.iter().position(|(k, _)| k == key)?;
        Some(self.params.remove(index).1)
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Returns true if the record has no filters, labels or parameters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.labels.is_empty() && self.params.is_empty()
    }
}

/// Applies a search transform, re-cleaning labels when filters changed.
///
/// The input record is never modified.
pub fn update_search(
    record: &SearchRecord,
    transform: impl Fn(&SearchRecord) -> SearchRecord,
    clean: &LabelCleaner,
) -> SearchRecord {
    let mut next = transform(record);
    if next.filters != record.filters {
        next.labels = clean(&next.filters, &next.labels);
    }
    next
}

/// Parameters serialize as a JSON object in URL order.
mod params_serde {
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    use super::ScalarValue;

    pub fn serialize<S: Serializer>(
        params: &[(String, ScalarValue)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(params.len()))?;
        for (k, v) in params {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, ScalarValue)>, D::Error> {
        struct ParamsVisitor;

        impl<'de> Visitor<'de> for ParamsVisitor {
            type Value = Vec<(String, ScalarValue)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of parameter names to strings or booleans")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut params: Vec<(String, ScalarValue)> = Vec::new();
                while let Some((k, v)) = access.next_entry::<String, ScalarValue>()? {
                    params.retain(|(existing, _)| *existing != k);
                    params.push((k, v));
                }
                Ok(params)
            }
        }

        deserializer.deserialize_map(ParamsVisitor)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
