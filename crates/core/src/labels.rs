// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable labels for opaque clause values.
//!
//! [`Labels`] is a small insertion-ordered dictionary. Order matters because
//! each entry becomes one `l=` URL parameter and re-encoding a decoded URL
//! must reproduce the same string.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::filter::{applied_filters, is_segment_filter, Filter};
use crate::segment::format_segment_id_as_label_key;

/// Insertion-ordered mapping from clause value to display string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    entries: Vec<(String, String)>,
}

impl Labels {
    /// Creates an empty label set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a label, keeping the original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the label for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Removes a label, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns true if a label exists for the key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Keeps only the entries for which the predicate returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) {
        self.entries.retain(|(k, v)| keep(k, v));
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Labels {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut labels = Labels::new();
        for (k, v) in iter {
            labels.insert(k, v);
        }
        labels
    }
}

impl Serialize for Labels {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Labels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct LabelsVisitor;

        impl<'de> Visitor<'de> for LabelsVisitor {
            type Value = Labels;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of label keys to display strings")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Labels, A::Error> {
                let mut labels = Labels::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    labels.insert(k, v);
                }
                Ok(labels)
            }
        }

        deserializer.deserialize_map(LabelsVisitor)
    }
}

/// Signature of a "clean labels" collaborator.
///
/// Called whenever filters change so labels never outlive the clauses they
/// describe.
pub type LabelCleaner = dyn Fn(&[Filter], &Labels) -> Labels;

/// Default label cleaner.
///
/// Keeps an entry when its key is a clause of an applied filter, or the
/// `segment-<id>` key of an applied segment filter.
pub fn clean_labels(filters: &[Filter], labels: &Labels) -> Labels {
    let mut referenced: Vec<String> = Vec::new();
    for filter in applied_filters(filters) {
        for clause in &filter.clauses {
            if is_segment_filter(filter) {
                referenced.push(format_segment_id_as_label_key(&clause.to_string()));
            }
            referenced.push(clause.to_string());
        }
    }

    let mut cleaned = labels.clone();
    cleaned.retain(|key, _| referenced.iter().any(|r| r == key));
    cleaned
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
