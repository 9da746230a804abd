// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard filter model.
//!
//! A filter is an ordered `(operator, dimension, clauses)` triple. Filters
//! travel through URLs, stored segments and API requests, so the model keeps
//! them exactly as given: the operator is carried as a string, and neither
//! filters nor clauses are ever reordered.
//!
//! ```text
//! ["is", "country", ["US", "JP"]]
//! ["contains_not", "props:author", ["bot"]]
//! ["is", "segment", [12]]
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Dimension name that marks a filter as a segment reference.
pub const SEGMENT_DIMENSION: &str = "segment";

/// Prefix for custom property dimensions (`props:<key>`).
pub const PROPS_PREFIX: &str = "props:";

/// Retired name of [`FilterOperation::ContainsNot`].
const LEGACY_CONTAINS_NOT: &str = "does_not_contain";

/// One value within a filter's clause list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Clause {
    /// Numeric clause, used by segment references.
    Number(i64),
    /// Any other clause value.
    Text(String),
}

impl Clause {
    /// Returns the clause as a string slice if it is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Clause::Text(s) => Some(s),
            Clause::Number(_) => None,
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Number(n) => write!(f, "{n}"),
            Clause::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Clause {
    fn from(s: &str) -> Self {
        Clause::Text(s.to_string())
    }
}

impl From<String> for Clause {
    fn from(s: String) -> Self {
        Clause::Text(s)
    }
}

impl From<i64> for Clause {
    fn from(n: i64) -> Self {
        Clause::Number(n)
    }
}

impl From<i32> for Clause {
    fn from(n: i32) -> Self {
        Clause::Number(i64::from(n))
    }
}

/// Known filter operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperation {
    /// Dimension equals one of the clauses.
    Is,
    /// Dimension equals none of the clauses.
    IsNot,
    /// Dimension contains one of the clauses as a substring.
    Contains,
    /// Dimension contains none of the clauses.
    ContainsNot,
    /// Visitor completed one of the listed goals.
    HasDone,
    /// Visitor completed none of the listed goals.
    HasNotDone,
}

impl FilterOperation {
    /// Returns the string representation used in URLs and API requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperation::Is => "is",
            FilterOperation::IsNot => "is_not",
            FilterOperation::Contains => "contains",
            FilterOperation::ContainsNot => "contains_not",
            FilterOperation::HasDone => "has_done",
            FilterOperation::HasNotDone => "has_not_done",
        }
    }

    /// Returns true for operations that exclude matches.
    pub fn is_negated(&self) -> bool {
        matches!(
            self,
            FilterOperation::IsNot | FilterOperation::ContainsNot | FilterOperation::HasNotDone
        )
    }
}

impl fmt::Display for FilterOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterOperation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "is" => Ok(FilterOperation::Is),
            "is_not" => Ok(FilterOperation::IsNot),
            "contains" => Ok(FilterOperation::Contains),
            "contains_not" => Ok(FilterOperation::ContainsNot),
            "has_done" => Ok(FilterOperation::HasDone),
            "has_not_done" => Ok(FilterOperation::HasNotDone),
            _ => Err(Error::InvalidOperation(s.to_string())),
        }
    }
}

/// A single constraint on the dashboard query.
///
/// Serializes as a JSON triple, matching the shape stored in segment data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String, Vec<Clause>)", into = "(String, String, Vec<Clause>)")]
pub struct Filter {
    /// Operator name, kept verbatim so unknown operators survive a round trip.
    pub operator: String,
    /// Dimension name, `props:<key>`, or `segment`.
    pub dimension: String,
    /// Clause values in their original order.
    pub clauses: Vec<Clause>,
}

impl Filter {
    /// Creates a filter from its three parts.
    pub fn new<C: Into<Clause>>(
        operator: impl Into<String>,
        dimension: impl Into<String>,
        clauses: impl IntoIterator<Item = C>,
    ) -> Self {
        Filter {
            operator: operator.into(),
            dimension: dimension.into(),
            clauses: clauses.into_iter().map(Into::into).collect(),
        }
    }

    /// A filter only constrains the query when it has at least one clause.
    pub fn is_applied(&self) -> bool {
        !self.clauses.is_empty()
    }

    /// Returns the parsed operation, or None for operators this crate does not know.
    pub fn operation(&self) -> Option<FilterOperation> {
        self.operator.parse().ok()
    }

    /// Returns the property key for `props:<key>` dimensions.
    pub fn property_key(&self) -> Option<&str> {
        self.dimension.strip_prefix(PROPS_PREFIX)
    }

    /// Returns true if the dimension is a custom property.
    pub fn is_custom_property(&self) -> bool {
        is_custom_property_dimension(&self.dimension)
    }
}

impl From<(String, String, Vec<Clause>)> for Filter {
    fn from((operator, dimension, clauses): (String, String, Vec<Clause>)) -> Self {
        Filter { operator, dimension, clauses }
    }
}

impl From<Filter> for (String, String, Vec<Clause>) {
    fn from(filter: Filter) -> Self {
        (filter.operator, filter.dimension, filter.clauses)
    }
}

/// Returns true for `props:<key>` dimensions with a non-empty key.
pub fn is_custom_property_dimension(dimension: &str) -> bool {
    dimension.strip_prefix(PROPS_PREFIX).is_some_and(|key| !key.is_empty())
}

/// Returns true if the filter references a segment.
pub fn is_segment_filter(filter: &Filter) -> bool {
    filter.operator == FilterOperation::Is.as_str() && filter.dimension == SEGMENT_DIMENSION
}

/// Renames the retired `does_not_contain` operator to `contains_not`.
///
/// Order, dimensions and clauses are untouched.
pub fn post_process_filters(filters: &[Filter]) -> Vec<Filter> {
    filters
        .iter()
        .map(|filter| {
            if filter.operator == LEGACY_CONTAINS_NOT {
                Filter {
                    operator: FilterOperation::ContainsNot.as_str().to_string(),
                    ..filter.clone()
                }
            } else {
                filter.clone()
            }
        })
        .collect()
}

/// Returns only the filters that have clauses.
pub fn applied_filters(filters: &[Filter]) -> impl Iterator<Item = &Filter> {
    filters.iter().filter(|f| f.is_applied())
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
