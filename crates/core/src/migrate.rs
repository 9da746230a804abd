// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rewrites legacy dashboard links into the current encoding.
//!
//! A rewritten link carries `r=v1` or `r=v2` so it is never rewritten twice.

use std::fmt;

use crate::codec::{param_names, stringify_search, FILTER_PARAM};
use crate::filter::post_process_filters;
use crate::legacy::{is_v1, is_v2, parse_search_v1, parse_search_v2};
use crate::search::SearchRecord;

/// Parameter marking a link that was already rewritten.
pub const REDIRECT_MARKER_PARAM: &str = "r";

/// The encoding a query string was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlVersion {
    Current,
    V2,
    V1,
}

/// Detectors in evaluation order. The first match wins.
const DETECTORS: [(UrlVersion, fn(&str) -> bool); 3] = [
    (UrlVersion::Current, is_current),
    (UrlVersion::V2, is_v2),
    (UrlVersion::V1, is_v1),
];

impl UrlVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlVersion::Current => "current",
            UrlVersion::V2 => "v2",
            UrlVersion::V1 => "v1",
        }
    }

    /// Detects the encoding of a query string.
    ///
    /// Strings no detector claims are treated as current.
    pub fn detect(search: &str) -> UrlVersion {
        DETECTORS
            .iter()
            .find(|(_, matches)| matches(search))
            .map_or(UrlVersion::Current, |(version, _)| *version)
    }

    fn decode(self, search: &str) -> Option<SearchRecord> {
        match self {
            UrlVersion::Current => None,
            UrlVersion::V2 => Some(parse_search_v2(search)),
            UrlVersion::V1 => Some(parse_search_v1(search)),
        }
    }
}

impl fmt::Display for UrlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn is_current(search: &str) -> bool {
    param_names(search).iter().any(|n| n == FILTER_PARAM)
}

/// A browser location split into its parts.
///
/// `pathname` is everything before the query string and may include a
/// scheme and host. `search` keeps its leading `?` and `hash` its leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub search: String,
    pub hash: String,
}

impl Location {
    /// Splits a URL or path at its `?` and `#`.
    pub fn parse(url: &str) -> Location {
        let (rest, hash) = match url.find('#') {
            Some(i) => url.split_at(i),
            None => (url, ""),
        };
        let (pathname, search) = match rest.find('?') {
            Some(i) => rest.split_at(i),
            None => (rest, ""),
        };
        Location {
            pathname: pathname.to_string(),
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }

    /// Returns true if the location was already produced by a rewrite.
    pub fn is_redirected(&self) -> bool {
        param_names(&self.search).iter().any(|n| n == REDIRECT_MARKER_PARAM)
    }
}

/// Returns the current-encoding URL a legacy link should be replaced with.
///
/// Returns None for current links and for links that already carry the
/// redirect marker.
pub fn get_redirect_target(location: &Location) -> Option<String> {
    if location.is_redirected() {
        return None;
    }

    let version = UrlVersion::detect(&location.search);
    let mut record = version.decode(&location.search)?;
    record.filters = post_process_filters(&record.filters);
    record.set(REDIRECT_MARKER_PARAM, version.as_str());

    tracing::debug!("rewriting {version} link {}", location.href());
    Some(format!("{}{}{}", location.pathname, stringify_search(&record), location.hash))
}

#[cfg(test)]
#[path = "migrate_tests.rs"]
mod tests;
