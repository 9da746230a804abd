// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    multiple_segments = { Error::MultipleSegments { found: 2 }, "only one segment" },
    invalid_period = { Error::InvalidPeriod("3w".into()), "3w" },
    invalid_comparison = { Error::InvalidComparison("sideways".into()), "sideways" },
    invalid_operation = { Error::InvalidOperation("matches".into()), "matches" },
    invalid_date = { Error::InvalidDate("2024-13-01".into()), "YYYY-MM-DD" },
    invalid_direction = { Error::InvalidDirection("up".into()), "prev, next" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn multiple_segments_message_leads_with_invariant() {
    let msg = Error::MultipleSegments { found: 3 }.to_string();
    assert!(msg.starts_with("dashboard can be filtered by only one segment"));
    assert!(msg.contains("found 3"));
}

#[test]
fn malformed_fragment_display() {
    let err = Error::MalformedFragment {
        fragment: "((is,country".into(),
        reason: "unexpected end of input".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("((is,country"));
    assert!(msg.contains("unexpected end"));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}
