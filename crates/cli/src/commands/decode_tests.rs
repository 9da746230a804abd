// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use dq_core::{Filter, ScalarValue};

#[test]
fn test_decodes_current_url() {
    let record = run_impl("/example.com?f=is,country,US&l=US,United+States&period=7d#top").unwrap();
    assert_eq!(record.filters, vec![Filter::new("is", "country", ["US"])]);
    assert_eq!(record.labels.get("US"), Some("United States"));
    assert_eq!(record.get("period"), Some(&ScalarValue::from("7d")));
}

#[test]
fn test_decodes_bare_query_string() {
    let record = run_impl("period=day&with_imported=false").unwrap();
    assert_eq!(record.get("with_imported"), Some(&ScalarValue::Bool(false)));
}

#[test]
fn test_refuses_legacy_url() {
    let err = run_impl("/example.com?filters=((is,country,(US)))").unwrap_err();
    match err {
        Error::LegacyUrl { version, target } => {
            assert_eq!(version, "v2");
            assert_eq!(target, "/example.com?f=is,country,US&r=v2");
        }
        other => panic!("expected LegacyUrl, got {other:?}"),
    }
}

#[test]
fn test_decodes_marked_url() {
    let record = run_impl("/example.com?f=is,country,US&r=v2").unwrap();
    assert_eq!(record.get_text("r").as_deref(), Some("v2"));
}
