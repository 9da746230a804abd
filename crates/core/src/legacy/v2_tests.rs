// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::labels::Labels;
use yare::parameterized;

#[parameterized(
    array = { "?filters=((is,country,(US)))", true },
    empty_array_member = { "?period=day&filters=((is,page,(/)))", true },
    object = { "?filters=(a:b)", false },
    empty = { "?filters=", false },
    broken = { "?filters=((is,country,(US)", false },
    absent = { "?period=7d", false },
    current = { "?f=is,country,US", false },
)]
fn detects_v2(search: &str, expected: bool) {
    assert_eq!(is_v2(search), expected);
}

#[test]
fn decodes_filters_labels_and_scalars() {
    let record = parse_search_v2(
        "?period=7d&filters=((is,country,(US,DE)),(contains,page,(blog)))&labels=(US:United%20States,DE:Germany)&with_imported=false",
    );

    assert_eq!(
        record.filters,
        vec![Filter::new("is", "country", ["US", "DE"]), Filter::new("contains", "page", ["blog"])]
    );
    assert_eq!(
        record.labels,
        [("US", "United States"), ("DE", "Germany")].into_iter().collect::<Labels>()
    );
    assert_eq!(record.get_text("period").as_deref(), Some("7d"));
    assert_eq!(record.get("with_imported"), Some(&ScalarValue::Bool(false)));
}

#[test]
fn numeric_clauses_stay_numbers() {
    let record = parse_search_v2("?filters=((is,segment,(1)))");
    assert_eq!(record.filters, vec![Filter::new("is", "segment", [1])]);
}

#[test]
fn numeric_scalars_become_text() {
    let record = parse_search_v2("?filters=()&keybindHint=1");
    assert_eq!(record.get("keybindHint"), Some(&ScalarValue::from("1")));
}

#[test]
fn quoted_scalars_keep_literal_text() {
    let record = parse_search_v2("?filters=()&date='2024-01-01'&note='true'");
    assert_eq!(record.get_text("date").as_deref(), Some("2024-01-01"));
    assert_eq!(record.get("note"), Some(&ScalarValue::from("true")));
}

#[test]
fn malformed_fragments_are_dropped() {
    let record = parse_search_v2("?filters=((is,country,(US)))&labels=(US&period=(broken");
    assert_eq!(record.filters, vec![Filter::new("is", "country", ["US"])]);
    assert!(record.labels.is_empty());
    assert_eq!(record.get("period"), None);
}

#[test]
fn non_triple_filters_are_dropped() {
    let record = parse_search_v2("?filters=((is,country),(is,page,(/)),(is,os,Mac))");
    assert_eq!(record.filters, vec![Filter::new("is", "page", ["/"])]);
}

#[test]
fn empty_values_are_absent() {
    let record = parse_search_v2("?filters=()&period=&date");
    assert!(record.params.is_empty());
}
