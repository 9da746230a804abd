// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

fn resolve(temp: &TempDir, args: &[&str]) -> serde_json::Value {
    let stdout = stdout_of(dashq_in(temp).arg("resolve").args(args));
    serde_json::from_str(&stdout).unwrap()
}

#[test]
fn resolve_defaults() {
    let temp = TempDir::new().unwrap();
    let query = resolve(&temp, &["/example.com", "-d", "example.com"]);
    assert_eq!(query["period"], "28d");
    assert_eq!(query["comparison"], serde_json::Value::Null);
    assert_eq!(query["match_day_of_week"], true);
    assert_eq!(query["with_imported"], true);
}

#[test]
fn resolve_remembers_url_choices() {
    let temp = TempDir::new().unwrap();
    resolve(&temp, &["?period=year&comparison=year_over_year", "-d", "example.com"]);

    let query = resolve(&temp, &["/example.com", "-d", "example.com"]);
    assert_eq!(query["period"], "year");
    assert_eq!(query["comparison"], "year_over_year");

    // Preferences are per site.
    let other = resolve(&temp, &["/other.org", "-d", "other.org"]);
    assert_eq!(other["period"], "28d");
}

#[test]
fn resolve_no_persist() {
    let temp = TempDir::new().unwrap();
    resolve(&temp, &["?period=year", "-d", "example.com", "--no-persist"]);
    let query = resolve(&temp, &["", "-d", "example.com"]);
    assert_eq!(query["period"], "28d");
}

#[test]
fn resolve_custom_period_needs_range() {
    let temp = TempDir::new().unwrap();
    let query = resolve(&temp, &["?period=custom", "-d", "example.com"]);
    assert_eq!(query["period"], "28d");

    let query = resolve(&temp, &["?period=custom&from=2024-01-01&to=2024-01-31", "-d", "example.com"]);
    assert_eq!(query["period"], "custom");
    assert_eq!(query["from"], "2024-01-01");
}

#[test]
fn resolve_expands_segment() {
    let temp = TempDir::new().unwrap();
    let segments = temp.path().join("segments.json");
    std::fs::write(
        &segments,
        r#"[{"id": 7, "name": "EU", "type": "site",
             "segment_data": {"filters": [["is", "country", ["DE", "FR"]]], "labels": {}}}]"#,
    )
    .unwrap();

    let query = resolve(
        &temp,
        &["?f=is,segment,7&f=is,page,/", "-d", "example.com", "--segments", segments.to_str().unwrap()],
    );
    assert_eq!(
        query["resolved_filters"],
        serde_json::json!([["is", "country", ["DE", "FR"]], ["is", "page", ["/"]]])
    );
}

#[test]
fn resolve_rejects_two_segments() {
    let temp = TempDir::new().unwrap();
    dashq_in(&temp)
        .args(["resolve", "?f=is,segment,1&f=is,segment,2", "-d", "example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("only one segment"));
}

#[test]
fn resolve_uses_config_defaults() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "default_period = \"7d\"\n").unwrap();
    let query = resolve(&temp, &["", "-d", "example.com"]);
    assert_eq!(query["period"], "7d");
}

#[test]
fn resolve_requires_domain() {
    let temp = TempDir::new().unwrap();
    dashq_in(&temp).args(["resolve", "?period=day"]).assert().failure();
}
