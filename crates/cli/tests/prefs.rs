// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn prefs_set_and_get() {
    let temp = TempDir::new().unwrap();
    dashq_in(&temp)
        .args(["prefs", "set", "period", "month", "-d", "example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set period = month for example.com"));

    dashq_in(&temp)
        .args(["prefs", "get", "period", "-d", "example.com"])
        .assert()
        .success()
        .stdout("month\n");
}

#[test]
fn prefs_get_missing_prints_nothing() {
    let temp = TempDir::new().unwrap();
    dashq_in(&temp)
        .args(["prefs", "get", "comparison_mode", "-d", "example.com"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn prefs_list_in_key_order() {
    let temp = TempDir::new().unwrap();
    set_pref(&temp, "example.com", "period", "7d");
    set_pref(&temp, "example.com", "comparison_mode", "previous_period");
    set_pref(&temp, "other.org", "period", "year");

    dashq_in(&temp)
        .args(["prefs", "list", "-d", "example.com"])
        .assert()
        .success()
        .stdout("comparison_mode = previous_period\nperiod = 7d\n");
}

#[test]
fn prefs_clear_only_touches_one_site() {
    let temp = TempDir::new().unwrap();
    set_pref(&temp, "example.com", "period", "7d");
    set_pref(&temp, "example.com", "comparison_match_day_of_week", "false");
    set_pref(&temp, "other.org", "period", "year");

    dashq_in(&temp)
        .args(["prefs", "clear", "-d", "example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 2 preference(s) for example.com"));

    dashq_in(&temp)
        .args(["prefs", "get", "period", "-d", "other.org"])
        .assert()
        .success()
        .stdout("year\n");
}

#[test]
fn prefs_rejects_unknown_key() {
    let temp = TempDir::new().unwrap();
    dashq_in(&temp)
        .args(["prefs", "set", "theme", "dark", "-d", "example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preference: 'theme'"));
}

#[test]
fn prefs_rejects_session_only_values() {
    let temp = TempDir::new().unwrap();
    for (key, value) in [("period", "custom"), ("period", "realtime"), ("comparison_mode", "custom")] {
        dashq_in(&temp)
            .args(["prefs", "set", key, value, "-d", "example.com"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(format!("invalid value for {key}")));
    }
}

#[test]
fn prefs_rejects_empty_domain() {
    let temp = TempDir::new().unwrap();
    dashq_in(&temp).args(["prefs", "list", "-d", "  "]).assert().failure();
}
