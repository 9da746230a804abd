// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn migrate_v1_url() {
    dashq()
        .args(["migrate", "/example.com?page=~blog&period=day"])
        .assert()
        .success()
        .stdout("/example.com?f=contains,page,blog&period=day&r=v1\n");
}

#[test]
fn migrate_v2_url_keeps_hash() {
    dashq()
        .args([
            "migrate",
            "/example.com?period=7d&filters=((is,country,(US)))&labels=(US:United%20States)#top",
        ])
        .assert()
        .success()
        .stdout("/example.com?f=is,country,US&l=US,United+States&period=7d&r=v2#top\n");
}

#[test]
fn migrate_current_url_prints_nothing() {
    dashq()
        .args(["migrate", "/example.com?f=is,country,US&period=day"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn migrate_does_not_loop_on_marked_url() {
    dashq().args(["migrate", "/example.com?country=US&r=v1"]).assert().success().stdout("");
}

#[test]
fn migrate_check_fails_when_rewrite_needed() {
    dashq()
        .args(["migrate", "--check", "/example.com?country=US"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("url needs rewriting"));
}

#[test]
fn migrate_check_passes_current_url() {
    dashq().args(["migrate", "--check", "?period=day"]).assert().success();
}
