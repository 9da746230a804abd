// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn dashq() -> Command {
    cargo_bin_cmd!("dashq")
}

/// A `dashq` command whose preferences live in the given temp directory.
pub fn dashq_in(temp: &TempDir) -> Command {
    let mut cmd = dashq();
    cmd.env("DASHQ_STATE_DIR", temp.path()).env_remove("DASHQ_LOG");
    cmd
}

/// Helper to store a preference and assert success
pub fn set_pref(temp: &TempDir, domain: &str, key: &str, value: &str) {
    dashq_in(temp)
        .args(["prefs", "set", key, value, "-d", domain])
        .assert()
        .success();
}

/// Runs a command and returns its stdout
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Compares command output, showing a diff on mismatch
pub fn assert_output(actual: &str, expected: &str) {
    similar_asserts::assert_eq!(actual, expected);
}
