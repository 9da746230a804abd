// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::path::PathBuf;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::DASHQ_LOG, "DASHQ_LOG");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
    assert_eq!(vars::DASHQ_STATE_DIR, "DASHQ_STATE_DIR");
    assert_eq!(vars::XDG_STATE_HOME, "XDG_STATE_HOME");
}

#[test]
fn test_log_filter() {
    std::env::remove_var("DASHQ_LOG");
    assert_eq!(log_filter(), None);

    std::env::set_var("DASHQ_LOG", "  ");
    assert_eq!(log_filter(), None);

    std::env::set_var("DASHQ_LOG", "dq_core=debug");
    assert_eq!(log_filter().as_deref(), Some("dq_core=debug"));
    std::env::remove_var("DASHQ_LOG");
}

#[test]
fn test_no_color() {
    std::env::remove_var("NO_COLOR");
    assert!(!no_color());

    std::env::set_var("NO_COLOR", "true");
    assert!(!no_color());

    std::env::set_var("NO_COLOR", "1");
    assert!(no_color());
    std::env::remove_var("NO_COLOR");
}

#[test]
fn test_force_color() {
    std::env::remove_var("COLOR");
    assert!(!force_color());

    std::env::set_var("COLOR", "1");
    assert!(force_color());
    std::env::remove_var("COLOR");
}

#[test]
fn test_state_dir() {
    std::env::remove_var("DASHQ_STATE_DIR");
    assert_eq!(state_dir(), None);

    std::env::set_var("DASHQ_STATE_DIR", "/tmp/dashq-test");
    assert_eq!(state_dir(), Some(PathBuf::from("/tmp/dashq-test")));
    std::env::remove_var("DASHQ_STATE_DIR");
}

#[test]
fn test_xdg_state_home() {
    std::env::remove_var("XDG_STATE_HOME");
    assert_eq!(xdg_state_home(), None);

    std::env::set_var("XDG_STATE_HOME", "/tmp/xdg-test");
    assert_eq!(xdg_state_home(), Some(PathBuf::from("/tmp/xdg-test")));
    std::env::remove_var("XDG_STATE_HOME");
}
