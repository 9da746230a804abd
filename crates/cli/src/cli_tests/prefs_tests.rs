// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_prefs_get() {
    let cli = parse(&["dashq", "prefs", "get", "period", "-d", "example.com"]).unwrap();
    match cli.command {
        Command::Prefs { command: PrefsCommand::Get { key, site } } => {
            assert_eq!(key, "period");
            assert_eq!(site.domain, "example.com");
        }
        _ => panic!("Expected Prefs Get command"),
    }
}

#[test]
fn test_prefs_set() {
    let cli = parse(&["dashq", "prefs", "set", "comparison_mode", "off", "--domain", "example.com"])
        .unwrap();
    match cli.command {
        Command::Prefs { command: PrefsCommand::Set { key, value, site } } => {
            assert_eq!(key, "comparison_mode");
            assert_eq!(value, "off");
            assert_eq!(site.domain, "example.com");
        }
        _ => panic!("Expected Prefs Set command"),
    }
}

#[test]
fn test_prefs_list_and_clear() {
    assert!(matches!(
        parse(&["dashq", "prefs", "list", "-d", "example.com"]).unwrap().command,
        Command::Prefs { command: PrefsCommand::List { .. } }
    ));
    assert!(matches!(
        parse(&["dashq", "prefs", "clear", "-d", "example.com"]).unwrap().command,
        Command::Prefs { command: PrefsCommand::Clear { .. } }
    ));
}

#[test]
fn test_prefs_set_requires_value() {
    assert!(parse(&["dashq", "prefs", "set", "period", "-d", "example.com"]).is_err());
}

#[test]
fn test_config_set_parses_key_and_value() {
    let cli = parse(&["dashq", "config", "set", "default_period", "7d"]).unwrap();
    match cli.command {
        Command::Config { command: ConfigCommand::Set { key, value } } => {
            assert_eq!(key, "default_period");
            assert_eq!(value, "7d");
        }
        _ => panic!("Expected Config Set command"),
    }
}

#[test]
fn test_config_show_takes_no_arguments() {
    let cli = parse(&["dashq", "config", "show"]).unwrap();
    assert!(matches!(cli.command, Command::Config { command: ConfigCommand::Show }));
    assert!(parse(&["dashq", "config", "show", "extra"]).is_err());
}
