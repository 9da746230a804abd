// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_verbose_defaults_off() {
    let cli = parse(&["dashq", "decode", "?period=day"]).unwrap();
    assert!(!cli.verbose);
}

#[test]
fn test_verbose_is_global() {
    let cli = parse(&["dashq", "decode", "?period=day", "--verbose"]).unwrap();
    assert!(cli.verbose);

    let cli = parse(&["dashq", "--verbose", "decode", "?period=day"]).unwrap();
    assert!(cli.verbose);
}

#[test]
fn test_missing_subcommand_fails() {
    assert!(parse(&["dashq"]).is_err());
}

#[test]
fn test_empty_domain_rejected() {
    assert!(parse(&["dashq", "prefs", "list", "--domain", "  "]).is_err());
}
