// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_decode_takes_url() {
    let cli = parse(&["dashq", "decode", "/example.com?f=is,country,US"]).unwrap();
    match cli.command {
        Command::Decode { url } => assert_eq!(url, "/example.com?f=is,country,US"),
        _ => panic!("Expected Decode command"),
    }
}

#[test]
fn test_encode_file_is_optional() {
    let cli = parse(&["dashq", "encode"]).unwrap();
    match cli.command {
        Command::Encode { file } => assert_eq!(file, None),
        _ => panic!("Expected Encode command"),
    }

    let cli = parse(&["dashq", "encode", "record.json"]).unwrap();
    match cli.command {
        Command::Encode { file } => assert_eq!(file, Some(PathBuf::from("record.json"))),
        _ => panic!("Expected Encode command"),
    }
}

#[test]
fn test_migrate_check_flag() {
    let cli = parse(&["dashq", "migrate", "--check", "?country=US"]).unwrap();
    match cli.command {
        Command::Migrate { url, check } => {
            assert_eq!(url, "?country=US");
            assert!(check);
        }
        _ => panic!("Expected Migrate command"),
    }
}

#[test]
fn test_resolve_flags() {
    let cli = parse(&[
        "dashq",
        "resolve",
        "?period=year",
        "-d",
        "example.com",
        "--segments",
        "segments.json",
        "--expanded",
        "--no-persist",
    ])
    .unwrap();
    match cli.command {
        Command::Resolve { url, site, segments, expanded, no_persist } => {
            assert_eq!(url, "?period=year");
            assert_eq!(site.domain, "example.com");
            assert_eq!(segments, Some(PathBuf::from("segments.json")));
            assert!(expanded);
            assert!(no_persist);
        }
        _ => panic!("Expected Resolve command"),
    }
}

#[test]
fn test_resolve_requires_domain() {
    assert!(parse(&["dashq", "resolve", "?period=year"]).is_err());
}

#[test]
fn test_shift_parses_date_and_direction() {
    let cli = parse(&[
        "dashq",
        "shift",
        "?period=day",
        "--domain",
        "example.com",
        "--stats-begin",
        "2024-01-01",
        "--offset",
        "-3600",
        "--direction",
        "prev",
    ])
    .unwrap();
    match cli.command {
        Command::Shift { stats_begin, offset, direction, .. } => {
            assert_eq!(stats_begin, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
            assert_eq!(offset, -3600);
            assert_eq!(direction, ShiftDirection::Prev);
        }
        _ => panic!("Expected Shift command"),
    }
}

#[test]
fn test_shift_rejects_bad_values() {
    let base = ["dashq", "shift", "?period=day", "-d", "example.com"];

    let mut args = base.to_vec();
    args.extend(["--stats-begin", "01/01/2024", "--direction", "prev"]);
    assert!(parse(&args).is_err());

    let mut args = base.to_vec();
    args.extend(["--stats-begin", "2024-01-01", "--direction", "sideways"]);
    assert!(parse(&args).is_err());
}

#[test]
fn test_bad_stats_begin_reports_date_format() {
    let err = parse(&[
        "dashq",
        "shift",
        "?period=day",
        "-d",
        "example.com",
        "--stats-begin",
        "2024-13-01",
        "--direction",
        "prev",
    ])
    .err()
    .unwrap();
    let msg = err.to_string();
    assert!(msg.contains("invalid date: '2024-13-01'"));
    assert!(msg.contains("YYYY-MM-DD"));
}
