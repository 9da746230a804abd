// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dq_core::ShiftDirection;

use crate::help;

pub use args::DomainArgs;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a `YYYY-MM-DD` date.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    dq_core::time_settings::parse_date(s).ok_or_else(|| dq_core::Error::InvalidDate(s.to_string()).to_string())
}

fn parse_direction(s: &str) -> Result<ShiftDirection, String> {
    s.parse().map_err(|e: dq_core::Error| e.to_string())
}

#[derive(Parser)]
#[command(name = "dashq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect, migrate and resolve analytics dashboard URLs")]
#[command(
    long_about = "Inspect, migrate and resolve analytics dashboard URLs.\n\n\
    Decodes the dashboard query string, rewrites legacy links, and resolves periods and \
    comparisons against preferences stored per site."
)]
#[command(styles = help::styles())]
pub struct Cli {
    /// Log at debug level (overrides DASHQ_LOG)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a dashboard URL and print its state as JSON
    #[command(after_help = "\
Examples:
  dashq decode '/example.com?f=is,country,US&period=7d'
  dashq decode '?f=is,page,/blog&l=US,United+States'")]
    Decode {
        /// URL, path or query string
        url: String,
    },

    /// Encode a JSON record as a dashboard query string
    #[command(after_help = "\
Examples:
  dashq encode record.json
  dashq decode '?period=day' | dashq encode")]
    Encode {
        /// JSON file to read (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Rewrite a legacy dashboard URL into the current encoding
    #[command(after_help = "\
Examples:
  dashq migrate '/example.com?country=US&period=day'
  dashq migrate --check \"$URL\" || echo \"needs rewrite\"")]
    Migrate {
        /// URL, path or query string
        url: String,

        /// Exit with status 1 instead of printing when a rewrite is needed
        #[arg(long)]
        check: bool,
    },

    /// Resolve the dashboard query for a URL
    #[command(after_help = "\
Examples:
  dashq resolve '?period=year' -d example.com
  dashq resolve '?f=is,segment,7' -d example.com --segments segments.json")]
    Resolve {
        /// URL, path or query string
        url: String,

        #[command(flatten)]
        site: DomainArgs,

        /// JSON file with the site's saved segments
        #[arg(long)]
        segments: Option<PathBuf>,

        /// Treat the applied segment as open for editing
        #[arg(long)]
        expanded: bool,

        /// Do not store the URL's period and comparison choices
        #[arg(long)]
        no_persist: bool,
    },

    /// Manage stored preferences
    Prefs {
        #[command(subcommand)]
        command: PrefsCommand,
    },

    /// Show or change the CLI defaults in config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Print the URL for the previous or next period
    #[command(after_help = "\
Examples:
  dashq shift '?period=day&date=2024-06-10' -d example.com --stats-begin 2024-01-01 --direction prev
  dashq shift '?period=month' -d example.com --stats-begin 2023-05-01 --direction next")]
    Shift {
        /// URL, path or query string
        url: String,

        #[command(flatten)]
        site: DomainArgs,

        /// First day with stats
        #[arg(long, value_parser = parse_date)]
        stats_begin: NaiveDate,

        /// Site timezone offset from UTC, in seconds
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,

        /// Direction to step: prev or next
        #[arg(long, value_parser = parse_direction)]
        direction: ShiftDirection,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Change one setting and write config.toml
    #[command(
        arg_required_else_help = true,
        after_help = "\
Examples:
  dashq config set default_period 7d
  dashq config set default_comparison off
  dashq config set database /var/lib/dashq/prefs.db"
    )]
    Set {
        /// default_period, default_comparison, default_match_day_of_week or database
        key: String,

        /// Value to store
        value: String,
    },
}

#[derive(Subcommand)]
pub enum PrefsCommand {
    /// Print one stored preference
    Get {
        /// period, comparison_mode or comparison_match_day_of_week
        key: String,

        #[command(flatten)]
        site: DomainArgs,
    },

    /// Store a preference
    Set {
        /// period, comparison_mode or comparison_match_day_of_week
        key: String,

        /// Value to store
        value: String,

        #[command(flatten)]
        site: DomainArgs,
    },

    /// List stored preferences
    List {
        #[command(flatten)]
        site: DomainArgs,
    },

    /// Remove all stored preferences
    Clear {
        #[command(flatten)]
        site: DomainArgs,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
