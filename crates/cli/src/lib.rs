// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dqrs - dashboard query-state tooling.
//!
//! This crate provides the commands behind the `dashq` CLI: decoding and
//! encoding dashboard URLs, rewriting legacy links, resolving the dashboard
//! query and managing the per-site preferences stored in SQLite.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - argument parsing
//! - [`Config`] - defaults and database location from the state directory
//! - [`Error`] - error type for all commands
//!
//! ```rust,ignore
//! use dqrs::{run, Command};
//!
//! run(Command::Decode { url: "/example.com?period=7d".to_string() })?;
//! ```

mod cli;
mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod help;
pub mod logging;

pub use cli::{Cli, Command, ConfigCommand, DomainArgs, PrefsCommand};
pub use config::{get_db_path, state_dir, Config};
pub use error::{Error, Result};

use dq_core::Site;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Decode { url } => commands::decode::run(&url),
        Command::Encode { file } => commands::encode::run(file.as_deref()),
        Command::Migrate { url, check } => commands::migrate::run(&url, check),
        Command::Resolve {
            url,
            site,
            segments,
            expanded,
            no_persist,
        } => commands::resolve::run(&url, &site.domain, segments.as_deref(), expanded, no_persist),
        Command::Prefs { command } => commands::prefs::run(command),
        Command::Config { command } => commands::config::run(command),
        Command::Shift {
            url,
            site,
            stats_begin,
            offset,
            direction,
        } => {
            let site = Site::new(site.domain, offset, stats_begin);
            commands::shift::run(&url, &site, direction)
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
