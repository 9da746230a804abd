// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Chooses the filter directive: `--verbose`, then `DASHQ_LOG`, then `warn`.
pub fn filter_directive(verbose: bool, from_env: Option<String>) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    from_env.unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let directive = filter_directive(verbose, env::log_filter());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("warning: ignoring invalid DASHQ_LOG '{directive}': {e}");
        EnvFilter::new(DEFAULT_FILTER)
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
