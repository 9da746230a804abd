// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that act on one site.

use clap::Args;

/// The site whose preferences a command reads or writes.
#[derive(Args, Clone, Debug, Default)]
pub struct DomainArgs {
    /// Site domain (e.g., "example.com")
    #[arg(long, short = 'd', value_parser = super::non_empty_string)]
    pub domain: String,
}
