// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dq_core::{get_redirect_target, Location};

use crate::error::{Error, Result};

pub fn run(url: &str, check: bool) -> Result<()> {
    if let Some(target) = run_impl(url, check)? {
        println!("{target}");
    }
    Ok(())
}

/// Returns the rewrite target, or fails in check mode when one exists.
pub(crate) fn run_impl(url: &str, check: bool) -> Result<Option<String>> {
    match get_redirect_target(&Location::parse(url)) {
        Some(target) if check => Err(Error::RewriteNeeded { target }),
        target => Ok(target),
    }
}

#[cfg(test)]
#[path = "migrate_tests.rs"]
mod tests;
