// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use dq_core::{get_redirect_target, Location, SearchRecord, UrlVersion};

use crate::error::{Error, Result};

use super::decode_location;

pub fn run(url: &str) -> Result<()> {
    let record = run_impl(url)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

/// Decodes a current URL. Legacy URLs are refused with their rewrite target.
pub(crate) fn run_impl(url: &str) -> Result<SearchRecord> {
    let location = Location::parse(url);
    if let Some(target) = get_redirect_target(&location) {
        return Err(Error::LegacyUrl {
            version: UrlVersion::detect(&location.search).to_string(),
            target,
        });
    }
    Ok(decode_location(&location))
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod tests;
