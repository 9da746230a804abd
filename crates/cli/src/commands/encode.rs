// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use dq_core::{stringify_search, SearchRecord};

use crate::error::Result;

use super::read_input;

pub fn run(file: Option<&Path>) -> Result<()> {
    let input = read_input(file)?;
    println!("{}", run_impl(&input)?);
    Ok(())
}

/// Encodes a JSON record as a query string.
pub(crate) fn run_impl(json: &str) -> Result<String> {
    let record: SearchRecord = serde_json::from_str(json)?;
    Ok(stringify_search(&record))
}

#[cfg(test)]
#[path = "encode_tests.rs"]
mod tests;
