// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help output styling.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use clap::builder::styling::Styles;
use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes for help output.
pub mod codes {
    /// Section headers
    pub const HEADER: u8 = 74;
    /// Commands and flags
    pub const LITERAL: u8 = 250;
    /// Placeholders and defaults
    pub const CONTEXT: u8 = 245;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    styles_for(should_colorize())
}

fn styles_for(colorize: bool) -> Styles {
    if !colorize {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(color(codes::HEADER))
        .usage(color(codes::HEADER))
        .literal(color(codes::LITERAL))
        .placeholder(color(codes::CONTEXT))
        .valid(color(codes::CONTEXT))
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
