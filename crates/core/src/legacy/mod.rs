// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decoders for the URL encodings that preceded the current codec.
//!
//! Each is only used to read old links; nothing is ever encoded back into a
//! legacy format.

pub mod jsonurl;
pub mod v1;
pub mod v2;

pub use v1::{is_v1, parse_search_v1};
pub use v2::{is_v2, parse_search_v2};
