// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dq-core: dashboard query state
//!
//! This crate holds the filter and segment model, the URL codecs (current
//! and legacy), the legacy link redirector, time-period resolution and the
//! preference stores used by the dashq CLI.

pub mod clock;
pub mod codec;
pub mod db;
pub mod error;
pub mod filter;
pub mod labels;
pub mod legacy;
pub mod migrate;
pub mod period;
pub mod prefs;
pub mod query;
pub mod search;
pub mod segment;
pub mod shift;
pub mod site;
pub mod time_settings;

pub use clock::{ClockSource, FixedClock, SystemClock};
pub use codec::{parse_search, stringify_search};
pub use db::Database;
pub use error::{Error, Result};
pub use filter::{Clause, Filter, FilterOperation};
pub use labels::Labels;
pub use migrate::{get_redirect_target, Location, UrlVersion};
pub use period::{ComparisonMode, Period};
pub use prefs::{MemoryStore, PreferenceStore};
pub use query::{build_dashboard_query, DashboardQuery, QueryContext};
pub use search::{ScalarValue, SearchRecord};
pub use segment::{Segment, SegmentData, SegmentType};
pub use shift::{get_date_for_shifted_period, ShiftDirection};
pub use site::Site;
pub use time_settings::{TimeDefaults, TimeSettings, TimeValues};
