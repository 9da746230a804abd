// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for URL decoding, encoding and legacy rewriting.

#![allow(clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dq_core::time_settings::{TimeDefaults, TimeValues};
use dq_core::{build_dashboard_query, get_redirect_target, parse_search, stringify_search, Location, QueryContext};

const CURRENT: &[(&str, &str)] = &[
    ("scalars_only", "?period=7d&comparison=previous_period&match_day_of_week=true"),
    ("one_filter", "?f=is,country,US&l=US,United+States&period=day"),
    (
        "many_filters",
        "?f=is,country,US,DE,FR&f=contains,page,/blog&f=is_not,browser,Chrome&f=has_not_done,goal,Signup&l=US,United+States&l=DE,Germany&l=FR,France&period=month&date=2024-03-01",
    ),
];

const LEGACY: &[(&str, &str)] = &[
    ("v1", "/example.com?country=US|DE&page=~blog&props=%7B%22plan%22%3A%22pro%22%7D&period=day"),
    ("v2", "/example.com?filters=((is,country,(US,DE)),(contains,page,(blog)))&labels=(US:United%20States)&period=7d"),
];

fn decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for (name, search) in CURRENT {
        group.bench_with_input(BenchmarkId::new("parse_search", name), search, |b, s| {
            b.iter(|| parse_search(s))
        });
    }
    group.finish();
}

fn encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for (name, search) in CURRENT {
        let record = parse_search(search);
        group.bench_function(BenchmarkId::new("stringify_search", name), |b| {
            b.iter(|| stringify_search(&record))
        });
    }
    group.finish();
}

fn redirect(c: &mut Criterion) {
    let mut group = c.benchmark_group("redirect");
    for (name, url) in LEGACY {
        let location = Location::parse(url);
        group.bench_function(BenchmarkId::new("get_redirect_target", name), |b| {
            b.iter(|| get_redirect_target(&location))
        });
    }
    let current = Location::parse("/example.com?f=is,country,US&period=day");
    group.bench_function("current_passthrough", |b| b.iter(|| get_redirect_target(&current)));
    group.finish();
}

fn resolve(c: &mut Criterion) {
    let record = parse_search(CURRENT[2].1);
    let stored = TimeValues::default();
    let defaults = TimeDefaults::default();
    let ctx = QueryContext {
        segments: &[],
        stored_values: &stored,
        default_values: &defaults,
        segment_is_expanded: false,
    };
    c.bench_function("build_dashboard_query", |b| {
        b.iter(|| build_dashboard_query(&record, &ctx).expect("valid query"))
    });
}

criterion_group!(benches, decode, encode, redirect, resolve);
criterion_main!(benches);
