// ABOUTME: Criterion benchmarks for analytics aggregation and chart post-processing
// ABOUTME: Measures aggregation, consistency scoring, and time-chart inversion throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! Criterion benchmarks for the shared analytics hot path.
//!
//! Measures session aggregation, consistency scoring, time-series
//! extraction, and the inverted-axis chart transform over synthetic
//! session batches.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use podium_core::models::{
    BasePerformanceMetric, ChartDataPoint, ChartType, MetricKind, MetricType,
    PerformanceChartData, PerformanceSession, Program, TimePeriod,
};
use podium_intelligence::analytics::{metric_time_series, SessionAggregates};
use podium_intelligence::chart_builder::invert_time_chart;
use podium_intelligence::statistics::consistency_score;

/// Large dataset size for stress testing (500 sessions)
const LARGE_DATASET_SIZE: usize = 500;

#[allow(clippy::cast_precision_loss)]
fn generate_sessions(count: usize) -> Vec<PerformanceSession> {
    let base_date = Utc::now();
    (0..count)
        .map(|index| {
            let mut session = PerformanceSession::new(
                Program::Swimming,
                base_date - Duration::days(index as i64),
                "training",
            );
            session.duration_minutes = 60 + (index as u32 % 30);
            session.rating = (index % 3 != 0).then_some(1 + (index as u8 % 5));
            session.difficulty = Some(1 + (index as u8 % 10));
            let seconds = 26.0 + ((index * 137) % 400) as f64 / 100.0;
            session.metrics.push(BasePerformanceMetric::new(
                "freestyle_50",
                "50m Freestyle",
                seconds,
                MetricType::Time,
                "race",
                session.date,
            ));
            session
        })
        .collect()
}

fn build_time_chart(points: usize) -> PerformanceChartData {
    let mut chart = PerformanceChartData::new(
        "bench_times",
        "Benchmark Times",
        ChartType::Line,
        TimePeriod::All,
        MetricKind::Time,
    );
    chart.data = (0..points)
        .map(|index| {
            ChartDataPoint::new(
                format!("{index}"),
                26.0 + ((index * 251) % 300) as f64 / 100.0,
            )
        })
        .collect();
    chart.goal_line = Some(25.5);
    chart.personal_best_line = Some(26.0);
    chart
}

fn bench_session_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_aggregation");
    for size in [50_usize, 200, LARGE_DATASET_SIZE] {
        let sessions = generate_sessions(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &sessions,
            |b, sessions| {
                b.iter(|| SessionAggregates::from_sessions(black_box(sessions)));
            },
        );
    }
    group.finish();
}

fn bench_time_series_and_consistency(c: &mut Criterion) {
    let sessions = generate_sessions(LARGE_DATASET_SIZE);
    c.bench_function("metric_time_series_500", |b| {
        b.iter(|| metric_time_series(black_box(&sessions), black_box("freestyle_50")));
    });

    let values: Vec<f64> = metric_time_series(&sessions, "freestyle_50")
        .into_iter()
        .map(|(_, value)| value)
        .collect();
    c.bench_function("consistency_score_500", |b| {
        b.iter(|| consistency_score(black_box(&values)));
    });
}

fn bench_chart_inversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart_inversion");
    for points in [50_usize, 500] {
        let chart = build_time_chart(points);
        group.throughput(Throughput::Elements(points as u64));
        group.bench_with_input(BenchmarkId::from_parameter(points), &chart, |b, chart| {
            b.iter(|| invert_time_chart(black_box(chart.clone())));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_session_aggregation,
    bench_time_series_and_consistency,
    bench_chart_inversion
);
criterion_main!(benches);
