// ABOUTME: End-to-end swimming flow tests from raw records to recommendations
// ABOUTME: Covers the breaststroke improvement scenario, goal lines, and axis inversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! End-to-end swimming scenario
//!
//! Exercises the full pipeline: raw swim records through normalization and
//! transformation, sessions through chart generation with inverted axes
//! and goal lines, and analytics through recommendations.

use chrono::{Duration, Utc};
use podium_core::models::{
    BasePerformanceMetric, MetricKind, MetricType, PerformanceSession, Program, TimePeriod,
};
use podium_intelligence::chart_builder::AxisInversion;
use podium_programs::raw::{RawPerformanceRecord, RawSwimRecord};
use podium_programs::swimming::domain;
use podium_programs::swimming::SwimmingAdapter;
use podium_programs::ProgramPerformanceAdapter;

const EPSILON: f64 = 1e-6;

fn swim_record(id: &str, date: &str, time: &str) -> RawPerformanceRecord {
    RawPerformanceRecord::Swimming(RawSwimRecord {
        id: id.to_owned(),
        date: Some(date.to_owned()),
        stroke: Some("breast".to_owned()),
        distance: Some("50".to_owned()),
        pool_size: Some("50m".to_owned()),
        time: Some(time.to_owned()),
        technique_score: None,
        notes: None,
    })
}

/// One session carrying a single 50m breaststroke time
fn breaststroke_session(days_ago: i64, seconds: f64, rating: Option<u8>) -> PerformanceSession {
    let mut session = PerformanceSession::new(
        Program::Swimming,
        Utc::now() - Duration::days(days_ago),
        "training",
    );
    session.duration_minutes = 60;
    session.rating = rating;
    session.metrics.push(BasePerformanceMetric::new(
        "breaststroke_50",
        "50m Breaststroke",
        seconds,
        MetricType::Time,
        "race",
        session.date,
    ));
    session
}

#[test]
fn test_raw_records_transform_with_normalized_stroke_names() {
    let adapter = SwimmingAdapter::new();
    let records = vec![
        swim_record("swim-1", "2026-08-01", "00:28.50"),
        swim_record("swim-2", "2026-08-05", "00:27.80"),
        swim_record("swim-3", "2026-08-10", "00:26.30"),
    ];
    let metrics = adapter.transform_metrics(&records).expect("valid records");
    assert_eq!(metrics.len(), 3);
    for metric in &metrics {
        assert_eq!(metric.id, "breaststroke_50");
        assert_eq!(metric.metric_type, MetricType::Time);
    }
    // Input order preserved
    assert_eq!(metrics[0].value.as_number(), Some(28.5));
    assert_eq!(metrics[2].value.as_number(), Some(26.3));
    // Personal best and derived goal attached to every time metric
    assert_eq!(metrics[0].personal_best, Some(26.3));
    assert!((metrics[0].goal.expect("goal derived") - 25.511).abs() < EPSILON);
}

#[test]
fn test_breaststroke_improvement_scenario() {
    // Times 28.50 on day 1, 27.80 on day 5, 26.30 on day 10:
    // improvement = (28.50 - 26.30) / 28.50 * 100 = 7.719... -> 7.7
    let times = [28.5, 27.8, 26.3];
    assert!((domain::calculate_improvement(&times) - 7.7).abs() < EPSILON);
    assert!((domain::personal_best(&times).expect("best exists") - 26.3).abs() < EPSILON);
}

#[test]
fn test_chart_has_goal_line_and_inverted_axis() {
    let adapter = SwimmingAdapter::new();
    let sessions = vec![
        breaststroke_session(10, 28.5, None),
        breaststroke_session(5, 27.8, None),
        breaststroke_session(1, 26.3, None),
    ];
    let charts = adapter.generate_charts(&sessions, TimePeriod::Month);
    let time_chart = charts
        .iter()
        .find(|chart| chart.metric_kind == MetricKind::Time)
        .expect("time chart present");

    // Display values are inverted: the fastest swim renders highest
    assert_eq!(time_chart.data.len(), 3);
    assert!(time_chart.data[2].value > time_chart.data[0].value);
    // True values survive in the formatted labels
    assert_eq!(
        time_chart.data[2].formatted_value.as_deref(),
        Some("00:26.30")
    );

    // Inverting back with the data bounds recovers the true values
    let inversion = AxisInversion {
        max_value: 28.5,
        min_value: 26.3,
    };
    assert!((inversion.to_actual(time_chart.data[0].value) - 28.5).abs() < EPSILON);
    assert!((inversion.to_actual(time_chart.data[2].value) - 26.3).abs() < EPSILON);
    // Goal line went through the same transform: true value 26.30 * 0.97
    let goal_displayed = time_chart.goal_line.expect("goal line present");
    assert!((inversion.to_actual(goal_displayed) - 25.511).abs() < EPSILON);
    // Personal best line likewise
    let best_displayed = time_chart.personal_best_line.expect("pb line present");
    assert!((inversion.to_actual(best_displayed) - 26.3).abs() < EPSILON);
}

#[test]
fn test_chart_data_is_date_ascending() {
    let adapter = SwimmingAdapter::new();
    // Handed in newest-first
    let sessions = vec![
        breaststroke_session(1, 26.3, None),
        breaststroke_session(10, 28.5, None),
        breaststroke_session(5, 27.8, None),
    ];
    let charts = adapter.generate_charts(&sessions, TimePeriod::Month);
    let time_chart = charts
        .iter()
        .find(|chart| chart.metric_kind == MetricKind::Time)
        .expect("time chart present");
    let dates: Vec<_> = time_chart
        .data
        .iter()
        .map(|point| point.date.expect("dated point"))
        .collect();
    assert!(dates.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_analytics_improvement_and_defined_only_rating() {
    let adapter = SwimmingAdapter::new();
    let sessions = vec![
        breaststroke_session(10, 28.5, None),
        breaststroke_session(1, 26.3, Some(4)),
    ];
    let analytics = adapter.calculate_analytics(&sessions, TimePeriod::Month);
    assert_eq!(analytics.total_sessions, 2);
    assert_eq!(analytics.total_duration_minutes, 120);
    // One rated session at 4 means average 4.0, never 2.0
    assert!((analytics.average_rating - 4.0).abs() < EPSILON);
    assert!(analytics.improvement_percent > 0.0);
    assert!(!analytics.strengths.is_empty());
}

#[test]
fn test_recommendations_follow_thresholds() {
    let adapter = SwimmingAdapter::new();
    // Two sessions is under the default minimum of three
    let sessions = vec![
        breaststroke_session(10, 28.5, None),
        breaststroke_session(1, 26.3, None),
    ];
    let analytics = adapter.calculate_analytics(&sessions, TimePeriod::Month);
    let recommendations = adapter.recommendations(Some(&analytics));
    assert!(!recommendations.is_empty());
    assert!(recommendations
        .iter()
        .any(|text| text.contains("sessions per period")));
}

#[test]
fn test_sentinel_times_never_reach_charts_or_improvement() {
    let adapter = SwimmingAdapter::new();
    let sessions = vec![
        breaststroke_session(10, 28.5, None),
        breaststroke_session(5, 0.0, None),
        breaststroke_session(1, 26.3, None),
    ];
    let charts = adapter.generate_charts(&sessions, TimePeriod::Month);
    let time_chart = charts
        .iter()
        .find(|chart| chart.metric_kind == MetricKind::Time)
        .expect("time chart present");
    // The sentinel entry is dropped, not plotted as zero
    assert_eq!(time_chart.data.len(), 2);

    let analytics = adapter.calculate_analytics(&sessions, TimePeriod::Month);
    // Improvement computed over the real endpoints only
    assert!((analytics.improvement_percent - 7.7).abs() < EPSILON);
}

#[test]
fn test_mixed_events_keep_separate_series() {
    let adapter = SwimmingAdapter::new();
    // Three 50m breaststroke swims plus one 400m freestyle at 5:10.00
    let mut sessions = vec![
        breaststroke_session(10, 28.5, None),
        breaststroke_session(5, 27.8, None),
        breaststroke_session(1, 26.3, None),
    ];
    let mut long_swim = PerformanceSession::new(
        Program::Swimming,
        Utc::now() - Duration::days(3),
        "training",
    );
    long_swim.duration_minutes = 60;
    long_swim.metrics.push(BasePerformanceMetric::new(
        "freestyle_400",
        "400m Freestyle",
        310.0,
        MetricType::Time,
        "race",
        long_swim.date,
    ));
    sessions.push(long_swim);

    // Improvement comes from the dominant event's series, so the 400m time
    // never reads as a regression against the 50m sprints
    let analytics = adapter.calculate_analytics(&sessions, TimePeriod::Month);
    assert!((analytics.improvement_percent - 7.7).abs() < EPSILON);

    // Each event gets its own chart with its own personal-best bounds
    let charts = adapter.generate_charts(&sessions, TimePeriod::Month);
    let long_chart = charts
        .iter()
        .find(|chart| chart.id == "swim_times_freestyle_400")
        .expect("400m chart present");
    assert_eq!(long_chart.data.len(), 1);
    // Single-point series: inversion maps the point onto itself, and the
    // true time survives in the formatted value
    assert_eq!(
        long_chart.data[0].formatted_value.as_deref(),
        Some("05:10.00")
    );
    let inversion = AxisInversion {
        max_value: 310.0,
        min_value: 310.0,
    };
    assert!((inversion.to_actual(long_chart.personal_best_line.expect("pb line")) - 310.0).abs()
        < EPSILON);
}

#[test]
fn test_charts_serialize_to_json() {
    let adapter = SwimmingAdapter::new();
    let sessions = vec![breaststroke_session(1, 26.3, None)];
    let charts = adapter.generate_charts(&sessions, TimePeriod::Week);
    let json = serde_json::to_string(&charts).expect("charts serialize");
    assert!(json.contains("metric_kind"));
}
