// ABOUTME: Session aggregation shared by every program adapter's analytics
// ABOUTME: Totals, defined-only averages, and dated metric time series extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! Session aggregation
//!
//! The totals every program's analytics summary starts from. Averages only
//! count sessions that actually carry the field: a session without a rating
//! is excluded from both numerator and denominator, never treated as zero.

use chrono::{DateTime, Utc};
use podium_core::models::PerformanceSession;

/// Program-agnostic totals over a set of sessions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionAggregates {
    /// Number of sessions
    pub total_sessions: usize,
    /// Sum of session durations, minutes; summed, never averaged
    pub total_duration_minutes: u32,
    /// Mean rating over sessions that carry one, 0.0 when none do
    pub average_rating: f64,
    /// Mean difficulty over sessions that carry one, 0.0 when none do
    pub average_difficulty: f64,
}

impl SessionAggregates {
    /// Aggregate a slice of sessions
    #[must_use]
    pub fn from_sessions(sessions: &[PerformanceSession]) -> Self {
        let total_duration_minutes = sessions.iter().map(|s| s.duration_minutes).sum();
        Self {
            total_sessions: sessions.len(),
            total_duration_minutes,
            average_rating: defined_mean(sessions.iter().filter_map(|s| s.rating)),
            average_difficulty: defined_mean(sessions.iter().filter_map(|s| s.difficulty)),
        }
    }
}

fn defined_mean(values: impl Iterator<Item = u8>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0_usize;
    for value in values {
        sum += f64::from(value);
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Dated numeric values of one named metric across sessions, date-ascending
///
/// Sessions without the metric, or with a formatted-only value, contribute
/// nothing. The result is sorted by session date so improvement and chart
/// builders can consume it directly.
#[must_use]
pub fn metric_time_series(
    sessions: &[PerformanceSession],
    metric_id: &str,
) -> Vec<(DateTime<Utc>, f64)> {
    let mut series: Vec<(DateTime<Utc>, f64)> = sessions
        .iter()
        .filter_map(|session| {
            session
                .metric_value(metric_id)
                .map(|value| (session.date, value))
        })
        .collect();
    series.sort_by_key(|(date, _)| *date);
    series
}
