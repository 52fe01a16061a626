// ABOUTME: Swimming program adapter implementing the shared performance contract
// ABOUTME: Transforms raw swim records, builds inverted time charts, derives analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! Swimming program adapter
//!
//! The most complete adapter: raw swim records flow through the domain
//! normalization layer into time metrics, per-event time charts with goal
//! lines on an inverted axis, and an analytics summary with
//! threshold-driven recommendations.

use std::collections::HashMap;

use chrono::Utc;
use podium_core::constants::percentages;
use podium_core::errors::{AppError, AppResult};
use podium_core::models::{
    BasePerformanceMetric, ChartDataPoint, ChartType, MetricKind, MetricType,
    PerformanceAnalytics, PerformanceChartData, PerformanceSession, Program,
    ProgramPerformanceConfig, TimePeriod,
};
use podium_intelligence::analytics::SessionAggregates;
use podium_intelligence::chart_builder::invert_time_chart;
use podium_intelligence::config::EngineConfig;
use podium_intelligence::statistics::{consistency_score, mean, round_to_decimals};
use tracing::debug;

use crate::core::ProgramPerformanceAdapter;
use crate::raw::RawPerformanceRecord;
use crate::swimming::domain::{
    self, parse_time_string, PoolSize, Stroke, SwimDistance, SwimmingPerformanceMetric,
    SwimmingSession, SwimmingTimeDetail,
};
use crate::utils::{finalize_recommendations, parse_record_date, trend_from_previous};

/// Consistency score at or above this counts as a strength
const CONSISTENCY_STRENGTH_THRESHOLD: f64 = 75.0;

/// Fallback recommendations when no analytics are available
const FALLBACK_RECOMMENDATIONS: &[&str] = &[
    "Log your swim times to start tracking progress",
    "Aim for at least three swim sessions per week",
    "Mix stroke technique work with aerobic distance sets",
];

/// Program adapter for competitive swimming
pub struct SwimmingAdapter {
    config: ProgramPerformanceConfig,
}

impl SwimmingAdapter {
    /// Create the adapter with its static program descriptor
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ProgramPerformanceConfig::for_program(Program::Swimming),
        }
    }

    /// Sessions belonging to this program inside the period, date-ascending
    fn filter_sessions<'a>(
        &self,
        sessions: &'a [PerformanceSession],
        period: TimePeriod,
    ) -> Vec<&'a PerformanceSession> {
        let mut filtered: Vec<&PerformanceSession> = sessions
            .iter()
            .filter(|session| {
                if session.program != self.program() {
                    debug!(session_id = %session.id, "dropping session from another program");
                    return false;
                }
                period.contains(session.date)
            })
            .collect();
        filtered.sort_by_key(|session| session.date);
        filtered
    }

    /// Distinct time-metric ids across sessions, in first-appearance order
    fn time_metric_ids(sessions: &[&PerformanceSession]) -> Vec<(String, String)> {
        let mut ids: Vec<(String, String)> = Vec::new();
        for session in sessions {
            for metric in &session.metrics {
                if metric.metric_type == MetricType::Time
                    && !ids.iter().any(|(id, _)| id == &metric.id)
                {
                    ids.push((metric.id.clone(), metric.title.clone()));
                }
            }
        }
        ids
    }

    /// Total meters raced across sessions, derived from time-metric ids
    ///
    /// Time metric ids end in the event distance (`freestyle_50`), so the
    /// period's race volume is the sum of those suffixes.
    fn total_distance_meters(sessions: &[&PerformanceSession]) -> f64 {
        sessions
            .iter()
            .flat_map(|session| &session.metrics)
            .filter(|metric| metric.metric_type == MetricType::Time)
            .filter_map(|metric| {
                metric
                    .id
                    .rsplit_once('_')
                    .and_then(|(_, meters)| meters.parse::<f64>().ok())
            })
            .sum()
    }

    /// Mean technique score across sessions that recorded one
    fn average_technique_score(sessions: &[&PerformanceSession]) -> Option<f64> {
        let scores: Vec<f64> = sessions
            .iter()
            .filter_map(|session| session.metric_value("technique_score"))
            .collect();
        if scores.is_empty() {
            None
        } else {
            Some(mean(&scores))
        }
    }
}

impl Default for SwimmingAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramPerformanceAdapter for SwimmingAdapter {
    fn program(&self) -> Program {
        Program::Swimming
    }

    fn config(&self) -> &ProgramPerformanceConfig {
        &self.config
    }

    fn validate_performance_data(&self, records: &[RawPerformanceRecord]) -> AppResult<()> {
        for record in records {
            let RawPerformanceRecord::Swimming(swim) = record else {
                return Err(AppError::program_mismatch(format!(
                    "record is tagged {} but adapter handles swimming",
                    record.program()
                ))
                .with_record_id(record.id().to_owned()));
            };
            if swim.id.trim().is_empty() {
                return Err(AppError::missing_field("id"));
            }
            if let Some(score) = swim.technique_score {
                if !(percentages::MIN_PERCENT..=percentages::MAX_PERCENT).contains(&score) {
                    return Err(AppError::value_out_of_range(format!(
                        "technique score {score} outside 0-100"
                    ))
                    .with_field("technique_score")
                    .with_record_id(swim.id.clone()));
                }
            }
        }
        Ok(())
    }

    fn transform_metrics(
        &self,
        records: &[RawPerformanceRecord],
    ) -> AppResult<Vec<BasePerformanceMetric>> {
        self.validate_performance_data(records)?;

        let mut entries: Vec<(SwimmingPerformanceMetric, Option<BasePerformanceMetric>)> =
            Vec::with_capacity(records.len());
        let mut previous_times: HashMap<String, f64> = HashMap::new();
        for record in records {
            let RawPerformanceRecord::Swimming(swim) = record else {
                // validate_performance_data already rejected mismatches
                continue;
            };
            let date = parse_record_date(swim.date.as_deref());
            let detail = SwimmingTimeDetail {
                date,
                stroke: Stroke::normalize(swim.stroke.as_deref().unwrap_or_default()),
                distance: SwimDistance::normalize(swim.distance.as_deref().unwrap_or_default()),
                pool_size: PoolSize::normalize(swim.pool_size.as_deref().unwrap_or_default()),
                time_seconds: parse_time_string(swim.time.as_deref().unwrap_or_default()),
            };
            let mut metric = SwimmingPerformanceMetric {
                detail,
                trend: None,
                personal_best: None,
                goal: None,
            };
            // Trends compare within one event only
            if metric.detail.time_seconds > 0.0 {
                let event = metric.detail.metric_id();
                if let Some(&previous) = previous_times.get(&event) {
                    metric.trend = trend_from_previous(
                        previous,
                        metric.detail.time_seconds,
                        "vs previous swim",
                    );
                }
                previous_times.insert(event, metric.detail.time_seconds);
            }
            let technique = swim.technique_score.map(|score| {
                BasePerformanceMetric::new(
                    "technique_score",
                    "Technique Score",
                    score,
                    MetricType::Percentage,
                    "technique",
                    date,
                )
                .with_unit("%")
            });
            entries.push((metric, technique));
        }

        // Personal bests and goals are scoped per event; a 50m sprint time
        // never stamps a 400m swim
        let mut event_times: HashMap<String, Vec<f64>> = HashMap::new();
        for (metric, _) in &entries {
            if metric.detail.time_seconds > 0.0 {
                event_times
                    .entry(metric.detail.metric_id())
                    .or_default()
                    .push(metric.detail.time_seconds);
            }
        }
        let factor = EngineConfig::global().swimming.goal_improvement_factor;
        let mut metrics = Vec::new();
        for (mut metric, technique) in entries {
            if let Some(best) = event_times
                .get(&metric.detail.metric_id())
                .and_then(|times| domain::personal_best(times))
            {
                metric.personal_best = Some(best);
                metric.goal = Some(best * factor);
            }
            metrics.push(metric.into());
            if let Some(technique) = technique {
                metrics.push(technique);
            }
        }
        Ok(metrics)
    }

    fn generate_charts(
        &self,
        sessions: &[PerformanceSession],
        period: TimePeriod,
    ) -> Vec<PerformanceChartData> {
        let filtered = self.filter_sessions(sessions, period);
        if filtered.is_empty() {
            return Vec::new();
        }
        let swim_sessions: Vec<SwimmingSession> = filtered
            .iter()
            .map(|&session| SwimmingSession::from_session(session))
            .collect();

        let mut charts = Vec::new();
        for (metric_id, title) in Self::time_metric_ids(&filtered) {
            let entries: Vec<SwimmingTimeDetail> = swim_sessions
                .iter()
                .flat_map(|session| &session.times)
                .filter(|detail| detail.metric_id() == metric_id)
                .cloned()
                .collect();
            let chart = domain::build_time_chart(
                &format!("swim_times_{metric_id}"),
                &format!("{title} Times"),
                &entries,
                period,
                None,
            );
            if !chart.data.is_empty() {
                charts.push(invert_time_chart(chart));
            }
        }

        // Training volume passes through without inversion
        let config = EngineConfig::global();
        let mut minutes = PerformanceChartData::new(
            "swim_training_minutes",
            "Training Minutes",
            ChartType::Bar,
            period,
            MetricKind::Count,
        )
        .with_axis_labels("Date", "Minutes");
        minutes.data = filtered
            .iter()
            .map(|session| {
                ChartDataPoint::new(
                    session
                        .date
                        .format(&config.charts.date_label_format)
                        .to_string(),
                    f64::from(session.duration_minutes),
                )
                .with_date(session.date)
            })
            .collect();
        charts.push(minutes);
        charts
    }

    fn calculate_analytics(
        &self,
        sessions: &[PerformanceSession],
        period: TimePeriod,
    ) -> PerformanceAnalytics {
        let filtered = self.filter_sessions(sessions, period);
        if filtered.is_empty() {
            return PerformanceAnalytics::empty(self.program(), period);
        }
        let owned: Vec<PerformanceSession> = filtered.iter().map(|&s| s.clone()).collect();
        let aggregates = SessionAggregates::from_sessions(&owned);
        let thresholds = &EngineConfig::global().swimming;

        // Each event is its own time series; the dominant event (the one
        // with the most recorded times, ties broken by id) drives the
        // period's improvement and consistency numbers. Mixing events would
        // report a 400m split as a regression against a 50m sprint.
        let swim_sessions: Vec<SwimmingSession> = filtered
            .iter()
            .map(|&session| SwimmingSession::from_session(session))
            .collect();
        let mut event_series: HashMap<String, Vec<f64>> = HashMap::new();
        for session in &swim_sessions {
            for detail in &session.times {
                if detail.time_seconds > 0.0 {
                    event_series
                        .entry(detail.metric_id())
                        .or_default()
                        .push(detail.time_seconds);
                }
            }
        }
        let mut ranked: Vec<(&String, &Vec<f64>)> = event_series.iter().collect();
        ranked.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(b.0)));
        let dominant = ranked.first().map(|&(_, times)| times.as_slice());
        let improvement = dominant.map_or(0.0, domain::calculate_improvement);
        let consistency =
            dominant.map_or(0.0, |times| round_to_decimals(consistency_score(times), 1));

        let mut strengths = Vec::new();
        let mut focus_areas = Vec::new();
        if improvement > 0.0 {
            strengths.push("Race times are trending faster".to_owned());
        } else if improvement < 0.0 {
            focus_areas.push("Recent times are slower than earlier in the period".to_owned());
        }
        if consistency >= CONSISTENCY_STRENGTH_THRESHOLD {
            strengths.push("Race times are consistent between sessions".to_owned());
        }
        if let Some(technique) = Self::average_technique_score(&filtered) {
            if technique >= thresholds.min_technique_score {
                strengths.push("Technique scores are solid".to_owned());
            } else {
                focus_areas.push(format!(
                    "Technique needs work: average score below {:.0}",
                    thresholds.min_technique_score
                ));
            }
        }
        if Self::total_distance_meters(&filtered) < thresholds.min_distance_meters_per_period {
            focus_areas.push(format!(
                "Build base volume: under {:.0}m raced this period",
                thresholds.min_distance_meters_per_period
            ));
        }
        if aggregates.total_sessions < thresholds.min_sessions_per_period {
            focus_areas.push(format!(
                "Increase frequency: fewer than {} sessions this period",
                thresholds.min_sessions_per_period
            ));
        }

        PerformanceAnalytics {
            program: self.program(),
            period,
            total_sessions: aggregates.total_sessions,
            total_duration_minutes: aggregates.total_duration_minutes,
            average_rating: aggregates.average_rating,
            average_difficulty: aggregates.average_difficulty,
            improvement_percent: improvement,
            consistency_score: consistency,
            strengths,
            focus_areas,
            generated_at: Utc::now(),
        }
    }

    fn recommendations(&self, analytics: Option<&PerformanceAnalytics>) -> Vec<String> {
        let Some(analytics) = analytics.filter(|a| a.total_sessions > 0) else {
            return finalize_recommendations(Vec::new(), FALLBACK_RECOMMENDATIONS);
        };
        let thresholds = &EngineConfig::global().swimming;
        let mut recommendations = Vec::new();
        if analytics.total_sessions < thresholds.min_sessions_per_period {
            recommendations.push(format!(
                "Schedule at least {} swim sessions per period to build momentum",
                thresholds.min_sessions_per_period
            ));
        }
        if analytics.improvement_percent < 0.0 {
            recommendations
                .push("Add a recovery week, then rebuild speed with short sprint sets".to_owned());
        }
        if analytics.consistency_score < CONSISTENCY_STRENGTH_THRESHOLD {
            recommendations
                .push("Work on pacing: times vary widely between sessions".to_owned());
        }
        for focus in &analytics.focus_areas {
            if focus.starts_with("Technique") {
                recommendations
                    .push("Add stroke drills to raise your technique score".to_owned());
            } else if focus.starts_with("Build base volume") {
                recommendations
                    .push("Extend aerobic sets to build base distance volume".to_owned());
            }
        }
        finalize_recommendations(recommendations, FALLBACK_RECOMMENDATIONS)
    }
}
