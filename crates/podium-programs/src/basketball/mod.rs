// ABOUTME: Basketball program adapter implementing the shared performance contract
// ABOUTME: Transforms raw stat lines into scoring, shooting, and playmaking metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! Basketball program adapter
//!
//! Structurally identical to the swimming adapter but thinner: counters
//! (points, assists, rebounds) default to zero when absent, shooting
//! percentages are computed only when attempts exist and are omitted
//! otherwise, never coerced to zero.

use chrono::Utc;
use podium_core::errors::{AppError, AppResult};
use podium_core::models::{
    BasePerformanceMetric, ChartDataPoint, ChartType, MetricKind, MetricType,
    PerformanceAnalytics, PerformanceChartData, PerformanceSession, Program,
    ProgramPerformanceConfig, TimePeriod,
};
use podium_intelligence::analytics::{metric_time_series, SessionAggregates};
use podium_intelligence::config::EngineConfig;
use podium_intelligence::statistics::{consistency_score, mean, round_to_decimals};
use tracing::debug;

use crate::core::ProgramPerformanceAdapter;
use crate::raw::RawPerformanceRecord;
use crate::utils::{finalize_recommendations, parse_record_date, trend_from_previous};

/// Consistency score at or above this counts as a strength
const CONSISTENCY_STRENGTH_THRESHOLD: f64 = 75.0;

/// Fallback recommendations when no analytics are available
const FALLBACK_RECOMMENDATIONS: &[&str] = &[
    "Log your game stats to start tracking progress",
    "Practice free throws daily to build a reliable routine",
    "Work on catch-and-shoot form from game spots",
];

/// Program adapter for basketball
pub struct BasketballAdapter {
    config: ProgramPerformanceConfig,
}

impl BasketballAdapter {
    /// Create the adapter with its static program descriptor
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ProgramPerformanceConfig::for_program(Program::Basketball),
        }
    }

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

    /// Percentage from made/attempted, `None` when attempts are absent or zero
    fn shooting_percentage(made: Option<u32>, attempted: Option<u32>) -> Option<f64> {
        match (made, attempted) {
            (Some(made), Some(attempted)) if attempted > 0 => {
                Some(round_to_decimals(f64::from(made) / f64::from(attempted) * 100.0, 1))
            }
            _ => None,
        }
    }
}

impl Default for BasketballAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramPerformanceAdapter for BasketballAdapter {
    fn program(&self) -> Program {
        Program::Basketball
    }

    fn config(&self) -> &ProgramPerformanceConfig {
        &self.config
    }

    fn validate_performance_data(&self, records: &[RawPerformanceRecord]) -> AppResult<()> {
        for record in records {
            let RawPerformanceRecord::Basketball(game) = record else {
                return Err(AppError::program_mismatch(format!(
                    "record is tagged {} but adapter handles basketball",
                    record.program()
                ))
                .with_record_id(record.id().to_owned()));
            };
            if game.id.trim().is_empty() {
                return Err(AppError::missing_field("id"));
            }
            for (field, made, attempted) in [
                ("field_goals", game.field_goals_made, game.field_goals_attempted),
                ("free_throws", game.free_throws_made, game.free_throws_attempted),
            ] {
                if let (Some(made), Some(attempted)) = (made, attempted) {
                    if made > attempted {
                        return Err(AppError::value_out_of_range(format!(
                            "{field}: {made} made exceeds {attempted} attempted"
                        ))
                        .with_field(field)
                        .with_record_id(game.id.clone()));
                    }
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

        let mut metrics = Vec::new();
        let mut previous_points: Option<f64> = None;
        for record in records {
            let RawPerformanceRecord::Basketball(game) = record else {
                continue;
            };
            let date = parse_record_date(game.date.as_deref());

            // Counters default to zero when absent
            let points = f64::from(game.points.unwrap_or(0));
            let mut points_metric = BasePerformanceMetric::new(
                "points",
                "Points",
                points,
                MetricType::Score,
                "shooting",
                date,
            )
            .with_unit("pts");
            if let Some(previous) = previous_points {
                if let Some(trend) = trend_from_previous(previous, points, "vs last game") {
                    points_metric = points_metric.with_trend(trend);
                }
            }
            previous_points = Some(points);
            metrics.push(points_metric);

            // Percentages are omitted when attempts are missing
            if let Some(pct) =
                Self::shooting_percentage(game.field_goals_made, game.field_goals_attempted)
            {
                metrics.push(
                    BasePerformanceMetric::new(
                        "field_goal_pct",
                        "Field Goal %",
                        pct,
                        MetricType::Percentage,
                        "shooting",
                        date,
                    )
                    .with_unit("%"),
                );
            }
            if let Some(pct) =
                Self::shooting_percentage(game.free_throws_made, game.free_throws_attempted)
            {
                metrics.push(
                    BasePerformanceMetric::new(
                        "free_throw_pct",
                        "Free Throw %",
                        pct,
                        MetricType::Percentage,
                        "shooting",
                        date,
                    )
                    .with_unit("%"),
                );
            }
            metrics.push(
                BasePerformanceMetric::new(
                    "assists",
                    "Assists",
                    f64::from(game.assists.unwrap_or(0)),
                    MetricType::Count,
                    "playmaking",
                    date,
                ),
            );
            metrics.push(
                BasePerformanceMetric::new(
                    "rebounds",
                    "Rebounds",
                    f64::from(game.rebounds.unwrap_or(0)),
                    MetricType::Count,
                    "defense",
                    date,
                ),
            );
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
        let owned: Vec<PerformanceSession> = filtered.iter().map(|&s| s.clone()).collect();
        let config = EngineConfig::global();
        let mut charts = Vec::new();

        let points_series = metric_time_series(&owned, "points");
        if !points_series.is_empty() {
            let mut chart = PerformanceChartData::new(
                "basketball_points",
                "Points per Game",
                ChartType::Bar,
                period,
                MetricKind::Count,
            )
            .with_axis_labels("Date", "Points");
            chart.data = points_series
                .iter()
                .map(|&(date, value)| {
                    ChartDataPoint::new(
                        date.format(&config.charts.date_label_format).to_string(),
                        value,
                    )
                    .with_date(date)
                })
                .collect();
            charts.push(chart);
        }

        let fg_series = metric_time_series(&owned, "field_goal_pct");
        if !fg_series.is_empty() {
            let mut chart = PerformanceChartData::new(
                "basketball_field_goal_pct",
                "Field Goal Percentage",
                ChartType::Line,
                period,
                MetricKind::Percentage,
            )
            .with_axis_labels("Date", "FG%");
            chart.data = fg_series
                .iter()
                .map(|&(date, value)| {
                    ChartDataPoint::new(
                        date.format(&config.charts.date_label_format).to_string(),
                        value,
                    )
                    .with_date(date)
                })
                .collect();
            chart.goal_line = Some(EngineConfig::global().basketball.min_field_goal_pct);
            charts.push(chart);
        }
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
        let thresholds = &EngineConfig::global().basketball;

        let points: Vec<f64> = metric_time_series(&owned, "points")
            .into_iter()
            .map(|(_, value)| value)
            .collect();
        // Higher is better for points, so improvement compares last to first
        let improvement = if points.len() >= 2 && points[0] > 0.0 {
            round_to_decimals(
                (points[points.len() - 1] - points[0]) / points[0] * 100.0,
                1,
            )
        } else {
            0.0
        };
        let consistency = round_to_decimals(consistency_score(&points), 1);

        let fg_pcts: Vec<f64> = metric_time_series(&owned, "field_goal_pct")
            .into_iter()
            .map(|(_, value)| value)
            .collect();
        let ft_pcts: Vec<f64> = metric_time_series(&owned, "free_throw_pct")
            .into_iter()
            .map(|(_, value)| value)
            .collect();

        let mut strengths = Vec::new();
        let mut focus_areas = Vec::new();
        if improvement > 0.0 {
            strengths.push("Scoring is trending up".to_owned());
        }
        if consistency >= CONSISTENCY_STRENGTH_THRESHOLD {
            strengths.push("Scoring output is consistent".to_owned());
        }
        if !fg_pcts.is_empty() {
            if mean(&fg_pcts) >= thresholds.min_field_goal_pct {
                strengths.push("Field goal percentage is healthy".to_owned());
            } else {
                focus_areas.push(format!(
                    "Field goal percentage below {:.0}%",
                    thresholds.min_field_goal_pct
                ));
            }
        }
        if !ft_pcts.is_empty() && mean(&ft_pcts) < thresholds.min_free_throw_pct {
            focus_areas.push(format!(
                "Free throw percentage below {:.0}%",
                thresholds.min_free_throw_pct
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
        let thresholds = &EngineConfig::global().basketball;
        let mut recommendations = Vec::new();
        if analytics.total_sessions < thresholds.min_sessions_per_period {
            recommendations.push(format!(
                "Get at least {} games or practices in per period",
                thresholds.min_sessions_per_period
            ));
        }
        for focus in &analytics.focus_areas {
            if focus.starts_with("Field goal") {
                recommendations
                    .push("Add shooting form work: start close and step out gradually".to_owned());
            } else if focus.starts_with("Free throw") {
                recommendations
                    .push("Shoot 50 free throws after each practice with a set routine".to_owned());
            }
        }
        if analytics.consistency_score < CONSISTENCY_STRENGTH_THRESHOLD {
            recommendations
                .push("Focus on shot selection to stabilize scoring between games".to_owned());
        }
        finalize_recommendations(recommendations, FALLBACK_RECOMMENDATIONS)
    }
}
