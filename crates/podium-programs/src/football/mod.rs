// ABOUTME: Football program adapter implementing the shared performance contract
// ABOUTME: Transforms raw match records into involvement, distribution, and physical metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! Football program adapter
//!
//! Same structure as the other adapters: counters (goals, assists, sprints,
//! tackles) default to zero when absent, pass accuracy is computed only
//! when attempts exist and is omitted otherwise.

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
    "Log your match stats to start tracking progress",
    "Add two conditioning runs per week between matches",
    "Practice first-touch passing drills to lift pass accuracy",
];

/// Program adapter for football
pub struct FootballAdapter {
    config: ProgramPerformanceConfig,
}

impl FootballAdapter {
    /// Create the adapter with its static program descriptor
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ProgramPerformanceConfig::for_program(Program::Football),
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
}

impl Default for FootballAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramPerformanceAdapter for FootballAdapter {
    fn program(&self) -> Program {
        Program::Football
    }

    fn config(&self) -> &ProgramPerformanceConfig {
        &self.config
    }

    fn validate_performance_data(&self, records: &[RawPerformanceRecord]) -> AppResult<()> {
        for record in records {
            let RawPerformanceRecord::Football(entry) = record else {
                return Err(AppError::program_mismatch(format!(
                    "record is tagged {} but adapter handles football",
                    record.program()
                ))
                .with_record_id(record.id().to_owned()));
            };
            if entry.id.trim().is_empty() {
                return Err(AppError::missing_field("id"));
            }
            if let (Some(completed), Some(attempted)) =
                (entry.passes_completed, entry.passes_attempted)
            {
                if completed > attempted {
                    return Err(AppError::value_out_of_range(format!(
                        "passes: {completed} completed exceeds {attempted} attempted"
                    ))
                    .with_field("passes")
                    .with_record_id(entry.id.clone()));
                }
            }
            if let Some(distance) = entry.distance_covered_km {
                if distance < 0.0 {
                    return Err(AppError::value_out_of_range(format!(
                        "distance covered {distance} km is negative"
                    ))
                    .with_field("distance_covered_km")
                    .with_record_id(entry.id.clone()));
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
        let mut previous_distance: Option<f64> = None;
        for record in records {
            let RawPerformanceRecord::Football(entry) = record else {
                continue;
            };
            let date = parse_record_date(entry.date.as_deref());

            metrics.push(
                BasePerformanceMetric::new(
                    "goals",
                    "Goals",
                    f64::from(entry.goals.unwrap_or(0)),
                    MetricType::Score,
                    "attack",
                    date,
                ),
            );
            metrics.push(
                BasePerformanceMetric::new(
                    "assists",
                    "Assists",
                    f64::from(entry.assists.unwrap_or(0)),
                    MetricType::Count,
                    "attack",
                    date,
                ),
            );
            // Pass accuracy is omitted when attempts are missing
            if let (Some(completed), Some(attempted)) =
                (entry.passes_completed, entry.passes_attempted)
            {
                if attempted > 0 {
                    metrics.push(
                        BasePerformanceMetric::new(
                            "pass_accuracy_pct",
                            "Pass Accuracy",
                            round_to_decimals(
                                f64::from(completed) / f64::from(attempted) * 100.0,
                                1,
                            ),
                            MetricType::Percentage,
                            "distribution",
                            date,
                        )
                        .with_unit("%"),
                    );
                }
            }
            let distance = entry.distance_covered_km.unwrap_or(0.0);
            let mut distance_metric = BasePerformanceMetric::new(
                "distance_covered_km",
                "Distance Covered",
                distance,
                MetricType::Distance,
                "physical",
                date,
            )
            .with_unit("km");
            if distance > 0.0 {
                if let Some(previous) = previous_distance {
                    if let Some(trend) = trend_from_previous(previous, distance, "vs last match")
                    {
                        distance_metric = distance_metric.with_trend(trend);
                    }
                }
                previous_distance = Some(distance);
            }
            metrics.push(distance_metric);
            metrics.push(
                BasePerformanceMetric::new(
                    "sprints",
                    "Sprints",
                    f64::from(entry.sprints.unwrap_or(0)),
                    MetricType::Count,
                    "physical",
                    date,
                ),
            );
            metrics.push(
                BasePerformanceMetric::new(
                    "tackles",
                    "Tackles",
                    f64::from(entry.tackles.unwrap_or(0)),
                    MetricType::Count,
                    "physical",
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

        let distance_series = metric_time_series(&owned, "distance_covered_km");
        if !distance_series.is_empty() {
            let mut chart = PerformanceChartData::new(
                "football_distance",
                "Distance Covered per Match",
                ChartType::Line,
                period,
                MetricKind::Count,
            )
            .with_axis_labels("Date", "Kilometers");
            chart.data = distance_series
                .iter()
                .map(|&(date, value)| {
                    ChartDataPoint::new(
                        date.format(&config.charts.date_label_format).to_string(),
                        value,
                    )
                    .with_date(date)
                })
                .collect();
            chart.goal_line = Some(config.football.min_distance_km_per_match);
            charts.push(chart);
        }

        let accuracy_series = metric_time_series(&owned, "pass_accuracy_pct");
        if !accuracy_series.is_empty() {
            let mut chart = PerformanceChartData::new(
                "football_pass_accuracy",
                "Pass Accuracy",
                ChartType::Line,
                period,
                MetricKind::Percentage,
            )
            .with_axis_labels("Date", "Accuracy %");
            chart.data = accuracy_series
                .iter()
                .map(|&(date, value)| {
                    ChartDataPoint::new(
                        date.format(&config.charts.date_label_format).to_string(),
                        value,
                    )
                    .with_date(date)
                })
                .collect();
            chart.goal_line = Some(config.football.min_pass_accuracy_pct);
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
        let thresholds = &EngineConfig::global().football;

        let accuracy: Vec<f64> = metric_time_series(&owned, "pass_accuracy_pct")
            .into_iter()
            .map(|(_, value)| value)
            .collect();
        // Higher is better for pass accuracy
        let improvement = if accuracy.len() >= 2 && accuracy[0] > 0.0 {
            round_to_decimals(
                (accuracy[accuracy.len() - 1] - accuracy[0]) / accuracy[0] * 100.0,
                1,
            )
        } else {
            0.0
        };
        let distances: Vec<f64> = metric_time_series(&owned, "distance_covered_km")
            .into_iter()
            .map(|(_, value)| value)
            .filter(|&km| km > 0.0)
            .collect();
        let consistency = round_to_decimals(consistency_score(&distances), 1);

        let mut strengths = Vec::new();
        let mut focus_areas = Vec::new();
        if improvement > 0.0 {
            strengths.push("Pass accuracy is trending up".to_owned());
        }
        if consistency >= CONSISTENCY_STRENGTH_THRESHOLD {
            strengths.push("Physical output is consistent between matches".to_owned());
        }
        if !accuracy.is_empty() {
            if mean(&accuracy) >= thresholds.min_pass_accuracy_pct {
                strengths.push("Pass accuracy is healthy".to_owned());
            } else {
                focus_areas.push(format!(
                    "Pass accuracy below {:.0}%",
                    thresholds.min_pass_accuracy_pct
                ));
            }
        }
        if !distances.is_empty() && mean(&distances) < thresholds.min_distance_km_per_match {
            focus_areas.push(format!(
                "Distance covered below {:.0} km per match",
                thresholds.min_distance_km_per_match
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
        let thresholds = &EngineConfig::global().football;
        let mut recommendations = Vec::new();
        if analytics.total_sessions < thresholds.min_sessions_per_period {
            recommendations.push(format!(
                "Aim for at least {} matches or training sessions per period",
                thresholds.min_sessions_per_period
            ));
        }
        for focus in &analytics.focus_areas {
            if focus.starts_with("Pass accuracy") {
                recommendations
                    .push("Run rondo and first-touch drills to lift pass accuracy".to_owned());
            } else if focus.starts_with("Distance covered") {
                recommendations
                    .push("Add interval conditioning to raise match distance".to_owned());
            }
        }
        if analytics.consistency_score < CONSISTENCY_STRENGTH_THRESHOLD {
            recommendations.push(
                "Standardize warm-up and pacing so physical output holds up late in matches"
                    .to_owned(),
            );
        }
        finalize_recommendations(recommendations, FALLBACK_RECOMMENDATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawFootballRecord;

    #[test]
    fn test_validate_rejects_completed_over_attempted() {
        let adapter = FootballAdapter::new();
        let record = RawPerformanceRecord::Football(RawFootballRecord {
            id: "match-1".to_owned(),
            passes_completed: Some(40),
            passes_attempted: Some(30),
            ..RawFootballRecord::default()
        });
        let err = adapter.validate_performance_data(&[record]).unwrap_err();
        assert_eq!(err.context.field.as_deref(), Some("passes"));
    }

    #[test]
    fn test_validate_rejects_negative_distance() {
        let adapter = FootballAdapter::new();
        let record = RawPerformanceRecord::Football(RawFootballRecord {
            id: "match-1".to_owned(),
            distance_covered_km: Some(-2.0),
            ..RawFootballRecord::default()
        });
        assert!(adapter.validate_performance_data(&[record]).is_err());
    }

    #[test]
    fn test_pass_accuracy_computed_and_rounded() {
        let adapter = FootballAdapter::new();
        let record = RawPerformanceRecord::Football(RawFootballRecord {
            id: "match-1".to_owned(),
            date: Some("2026-06-01".to_owned()),
            passes_completed: Some(34),
            passes_attempted: Some(41),
            ..RawFootballRecord::default()
        });
        let metrics = adapter.transform_metrics(&[record]).unwrap();
        let accuracy = metrics
            .iter()
            .find(|m| m.id == "pass_accuracy_pct")
            .unwrap();
        assert_eq!(accuracy.value.as_number(), Some(82.9));
    }

    #[test]
    fn test_missing_attempts_omit_pass_accuracy() {
        let adapter = FootballAdapter::new();
        let record = RawPerformanceRecord::Football(RawFootballRecord {
            id: "match-1".to_owned(),
            goals: Some(1),
            ..RawFootballRecord::default()
        });
        let metrics = adapter.transform_metrics(&[record]).unwrap();
        assert!(metrics.iter().all(|m| m.id != "pass_accuracy_pct"));
        let goals = metrics.iter().find(|m| m.id == "goals").unwrap();
        assert_eq!(goals.value.as_number(), Some(1.0));
    }

    #[test]
    fn test_generate_charts_empty_input() {
        let adapter = FootballAdapter::new();
        assert!(adapter.generate_charts(&[], TimePeriod::Month).is_empty());
    }

    #[test]
    fn test_recommendations_fallback_is_never_empty() {
        let adapter = FootballAdapter::new();
        assert!(!adapter.recommendations(None).is_empty());
    }
}
