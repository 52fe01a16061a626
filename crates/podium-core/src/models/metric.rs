// ABOUTME: Common metric model shared by every program adapter
// ABOUTME: Defines metric types, values, trends, and the base performance metric structure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of quantity a metric measures
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    /// Elapsed time, seconds internally, `MM:SS.ss` when formatted
    Time,
    /// Distance covered, unit given by the metric's `unit` field
    Distance,
    /// Points or goals scored
    Score,
    /// Rate expressed as 0-100
    Percentage,
    /// Plain event count
    Count,
    /// Subjective 1-5 rating
    Rating,
    /// Skill level index
    Level,
}

/// Value payload of a metric
///
/// Time metrics may carry either raw seconds or an already formatted
/// `MM:SS.ss` string; the `metric_type` on the owning metric disambiguates.
/// The two representations are never mixed for one metric instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    /// Numeric value, seconds for time metrics
    Number(f64),
    /// Pre-formatted display value
    Formatted(String),
}

impl MetricValue {
    /// Numeric view of the value, `None` when only a formatted string is held
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Formatted(_) => None,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        Self::Formatted(value)
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Formatted(value) => write!(f, "{value}"),
        }
    }
}

/// Direction of a metric trend between consecutive records
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Value increased since the previous record
    Up,
    /// Value decreased since the previous record
    Down,
    /// Value unchanged within measurement tolerance
    Neutral,
}

/// Trend annotation attached to a metric
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricTrend {
    /// Direction of change
    pub direction: TrendDirection,
    /// Magnitude of change as a percentage of the previous value
    pub change_percent: f64,
    /// Human-readable window the trend covers
    pub period_label: String,
}

/// Normalized performance metric shared across programs
///
/// Program adapters map their raw records into this shape so charts and
/// analytics never need program-specific knowledge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasePerformanceMetric {
    /// Stable identifier, e.g. `freestyle_50`
    pub id: String,
    /// Display title, e.g. `50m Freestyle`
    pub title: String,
    /// Metric value, numeric or formatted
    pub value: MetricValue,
    /// Unit label, e.g. `seconds`, `points`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Kind of quantity measured
    pub metric_type: MetricType,
    /// Trend versus the previous record, when computable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<MetricTrend>,
    /// Grouping category, e.g. `technique`, `shooting`
    pub category: String,
    /// When the underlying record was produced
    pub last_updated: DateTime<Utc>,
    /// Target value, lower is better for time metrics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<f64>,
    /// Best value on record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_best: Option<f64>,
}

impl BasePerformanceMetric {
    /// Create a metric with the required fields, optional ones unset
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        value: impl Into<MetricValue>,
        metric_type: MetricType,
        category: impl Into<String>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            value: value.into(),
            unit: None,
            metric_type,
            trend: None,
            category: category.into(),
            last_updated,
            goal: None,
            personal_best: None,
        }
    }

    /// Set the unit label
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Attach a trend annotation
    #[must_use]
    pub fn with_trend(mut self, trend: MetricTrend) -> Self {
        self.trend = Some(trend);
        self
    }

    /// Set the goal value
    #[must_use]
    pub const fn with_goal(mut self, goal: f64) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Set the personal best value
    #[must_use]
    pub const fn with_personal_best(mut self, personal_best: f64) -> Self {
        self.personal_best = Some(personal_best);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_value_untagged_serialization() {
        let number = MetricValue::Number(26.3);
        assert_eq!(serde_json::to_string(&number).unwrap(), "26.3");

        let formatted = MetricValue::Formatted("00:26.30".into());
        assert_eq!(serde_json::to_string(&formatted).unwrap(), "\"00:26.30\"");
    }

    #[test]
    fn test_metric_value_untagged_deserialization() {
        let number: MetricValue = serde_json::from_str("26.3").unwrap();
        assert_eq!(number, MetricValue::Number(26.3));

        let formatted: MetricValue = serde_json::from_str("\"00:26.30\"").unwrap();
        assert_eq!(formatted, MetricValue::Formatted("00:26.30".into()));
    }

    #[test]
    fn test_optional_fields_are_omitted_from_json() {
        let metric = BasePerformanceMetric::new(
            "freestyle_50",
            "50m Freestyle",
            26.3,
            MetricType::Time,
            "race",
            Utc::now(),
        );
        let json = serde_json::to_string(&metric).unwrap();
        assert!(!json.contains("unit"));
        assert!(!json.contains("trend"));
        assert!(!json.contains("goal"));
    }

    #[test]
    fn test_builder_style_setters() {
        let metric = BasePerformanceMetric::new(
            "free_throw_pct",
            "Free Throw %",
            85.0,
            MetricType::Percentage,
            "shooting",
            Utc::now(),
        )
        .with_unit("%")
        .with_goal(90.0);

        assert_eq!(metric.unit.as_deref(), Some("%"));
        assert_eq!(metric.goal, Some(90.0));
        assert_eq!(metric.value.as_number(), Some(85.0));
    }
}
