// ABOUTME: Chart data post-processing shared by every program adapter
// ABOUTME:Inverted-axis transform for time charts plus the legacy title heuristic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! Chart data building
//!
//! Time charts need an inverted axis: lower times are better, but renderers
//! draw larger values higher. The transform here flips the geometry while
//! keeping true values available for labels and goal comparisons.

use podium_core::models::{MetricKind, PerformanceChartData};
use tracing::debug;

/// Captured axis bounds for the inverted-axis transform
///
/// The bounds are computed once from the data series and reused for every
/// point and for the goal and personal-best lines. Recomputing after goal
/// insertion would shift the geometry and make the goal line visually
/// inconsistent with the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisInversion {
    /// Largest value in the data series
    pub max_value: f64,
    /// Smallest value in the data series
    pub min_value: f64,
}

impl AxisInversion {
    /// Capture bounds from a data series, `None` when the series is empty
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut max_value = f64::MIN;
        let mut min_value = f64::MAX;
        for &value in values {
            max_value = max_value.max(value);
            min_value = min_value.min(value);
        }
        Some(Self {
            max_value,
            min_value,
        })
    }

    /// Map a true value into display space
    #[must_use]
    pub fn to_display(&self, raw: f64) -> f64 {
        (self.max_value + self.min_value) - raw
    }

    /// Map a displayed value (e.g. an axis tick) back to the true value
    ///
    /// The transform is its own inverse, so this is the same arithmetic as
    /// [`Self::to_display`]; the separate name keeps call sites readable.
    #[must_use]
    pub fn to_actual(&self, displayed: f64) -> f64 {
        (self.max_value + self.min_value) - displayed
    }
}

/// Apply the inverted-axis transform to a time chart
///
/// Dispatch is by `metric_kind`: only [`MetricKind::Time`] charts are
/// transformed, everything else passes through untouched. Point values,
/// the goal line, and the personal-best line all move into display space
/// using the same bounds captured from the data series; `formatted_value`
/// labels keep the true values.
#[must_use]
pub fn invert_time_chart(mut chart: PerformanceChartData) -> PerformanceChartData {
    if chart.metric_kind != MetricKind::Time {
        return chart;
    }
    let values: Vec<f64> = chart.data.iter().map(|point| point.value).collect();
    let Some(inversion) = AxisInversion::from_values(&values) else {
        debug!(chart_id = %chart.id, "skipping axis inversion for empty time chart");
        return chart;
    };
    for point in &mut chart.data {
        point.value = inversion.to_display(point.value);
    }
    if let Some(goal) = chart.goal_line {
        chart.goal_line = Some(inversion.to_display(goal));
    }
    if let Some(best) = chart.personal_best_line {
        chart.personal_best_line = Some(inversion.to_display(best));
    }
    chart
}

/// Legacy heuristic for callers without kind information
///
/// Sniffs for the substring `time` (case-insensitive) in the title or axis
/// label. This is a heuristic, not a guarantee; prefer the explicit
/// `metric_kind` carried on [`PerformanceChartData`].
#[must_use]
pub fn looks_like_time_chart(title: &str, y_axis_label: Option<&str>) -> bool {
    title.to_lowercase().contains("time")
        || y_axis_label.is_some_and(|label| label.to_lowercase().contains("time"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use podium_core::models::{ChartDataPoint, ChartType, TimePeriod};

    const EPSILON: f64 = 1e-9;

    fn time_chart(values: &[f64]) -> PerformanceChartData {
        let mut chart = PerformanceChartData::new(
            "swim_times",
            "Swim Times",
            ChartType::Line,
            TimePeriod::Month,
            MetricKind::Time,
        );
        chart.data = values
            .iter()
            .enumerate()
            .map(|(index, &value)| ChartDataPoint::new(format!("{index}"), value))
            .collect();
        chart
    }

    #[test]
    fn test_inversion_is_self_inverse() {
        let inversion = AxisInversion::from_values(&[26.3, 27.8, 28.5]).unwrap();
        for value in [26.3, 27.0, 27.8, 28.5] {
            let round_trip = inversion.to_actual(inversion.to_display(value));
            assert!((round_trip - value).abs() < EPSILON);
        }
    }

    #[test]
    fn test_from_values_rejects_empty() {
        assert!(AxisInversion::from_values(&[]).is_none());
    }

    #[test]
    fn test_faster_time_displays_higher() {
        let chart = invert_time_chart(time_chart(&[28.5, 27.8, 26.3]));
        // 26.3 is the fastest time, so its display value must be the largest
        assert!(chart.data[2].value > chart.data[0].value);
        assert!(chart.data[2].value > chart.data[1].value);
    }

    #[test]
    fn test_goal_line_uses_data_bounds() {
        let mut chart = time_chart(&[28.5, 27.8, 26.3]);
        chart.goal_line = Some(25.511);
        chart.personal_best_line = Some(26.3);
        let inverted = invert_time_chart(chart);
        // Bounds come from the data (max 28.5, min 26.3), never from the
        // goal value, so display(goal) = (28.5 + 26.3) - 25.511
        let goal = inverted.goal_line.unwrap();
        assert!((goal - (28.5 + 26.3 - 25.511)).abs() < EPSILON);
        // The goal beats the personal best, so it displays above it
        assert!(goal > inverted.personal_best_line.unwrap());
    }

    #[test]
    fn test_non_time_chart_passes_through() {
        let mut chart = time_chart(&[10.0, 20.0]);
        chart.metric_kind = MetricKind::Count;
        let untouched = invert_time_chart(chart.clone());
        assert_eq!(untouched, chart);
    }

    #[test]
    fn test_empty_time_chart_passes_through() {
        let chart = invert_time_chart(time_chart(&[]));
        assert!(chart.data.is_empty());
    }

    #[test]
    fn test_looks_like_time_chart_heuristic() {
        assert!(looks_like_time_chart("50m Freestyle Times", None));
        assert!(looks_like_time_chart("Progress", Some("Time (seconds)")));
        assert!(!looks_like_time_chart("Points per Game", Some("Points")));
    }
}
