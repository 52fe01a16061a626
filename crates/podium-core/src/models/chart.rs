// ABOUTME: Chart-ready data structures produced by program adapters
// ABOUTME: Defines chart types, metric kinds, data points, and the chart payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TimePeriod;

/// Visual form a chart should take
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    /// Time series line
    Line,
    /// Categorical bars
    Bar,
    /// Share-of-whole pie
    Pie,
    /// Filled time series
    Area,
    /// Multi-axis skill radar
    Radar,
    /// Single progress gauge
    Progress,
}

/// Kind of quantity a chart's y-axis carries
///
/// Carried explicitly on every chart so consumers never have to guess from
/// titles whether lower values mean better performance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Seconds, lower is better, rendered on an inverted axis
    Time,
    /// Plain counts, higher is better
    Count,
    /// 0-100 rates, higher is better
    Percentage,
}

/// One point in a chart series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartDataPoint {
    /// Axis label, e.g. `06/15`
    pub label: String,
    /// Plotted value; for inverted time charts this is the display value
    pub value: f64,
    /// Source date, when the point is dated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Per-point color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// True value rendered for tooltips, e.g. `00:26.30`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_value: Option<String>,
}

impl ChartDataPoint {
    /// Create a point without optional annotations
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            date: None,
            color: None,
            formatted_value: None,
        }
    }

    /// Attach the source date
    #[must_use]
    pub const fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Attach the formatted display value
    #[must_use]
    pub fn with_formatted_value(mut self, formatted: impl Into<String>) -> Self {
        self.formatted_value = Some(formatted.into());
        self
    }
}

/// Chart payload handed to a renderer
///
/// `data` is ordered ascending by source date; builders sort once at
/// construction and nothing downstream reorders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceChartData {
    /// Stable chart identifier, e.g. `swim_times_freestyle_50`
    pub id: String,
    /// Chart title
    pub title: String,
    /// Visual form
    pub chart_type: ChartType,
    /// Series points, date-ascending
    pub data: Vec<ChartDataPoint>,
    /// X axis label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_label: Option<String>,
    /// Y axis label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_label: Option<String>,
    /// Series color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Window the chart covers
    pub period: TimePeriod,
    /// Quantity kind on the y axis
    pub metric_kind: MetricKind,
    /// Goal reference line, in the same axis space as `data`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_line: Option<f64>,
    /// Personal best reference line, in the same axis space as `data`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_best_line: Option<f64>,
}

impl PerformanceChartData {
    /// Create an empty chart scaffold
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        chart_type: ChartType,
        period: TimePeriod,
        metric_kind: MetricKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            chart_type,
            data: Vec::new(),
            x_axis_label: None,
            y_axis_label: None,
            color: None,
            period,
            metric_kind,
            goal_line: None,
            personal_best_line: None,
        }
    }

    /// Set both axis labels
    #[must_use]
    pub fn with_axis_labels(
        mut self,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        self.x_axis_label = Some(x_label.into());
        self.y_axis_label = Some(y_label.into());
        self
    }

    /// Set the series color
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
