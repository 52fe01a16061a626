// ABOUTME: Strict swimming domain types and the normalization layer over raw swim input
// ABOUTME: Stroke/distance/pool normalization, time parsing and formatting, improvement math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! # Swimming Domain Normalization
//!
//! Raw swim records arrive with inconsistent stroke names (`free`, `Fly`,
//! `IM`), mixed time formats (`00:28.50` vs `28.5`), and loose pool
//! descriptions. This layer maps them into strict domain values exactly
//! once at ingestion; nothing downstream re-interprets a synonym.
//!
//! Time handling is built around the `0.0`-second sentinel meaning "no
//! time recorded". The sentinel is never a valid swim time and every
//! arithmetic boundary here (improvement, personal best, goal derivation)
//! checks for it before dividing or taking minimums.

use chrono::{DateTime, Utc};
use podium_core::constants::time;
use podium_core::models::{
    BasePerformanceMetric, ChartDataPoint, ChartType, MetricKind, MetricTrend, MetricType,
    PerformanceChartData, PerformanceSession, TimePeriod,
};
use podium_intelligence::config::EngineConfig;
use podium_intelligence::statistics::round_to_decimals;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Canonical competitive strokes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stroke {
    /// Front crawl
    Freestyle,
    /// Backstroke
    Backstroke,
    /// Breaststroke
    Breaststroke,
    /// Butterfly
    Butterfly,
    /// All four strokes in order
    IndividualMedley,
}

impl Stroke {
    /// All canonical strokes
    pub const ALL: [Self; 5] = [
        Self::Freestyle,
        Self::Backstroke,
        Self::Breaststroke,
        Self::Butterfly,
        Self::IndividualMedley,
    ];

    /// Normalize a free-form stroke name
    ///
    /// Case-insensitive synonym table. Unknown input defaults to
    /// `Freestyle`; the documented default for unrecognized entries, logged
    /// at `debug!`, never a silent best guess at another stroke.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "free" | "freestyle" | "fr" => Self::Freestyle,
            "back" | "backstroke" | "bk" => Self::Backstroke,
            "breast" | "breaststroke" | "br" => Self::Breaststroke,
            "fly" | "butterfly" | "butter" => Self::Butterfly,
            "im" | "medley" | "individual medley" => Self::IndividualMedley,
            other => {
                debug!(stroke = other, "unknown stroke, defaulting to freestyle");
                Self::Freestyle
            }
        }
    }

    /// Canonical snake_case identifier
    #[must_use]
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::Freestyle => "freestyle",
            Self::Backstroke => "backstroke",
            Self::Breaststroke => "breaststroke",
            Self::Butterfly => "butterfly",
            Self::IndividualMedley => "individual_medley",
        }
    }

    /// Display name
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Freestyle => "Freestyle",
            Self::Backstroke => "Backstroke",
            Self::Breaststroke => "Breaststroke",
            Self::Butterfly => "Butterfly",
            Self::IndividualMedley => "Individual Medley",
        }
    }
}

impl std::fmt::Display for Stroke {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Canonical race distances
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SwimDistance {
    /// 25 meters
    M25,
    /// 50 meters
    M50,
    /// 100 meters
    M100,
    /// 200 meters
    M200,
    /// 400 meters
    M400,
    /// 800 meters
    M800,
    /// 1500 meters
    M1500,
}

impl SwimDistance {
    /// All canonical distances, ascending
    pub const ALL: [Self; 7] = [
        Self::M25,
        Self::M50,
        Self::M100,
        Self::M200,
        Self::M400,
        Self::M800,
        Self::M1500,
    ];

    /// Distance in meters
    #[must_use]
    pub const fn meters(&self) -> u32 {
        match self {
            Self::M25 => 25,
            Self::M50 => 50,
            Self::M100 => 100,
            Self::M200 => 200,
            Self::M400 => 400,
            Self::M800 => 800,
            Self::M1500 => 1500,
        }
    }

    /// Normalize a free-form distance string
    ///
    /// Extracts the digits and snaps to the canonical set. Unknown input
    /// defaults to 50 m, the most common race distance, logged at `debug!`.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let meters: u32 = digits.parse().unwrap_or(0);
        for distance in Self::ALL {
            if distance.meters() == meters {
                return distance;
            }
        }
        debug!(distance = raw, "unknown distance, defaulting to 50m");
        Self::M50
    }
}

impl std::fmt::Display for SwimDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}m", self.meters())
    }
}

/// Pool course length
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PoolSize {
    /// 25 m short course
    ShortCourse25,
    /// 50 m long course
    LongCourse50,
}

impl PoolSize {
    /// Normalize a free-form pool description
    ///
    /// Substring match on `50` then `25`; anything else defaults to the
    /// 25 m short course.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        if raw.contains("50") {
            Self::LongCourse50
        } else if raw.contains("25") {
            Self::ShortCourse25
        } else {
            debug!(pool = raw, "unknown pool size, defaulting to 25m");
            Self::ShortCourse25
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ShortCourse25 => "25m",
            Self::LongCourse50 => "50m",
        }
    }
}

impl std::fmt::Display for PoolSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One normalized swim time entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwimmingTimeDetail {
    /// When the time was swum
    pub date: DateTime<Utc>,
    /// Canonical stroke
    pub stroke: Stroke,
    /// Canonical distance
    pub distance: SwimDistance,
    /// Course length
    pub pool_size: PoolSize,
    /// Elapsed seconds, `0.0` meaning no time recorded
    pub time_seconds: f64,
}

impl SwimmingTimeDetail {
    /// Stable event identifier, e.g. `freestyle_50`
    ///
    /// Times compare only within one event, so personal bests, goals, and
    /// improvement series are all keyed by this id.
    #[must_use]
    pub fn metric_id(&self) -> String {
        format!("{}_{}", self.stroke.identifier(), self.distance.meters())
    }

    /// Display title, e.g. `50m Freestyle (25m)`
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {} ({})", self.distance, self.stroke, self.pool_size)
    }

    /// Rebuild a detail from a session time metric
    ///
    /// Event ids encode stroke and distance; course length is not carried
    /// on session metrics, so it takes the short-course default.
    #[must_use]
    pub fn from_metric(metric_id: &str, date: DateTime<Utc>, time_seconds: f64) -> Option<Self> {
        let (stroke_part, meters_part) = metric_id.rsplit_once('_')?;
        let meters: u32 = meters_part.parse().ok()?;
        let distance = SwimDistance::ALL
            .into_iter()
            .find(|distance| distance.meters() == meters)?;
        let stroke = Stroke::ALL
            .into_iter()
            .find(|stroke| stroke.identifier() == stroke_part)?;
        Some(Self {
            date,
            stroke,
            distance,
            pool_size: PoolSize::ShortCourse25,
            time_seconds,
        })
    }
}

/// Strict swim metric, projected into the shared model at the adapter edge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwimmingPerformanceMetric {
    /// The normalized time entry
    pub detail: SwimmingTimeDetail,
    /// Trend versus the previous time in the same event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<MetricTrend>,
    /// Fastest time on record for this event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_best: Option<f64>,
    /// Target time for this event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<f64>,
}

impl From<SwimmingPerformanceMetric> for BasePerformanceMetric {
    fn from(metric: SwimmingPerformanceMetric) -> Self {
        let mut base = Self::new(
            metric.detail.metric_id(),
            metric.detail.title(),
            metric.detail.time_seconds,
            MetricType::Time,
            "race",
            metric.detail.date,
        )
        .with_unit("seconds");
        base.trend = metric.trend;
        base.personal_best = metric.personal_best;
        base.goal = metric.goal;
        base
    }
}

/// Strict view of the swim times recorded in one session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwimmingSession {
    /// Session identifier
    pub id: String,
    /// Session date
    pub date: DateTime<Utc>,
    /// Session length in minutes
    pub duration_minutes: u32,
    /// Recovered time entries, one per time metric
    pub times: Vec<SwimmingTimeDetail>,
}

impl SwimmingSession {
    /// Recover the typed swim view from a generic session
    ///
    /// Non-time metrics and metrics whose id does not name a canonical
    /// event are left out.
    #[must_use]
    pub fn from_session(session: &PerformanceSession) -> Self {
        let times = session
            .metrics
            .iter()
            .filter(|metric| metric.metric_type == MetricType::Time)
            .filter_map(|metric| {
                metric.value.as_number().and_then(|seconds| {
                    SwimmingTimeDetail::from_metric(&metric.id, session.date, seconds)
                })
            })
            .collect();
        Self {
            id: session.id.clone(),
            date: session.date,
            duration_minutes: session.duration_minutes,
            times,
        }
    }
}

/// Parse a raw time string into seconds
///
/// `MM:SS.ss` becomes `minutes * 60 + seconds`; bare numeric strings parse
/// as seconds directly. Empty or unparsable input maps to the `0.0`
/// sentinel, which downstream code reads as "no time recorded".
#[must_use]
pub fn parse_time_string(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return time::NO_TIME_SENTINEL;
    }
    if let Some((minutes_part, seconds_part)) = trimmed.split_once(':') {
        let minutes: Option<f64> = minutes_part.parse().ok();
        let seconds: Option<f64> = seconds_part.parse().ok();
        return match (minutes, seconds) {
            (Some(minutes), Some(seconds)) if minutes >= 0.0 && seconds >= 0.0 => {
                minutes.mul_add(time::SECONDS_PER_MINUTE, seconds)
            }
            _ => {
                debug!(time = trimmed, "unparsable time string, using sentinel");
                time::NO_TIME_SENTINEL
            }
        };
    }
    match trimmed.parse::<f64>() {
        Ok(seconds) if seconds >= 0.0 => seconds,
        _ => {
            debug!(time = trimmed, "unparsable time string, using sentinel");
            time::NO_TIME_SENTINEL
        }
    }
}

/// Format seconds as `MM:SS.ss`
///
/// The `0.0` sentinel formats as the literal `"00:00.00"`. Inverse of
/// [`parse_time_string`] for valid inputs.
#[must_use]
pub fn format_time_seconds(seconds: f64) -> String {
    if seconds <= time::NO_TIME_SENTINEL {
        return time::NO_TIME_DISPLAY.to_owned();
    }
    // Round to centiseconds first so a rounded-up remainder carries into
    // the minutes digit (59.999 is 01:00.00, never 00:60.00)
    let total = (seconds * 100.0).round() / 100.0;
    let minutes = (total / time::SECONDS_PER_MINUTE).floor();
    let remainder = total - minutes * time::SECONDS_PER_MINUTE;
    format!("{:02}:{:05.2}", minutes as u32, remainder)
}

/// Improvement percentage over a chronologically sorted series of times
///
/// `round(((first - last) / first) * 100, 1)`; positive when the latest
/// time is faster. Returns `0.0` for fewer than two times or when either
/// endpoint is the no-time sentinel, guarding both divide-by-zero and
/// sentinel pollution.
#[must_use]
pub fn calculate_improvement(times: &[f64]) -> f64 {
    if times.len() < 2 {
        return 0.0;
    }
    let first = times[0];
    let last = times[times.len() - 1];
    if first <= time::NO_TIME_SENTINEL || last <= time::NO_TIME_SENTINEL {
        return 0.0;
    }
    round_to_decimals((first - last) / first * 100.0, 1)
}

/// Fastest recorded time, excluding the sentinel
///
/// `None` when every value is the sentinel or the slice is empty.
#[must_use]
pub fn personal_best(times: &[f64]) -> Option<f64> {
    times
        .iter()
        .copied()
        .filter(|&value| value > time::NO_TIME_SENTINEL)
        .fold(None, |best, value| match best {
            Some(current) if current <= value => Some(current),
            _ => Some(value),
        })
}

/// Build a time chart from one event's time entries
///
/// Entries are sorted ascending by date; sentinel times are skipped (they
/// carry no information and would distort the axis). Point labels use the
/// configured date format, values are true seconds, and `formatted_value`
/// carries the `MM:SS.ss` rendering. The personal-best line is the fastest
/// positive time; the goal line is the explicit goal when supplied,
/// otherwise personal best times the configured improvement factor.
///
/// The returned chart is in true-value space; callers apply the axis
/// inversion as a separate step.
#[must_use]
pub fn build_time_chart(
    id: &str,
    title: &str,
    entries: &[SwimmingTimeDetail],
    period: TimePeriod,
    explicit_goal: Option<f64>,
) -> PerformanceChartData {
    let config = EngineConfig::global();
    let mut sorted: Vec<&SwimmingTimeDetail> = entries
        .iter()
        .filter(|detail| {
            if detail.time_seconds <= time::NO_TIME_SENTINEL {
                debug!(chart_id = id, "skipping sentinel time entry");
                return false;
            }
            true
        })
        .collect();
    sorted.sort_by_key(|detail| detail.date);
    if sorted.len() > config.charts.max_points_per_chart {
        // Keep the most recent points when over the cap
        sorted.drain(..sorted.len() - config.charts.max_points_per_chart);
    }

    let mut chart = PerformanceChartData::new(id, title, ChartType::Line, period, MetricKind::Time)
        .with_axis_labels("Date", "Time (seconds)");
    chart.data = sorted
        .iter()
        .map(|detail| {
            ChartDataPoint::new(
                detail.date.format(&config.charts.date_label_format).to_string(),
                detail.time_seconds,
            )
            .with_date(detail.date)
            .with_formatted_value(format_time_seconds(detail.time_seconds))
        })
        .collect();

    let values: Vec<f64> = sorted.iter().map(|detail| detail.time_seconds).collect();
    if let Some(best) = personal_best(&values) {
        chart.personal_best_line = Some(best);
        chart.goal_line =
            Some(explicit_goal.unwrap_or(best * config.swimming.goal_improvement_factor));
    }
    chart
}
