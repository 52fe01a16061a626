// ABOUTME: Adapter utility functions shared across program implementations
// ABOUTME: Raw date parsing, trend derivation, and recommendation list finalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! Shared adapter utilities
//!
//! Small helpers every program adapter needs: lenient date parsing for raw
//! records, trend annotation between consecutive values, and recommendation
//! list finalization (cap and non-empty guarantee).

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use podium_core::models::{MetricTrend, TrendDirection};
use podium_intelligence::config::EngineConfig;
use podium_intelligence::statistics::round_to_decimals;
use tracing::debug;

/// Parse a raw record's date, falling back to the current instant
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates. Undated or
/// unparsable input falls back to now, logged at `debug!` so imports can be
/// audited.
#[must_use]
pub fn parse_record_date(raw: Option<&str>) -> DateTime<Utc> {
    let parsed = raw.and_then(|value| {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
                    .map(|naive| Utc.from_utc_datetime(&naive))
            })
    });
    parsed.unwrap_or_else(|| {
        debug!(raw = ?raw, "record date missing or unparsable, using current instant");
        Utc::now()
    })
}

/// Trend annotation between two consecutive values
///
/// `change_percent` is signed relative to the previous value; direction
/// follows the sign of the raw change (for time metrics, `Down` means
/// faster). Returns `None` when the previous value is zero, since a
/// percentage change is undefined there.
#[must_use]
pub fn trend_from_previous(
    previous: f64,
    current: f64,
    period_label: &str,
) -> Option<MetricTrend> {
    if previous.abs() < f64::EPSILON {
        return None;
    }
    let change_percent = round_to_decimals((current - previous) / previous * 100.0, 1);
    let direction = if change_percent > 0.0 {
        TrendDirection::Up
    } else if change_percent < 0.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Neutral
    };
    Some(MetricTrend {
        direction,
        change_percent,
        period_label: period_label.to_owned(),
    })
}

/// Cap a recommendation list and guarantee it is never empty
///
/// Consumers always need something to show, so an empty derivation falls
/// back to the program's canned list before the cap is applied.
#[must_use]
pub fn finalize_recommendations(
    mut recommendations: Vec<String>,
    fallback: &[&str],
) -> Vec<String> {
    if recommendations.is_empty() {
        recommendations = fallback.iter().map(|&text| text.to_owned()).collect();
    }
    recommendations.truncate(EngineConfig::global().limits.max_recommendations);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_rfc3339_date() {
        let date = parse_record_date(Some("2026-06-15T09:30:00Z"));
        assert_eq!(date.year(), 2026);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_bare_date() {
        let date = parse_record_date(Some("2026-01-03"));
        assert_eq!(date.year(), 2026);
        assert_eq!(date.day(), 3);
    }

    #[test]
    fn test_unparsable_date_falls_back_to_now() {
        let before = Utc::now();
        let date = parse_record_date(Some("last tuesday"));
        assert!(date >= before);
    }

    #[test]
    fn test_trend_direction_follows_raw_change() {
        let faster = trend_from_previous(28.5, 26.3, "vs previous swim").unwrap();
        assert_eq!(faster.direction, TrendDirection::Down);
        assert!(faster.change_percent < 0.0);

        let more_points = trend_from_previous(12.0, 18.0, "vs last game").unwrap();
        assert_eq!(more_points.direction, TrendDirection::Up);
        assert!((more_points.change_percent - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trend_undefined_from_zero_previous() {
        assert!(trend_from_previous(0.0, 10.0, "label").is_none());
    }

    #[test]
    fn test_finalize_uses_fallback_when_empty() {
        let result = finalize_recommendations(vec![], &["keep swimming"]);
        assert_eq!(result, vec!["keep swimming".to_owned()]);
    }

    #[test]
    fn test_finalize_caps_at_limit() {
        let many: Vec<String> = (0..10).map(|i| format!("tip {i}")).collect();
        let result = finalize_recommendations(many, &["fallback"]);
        assert_eq!(
            result.len(),
            EngineConfig::global().limits.max_recommendations
        );
    }
}
