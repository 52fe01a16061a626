// ABOUTME: Time period enumeration for scoping charts and analytics
// ABOUTME: Provides day windows and UTC date bounds for session filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Reporting window for charts and analytics
///
/// Periods are anchored at the moment of evaluation: `Week` means the last
/// seven days ending now. `All` spans from the UNIX epoch so that period
/// filters stay branch-free.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimePeriod {
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// Last 90 days
    Quarter,
    /// Last 180 days
    Semester,
    /// Last 365 days
    Year,
    /// Everything on record
    All,
}

impl TimePeriod {
    /// Number of days in this window, `None` for the unbounded `All`
    #[must_use]
    pub const fn days(&self) -> Option<i64> {
        match self {
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::Quarter => Some(90),
            Self::Semester => Some(180),
            Self::Year => Some(365),
            Self::All => None,
        }
    }

    /// Start of the window, anchored at the current instant
    #[must_use]
    pub fn start_date(&self) -> DateTime<Utc> {
        self.days()
            .map_or(DateTime::UNIX_EPOCH, |days| Utc::now() - Duration::days(days))
    }

    /// End of the window, which is always the current instant
    #[must_use]
    pub fn end_date(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Whether a date falls inside this window, inclusive of both bounds
    #[must_use]
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Get the display name for this period
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Quarter => "Quarter",
            Self::Semester => "Semester",
            Self::Year => "Year",
            Self::All => "All Time",
        }
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_windows() {
        assert_eq!(TimePeriod::Week.days(), Some(7));
        assert_eq!(TimePeriod::Month.days(), Some(30));
        assert_eq!(TimePeriod::Quarter.days(), Some(90));
        assert_eq!(TimePeriod::Semester.days(), Some(180));
        assert_eq!(TimePeriod::Year.days(), Some(365));
        assert_eq!(TimePeriod::All.days(), None);
    }

    #[test]
    fn test_all_starts_at_epoch() {
        assert_eq!(TimePeriod::All.start_date(), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_contains_is_inclusive_of_recent_dates() {
        let now = Utc::now();
        assert!(TimePeriod::Week.contains(now - Duration::days(3)));
        assert!(!TimePeriod::Week.contains(now - Duration::days(10)));
        assert!(TimePeriod::All.contains(now - Duration::days(10_000)));
    }

    #[test]
    fn test_future_dates_are_excluded() {
        let tomorrow = Utc::now() + Duration::days(1);
        assert!(!TimePeriod::Month.contains(tomorrow));
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&TimePeriod::Semester).unwrap();
        assert_eq!(json, "\"semester\"");
        let period: TimePeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, TimePeriod::Semester);
    }
}
