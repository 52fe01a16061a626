// ABOUTME: Performance session model tying a dated training unit to its metrics
// ABOUTME: Carries program tag, duration, subjective rating, and perceived difficulty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::ratings;
use crate::errors::{AppError, AppResult};
use crate::models::{BasePerformanceMetric, Program};

/// A single dated training or match unit with its normalized metrics
///
/// Sessions are plain value objects: metrics are owned, never referenced
/// back, so the whole structure serializes without cycles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceSession {
    /// Unique session identifier
    pub id: String,
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Program this session belongs to
    pub program: Program,
    /// Free-form kind label, e.g. `training`, `competition`, `match`
    pub session_type: String,
    /// Session length in whole minutes
    pub duration_minutes: u32,
    /// Metrics recorded during the session
    pub metrics: Vec<BasePerformanceMetric>,
    /// Subjective rating, 1-5, absent when the athlete skipped it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Perceived difficulty, 1-10, absent when not recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
}

impl PerformanceSession {
    /// Create an empty session with a generated identifier
    #[must_use]
    pub fn new(program: Program, date: DateTime<Utc>, session_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            program,
            session_type: session_type.into(),
            duration_minutes: 0,
            metrics: Vec::new(),
            rating: None,
            difficulty: None,
        }
    }

    /// Validate structural invariants
    ///
    /// # Errors
    /// Returns `ErrorCode::MissingRequiredField` for an empty id and
    /// `ErrorCode::ValueOutOfRange` when rating or difficulty fall outside
    /// their 1-5 and 1-10 scales.
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::missing_field("id"));
        }
        if let Some(rating) = self.rating {
            if !(ratings::MIN_RATING..=ratings::MAX_RATING).contains(&rating) {
                return Err(AppError::value_out_of_range(format!(
                    "rating {rating} outside {}-{}",
                    ratings::MIN_RATING,
                    ratings::MAX_RATING
                ))
                .with_field("rating")
                .with_record_id(self.id.clone()));
            }
        }
        if let Some(difficulty) = self.difficulty {
            if !(ratings::MIN_DIFFICULTY..=ratings::MAX_DIFFICULTY).contains(&difficulty) {
                return Err(AppError::value_out_of_range(format!(
                    "difficulty {difficulty} outside {}-{}",
                    ratings::MIN_DIFFICULTY,
                    ratings::MAX_DIFFICULTY
                ))
                .with_field("difficulty")
                .with_record_id(self.id.clone()));
            }
        }
        Ok(())
    }

    /// Numeric value of a named metric, when present and numeric
    #[must_use]
    pub fn metric_value(&self, metric_id: &str) -> Option<f64> {
        self.metrics
            .iter()
            .find(|metric| metric.id == metric_id)
            .and_then(|metric| metric.value.as_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MetricType;

    fn session() -> PerformanceSession {
        PerformanceSession::new(Program::Swimming, Utc::now(), "training")
    }

    #[test]
    fn test_new_generates_unique_ids() {
        let a = session();
        let b = session();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let mut s = session();
        s.rating = Some(5);
        s.difficulty = Some(10);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let mut s = session();
        s.rating = Some(6);
        let err = s.validate().unwrap_err();
        assert_eq!(err.context.field.as_deref(), Some("rating"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_difficulty() {
        let mut s = session();
        s.difficulty = Some(0);
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_metric_value_lookup() {
        let mut s = session();
        s.metrics.push(BasePerformanceMetric::new(
            "freestyle_50",
            "50m Freestyle",
            26.3,
            MetricType::Time,
            "race",
            s.date,
        ));
        assert_eq!(s.metric_value("freestyle_50"), Some(26.3));
        assert_eq!(s.metric_value("backstroke_100"), None);
    }
}
