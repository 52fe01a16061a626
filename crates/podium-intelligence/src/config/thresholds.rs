// ABOUTME: Per-program recommendation thresholds and shared chart settings
// ABOUTME: Pure constants resolved once at startup, never derived at runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! Per-program threshold tables
//!
//! Each program adapter reads its table from the global [`super::EngineConfig`]
//! when deriving focus areas and recommendations. The values are constants
//! with environment overrides, never computed from session data.

use podium_core::constants::goals;
use serde::{Deserialize, Serialize};

/// Thresholds driving swimming recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwimmingThresholds {
    /// Fewer sessions than this in a period suggests raising frequency
    pub min_sessions_per_period: usize,
    /// Average technique score below this suggests drill work
    pub min_technique_score: f64,
    /// Total distance below this (meters) suggests building base volume
    pub min_distance_meters_per_period: f64,
    /// Default goal line as a fraction of the personal best
    pub goal_improvement_factor: f64,
}

impl Default for SwimmingThresholds {
    fn default() -> Self {
        Self {
            min_sessions_per_period: 3,
            min_technique_score: 70.0,
            min_distance_meters_per_period: 5000.0,
            goal_improvement_factor: goals::DEFAULT_GOAL_FACTOR,
        }
    }
}

/// Thresholds driving basketball recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketballThresholds {
    /// Fewer sessions than this in a period suggests raising frequency
    pub min_sessions_per_period: usize,
    /// Field goal percentage below this suggests shooting form work
    pub min_field_goal_pct: f64,
    /// Free throw percentage below this suggests free-throw routine work
    pub min_free_throw_pct: f64,
}

impl Default for BasketballThresholds {
    fn default() -> Self {
        Self {
            min_sessions_per_period: 3,
            min_field_goal_pct: 40.0,
            min_free_throw_pct: 70.0,
        }
    }
}

/// Thresholds driving football recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootballThresholds {
    /// Fewer sessions than this in a period suggests raising frequency
    pub min_sessions_per_period: usize,
    /// Pass accuracy below this suggests possession drills
    pub min_pass_accuracy_pct: f64,
    /// Distance covered per match below this (km) suggests conditioning work
    pub min_distance_km_per_match: f64,
}

impl Default for FootballThresholds {
    fn default() -> Self {
        Self {
            min_sessions_per_period: 3,
            min_pass_accuracy_pct: 75.0,
            min_distance_km_per_match: 8.0,
        }
    }
}

/// Shared chart construction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Upper bound on points emitted per chart series
    pub max_points_per_chart: usize,
    /// `chrono` format string for point labels
    pub date_label_format: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            max_points_per_chart: 50,
            date_label_format: "%m/%d".to_owned(),
        }
    }
}

/// Limits on recommendation generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationLimits {
    /// Maximum recommendations returned per request
    pub max_recommendations: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            max_recommendations: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_factor_default_is_the_shared_constant() {
        let thresholds = SwimmingThresholds::default();
        assert!((thresholds.goal_improvement_factor - goals::DEFAULT_GOAL_FACTOR).abs()
            < f64::EPSILON);
        assert!((thresholds.goal_improvement_factor - 0.97).abs() < f64::EPSILON);
    }
}
