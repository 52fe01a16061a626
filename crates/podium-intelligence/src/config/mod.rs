// ABOUTME: Engine configuration with environment overrides and validation
// ABOUTME: OnceLock-backed global carrying per-program thresholds and chart settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! Engine Configuration
//!
//! Central configuration for the analytics engine. Defaults are compiled in,
//! `PODIUM_*` environment variables override individual values, and the
//! result is validated once before being installed as the process-wide
//! global. Adapters read from [`EngineConfig::global`] so thresholds stay
//! constant for the life of the process.

pub mod error;
pub mod thresholds;

pub use error::ConfigError;
pub use thresholds::{
    BasketballThresholds, ChartSettings, FootballThresholds, RecommendationLimits,
    SwimmingThresholds,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Swimming recommendation thresholds
    pub swimming: SwimmingThresholds,
    /// Basketball recommendation thresholds
    pub basketball: BasketballThresholds,
    /// Football recommendation thresholds
    pub football: FootballThresholds,
    /// Shared chart construction settings
    pub charts: ChartSettings,
    /// Recommendation generation limits
    pub limits: RecommendationLimits,
}

impl EngineConfig {
    /// Get the global configuration instance
    ///
    /// Loads once on first access; a load failure logs a warning and falls
    /// back to compiled-in defaults rather than failing the caller.
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    /// Returns an error when an environment variable holds an unparsable
    /// value or the final configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.swimming.goal_improvement_factor <= 0.0
            || self.swimming.goal_improvement_factor >= 1.0
        {
            return Err(ConfigError::InvalidRange(
                "goal_improvement_factor must be strictly between 0 and 1",
            ));
        }
        if !(0.0..=100.0).contains(&self.swimming.min_technique_score) {
            return Err(ConfigError::InvalidRange(
                "min_technique_score must be within 0-100",
            ));
        }
        if !(0.0..=100.0).contains(&self.basketball.min_field_goal_pct)
            || !(0.0..=100.0).contains(&self.basketball.min_free_throw_pct)
        {
            return Err(ConfigError::InvalidRange(
                "basketball percentage thresholds must be within 0-100",
            ));
        }
        if !(0.0..=100.0).contains(&self.football.min_pass_accuracy_pct) {
            return Err(ConfigError::InvalidRange(
                "min_pass_accuracy_pct must be within 0-100",
            ));
        }
        if self.charts.max_points_per_chart == 0 {
            return Err(ConfigError::InvalidRange(
                "max_points_per_chart must be at least 1",
            ));
        }
        if self.limits.max_recommendations == 0 {
            return Err(ConfigError::InvalidRange(
                "max_recommendations must be at least 1",
            ));
        }
        Ok(())
    }

    /// Apply one environment variable override when the variable is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        Self::apply_env_var(
            "PODIUM_SWIM_MIN_SESSIONS",
            &mut self.swimming.min_sessions_per_period,
        )?;
        Self::apply_env_var(
            "PODIUM_SWIM_MIN_TECHNIQUE_SCORE",
            &mut self.swimming.min_technique_score,
        )?;
        Self::apply_env_var(
            "PODIUM_SWIM_MIN_DISTANCE_METERS",
            &mut self.swimming.min_distance_meters_per_period,
        )?;
        Self::apply_env_var(
            "PODIUM_SWIM_GOAL_FACTOR",
            &mut self.swimming.goal_improvement_factor,
        )?;
        Self::apply_env_var(
            "PODIUM_BBALL_MIN_SESSIONS",
            &mut self.basketball.min_sessions_per_period,
        )?;
        Self::apply_env_var(
            "PODIUM_BBALL_MIN_FG_PCT",
            &mut self.basketball.min_field_goal_pct,
        )?;
        Self::apply_env_var(
            "PODIUM_BBALL_MIN_FT_PCT",
            &mut self.basketball.min_free_throw_pct,
        )?;
        Self::apply_env_var(
            "PODIUM_FOOTBALL_MIN_SESSIONS",
            &mut self.football.min_sessions_per_period,
        )?;
        Self::apply_env_var(
            "PODIUM_FOOTBALL_MIN_PASS_PCT",
            &mut self.football.min_pass_accuracy_pct,
        )?;
        Self::apply_env_var(
            "PODIUM_FOOTBALL_MIN_DISTANCE_KM",
            &mut self.football.min_distance_km_per_match,
        )?;
        Self::apply_env_var(
            "PODIUM_CHART_MAX_POINTS",
            &mut self.charts.max_points_per_chart,
        )?;
        Self::apply_env_var(
            "PODIUM_MAX_RECOMMENDATIONS",
            &mut self.limits.max_recommendations,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_pass_validation() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_threshold_values() {
        let config = EngineConfig::default();
        assert_eq!(config.swimming.min_sessions_per_period, 3);
        assert!((config.swimming.min_technique_score - 70.0).abs() < f64::EPSILON);
        assert!((config.swimming.min_distance_meters_per_period - 5000.0).abs() < f64::EPSILON);
        assert!((config.swimming.goal_improvement_factor - 0.97).abs() < f64::EPSILON);
        assert!((config.basketball.min_field_goal_pct - 40.0).abs() < f64::EPSILON);
        assert!((config.football.min_pass_accuracy_pct - 75.0).abs() < f64::EPSILON);
        assert_eq!(config.limits.max_recommendations, 5);
    }

    #[test]
    fn test_validation_rejects_inverted_goal_factor() {
        let mut config = EngineConfig::default();
        config.swimming.goal_improvement_factor = 1.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_out_of_range_percentage() {
        let mut config = EngineConfig::default();
        config.basketball.min_field_goal_pct = 140.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_limits() {
        let mut config = EngineConfig::default();
        config.limits.max_recommendations = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_global_is_stable_across_calls() {
        let first = EngineConfig::global();
        let second = EngineConfig::global();
        assert!(std::ptr::eq(first, second));
    }
}
