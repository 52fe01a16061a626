// ABOUTME: Statistics primitives shared by analytics and chart building
// ABOUTME: Mean, population standard deviation, coefficient of variation, consistency score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! Statistics primitives for performance analysis
//!
//! All functions here are sentinel-free: callers filter out the
//! no-time-recorded sentinel before handing values in.

use podium_core::constants::scores;

/// Arithmetic mean, `0.0` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation, `0.0` for fewer than two values
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|value| {
            let diff = value - avg;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Coefficient of variation (std-dev over mean), `0.0` when the mean is zero
#[must_use]
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let avg = mean(values);
    if avg.abs() < f64::EPSILON {
        return 0.0;
    }
    std_dev(values) / avg
}

/// Round to a fixed number of decimal places
#[must_use]
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Consistency score on a 0-100 scale, higher meaning more stable values
///
/// Computed as the inverse coefficient of variation, clamped:
/// `100 * (1 - stddev/mean)`. A single value scores 100 (no variation
/// observable); an empty slice or zero mean scores 0. The formula is
/// deliberately isolated behind this function so it can be swapped without
/// touching call sites.
#[must_use]
pub fn consistency_score(values: &[f64]) -> f64 {
    if values.is_empty() {
        return scores::MIN_SCORE;
    }
    if values.len() == 1 {
        return scores::MAX_SCORE;
    }
    let avg = mean(values);
    if avg.abs() < f64::EPSILON {
        return scores::MIN_SCORE;
    }
    let score = (1.0 - std_dev(values) / avg) * scores::MAX_SCORE;
    score.clamp(scores::MIN_SCORE, scores::MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_mean_of_empty_is_zero() {
        assert!(mean(&[]).abs() < EPSILON);
    }

    #[test]
    fn test_mean_of_values() {
        assert!((mean(&[2.0, 4.0, 6.0]) - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_std_dev_of_constant_series_is_zero() {
        assert!(std_dev(&[5.0, 5.0, 5.0]).abs() < EPSILON);
    }

    #[test]
    fn test_std_dev_population_formula() {
        // Population std-dev of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&values) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_round_to_decimals() {
        assert!((round_to_decimals(7.719_298, 1) - 7.7).abs() < EPSILON);
        assert!((round_to_decimals(25.511, 2) - 25.51).abs() < EPSILON);
    }

    #[test]
    fn test_consistency_empty_is_zero() {
        assert!(consistency_score(&[]).abs() < EPSILON);
    }

    #[test]
    fn test_consistency_single_value_is_full_score() {
        assert!((consistency_score(&[26.3]) - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_consistency_constant_series_is_full_score() {
        assert!((consistency_score(&[30.0, 30.0, 30.0]) - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_consistency_decreases_with_spread() {
        let tight = consistency_score(&[28.0, 28.2, 27.9, 28.1]);
        let loose = consistency_score(&[20.0, 35.0, 25.0, 40.0]);
        assert!(tight > loose);
        assert!((0.0..=100.0).contains(&tight));
        assert!((0.0..=100.0).contains(&loose));
    }

    #[test]
    fn test_consistency_is_clamped_at_zero() {
        // Wildly spread values can drive 1 - cv below zero; the score clamps
        let score = consistency_score(&[1.0, 100.0, 1.0, 100.0]);
        assert!(score >= 0.0);
    }
}
