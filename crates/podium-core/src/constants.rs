// ABOUTME: Domain constants shared across the Podium performance analytics engine
// ABOUTME: Sentinel values, goal factors, rating bounds, and score clamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! Domain constants used throughout the engine
//!
//! Values that carry meaning across crate boundaries live here so adapters,
//! chart builders, and analytics all agree on them.

/// Time handling constants for duration-based metrics
pub mod time {
    /// Reserved sentinel for "no time recorded"
    ///
    /// A raw time string that cannot be parsed maps to this value. Zero is
    /// never a valid swim time, so downstream consumers exclude it from
    /// personal bests, improvement calculations, and chart minimums.
    pub const NO_TIME_SENTINEL: f64 = 0.0;

    /// Rendering of the sentinel when formatted back to `MM:SS.ss`
    pub const NO_TIME_DISPLAY: &str = "00:00.00";

    /// Seconds per minute, for `MM:SS.ss` conversions
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}

/// Goal derivation constants
pub mod goals {
    /// Default goal line factor applied to a personal best
    ///
    /// A goal of 97% of the current personal best targets a 3% improvement,
    /// an ambitious but reachable margin for age-group athletes.
    pub const DEFAULT_GOAL_FACTOR: f64 = 0.97;
}

/// Session rating and difficulty bounds
pub mod ratings {
    /// Minimum subjective session rating
    pub const MIN_RATING: u8 = 1;
    /// Maximum subjective session rating
    pub const MAX_RATING: u8 = 5;
    /// Minimum perceived difficulty
    pub const MIN_DIFFICULTY: u8 = 1;
    /// Maximum perceived difficulty
    pub const MAX_DIFFICULTY: u8 = 10;
}

/// Score scale bounds for derived 0-100 scores
pub mod scores {
    /// Lower clamp for derived scores such as consistency
    pub const MIN_SCORE: f64 = 0.0;
    /// Upper clamp for derived scores such as consistency
    pub const MAX_SCORE: f64 = 100.0;
}

/// Percentage bounds for rate-style metrics
pub mod percentages {
    /// Lower bound for any percentage metric
    pub const MIN_PERCENT: f64 = 0.0;
    /// Upper bound for any percentage metric
    pub const MAX_PERCENT: f64 = 100.0;
}
