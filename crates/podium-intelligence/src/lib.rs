// ABOUTME: Shared analytics for the Podium performance analytics engine
// ABOUTME: Statistics helpers, chart axis inversion, session aggregation, engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

#![deny(unsafe_code)]

//! # Podium Intelligence
//!
//! Program-agnostic analytics shared by every adapter:
//! - Statistics primitives and the consistency score
//! - Chart data building, including the inverted axis used for time charts
//! - Session aggregation (totals, defined-only averages, time series extraction)
//! - Engine configuration with environment overrides
//!
//! Everything here is a pure function of its inputs; the only observable
//! side effect is `tracing` output.

/// Session aggregation helpers
pub mod analytics;
/// Chart data building and the time-chart axis inversion
pub mod chart_builder;
/// Engine configuration with environment overrides and validation
pub mod config;
/// Statistics primitives and the consistency score
pub mod statistics;

pub use analytics::{metric_time_series, SessionAggregates};
pub use chart_builder::{invert_time_chart, looks_like_time_chart, AxisInversion};
pub use config::{ConfigError, EngineConfig};
pub use statistics::consistency_score;
