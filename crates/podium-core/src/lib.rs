// ABOUTME: Core types and constants for the Podium performance analytics engine
// ABOUTME: Foundation crate with shared models, error handling, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

#![deny(unsafe_code)]

//! # Podium Core
//!
//! Foundation crate for the Podium performance analytics engine.
//!
//! Contains the shared vocabulary every program adapter speaks:
//! - Common value models (metrics, sessions, charts, analytics summaries)
//! - Unified error handling with structured error codes
//! - Domain constants (sentinels, goal factors, rating bounds)
//!
//! This crate has no knowledge of individual programs; swimming, basketball,
//! and football specifics live in `podium-programs`.

/// Domain constants shared across the engine
pub mod constants;
/// Unified error handling with structured error codes
pub mod errors;
/// Shared value models for metrics, sessions, charts, and analytics
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    BasePerformanceMetric, ChartDataPoint, ChartType, MetricKind, MetricTrend, MetricType,
    MetricValue, PerformanceAnalytics, PerformanceChartData, PerformanceSession, Program,
    ProgramPerformanceConfig, SkillLevel, TimePeriod, TrendDirection,
};
