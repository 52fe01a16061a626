// ABOUTME: Core data models for the Podium performance analytics engine
// ABOUTME: Re-exports Program, PerformanceSession, chart and analytics structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! # Data Models
//!
//! Core data structures shared by every program adapter. These models provide
//! a unified representation of performance data across swimming, basketball,
//! and football so charts and analytics can be built program-agnostically.
//!
//! ## Design Principles
//!
//! - **Program Agnostic**: Common models abstract away program differences
//! - **Extensible**: Optional fields accommodate program-specific capabilities
//! - **Serializable**: All models support JSON serialization with no cycles
//! - **Type Safe**: Strong typing prevents common data handling errors

// Domain modules
mod analytics;
mod chart;
mod metric;
mod period;
mod program;
mod session;

// Re-export all public types for convenience
// Program domain
pub use program::Program;

// Period domain
pub use period::TimePeriod;

// Metric domain
pub use metric::{BasePerformanceMetric, MetricTrend, MetricType, MetricValue, TrendDirection};

// Session domain
pub use session::PerformanceSession;

// Chart domain
pub use chart::{ChartDataPoint, ChartType, MetricKind, PerformanceChartData};

// Analytics domain
pub use analytics::{PerformanceAnalytics, ProgramPerformanceConfig, SkillLevel};
