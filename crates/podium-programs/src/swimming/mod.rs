// ABOUTME: Swimming program module with domain normalization and the program adapter
// ABOUTME: Re-exports the adapter and the strict swim domain types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! Swimming program support
//!
//! Two layers: [`domain`] normalizes free-form raw swim records (stroke
//! synonyms, mixed time formats, loose pool descriptions) into strict
//! domain values, and [`adapter`] implements the shared program contract
//! on top of them.

/// Swimming program adapter implementing the shared contract
pub mod adapter;
/// Strict swim domain types and normalization
pub mod domain;

pub use adapter::SwimmingAdapter;
pub use domain::{
    PoolSize, Stroke, SwimDistance, SwimmingPerformanceMetric, SwimmingSession,
    SwimmingTimeDetail,
};
