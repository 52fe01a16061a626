// ABOUTME: Program adapter implementations for swimming, basketball, and football
// ABOUTME: Core adapter trait, raw record model, per-program adapters, and the registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

#![deny(unsafe_code)]

//! # Podium Programs
//!
//! The per-program adapter system. Every activity program implements the
//! same [`core::ProgramPerformanceAdapter`] contract, so consumers resolve
//! an adapter from a [`Program`](podium_core::models::Program) value via the
//! [`registry::AdapterRegistry`] and never touch a concrete type.
//!
//! Data flow: raw records → program-specific normalization → common metric
//! model → charts and analytics, all pure functions.

// Re-export podium-core modules so adapter files can keep `use crate::errors::*` etc.
pub use podium_core::constants;
pub use podium_core::errors;
pub use podium_core::models;

/// Basketball program adapter
pub mod basketball;
/// Core adapter trait shared by every program
pub mod core;
/// Football program adapter
pub mod football;
/// Raw, loosely-typed input record model
pub mod raw;
/// Adapter registry resolving programs to adapters
pub mod registry;
/// Swimming program adapter and its domain normalization layer
pub mod swimming;
/// Adapter utility functions (date parsing, trends, recommendation caps)
pub mod utils;

// Re-export key types for convenience
pub use basketball::BasketballAdapter;
pub use crate::core::ProgramPerformanceAdapter;
pub use football::FootballAdapter;
pub use raw::{
    RawBasketballRecord, RawFootballRecord, RawPerformanceRecord, RawSwimRecord,
};
pub use registry::{create_adapter, AdapterRegistry};
pub use swimming::SwimmingAdapter;
