// ABOUTME: Core adapter trait for unified multi-program performance analysis
// ABOUTME: Defines the shared transform/chart/analytics/recommendation contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! # Program Adapter Contract
//!
//! Every activity program implements [`ProgramPerformanceAdapter`], the
//! shared contract for turning raw records into normalized metrics, charts,
//! and analytics. Consumers select an adapter purely from a
//! [`Program`] value via the registry and never name a concrete type.
//!
//! ## Contract rules
//!
//! - **Validation precedes transformation**: `validate_performance_data`
//!   must pass before `transform_metrics` output is trusted; adapters also
//!   run it internally. Invalid data is rejected, never coerced to a
//!   default domain value.
//! - **Order preservation**: `transform_metrics` output matches input
//!   order; chart series are sorted ascending by session date once, at
//!   construction.
//! - **Zero input is not an error**: empty record or session slices
//!   produce empty chart lists and zeroed analytics, and recommendations
//!   always return a non-empty fallback list.
//! - **Purity**: no operation mutates its input or holds state between
//!   calls; adapters are `Send + Sync` and safe to share.

use podium_core::errors::{AppError, AppResult};
use podium_core::models::{
    BasePerformanceMetric, PerformanceAnalytics, PerformanceChartData, PerformanceSession,
    Program, ProgramPerformanceConfig, TimePeriod,
};

use crate::raw::RawPerformanceRecord;

/// Shared capability contract implemented by every program adapter
pub trait ProgramPerformanceAdapter: Send + Sync {
    /// Program this adapter handles
    fn program(&self) -> Program;

    /// Static presentation and taxonomy descriptor for the program
    fn config(&self) -> &ProgramPerformanceConfig;

    /// Structurally validate raw records before transformation
    ///
    /// Checks the record tag against this adapter's program and
    /// program-specific field constraints (parsable times, percentages
    /// within 0-100, attempt counts at least made counts).
    ///
    /// # Errors
    /// Returns `ProgramMismatch` for records tagged with another program
    /// and a validation error for out-of-range or malformed fields.
    fn validate_performance_data(&self, records: &[RawPerformanceRecord]) -> AppResult<()>;

    /// Map raw records into the common metric model, preserving input order
    ///
    /// Missing numeric counters default to 0; missing rates and
    /// percentages are omitted rather than coerced, so absent data never
    /// skews aggregation.
    ///
    /// # Errors
    /// Returns the first validation error; transformation never proceeds
    /// over invalid input.
    fn transform_metrics(
        &self,
        records: &[RawPerformanceRecord],
    ) -> AppResult<Vec<BasePerformanceMetric>>;

    /// Build chart-ready series for the program over a period
    ///
    /// Defensively filters sessions to this adapter's program and the
    /// period even when the caller already filtered. Zero matching
    /// sessions yield an empty list, not an error.
    fn generate_charts(
        &self,
        sessions: &[PerformanceSession],
        period: TimePeriod,
    ) -> Vec<PerformanceChartData>;

    /// Compute the analytics summary for the program over a period
    ///
    /// Zero-session input yields zeroed totals and default focus areas,
    /// never an error.
    fn calculate_analytics(
        &self,
        sessions: &[PerformanceSession],
        period: TimePeriod,
    ) -> PerformanceAnalytics;

    /// Derive recommendations from an analytics summary
    ///
    /// Pure function of the summary. Always returns at least one entry: a
    /// program-appropriate fallback list covers `None` input and
    /// zero-session summaries so the consumer always has something to show.
    fn recommendations(&self, analytics: Option<&PerformanceAnalytics>) -> Vec<String>;

    /// Strict program-mismatch check over sessions
    ///
    /// For callers that want an error instead of the defensive filter in
    /// [`Self::generate_charts`].
    ///
    /// # Errors
    /// Returns `ProgramMismatch` naming the first offending session.
    fn validate_sessions(&self, sessions: &[PerformanceSession]) -> AppResult<()> {
        for session in sessions {
            if session.program != self.program() {
                return Err(AppError::program_mismatch(format!(
                    "session belongs to {} but adapter handles {}",
                    session.program,
                    self.program()
                ))
                .with_record_id(session.id.clone()));
            }
        }
        Ok(())
    }
}
