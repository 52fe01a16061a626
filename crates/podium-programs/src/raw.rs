// ABOUTME: Raw, loosely-typed input records as entered by users or imported from sheets
// ABOUTME: Internally-tagged union keyed by program with optional everything
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! Raw input record model
//!
//! Raw records arrive as user input or third-party imports: mixed casing,
//! missing fields, free-form time strings. The union is tagged by `program`
//! so a batch deserializes straight into the right variant and every
//! exhaustive match over records is compile-time checked when a program is
//! added.

use podium_core::models::Program;
use serde::{Deserialize, Serialize};

/// One raw activity record, discriminated by program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "program", rename_all = "snake_case")]
pub enum RawPerformanceRecord {
    /// A raw swim entry
    Swimming(RawSwimRecord),
    /// A raw basketball stat line
    Basketball(RawBasketballRecord),
    /// A raw football match entry
    Football(RawFootballRecord),
}

impl RawPerformanceRecord {
    /// Program tag carried by this record
    #[must_use]
    pub const fn program(&self) -> Program {
        match self {
            Self::Swimming(_) => Program::Swimming,
            Self::Basketball(_) => Program::Basketball,
            Self::Football(_) => Program::Football,
        }
    }

    /// Record identifier
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Swimming(record) => &record.id,
            Self::Basketball(record) => &record.id,
            Self::Football(record) => &record.id,
        }
    }
}

/// A raw swim entry as the user typed it
///
/// Stroke, distance, and pool size are free-form strings normalized by the
/// swimming domain layer; `time` is either `MM:SS.ss` or bare seconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawSwimRecord {
    /// Record identifier
    pub id: String,
    /// ISO-8601 date string, absent when the entry is undated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Free-form stroke name, e.g. `free`, `Fly`, `IM`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// Free-form distance, e.g. `50`, `100m`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    /// Free-form pool description, e.g. `25m`, `50 meter long course`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_size: Option<String>,
    /// Elapsed time, `MM:SS.ss` or bare seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Coach-assigned technique score, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technique_score: Option<f64>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A raw basketball stat line
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawBasketballRecord {
    /// Record identifier
    pub id: String,
    /// ISO-8601 date string, absent when the entry is undated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Points scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    /// Field goals made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_goals_made: Option<u32>,
    /// Field goals attempted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_goals_attempted: Option<u32>,
    /// Free throws made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_throws_made: Option<u32>,
    /// Free throws attempted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_throws_attempted: Option<u32>,
    /// Assists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<u32>,
    /// Rebounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebounds: Option<u32>,
    /// Steals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steals: Option<u32>,
}

/// A raw football match entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawFootballRecord {
    /// Record identifier
    pub id: String,
    /// ISO-8601 date string, absent when the entry is undated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Goals scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<u32>,
    /// Assists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<u32>,
    /// Passes completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passes_completed: Option<u32>,
    /// Passes attempted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passes_attempted: Option<u32>,
    /// Distance covered during the match, kilometers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_covered_km: Option<f64>,
    /// Sprint count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprints: Option<u32>,
    /// Tackles made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tackles: Option<u32>,
}
