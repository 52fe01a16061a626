// ABOUTME: Analytics summary and static program configuration models
// ABOUTME: Defines PerformanceAnalytics, SkillLevel, and per-program descriptors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ChartType, Program, TimePeriod};

/// Aggregated performance summary for one program over one period
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceAnalytics {
    /// Program the summary covers
    pub program: Program,
    /// Window the summary covers
    pub period: TimePeriod,
    /// Number of sessions in the window
    pub total_sessions: usize,
    /// Sum of session durations, minutes
    pub total_duration_minutes: u32,
    /// Mean rating over sessions that carry one, 0.0 when none do
    pub average_rating: f64,
    /// Mean difficulty over sessions that carry one, 0.0 when none do
    pub average_difficulty: f64,
    /// Primary improvement percentage, program-defined, positive is better
    pub improvement_percent: f64,
    /// Consistency score on a 0-100 scale
    pub consistency_score: f64,
    /// Observed strengths, human-readable
    pub strengths: Vec<String>,
    /// Suggested focus areas, human-readable
    pub focus_areas: Vec<String>,
    /// When the summary was computed
    pub generated_at: DateTime<Utc>,
}

impl PerformanceAnalytics {
    /// Zero-valued summary for a window with no sessions
    #[must_use]
    pub fn empty(program: Program, period: TimePeriod) -> Self {
        Self {
            program,
            period,
            total_sessions: 0,
            total_duration_minutes: 0,
            average_rating: 0.0,
            average_difficulty: 0.0,
            improvement_percent: 0.0,
            consistency_score: 0.0,
            strengths: Vec::new(),
            focus_areas: Vec::new(),
            generated_at: Utc::now(),
        }
    }
}

/// One rung on a program's skill ladder
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillLevel {
    /// Ladder position, 1 is entry level
    pub level: u8,
    /// Short name, e.g. `Club`
    pub name: String,
    /// What an athlete at this level typically handles
    pub description: String,
}

impl SkillLevel {
    fn new(level: u8, name: &str, description: &str) -> Self {
        Self {
            level,
            name: name.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// Static descriptor for a program's presentation and taxonomy
///
/// Built once per adapter at construction and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgramPerformanceConfig {
    /// Program this configuration describes
    pub program: Program,
    /// Display name
    pub display_name: String,
    /// Theme color as a hex string
    pub color: String,
    /// Metric grouping categories the program uses
    pub metric_categories: Vec<String>,
    /// Chart types the program's dashboards render
    pub chart_types: Vec<ChartType>,
    /// Skill ladder, ordered by level ascending
    pub skill_levels: Vec<SkillLevel>,
}

impl ProgramPerformanceConfig {
    /// Build the descriptor for a program
    #[must_use]
    pub fn for_program(program: Program) -> Self {
        match program {
            Program::Swimming => Self {
                program,
                display_name: program.display_name().to_owned(),
                color: "#0077b6".to_owned(),
                metric_categories: vec![
                    "race".to_owned(),
                    "technique".to_owned(),
                    "endurance".to_owned(),
                ],
                chart_types: vec![ChartType::Line, ChartType::Bar, ChartType::Radar],
                skill_levels: vec![
                    SkillLevel::new(1, "Beginner", "Comfortable in water, learning strokes"),
                    SkillLevel::new(2, "Improver", "Swims all four strokes legally"),
                    SkillLevel::new(3, "Club", "Trains regularly, races club meets"),
                    SkillLevel::new(4, "Regional", "Qualifies for regional championships"),
                    SkillLevel::new(5, "National", "Competes at national level"),
                ],
            },
            Program::Basketball => Self {
                program,
                display_name: program.display_name().to_owned(),
                color: "#e85d04".to_owned(),
                metric_categories: vec![
                    "shooting".to_owned(),
                    "playmaking".to_owned(),
                    "defense".to_owned(),
                ],
                chart_types: vec![ChartType::Bar, ChartType::Line, ChartType::Radar],
                skill_levels: vec![
                    SkillLevel::new(1, "Rookie", "Learning fundamentals and footwork"),
                    SkillLevel::new(2, "Developing", "Consistent form on open shots"),
                    SkillLevel::new(3, "Varsity", "Competes in organized league play"),
                    SkillLevel::new(4, "All-Conference", "Leading contributor in league play"),
                    SkillLevel::new(5, "Elite", "Performs against top-tier competition"),
                ],
            },
            Program::Football => Self {
                program,
                display_name: program.display_name().to_owned(),
                color: "#2d6a4f".to_owned(),
                metric_categories: vec![
                    "attack".to_owned(),
                    "distribution".to_owned(),
                    "physical".to_owned(),
                ],
                chart_types: vec![ChartType::Line, ChartType::Bar, ChartType::Progress],
                skill_levels: vec![
                    SkillLevel::new(1, "Grassroots", "Learning ball control and positioning"),
                    SkillLevel::new(2, "Academy", "Structured training, small-sided games"),
                    SkillLevel::new(3, "Club", "Regular starter in club fixtures"),
                    SkillLevel::new(4, "Semi-Pro", "Competes in senior amateur leagues"),
                    SkillLevel::new(5, "Professional", "Contracted senior-level player"),
                ],
            },
        }
    }
}
