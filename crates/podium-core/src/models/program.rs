// ABOUTME: Program enumeration for supported activity tracks
// ABOUTME: Defines swimming, basketball, and football with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Enumeration of supported performance programs
///
/// Each program has its own adapter that knows how to validate, transform,
/// and analyze its raw records. Adding a program here forces every
/// exhaustive `match` over programs to be extended, which is the intended
/// compile-time extension point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Program {
    /// Competitive swimming (timed races per stroke and distance)
    Swimming,
    /// Basketball (shooting, scoring, and playmaking statistics)
    Basketball,
    /// Football (match involvement and physical output metrics)
    Football,
}

impl Program {
    /// All supported programs, in registry order
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Basketball, Self::Football];

    /// Parse a program from a loose identifier string
    ///
    /// Accepts canonical snake_case names as well as common display
    /// variants ("Swimming", "SWIM"). Unknown identifiers are an error,
    /// never a silent default.
    ///
    /// # Errors
    /// Returns `ErrorCode::InvalidInput` when the identifier does not name
    /// a supported program.
    pub fn from_identifier(identifier: &str) -> AppResult<Self> {
        match identifier.trim().to_lowercase().as_str() {
            "swimming" | "swim" => Ok(Self::Swimming),
            "basketball" | "bball" => Ok(Self::Basketball),
            "football" | "soccer" => Ok(Self::Football),
            other => Err(AppError::invalid_input(format!(
                "Unknown program identifier: {other}"
            ))),
        }
    }

    /// Canonical snake_case identifier, matching the serde representation
    #[must_use]
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::Swimming => "swimming",
            Self::Basketball => "basketball",
            Self::Football => "football",
        }
    }

    /// Get the display name for this program
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Basketball => "Basketball",
            Self::Football => "Football",
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_identifier_accepts_loose_variants() {
        assert_eq!(Program::from_identifier("Swimming").unwrap(), Program::Swimming);
        assert_eq!(Program::from_identifier(" swim ").unwrap(), Program::Swimming);
        assert_eq!(
            Program::from_identifier("BASKETBALL").unwrap(),
            Program::Basketball
        );
        assert_eq!(Program::from_identifier("soccer").unwrap(), Program::Football);
    }

    #[test]
    fn test_from_identifier_rejects_unknown() {
        assert!(Program::from_identifier("hockey").is_err());
        assert!(Program::from_identifier("").is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Program::Basketball).unwrap();
        assert_eq!(json, "\"basketball\"");
    }

    #[test]
    fn test_all_covers_every_variant() {
        for program in Program::ALL {
            assert_eq!(
                Program::from_identifier(program.identifier()).unwrap(),
                program
            );
        }
    }
}
