// ABOUTME: Adapter registry for resolving programs to their performance adapters
// ABOUTME: Immutable map built by an exhaustive match over every supported program
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Podium Analytics

//! Adapter registry
//!
//! A simple lookup table from [`Program`] to its adapter, built once and
//! never mutated. Construction is an exhaustive `match` over
//! [`Program::ALL`], so adding a program is a compile-time-checked change
//! here rather than a runtime string match.

use std::collections::HashMap;

use podium_core::models::Program;
use tracing::info;

use crate::basketball::BasketballAdapter;
use crate::core::ProgramPerformanceAdapter;
use crate::football::FootballAdapter;
use crate::swimming::SwimmingAdapter;

/// Create the adapter for one program
#[must_use]
pub fn create_adapter(program: Program) -> Box<dyn ProgramPerformanceAdapter> {
    match program {
        Program::Swimming => Box::new(SwimmingAdapter::new()),
        Program::Basketball => Box::new(BasketballAdapter::new()),
        Program::Football => Box::new(FootballAdapter::new()),
    }
}

/// Immutable registry of all program adapters
pub struct AdapterRegistry {
    adapters: HashMap<Program, Box<dyn ProgramPerformanceAdapter>>,
}

impl AdapterRegistry {
    /// Build the registry with one adapter per supported program
    #[must_use]
    pub fn new() -> Self {
        let adapters: HashMap<Program, Box<dyn ProgramPerformanceAdapter>> = Program::ALL
            .into_iter()
            .map(|program| (program, create_adapter(program)))
            .collect();

        let programs: Vec<&str> = adapters.keys().map(Program::identifier).collect();
        info!(
            "Adapter registry initialized with {} program(s): [{}]",
            adapters.len(),
            programs.join(", ")
        );

        Self { adapters }
    }

    /// Resolve the adapter for a program
    #[must_use]
    pub fn adapter_for(&self, program: Program) -> Option<&dyn ProgramPerformanceAdapter> {
        self.adapters.get(&program).map(|adapter| &**adapter)
    }

    /// Programs with a registered adapter, in registry order
    #[must_use]
    pub fn supported_programs(&self) -> Vec<Program> {
        Program::ALL
            .into_iter()
            .filter(|program| self.adapters.contains_key(program))
            .collect()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_program() {
        let registry = AdapterRegistry::new();
        for program in Program::ALL {
            let adapter = registry.adapter_for(program).unwrap();
            assert_eq!(adapter.program(), program);
            assert_eq!(adapter.config().program, program);
        }
    }

    #[test]
    fn test_supported_programs_in_registry_order() {
        let registry = AdapterRegistry::new();
        assert_eq!(registry.supported_programs(), Program::ALL.to_vec());
    }

    #[test]
    fn test_create_adapter_matches_program() {
        for program in Program::ALL {
            assert_eq!(create_adapter(program).program(), program);
        }
    }
}
