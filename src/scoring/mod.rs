// ABOUTME: Score engine facade - wires the thermal-index and legacy models to config
// ABOUTME: Entry point for turning conditions into 0-100 runnability scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

//! # Run Scoring
//!
//! Two parallel score models answer "how good is this weather to run in":
//!
//! - The **thermal-index model** ([`ScoreEngine::utci_score`]) scores the
//!   UTCI-equivalent temperature against an ideal band through an asymmetric
//!   zone table. It is the headline number: physically grounded, but a single
//!   aggregate with no per-condition attribution.
//! - The **legacy apparent model** ([`ScoreEngine::breakdown`]) scores the
//!   provider feels-like temperature through eight independently attributed
//!   factors. It is the explainable number: the outfit and advisory layers
//!   consume its factor list.
//!
//! Both are pure functions of their inputs plus the engine's [`ScoreConfig`];
//! the same snapshot always produces the same scores.

mod apparent_model;
mod utci_model;

pub use apparent_model::{FactorKey, FactorSeverity, ScoreBreakdown, ScoreFactor};
pub use utci_model::UtciScore;

use crate::config::ScoreConfig;
use crate::thermal::ThermalIndex;
use runcast_core::models::{Personalization, RunType, WeatherSnapshot};

/// Stateless scorer configured once and reused across calls
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    config: ScoreConfig,
}

impl ScoreEngine {
    /// Engine with the stock tuning
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with host-supplied tuning
    #[must_use]
    pub const fn with_config(config: ScoreConfig) -> Self {
        Self { config }
    }

    /// Score a computed thermal index through the zone table
    #[must_use]
    pub fn utci_score(&self, index: &ThermalIndex) -> UtciScore {
        utci_model::score_index(index, &self.config.utci)
    }

    /// Run the legacy factor model over a snapshot
    ///
    /// The snapshot is normalized first, so callers may pass raw provider
    /// data in either unit system.
    #[must_use]
    pub fn breakdown(
        &self,
        snapshot: &WeatherSnapshot,
        run_type: RunType,
        prefs: &Personalization,
    ) -> ScoreBreakdown {
        let normalized = snapshot.normalized();
        apparent_model::evaluate(&normalized, run_type, prefs, &self.config.apparent)
    }
}
