// ABOUTME: Forecast batch helper - scores up to 48 hourly slots, optionally in parallel
// ABOUTME: Fast path only: legacy scorer plus dry thermal banding, no radiant modeling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

//! # Hourly Outlook
//!
//! Maps the legacy scorer over a forecast window so hosts can paint a
//! score-by-hour strip. Slots are independent, so the work parallelizes
//! trivially; [`score_hours`] fans out over rayon's pool while
//! [`score_hours_sequential`] does the same work inline for hosts that do
//! not want threads. Output order always matches input order.
//!
//! This is deliberately the cheap path: the stress band comes from the dry
//! thermal index with the radiant temperature pinned to air temperature.
//! Full radiant modeling stays in the single-snapshot flow.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::scoring::{FactorKey, ScoreEngine};
use crate::thermal::{universal_thermal_climate_index, StressCategory, ThermalInputs};
use runcast_core::models::{Personalization, RunType, WeatherSnapshot};

/// Hard cap on scored slots; anything past two days is noise anyway
pub const MAX_FORECAST_HOURS: usize = 48;

/// One hour of the outlook strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourOutlook {
    /// Slot instant, straight from the input snapshot
    pub timestamp: DateTime<Utc>,
    /// Legacy score for this hour
    pub score: u8,
    /// Up to two highest-penalty factors for this hour
    pub dominant: Vec<FactorKey>,
    /// Stress band from the dry thermal index
    pub category: StressCategory,
}

fn score_slot(
    engine: &ScoreEngine,
    slot: &WeatherSnapshot,
    run_type: RunType,
    prefs: &Personalization,
) -> HourOutlook {
    let breakdown = engine.breakdown(slot, run_type, prefs);

    let normalized = slot.normalized();
    let inputs = ThermalInputs::from_snapshot(&normalized, normalized.air_temp);
    let index = universal_thermal_climate_index(&inputs);

    HourOutlook {
        timestamp: slot.timestamp,
        score: breakdown.score,
        dominant: breakdown.dominant,
        category: index.category,
    }
}

/// Score up to [`MAX_FORECAST_HOURS`] slots across the rayon pool
#[must_use]
pub fn score_hours(
    slots: &[WeatherSnapshot],
    run_type: RunType,
    prefs: &Personalization,
) -> Vec<HourOutlook> {
    let engine = ScoreEngine::new();
    let capped = &slots[..slots.len().min(MAX_FORECAST_HOURS)];
    capped
        .par_iter()
        .map(|slot| score_slot(&engine, slot, run_type, prefs))
        .collect()
}

/// Same work as [`score_hours`], inline on the calling thread
#[must_use]
pub fn score_hours_sequential(
    slots: &[WeatherSnapshot],
    run_type: RunType,
    prefs: &Personalization,
) -> Vec<HourOutlook> {
    let engine = ScoreEngine::new();
    slots
        .iter()
        .take(MAX_FORECAST_HOURS)
        .map(|slot| score_slot(&engine, slot, run_type, prefs))
        .collect()
}
