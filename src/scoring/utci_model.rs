// ABOUTME: Thermal-index score model - ideal band, asymmetric zone walk, flat extremes
// ABOUTME: Canonical source of the 0-100 headline score for current conditions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

use serde::{Deserialize, Serialize};

use crate::config::UtciScoreConfig;
use crate::thermal::{StressCategory, ThermalIndex};

/// Output of the thermal-index score model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtciScore {
    /// Headline score, 0 (unrunnable) to 100 (perfect)
    pub score: u8,
    /// Thermal index the score was derived from, °F
    pub utci_f: f64,
    /// Signed distance outside the ideal band, °F (negative = cold side)
    pub deviation_f: f64,
    /// Accumulated zone penalty after the severity multiplier
    pub zone_penalty: f64,
    /// Flat penalties for crossing the severe and extreme edges
    pub flat_penalty: f64,
    /// Stress band carried over from the thermal index
    pub band: StressCategory,
}

/// One zone of the penalty table: everything between the previous edge and
/// `edge_f` accrues at `rate` points per °F (before the severity multiplier).
struct Zone {
    edge_f: f64,
    rate: f64,
}

/// Cold-side zones, walked downward from the ideal band. Rates steepen
/// through the canonical stress-band edges at 14, -5.8 and -27.4 °F.
const COLD_ZONES: [Zone; 8] = [
    Zone { edge_f: 40.0, rate: 0.25 },
    Zone { edge_f: 35.0, rate: 0.40 },
    Zone { edge_f: 30.0, rate: 0.55 },
    Zone { edge_f: 25.0, rate: 0.70 },
    Zone { edge_f: 14.0, rate: 0.85 },
    Zone { edge_f: -5.8, rate: 1.00 },
    Zone { edge_f: -27.4, rate: 1.20 },
    Zone { edge_f: f64::NEG_INFINITY, rate: 1.40 },
];

/// Heat-side zones, walked upward from the ideal band. Mild heat is cheaper
/// than equivalent cold; the table re-steepens sharply at 89.6 °F where heat
/// stress turns physiological.
const HEAT_ZONES: [Zone; 8] = [
    Zone { edge_f: 55.0, rate: 0.20 },
    Zone { edge_f: 62.0, rate: 0.30 },
    Zone { edge_f: 70.0, rate: 0.40 },
    Zone { edge_f: 78.8, rate: 0.50 },
    Zone { edge_f: 89.6, rate: 0.70 },
    Zone { edge_f: 100.4, rate: 1.10 },
    Zone { edge_f: 106.0, rate: 1.30 },
    Zone { edge_f: f64::INFINITY, rate: 1.40 },
];

/// Accumulate zone-table penalty for a value below the ideal band.
fn cold_zone_penalty(utci_f: f64, ideal_low_f: f64) -> f64 {
    let mut penalty = 0.0;
    let mut upper = ideal_low_f;
    for zone in &COLD_ZONES {
        let lower = zone.edge_f.max(utci_f);
        if lower < upper {
            penalty += (upper - lower) * zone.rate;
        }
        if utci_f >= zone.edge_f {
            break;
        }
        upper = zone.edge_f;
    }
    penalty
}

/// Accumulate zone-table penalty for a value above the ideal band.
fn heat_zone_penalty(utci_f: f64, ideal_high_f: f64) -> f64 {
    let mut penalty = 0.0;
    let mut lower = ideal_high_f;
    for zone in &HEAT_ZONES {
        let upper = zone.edge_f.min(utci_f);
        if upper > lower {
            penalty += (upper - lower) * zone.rate;
        }
        if utci_f <= zone.edge_f {
            break;
        }
        lower = zone.edge_f;
    }
    penalty
}

/// Score a thermal index against the ideal band.
pub fn score_index(index: &ThermalIndex, config: &UtciScoreConfig) -> UtciScore {
    let utci = index.utci_f;
    let deviation_f = if utci < config.ideal_low_f {
        utci - config.ideal_low_f
    } else if utci > config.ideal_high_f {
        utci - config.ideal_high_f
    } else {
        0.0
    };

    let raw_zone = if deviation_f < 0.0 {
        cold_zone_penalty(utci, config.ideal_low_f)
    } else if deviation_f > 0.0 {
        heat_zone_penalty(utci, config.ideal_high_f)
    } else {
        0.0
    };
    let zone_penalty = raw_zone * config.severity_multiplier;

    // Flat penalties stack: crossing the extreme edge also means the severe
    // edge was crossed.
    let mut flat_penalty = 0.0;
    if utci <= -5.8 || utci >= 100.4 {
        flat_penalty += config.severe_flat_penalty;
    }
    if utci <= -27.4 || utci >= 106.0 {
        flat_penalty += config.extreme_flat_penalty;
    }

    let score = (100.0 - zone_penalty - flat_penalty).clamp(0.0, 100.0).round() as u8;

    UtciScore {
        score,
        utci_f: utci,
        deviation_f,
        zone_penalty,
        flat_penalty,
        band: index.category,
    }
}
