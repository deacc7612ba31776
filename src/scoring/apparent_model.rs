// ABOUTME: Legacy apparent-temperature score model with per-factor attribution
// ABOUTME: Produces the explainable breakdown (factor penalties, severities, shares)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::config::ApparentScoreConfig;
use crate::psychrometrics::dew_point_f;
use runcast_core::models::{Personalization, RunType, WeatherSnapshot};

/// Ideal-temperature shift per runs-warm/runs-cold notch, °F
const SENSITIVITY_SHIFT_PER_NOTCH_F: f64 = 5.0;

/// Dew-point band edges (°F) with the penalty for reaching each band
const DEW_POINT_BANDS: [(f64, f64); 5] = [
    (75.0, 28.0),
    (70.0, 20.0),
    (65.0, 14.0),
    (60.0, 8.0),
    (55.0, 4.0),
];

/// Penalty scale for the precipitation-probability component
const PRECIP_PROB_SCALE: f64 = 12.0;
/// Probability floor (percent) below which chance of rain is ignored
const PRECIP_PROB_FLOOR_PCT: f64 = 20.0;

/// UV index at which the exposure penalty turns linear
const UV_STEEP_THRESHOLD: f64 = 8.0;
/// UV index at which a token penalty starts
const UV_NOTICE_THRESHOLD: f64 = 6.0;
/// Exposure multiplier for efforts that keep the runner out longer
const UV_EFFORT_MULTIPLIER: f64 = 1.5;

/// Cold-wind synergy: °F-below-35 times mph, scaled and capped
const COLD_WIND_COEFF: f64 = 0.015;
const COLD_WIND_CAP: f64 = 15.0;

/// Heat-humidity synergy: °F-above-75 times dew-above-60, scaled and capped
const HEAT_HUMIDITY_COEFF: f64 = 0.05;
const HEAT_HUMIDITY_CAP: f64 = 30.0;

/// The eight condition factors the legacy model attributes penalty to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKey {
    /// Deviation from the effort-specific ideal temperature
    Temperature,
    /// Dew-point driven muggy-air burden
    Humidity,
    /// Sustained wind above the nuisance threshold
    Wind,
    /// Chance and rate of precipitation
    Precipitation,
    /// Freezing precipitation underfoot
    IceDanger,
    /// Midday sun exposure
    UvExposure,
    /// Cold amplified by wind beyond what either alone costs
    ColdWindSynergy,
    /// Heat amplified by humidity beyond what either alone costs
    HeatHumiditySynergy,
}

impl FactorKey {
    /// Display label for advisory and breakdown rendering
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::Wind => "Wind",
            Self::Precipitation => "Precipitation",
            Self::IceDanger => "Ice risk",
            Self::UvExposure => "UV exposure",
            Self::ColdWindSynergy => "Wind chill compounding",
            Self::HeatHumiditySynergy => "Heat-humidity compounding",
        }
    }
}

/// Qualitative weight class of a single factor's penalty
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorSeverity {
    /// Factor is inactive
    None,
    /// Penalty below 5 points
    Low,
    /// Penalty of 5 to 15 points
    Medium,
    /// Penalty of 15 points or more
    High,
}

impl FactorSeverity {
    fn from_penalty(penalty: f64) -> Self {
        if penalty <= 0.0 {
            Self::None
        } else if penalty < 5.0 {
            Self::Low
        } else if penalty < 15.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// One factor's contribution to the legacy score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreFactor {
    /// Which condition this penalty is attributed to
    pub key: FactorKey,
    /// Display label, duplicated from the key for host convenience
    pub label: String,
    /// Points deducted by this factor (uncapped)
    pub penalty: f64,
    /// Qualitative weight class
    pub severity: FactorSeverity,
    /// Fraction of the raw penalty sum this factor accounts for, 0-1
    pub share: f64,
}

/// Full explainable output of the legacy score model
///
/// `factors` always lists all eight keys, ordered by descending penalty with
/// inactive factors at the tail. Factor penalties are raw contributions;
/// `total_penalty` is capped so the score never reaches zero through
/// accumulation alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Headline legacy score, 1-100
    pub score: u8,
    /// Capped penalty sum actually subtracted from 100
    pub total_penalty: f64,
    /// Every factor, ordered by descending penalty
    pub factors: Vec<ScoreFactor>,
    /// Up to two highest-penalty active factors
    pub dominant: Vec<FactorKey>,
}

fn ideal_temp_f(run_type: RunType, prefs: &Personalization, config: &ApparentScoreConfig) -> f64 {
    let base = match run_type {
        RunType::Easy => config.easy_ideal_f,
        RunType::Workout => config.workout_ideal_f,
        RunType::LongRun => config.long_run_ideal_f,
    };
    // Runs-warm (positive notches) prefer colder air, so the ideal moves down.
    base - SENSITIVITY_SHIFT_PER_NOTCH_F * f64::from(prefs.clamped().temperature_sensitivity)
}

fn temperature_penalty(
    apparent_f: f64,
    run_type: RunType,
    prefs: &Personalization,
    config: &ApparentScoreConfig,
) -> f64 {
    let ideal = ideal_temp_f(run_type, prefs, config);
    if apparent_f < ideal {
        // Runners tolerate cool better than warm: forgive the first few
        // degrees below ideal entirely.
        let over = (ideal - apparent_f - config.cool_tolerance_f).max(0.0);
        over * config.cold_rate_per_f
    } else {
        (apparent_f - ideal) * config.warm_rate_per_f
    }
}

fn humidity_penalty(dew_point: f64) -> f64 {
    for &(edge, penalty) in &DEW_POINT_BANDS {
        if dew_point >= edge {
            return penalty;
        }
    }
    0.0
}

fn wind_penalty(wind_mph: f64, apparent_f: f64, config: &ApparentScoreConfig) -> f64 {
    let excess = (wind_mph - config.wind_threshold_mph).max(0.0);
    if excess <= 0.0 {
        return 0.0;
    }
    // Wind stings in the cold and barely registers in real heat.
    let context = if apparent_f < 35.0 {
        1.5
    } else if apparent_f < 50.0 {
        1.2
    } else if apparent_f <= 70.0 {
        1.0
    } else {
        0.7
    };
    (excess * config.wind_rate_per_mph * context).min(config.wind_penalty_cap)
}

fn precipitation_penalty(prob_pct: f64, rate_in_hr: f64) -> f64 {
    let mut penalty = 0.0;
    if prob_pct > PRECIP_PROB_FLOOR_PCT {
        penalty += (prob_pct / 100.0) * PRECIP_PROB_SCALE;
    }
    if rate_in_hr >= 0.3 {
        penalty += 15.0;
    } else if rate_in_hr >= 0.1 {
        penalty += 10.0;
    } else if rate_in_hr > 0.0 {
        penalty += 5.0;
    }
    penalty
}

fn ice_danger_penalty(
    apparent_f: f64,
    prob_pct: f64,
    rate_in_hr: f64,
    config: &ApparentScoreConfig,
) -> f64 {
    let precip_plausible = prob_pct >= 30.0 || rate_in_hr > 0.0;
    if apparent_f <= config.ice_danger_temp_f && precip_plausible {
        config.ice_danger_penalty
    } else {
        0.0
    }
}

fn uv_penalty(uv_index: f64, run_type: RunType) -> f64 {
    let base = if uv_index >= UV_STEEP_THRESHOLD {
        (uv_index - 7.0) * 3.0
    } else if uv_index >= UV_NOTICE_THRESHOLD {
        2.0
    } else {
        0.0
    };
    match run_type {
        RunType::Easy => base,
        RunType::Workout | RunType::LongRun => base * UV_EFFORT_MULTIPLIER,
    }
}

fn cold_wind_penalty(apparent_f: f64, wind_mph: f64) -> f64 {
    if apparent_f < 35.0 && wind_mph > 5.0 {
        ((35.0 - apparent_f) * wind_mph * COLD_WIND_COEFF).min(COLD_WIND_CAP)
    } else {
        0.0
    }
}

fn heat_humidity_penalty(apparent_f: f64, dew_point: f64) -> f64 {
    if apparent_f > 75.0 && dew_point > 60.0 {
        ((apparent_f - 75.0) * (dew_point - 60.0) * HEAT_HUMIDITY_COEFF).min(HEAT_HUMIDITY_CAP)
    } else {
        0.0
    }
}

/// Evaluate the legacy model against an already-normalized snapshot.
pub fn evaluate(
    snapshot: &WeatherSnapshot,
    run_type: RunType,
    prefs: &Personalization,
    config: &ApparentScoreConfig,
) -> ScoreBreakdown {
    let apparent = snapshot.apparent_temp;
    let dew_point = dew_point_f(snapshot.air_temp, snapshot.humidity);

    let penalties = [
        (
            FactorKey::Temperature,
            temperature_penalty(apparent, run_type, prefs, config),
        ),
        (FactorKey::Humidity, humidity_penalty(dew_point)),
        (
            FactorKey::Wind,
            wind_penalty(snapshot.wind_speed, apparent, config),
        ),
        (
            FactorKey::Precipitation,
            precipitation_penalty(snapshot.precip_probability, snapshot.precip_rate),
        ),
        (
            FactorKey::IceDanger,
            ice_danger_penalty(
                apparent,
                snapshot.precip_probability,
                snapshot.precip_rate,
                config,
            ),
        ),
        (FactorKey::UvExposure, uv_penalty(snapshot.uv_index, run_type)),
        (
            FactorKey::ColdWindSynergy,
            cold_wind_penalty(apparent, snapshot.wind_speed),
        ),
        (
            FactorKey::HeatHumiditySynergy,
            heat_humidity_penalty(apparent, dew_point),
        ),
    ];

    let raw_total: f64 = penalties.iter().map(|(_, p)| p).sum();

    let mut factors: Vec<ScoreFactor> = penalties
        .iter()
        .map(|&(key, penalty)| ScoreFactor {
            key,
            label: key.label().to_owned(),
            penalty,
            severity: FactorSeverity::from_penalty(penalty),
            share: if raw_total > 0.0 {
                penalty / raw_total
            } else {
                0.0
            },
        })
        .collect();
    // Stable sort keeps the evaluation order among equal (mostly zero) penalties.
    factors.sort_by(|a, b| b.penalty.partial_cmp(&a.penalty).unwrap_or(Ordering::Equal));

    let dominant: Vec<FactorKey> = factors
        .iter()
        .filter(|f| f.penalty > 0.0)
        .take(2)
        .map(|f| f.key)
        .collect();

    let total_penalty = raw_total.min(config.max_total_penalty);
    let score = (100.0 - total_penalty).round() as u8;

    ScoreBreakdown {
        score,
        total_penalty,
        factors,
        dominant,
    }
}
