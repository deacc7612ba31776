// ABOUTME: Tunable engine parameters with serde round-tripping and sane defaults
// ABOUTME: Scalar knobs only; structural tables live next to the code that walks them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

//! Engine configuration.
//!
//! Every scalar a product team has ever asked to tune lives here; the
//! defaults reproduce the published behavior exactly. Structural data
//! (band ladders, zone tables, gear catalogs) stays in code beside its
//! consumer, because changing a table's shape changes behavior in ways a
//! config file should not be able to.

use serde::{Deserialize, Serialize};

use runcast_core::errors::EngineResult;

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Score engine knobs
    pub score: ScoreConfig,
    /// Outfit pipeline knobs
    pub outfit: OutfitConfig,
    /// Advisory composer knobs
    pub advisory: AdvisoryConfig,
}

impl EngineConfig {
    /// Load a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`runcast_core::errors::EngineError::InvalidConfig`] when the
    /// document is not valid JSON for this schema.
    pub fn from_json(raw: &str) -> EngineResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Knobs for both score models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoreConfig {
    /// Thermal-index model
    pub utci: UtciScoreConfig,
    /// Legacy apparent-temperature model
    pub apparent: ApparentScoreConfig,
}

/// Thermal-index score model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtciScoreConfig {
    /// Bottom of the no-penalty ideal band, °F
    pub ideal_low_f: f64,
    /// Top of the no-penalty ideal band, °F
    pub ideal_high_f: f64,
    /// Global multiplier applied to every zone rate
    pub severity_multiplier: f64,
    /// Flat penalty once the index leaves the severe band
    pub severe_flat_penalty: f64,
    /// Additional flat penalty once the index leaves the extreme band
    pub extreme_flat_penalty: f64,
}

impl Default for UtciScoreConfig {
    fn default() -> Self {
        Self {
            ideal_low_f: 45.0,
            ideal_high_f: 49.0,
            severity_multiplier: 2.0,
            severe_flat_penalty: 10.0,
            extreme_flat_penalty: 15.0,
        }
    }
}

/// Legacy apparent-temperature score model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApparentScoreConfig {
    /// Ideal apparent temperature for easy runs, °F
    pub easy_ideal_f: f64,
    /// Ideal apparent temperature for workouts, °F
    pub workout_ideal_f: f64,
    /// Ideal apparent temperature for long runs, °F
    pub long_run_ideal_f: f64,
    /// Degrees below ideal forgiven before cold penalties start
    pub cool_tolerance_f: f64,
    /// Penalty per °F below the forgiven cold band
    pub cold_rate_per_f: f64,
    /// Penalty per °F above ideal
    pub warm_rate_per_f: f64,
    /// Wind speed where wind penalties start, mph
    pub wind_threshold_mph: f64,
    /// Penalty per mph above the threshold, before context scaling
    pub wind_rate_per_mph: f64,
    /// Cap on the wind factor penalty
    pub wind_penalty_cap: f64,
    /// Apparent temperature at or below which precipitation means ice, °F
    pub ice_danger_temp_f: f64,
    /// Flat penalty for icy conditions
    pub ice_danger_penalty: f64,
    /// Ceiling on the summed penalty, keeping the score at least 1
    pub max_total_penalty: f64,
}

impl Default for ApparentScoreConfig {
    fn default() -> Self {
        Self {
            easy_ideal_f: 50.0,
            workout_ideal_f: 45.0,
            long_run_ideal_f: 48.0,
            cool_tolerance_f: 8.0,
            cold_rate_per_f: 1.1,
            warm_rate_per_f: 1.3,
            wind_threshold_mph: 8.0,
            wind_rate_per_mph: 0.8,
            wind_penalty_cap: 25.0,
            ice_danger_temp_f: 34.0,
            ice_danger_penalty: 25.0,
            max_total_penalty: 99.0,
        }
    }
}

/// Outfit pipeline parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutfitConfig {
    /// Effective-temperature shift per sensitivity notch, °F
    pub sensitivity_step_f: f64,
    /// Cap on the wind-chill correction folded into effective temperature, °F
    pub wind_chill_cap_f: f64,
    /// Cap on the warm-humidity heat-load correction, °F
    pub humidity_load_cap_f: f64,
    /// Cap on the solar-gain correction, °F
    pub solar_gain_cap_f: f64,
    /// Flat effective-temperature drop when clothing will be wet, °F
    pub wet_clothing_offset_f: f64,
    /// Effective-temperature boost for hard workouts, °F
    pub hard_workout_boost_f: f64,
    /// Cap on the long-run lookahead warm-up adjustment, °F
    pub long_run_rise_cap_f: f64,
    /// At or above this air temperature gloves are never recommended, °F
    pub no_gloves_at_or_above_f: f64,
    /// Extra cold felt by cold-handed runners when laddering gloves, °F
    pub cold_hands_shift_f: f64,
}

impl Default for OutfitConfig {
    fn default() -> Self {
        Self {
            sensitivity_step_f: 5.0,
            wind_chill_cap_f: 5.0,
            humidity_load_cap_f: 8.0,
            solar_gain_cap_f: 6.0,
            wet_clothing_offset_f: 3.0,
            hard_workout_boost_f: 10.0,
            long_run_rise_cap_f: 6.0,
            no_gloves_at_or_above_f: 60.0,
            cold_hands_shift_f: 5.0,
        }
    }
}

/// Advisory composer parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    /// Score-tier threshold shift per boldness notch
    pub boldness_shift_per_notch: f64,
    /// Apparent temperature gating the heat-humidity compound warning, °F
    pub heat_warning_apparent_f: f64,
    /// Dew point gating the heat-humidity compound warning, °F
    pub heat_warning_dew_point_f: f64,
    /// Apparent temperature gating the cold-wind compound warning, °F
    pub cold_warning_apparent_f: f64,
    /// Wind speed gating the cold-wind compound warning, mph
    pub cold_warning_wind_mph: f64,
    /// Apparent temperature gating the icy-footing warning, °F
    pub icy_warning_apparent_f: f64,
    /// Precipitation probability gating the icy-footing warning, percent
    pub icy_warning_precip_pct: f64,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            boldness_shift_per_notch: 7.0,
            heat_warning_apparent_f: 85.0,
            heat_warning_dew_point_f: 65.0,
            cold_warning_apparent_f: 20.0,
            cold_warning_wind_mph: 12.0,
            icy_warning_apparent_f: 34.0,
            icy_warning_precip_pct: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_json() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back = EngineConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = EngineConfig::from_json(r#"{"score":{"utci":{"ideal_low_f":40.0}}}"#).unwrap();
        assert!((config.score.utci.ideal_low_f - 40.0).abs() < f64::EPSILON);
        assert!((config.score.utci.ideal_high_f - 49.0).abs() < f64::EPSILON);
        assert!((config.outfit.hard_workout_boost_f - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_json_is_an_invalid_config_error() {
        let err = EngineConfig::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("Invalid engine configuration"));
    }

    #[test]
    fn ideal_band_default_is_ordered() {
        let config = UtciScoreConfig::default();
        assert!(config.ideal_low_f < config.ideal_high_f);
    }
}
