// ABOUTME: UTCI thermal stress chain - domain clamps, polynomial, rain correction, stress bands
// ABOUTME: Converts imperial snapshot fields to the metric polynomial frame and back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

//! Universal Thermal Climate Index for runners.
//!
//! The chain runs: clamp inputs to the polynomial's fitted domain, evaluate
//! the offset, sanity-check the result, subtract a precipitation correction
//! (the regression was fitted on dry subjects), and band the final value
//! into one of ten stress categories.
//!
//! Everything external speaks °F and mph; the polynomial frame (°C, m/s,
//! kPa) never leaks out of this module.

mod polynomial;

use serde::{Deserialize, Serialize};
use tracing::warn;

use runcast_core::constants::{precip, utci_domain};
use runcast_core::models::WeatherSnapshot;
use runcast_core::units::{celsius_to_fahrenheit, fahrenheit_to_celsius, mph_to_ms};

use crate::psychrometrics::vapor_pressure_hpa;

/// Inputs to the thermal index, °F / mph / percent / in/hr.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalInputs {
    /// Air temperature, °F
    pub air_temp_f: f64,
    /// Mean radiant temperature, °F
    pub mrt_f: f64,
    /// Wind speed, mph
    pub wind_mph: f64,
    /// Relative humidity, percent
    pub humidity_pct: f64,
    /// Liquid-equivalent precipitation rate, in/hr
    pub precip_rate_in_hr: f64,
}

impl ThermalInputs {
    /// Build thermal inputs from a normalized snapshot and a precomputed MRT.
    #[must_use]
    pub fn from_snapshot(snapshot: &WeatherSnapshot, mrt_f: f64) -> Self {
        Self {
            air_temp_f: snapshot.air_temp,
            mrt_f,
            wind_mph: snapshot.wind_speed,
            humidity_pct: snapshot.humidity,
            precip_rate_in_hr: snapshot.precip_rate,
        }
    }
}

/// Computed thermal index with its provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalIndex {
    /// Final index after the precipitation correction, °F
    pub utci_f: f64,
    /// Index before the precipitation correction, °F
    pub dry_utci_f: f64,
    /// Precipitation correction, °F, zero or negative
    pub rain_adjustment_f: f64,
    /// Intensity class the correction was keyed on
    pub precip_intensity: PrecipIntensity,
    /// Stress band of the final value
    pub category: StressCategory,
    /// True when the polynomial result was rejected and the linear
    /// apparent-temperature approximation was used instead
    pub used_fallback: bool,
}

/// Precipitation intensity classes used by the rain correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecipIntensity {
    /// No liquid falling
    None,
    /// Under 0.1 in/hr
    Light,
    /// 0.1 to 0.3 in/hr
    Moderate,
    /// 0.3 in/hr and up
    Heavy,
}

impl PrecipIntensity {
    /// Classify a liquid-equivalent rate in in/hr.
    #[must_use]
    pub fn from_rate_in_hr(rate: f64) -> Self {
        if rate <= 0.0 {
            Self::None
        } else if rate < precip::LIGHT_MAX_IN_HR {
            Self::Light
        } else if rate < precip::MODERATE_MAX_IN_HR {
            Self::Moderate
        } else {
            Self::Heavy
        }
    }
}

/// The ten UTCI stress bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressCategory {
    /// At or below -27.4°F
    ExtremeCold,
    /// -27.4°F to -5.8°F
    VeryStrongCold,
    /// -5.8°F to 14°F
    StrongCold,
    /// 14°F to 32°F
    ModerateCold,
    /// 32°F to 48.2°F
    SlightCold,
    /// 48.2°F to 78.8°F
    Comfortable,
    /// 78.8°F to 89.6°F
    ModerateHeat,
    /// 89.6°F to 100.4°F
    StrongHeat,
    /// 100.4°F to 106°F
    VeryStrongHeat,
    /// Above 106°F
    ExtremeHeat,
}

/// Coarse impact grading attached to each stress band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    /// No thermal stress
    None,
    /// Minor kit or effort adjustments
    Low,
    /// Noticeable stress on a normal run
    Moderate,
    /// Risky without precautions
    High,
    /// Dangerous exposure
    Extreme,
}

impl StressCategory {
    /// Band a final index value (°F).
    #[must_use]
    pub fn from_utci_f(utci_f: f64) -> Self {
        // Band edges are the canonical UTCI thresholds converted to °F.
        if utci_f <= -27.4 {
            Self::ExtremeCold
        } else if utci_f <= -5.8 {
            Self::VeryStrongCold
        } else if utci_f <= 14.0 {
            Self::StrongCold
        } else if utci_f <= 32.0 {
            Self::ModerateCold
        } else if utci_f <= 48.2 {
            Self::SlightCold
        } else if utci_f <= 78.8 {
            Self::Comfortable
        } else if utci_f <= 89.6 {
            Self::ModerateHeat
        } else if utci_f <= 100.4 {
            Self::StrongHeat
        } else if utci_f <= 106.0 {
            Self::VeryStrongHeat
        } else {
            Self::ExtremeHeat
        }
    }

    /// Human-readable band name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExtremeCold => "Extreme Cold",
            Self::VeryStrongCold => "Very Strong Cold",
            Self::StrongCold => "Strong Cold",
            Self::ModerateCold => "Moderate Cold",
            Self::SlightCold => "Slight Cold",
            Self::Comfortable => "Comfortable",
            Self::ModerateHeat => "Moderate Heat",
            Self::StrongHeat => "Strong Heat",
            Self::VeryStrongHeat => "Very Strong Heat",
            Self::ExtremeHeat => "Extreme Heat",
        }
    }

    /// How hard the band bears on a run.
    #[must_use]
    pub const fn impact(self) -> ImpactLevel {
        match self {
            Self::ExtremeCold | Self::ExtremeHeat => ImpactLevel::Extreme,
            Self::VeryStrongCold | Self::VeryStrongHeat => ImpactLevel::High,
            Self::StrongCold | Self::ModerateCold | Self::StrongHeat => ImpactLevel::Moderate,
            Self::SlightCold | Self::ModerateHeat => ImpactLevel::Low,
            Self::Comfortable => ImpactLevel::None,
        }
    }
}

/// Precipitation correction (°F) by dry-index band and rain intensity.
///
/// Rows are dry-index bands (deep cold through extreme heat), columns are
/// light / moderate / heavy rates. Cold rain just above freezing strips the
/// most heat; in serious heat rain is nearly neutral.
const RAIN_ADJUSTMENT_F: [[f64; 3]; 6] = [
    [-4.0, -7.0, -10.0],  // <= 14 °F: snow regime
    [-6.0, -10.0, -15.0], // <= 32 °F: freezing rain and sleet
    [-7.0, -12.0, -16.0], // <= 48.2 °F: cold rain, worst case
    [-3.0, -5.0, -8.0],   // <= 78.8 °F: mild rain
    [-1.0, -3.0, -5.0],   // <= 100.4 °F: warm rain
    [0.0, -1.0, -2.0],    // above: rain barely registers
];

fn rain_adjustment_f(dry_utci_f: f64, intensity: PrecipIntensity) -> f64 {
    let column = match intensity {
        PrecipIntensity::None => return 0.0,
        PrecipIntensity::Light => 0,
        PrecipIntensity::Moderate => 1,
        PrecipIntensity::Heavy => 2,
    };
    let band = if dry_utci_f <= 14.0 {
        0
    } else if dry_utci_f <= 32.0 {
        1
    } else if dry_utci_f <= 48.2 {
        2
    } else if dry_utci_f <= 78.8 {
        3
    } else if dry_utci_f <= 100.4 {
        4
    } else {
        5
    };
    RAIN_ADJUSTMENT_F[band][column]
}

/// Linear apparent-temperature approximation used when the polynomial
/// result is rejected. Steadman's formula: metric in, °C out.
fn fallback_index_c(ta_c: f64, vapor_hpa: f64, wind_ms: f64) -> f64 {
    ta_c + 0.33 * vapor_hpa - 0.70 * wind_ms - 4.0
}

/// Compute the thermal index for one set of conditions.
///
/// Inputs are clamped to the polynomial's fitted domain first, so garbage
/// readings degrade gracefully instead of exploding a sixth-order fit. A
/// non-finite or wildly out-of-range result falls back to the linear
/// approximation and flags itself.
#[must_use]
pub fn universal_thermal_climate_index(inputs: &ThermalInputs) -> ThermalIndex {
    let ta_c = fahrenheit_to_celsius(inputs.air_temp_f)
        .clamp(utci_domain::AIR_TEMP_MIN_C, utci_domain::AIR_TEMP_MAX_C);
    let va_ms = mph_to_ms(inputs.wind_mph).clamp(utci_domain::WIND_MIN_MS, utci_domain::WIND_MAX_MS);
    // °F difference scales to K by 5/9; no offset shift for a delta.
    let d_tmrt_k = ((inputs.mrt_f - inputs.air_temp_f) * 5.0 / 9.0)
        .clamp(utci_domain::DELTA_MRT_MIN_K, utci_domain::DELTA_MRT_MAX_K);
    let vapor_hpa = vapor_pressure_hpa(ta_c, inputs.humidity_pct)
        .clamp(utci_domain::VAPOR_MIN_HPA, utci_domain::VAPOR_MAX_HPA);

    let offset_c = polynomial::utci_offset_c(ta_c, va_ms, d_tmrt_k, vapor_hpa / 10.0);
    let candidate_f = celsius_to_fahrenheit(ta_c + offset_c);

    let (dry_utci_f, used_fallback) =
        if candidate_f.is_finite() && candidate_f.abs() <= utci_domain::SANITY_LIMIT_F {
            (candidate_f, false)
        } else {
            warn!(
                candidate_f,
                air_temp_f = inputs.air_temp_f,
                "thermal index polynomial rejected, using linear approximation"
            );
            (
                celsius_to_fahrenheit(fallback_index_c(ta_c, vapor_hpa, va_ms)),
                true,
            )
        };

    let precip_intensity = PrecipIntensity::from_rate_in_hr(inputs.precip_rate_in_hr);
    let rain_adjustment = rain_adjustment_f(dry_utci_f, precip_intensity);
    let utci_f = dry_utci_f + rain_adjustment;

    ThermalIndex {
        utci_f,
        dry_utci_f,
        rain_adjustment_f: rain_adjustment,
        precip_intensity,
        category: StressCategory::from_utci_f(utci_f),
        used_fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dry(air_f: f64, wind_mph: f64, humidity: f64) -> ThermalInputs {
        ThermalInputs {
            air_temp_f: air_f,
            mrt_f: air_f,
            wind_mph,
            humidity_pct: humidity,
            precip_rate_in_hr: 0.0,
        }
    }

    #[test]
    fn mild_reference_conditions_track_air_temperature() {
        // 68 °F, calm, 50% RH, no radiant excess: the index stays close to
        // the air temperature.
        let index = universal_thermal_climate_index(&dry(68.0, 1.0, 50.0));
        assert!(
            (index.utci_f - 68.0).abs() < 5.0,
            "index was {}",
            index.utci_f
        );
        assert_eq!(index.category, StressCategory::Comfortable);
        assert!(!index.used_fallback);
    }

    #[test]
    fn wind_cools_the_index_in_cold_air() {
        let calm = universal_thermal_climate_index(&dry(30.0, 2.0, 60.0));
        let windy = universal_thermal_climate_index(&dry(30.0, 15.0, 60.0));
        assert!(
            windy.utci_f < calm.utci_f - 5.0,
            "calm={} windy={}",
            calm.utci_f,
            windy.utci_f
        );
    }

    #[test]
    fn humidity_heats_the_index_in_warm_air() {
        let dry_day = universal_thermal_climate_index(&dry(95.0, 3.0, 20.0));
        let humid_day = universal_thermal_climate_index(&dry(95.0, 3.0, 80.0));
        assert!(
            humid_day.utci_f > dry_day.utci_f + 5.0,
            "dry={} humid={}",
            dry_day.utci_f,
            humid_day.utci_f
        );
    }

    #[test]
    fn radiant_excess_heats_the_index() {
        let shaded = universal_thermal_climate_index(&dry(68.0, 5.0, 50.0));
        let sunlit = universal_thermal_climate_index(&ThermalInputs {
            mrt_f: 68.0 + 27.0,
            ..dry(68.0, 5.0, 50.0)
        });
        assert!(sunlit.utci_f > shaded.utci_f + 3.0);
    }

    #[test]
    fn rain_adjustment_is_never_positive() {
        for air in [-10.0, 20.0, 40.0, 60.0, 85.0, 105.0] {
            for rate in [0.05, 0.2, 0.6] {
                let index = universal_thermal_climate_index(&ThermalInputs {
                    precip_rate_in_hr: rate,
                    ..dry(air, 5.0, 70.0)
                });
                assert!(index.rain_adjustment_f <= 0.0);
                assert!(index.utci_f <= index.dry_utci_f);
            }
        }
    }

    #[test]
    fn heavier_rain_costs_more() {
        let light = universal_thermal_climate_index(&ThermalInputs {
            precip_rate_in_hr: 0.05,
            ..dry(40.0, 5.0, 80.0)
        });
        let heavy = universal_thermal_climate_index(&ThermalInputs {
            precip_rate_in_hr: 0.5,
            ..dry(40.0, 5.0, 80.0)
        });
        assert!(heavy.utci_f < light.utci_f);
        assert_eq!(light.dry_utci_f, heavy.dry_utci_f);
    }

    #[test]
    fn dry_conditions_have_zero_rain_adjustment() {
        let index = universal_thermal_climate_index(&dry(50.0, 5.0, 50.0));
        assert_eq!(index.rain_adjustment_f, 0.0);
        assert_eq!(index.utci_f, index.dry_utci_f);
        assert_eq!(index.precip_intensity, PrecipIntensity::None);
    }

    #[test]
    fn intensity_classes_split_at_the_rate_edges() {
        assert_eq!(PrecipIntensity::from_rate_in_hr(0.0), PrecipIntensity::None);
        assert_eq!(PrecipIntensity::from_rate_in_hr(0.05), PrecipIntensity::Light);
        assert_eq!(PrecipIntensity::from_rate_in_hr(0.1), PrecipIntensity::Moderate);
        assert_eq!(PrecipIntensity::from_rate_in_hr(0.29), PrecipIntensity::Moderate);
        assert_eq!(PrecipIntensity::from_rate_in_hr(0.3), PrecipIntensity::Heavy);
        assert_eq!(PrecipIntensity::from_rate_in_hr(2.0), PrecipIntensity::Heavy);
    }

    #[test]
    fn non_finite_radiant_input_triggers_the_fallback() {
        let index = universal_thermal_climate_index(&ThermalInputs {
            mrt_f: f64::NAN,
            ..dry(60.0, 5.0, 50.0)
        });
        assert!(index.used_fallback);
        assert!(index.utci_f.is_finite());
    }

    #[test]
    fn categories_band_at_the_canonical_edges() {
        let cases = [
            (-30.0, StressCategory::ExtremeCold),
            (-27.4, StressCategory::ExtremeCold),
            (-27.3, StressCategory::VeryStrongCold),
            (-5.8, StressCategory::VeryStrongCold),
            (0.0, StressCategory::StrongCold),
            (14.0, StressCategory::StrongCold),
            (20.0, StressCategory::ModerateCold),
            (32.0, StressCategory::ModerateCold),
            (40.0, StressCategory::SlightCold),
            (48.2, StressCategory::SlightCold),
            (60.0, StressCategory::Comfortable),
            (78.8, StressCategory::Comfortable),
            (85.0, StressCategory::ModerateHeat),
            (89.6, StressCategory::ModerateHeat),
            (95.0, StressCategory::StrongHeat),
            (100.4, StressCategory::StrongHeat),
            (103.0, StressCategory::VeryStrongHeat),
            (106.0, StressCategory::VeryStrongHeat),
            (106.1, StressCategory::ExtremeHeat),
        ];
        for (value, expected) in cases {
            assert_eq!(
                StressCategory::from_utci_f(value),
                expected,
                "at {value} °F"
            );
        }
    }

    #[test]
    fn impact_grading_is_symmetric_at_the_extremes() {
        assert_eq!(StressCategory::ExtremeCold.impact(), ImpactLevel::Extreme);
        assert_eq!(StressCategory::ExtremeHeat.impact(), ImpactLevel::Extreme);
        assert_eq!(StressCategory::Comfortable.impact(), ImpactLevel::None);
        assert!(StressCategory::StrongHeat.impact() > StressCategory::ModerateHeat.impact());
    }

    #[test]
    fn deep_cold_with_gale_stays_finite_and_extreme() {
        let index = universal_thermal_climate_index(&dry(-40.0, 45.0, 70.0));
        assert!(index.utci_f.is_finite());
        assert_eq!(index.category, StressCategory::ExtremeCold);
    }

    #[test]
    fn index_is_deterministic() {
        let a = universal_thermal_climate_index(&dry(47.0, 6.0, 55.0));
        let b = universal_thermal_climate_index(&dry(47.0, 6.0, 55.0));
        assert_eq!(a, b);
    }
}
