// ABOUTME: Core data models for the Runcast weather intelligence engine
// ABOUTME: Defines WeatherSnapshot, Personalization, RunType and sanitization rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

//! # Data Models
//!
//! Core data structures flowing through the engine. A [`WeatherSnapshot`] is a
//! point-in-time observation assembled by the host from whatever provider it
//! uses; a [`Personalization`] captures the runner's stable preferences. Both
//! are plain values: the engine derives everything else from them on demand
//! and persists nothing.
//!
//! ## Design Principles
//!
//! - **Garbage-tolerant**: out-of-domain numerics are clamped or defaulted at
//!   the boundary; a snapshot full of NaN still produces a well-formed answer
//! - **Unit-declared**: snapshots carry their own [`UnitSystem`] and are
//!   normalized to the imperial computation frame exactly once
//! - **Serializable**: every model round-trips through JSON for host consumption

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::physics::STANDARD_PRESSURE_HPA;
use crate::errors::{EngineError, EngineResult};
use crate::units::{self, UnitSystem};

/// Replace a non-finite reading with a documented default
#[inline]
fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Clamp a finite-or-defaulted reading into an inclusive range
#[inline]
fn clamp_or(value: f64, fallback: f64, min: f64, max: f64) -> f64 {
    finite_or(value, fallback).clamp(min, max)
}

/// The intensity profile of the planned run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunType {
    /// Conversational-pace aerobic run
    Easy,
    /// Intervals, tempo, or other hard efforts
    Workout,
    /// Extended-duration run where conditions drift mid-run
    LongRun,
}

impl RunType {
    /// Human-readable label for advisory text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy run",
            Self::Workout => "workout",
            Self::LongRun => "long run",
        }
    }
}

/// Runner gender, used only by the base-layer ladder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Female gear profile (adds a sports bra at every band)
    #[default]
    Female,
    /// Male gear profile
    Male,
}

/// Stable runner preferences that bias the engine's output
///
/// # Examples
///
/// ```rust
/// use runcast_core::models::{Gender, Personalization};
///
/// let prefs = Personalization {
///     gender: Gender::Female,
///     cold_hands: true,
///     temperature_sensitivity: -1,
///     boldness: 1,
/// };
/// assert_eq!(prefs.clamped().boldness, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personalization {
    /// Gender profile for the base-layer ladder
    #[serde(default)]
    pub gender: Gender,
    /// Whether the runner's hands run cold (separate glove thresholds)
    #[serde(default)]
    pub cold_hands: bool,
    /// Runs-warm/runs-cold bias in notches, -2..=2 (each worth 5 °F)
    #[serde(default)]
    pub temperature_sensitivity: i8,
    /// Risk appetite in notches, -2..=2 (shifts advisory tier thresholds)
    #[serde(default)]
    pub boldness: i8,
}

impl Personalization {
    /// Copy of `self` with both notch settings clamped to their -2..=2 domain
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            temperature_sensitivity: self.temperature_sensitivity.clamp(-2, 2),
            boldness: self.boldness.clamp(-2, 2),
            ..self
        }
    }
}

/// Serde default for the pressure reading
fn default_pressure() -> f64 {
    STANDARD_PRESSURE_HPA
}

/// A point-in-time weather observation at a location
///
/// Hosts assemble snapshots from their weather provider; the engine treats
/// them as immutable input. Optional readings (`pressure`, `solar_radiation`)
/// default rather than fail when a provider omits them.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use runcast_core::models::WeatherSnapshot;
/// use runcast_core::units::UnitSystem;
///
/// let snapshot = WeatherSnapshot {
///     air_temp: 47.0,
///     apparent_temp: 47.0,
///     humidity: 50.0,
///     wind_speed: 3.0,
///     precip_probability: 0.0,
///     precip_rate: 0.0,
///     uv_index: 2.0,
///     cloud_cover: 25.0,
///     pressure: 1013.25,
///     solar_radiation: 150.0,
///     is_daylight: true,
///     timestamp: Utc::now(),
///     latitude: 45.5,
///     longitude: -73.6,
///     timezone: "America/Montreal".into(),
///     units: UnitSystem::Imperial,
/// };
/// assert!(snapshot.normalized().humidity <= 100.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Dry-bulb air temperature (°F or °C per `units`)
    pub air_temp: f64,
    /// Provider feels-like temperature (°F or °C per `units`)
    pub apparent_temp: f64,
    /// Relative humidity, percent 0-100
    pub humidity: f64,
    /// Sustained wind speed (mph or km/h per `units`)
    pub wind_speed: f64,
    /// Chance of precipitation, percent 0-100
    pub precip_probability: f64,
    /// Precipitation rate (in/hr or mm/hr per `units`)
    pub precip_rate: f64,
    /// UV index, 0 at night
    pub uv_index: f64,
    /// Cloud cover, percent 0-100
    pub cloud_cover: f64,
    /// Sea-level pressure (hPa under both unit systems)
    #[serde(default = "default_pressure")]
    pub pressure: f64,
    /// Global horizontal irradiance (W/m²); 0 when the provider omits it
    #[serde(default)]
    pub solar_radiation: f64,
    /// Whether the sun is up at this instant, per the provider
    pub is_daylight: bool,
    /// Observation instant
    pub timestamp: DateTime<Utc>,
    /// Site latitude, degrees north
    pub latitude: f64,
    /// Site longitude, degrees east
    pub longitude: f64,
    /// IANA timezone name of the site (e.g. `America/Montreal`)
    pub timezone: String,
    /// Unit frame of the temperature/wind/precip fields
    #[serde(default)]
    pub units: UnitSystem,
}

impl WeatherSnapshot {
    /// Copy of `self` in the imperial computation frame with every numeric
    /// field sanitized
    ///
    /// Non-finite readings become documented defaults (temperatures 50 °F,
    /// percentages 0, pressure 1013.25 hPa), percentages are clamped to
    /// 0-100, and wind/precip/UV are floored at zero. Latitude is clamped to
    /// ±90 and longitude to ±180. The result always satisfies the input
    /// assumptions of every downstream stage.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let (air, apparent, wind, rate) = match self.units {
            UnitSystem::Imperial => (
                self.air_temp,
                self.apparent_temp,
                self.wind_speed,
                self.precip_rate,
            ),
            UnitSystem::Metric => (
                units::celsius_to_fahrenheit(self.air_temp),
                units::celsius_to_fahrenheit(self.apparent_temp),
                units::kmh_to_mph(self.wind_speed),
                units::mm_to_inches(self.precip_rate),
            ),
        };

        Self {
            air_temp: finite_or(air, 50.0),
            apparent_temp: finite_or(apparent, finite_or(air, 50.0)),
            humidity: clamp_or(self.humidity, 0.0, 0.0, 100.0),
            wind_speed: clamp_or(wind, 0.0, 0.0, 250.0),
            precip_probability: clamp_or(self.precip_probability, 0.0, 0.0, 100.0),
            precip_rate: clamp_or(rate, 0.0, 0.0, 40.0),
            uv_index: clamp_or(self.uv_index, 0.0, 0.0, 16.0),
            cloud_cover: clamp_or(self.cloud_cover, 0.0, 0.0, 100.0),
            pressure: clamp_or(self.pressure, STANDARD_PRESSURE_HPA, 800.0, 1100.0),
            solar_radiation: clamp_or(self.solar_radiation, 0.0, 0.0, 1500.0),
            is_daylight: self.is_daylight,
            timestamp: self.timestamp,
            latitude: clamp_or(self.latitude, 0.0, -90.0, 90.0),
            longitude: clamp_or(self.longitude, 0.0, -180.0, 180.0),
            timezone: self.timezone.clone(),
            units: UnitSystem::Imperial,
        }
    }

    /// Resolve the snapshot's IANA timezone name
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownTimezone`] when the name is not a known
    /// IANA zone. This is the engine's only structural input failure.
    pub fn tz(&self) -> EngineResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| EngineError::UnknownTimezone {
                name: self.timezone.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base_snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            air_temp: 47.0,
            apparent_temp: 47.0,
            humidity: 50.0,
            wind_speed: 3.0,
            precip_probability: 0.0,
            precip_rate: 0.0,
            uv_index: 2.0,
            cloud_cover: 25.0,
            pressure: STANDARD_PRESSURE_HPA,
            solar_radiation: 150.0,
            is_daylight: true,
            timestamp: Utc.with_ymd_and_hms(2025, 4, 12, 14, 0, 0).unwrap(),
            latitude: 45.5,
            longitude: -73.6,
            timezone: "America/Montreal".into(),
            units: UnitSystem::Imperial,
        }
    }

    #[test]
    fn normalized_is_identity_for_clean_imperial_input() {
        let snapshot = base_snapshot();
        assert_eq!(snapshot.normalized(), snapshot);
    }

    #[test]
    fn normalized_converts_metric_fields() {
        let snapshot = WeatherSnapshot {
            air_temp: 10.0,
            apparent_temp: 8.0,
            wind_speed: 10.0,
            precip_rate: 2.54,
            units: UnitSystem::Metric,
            ..base_snapshot()
        };
        let normalized = snapshot.normalized();
        assert!((normalized.air_temp - 50.0).abs() < 1e-9);
        assert!((normalized.apparent_temp - 46.4).abs() < 1e-9);
        assert!((normalized.wind_speed - 6.213_711_92).abs() < 1e-6);
        assert!((normalized.precip_rate - 0.1).abs() < 1e-9);
        assert_eq!(normalized.units, UnitSystem::Imperial);
    }

    #[test]
    fn normalized_sanitizes_garbage_numerics() {
        let snapshot = WeatherSnapshot {
            air_temp: f64::NAN,
            apparent_temp: f64::INFINITY,
            humidity: 180.0,
            wind_speed: -12.0,
            precip_probability: f64::NEG_INFINITY,
            precip_rate: f64::NAN,
            uv_index: -3.0,
            cloud_cover: 150.0,
            pressure: f64::NAN,
            solar_radiation: -500.0,
            latitude: 95.0,
            longitude: 200.0,
            ..base_snapshot()
        };
        let normalized = snapshot.normalized();
        assert!((normalized.air_temp - 50.0).abs() < 1e-9);
        assert!((normalized.apparent_temp - 50.0).abs() < 1e-9);
        assert!((normalized.humidity - 100.0).abs() < 1e-9);
        assert!(normalized.wind_speed.abs() < 1e-9);
        assert!(normalized.precip_probability.abs() < 1e-9);
        assert!(normalized.precip_rate.abs() < 1e-9);
        assert!(normalized.uv_index.abs() < 1e-9);
        assert!((normalized.cloud_cover - 100.0).abs() < 1e-9);
        assert!((normalized.pressure - STANDARD_PRESSURE_HPA).abs() < 1e-9);
        assert!(normalized.solar_radiation.abs() < 1e-9);
        assert!((normalized.latitude - 90.0).abs() < 1e-9);
        assert!((normalized.longitude - 180.0).abs() < 1e-9);
    }

    #[test]
    fn tz_resolves_known_zone_and_rejects_unknown() {
        assert!(base_snapshot().tz().is_ok());

        let snapshot = WeatherSnapshot {
            timezone: "Mars/Olympus_Mons".into(),
            ..base_snapshot()
        };
        assert!(matches!(
            snapshot.tz(),
            Err(EngineError::UnknownTimezone { .. })
        ));
    }

    #[test]
    fn personalization_clamps_notches() {
        let prefs = Personalization {
            temperature_sensitivity: 7,
            boldness: -9,
            ..Personalization::default()
        };
        let clamped = prefs.clamped();
        assert_eq!(clamped.temperature_sensitivity, 2);
        assert_eq!(clamped.boldness, -2);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = base_snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: WeatherSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn snapshot_defaults_optional_fields_when_absent() {
        let json = r#"{
            "air_temp": 47.0,
            "apparent_temp": 47.0,
            "humidity": 50.0,
            "wind_speed": 3.0,
            "precip_probability": 0.0,
            "precip_rate": 0.0,
            "uv_index": 2.0,
            "cloud_cover": 25.0,
            "is_daylight": true,
            "timestamp": "2025-04-12T14:00:00Z",
            "latitude": 45.5,
            "longitude": -73.6,
            "timezone": "America/Montreal"
        }"#;
        let snapshot: WeatherSnapshot = serde_json::from_str(json).unwrap();
        assert!((snapshot.pressure - STANDARD_PRESSURE_HPA).abs() < 1e-9);
        assert!(snapshot.solar_radiation.abs() < 1e-9);
        assert_eq!(snapshot.units, UnitSystem::Imperial);
    }
}
