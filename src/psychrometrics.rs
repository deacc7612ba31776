// ABOUTME: Psychrometric primitives - vapor pressure, dew point, apparent temperature
// ABOUTME: Magnus saturation curve plus the NWS wind-chill and Rothfusz heat-index branches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

//! Moisture and feels-like primitives.
//!
//! Everything here is a small pure function over already-sanitized readings.
//! The apparent-temperature model follows the NWS convention exactly: wind
//! chill and heat index live in disjoint regimes and are never blended, so a
//! 65 °F afternoon reports the plain air temperature.

use runcast_core::constants::{heat_index, magnus, wind_chill};
use runcast_core::units::{celsius_to_fahrenheit, fahrenheit_to_celsius};

/// Saturation vapor pressure over liquid water (hPa) at the given temperature
///
/// Magnus form with the Alduchov-Eskridge coefficients, accurate to ~0.4%
/// over -40..50 °C.
#[must_use]
pub fn saturation_vapor_pressure_hpa(temp_c: f64) -> f64 {
    magnus::E0_HPA * (magnus::COEFF_A * temp_c / (magnus::COEFF_B + temp_c)).exp()
}

/// Actual vapor pressure (hPa) from temperature and relative humidity
///
/// Humidity is floored at a small positive value so downstream logarithms
/// stay finite for bone-dry readings.
#[must_use]
pub fn vapor_pressure_hpa(temp_c: f64, humidity_pct: f64) -> f64 {
    let rh = humidity_pct.clamp(magnus::MIN_HUMIDITY_PCT, 100.0);
    saturation_vapor_pressure_hpa(temp_c) * rh / 100.0
}

/// Dew point (°F) via the inverted Magnus formula
#[must_use]
pub fn dew_point_f(temp_f: f64, humidity_pct: f64) -> f64 {
    let temp_c = fahrenheit_to_celsius(temp_f);
    let rh = humidity_pct.clamp(magnus::MIN_HUMIDITY_PCT, 100.0);
    let gamma = (rh / 100.0).ln() + magnus::COEFF_A * temp_c / (magnus::COEFF_B + temp_c);
    let dew_c = magnus::COEFF_B * gamma / (magnus::COEFF_A - gamma);
    celsius_to_fahrenheit(dew_c)
}

/// NWS 2001 wind chill (°F), without applicability gating
///
/// Callers outside the valid regime (above 50 °F or calm air) should use
/// [`apparent_temperature_f`], which applies the official branch conditions.
#[must_use]
pub fn wind_chill_f(temp_f: f64, wind_mph: f64) -> f64 {
    let v16 = wind_mph.max(0.0).powf(wind_chill::WIND_EXPONENT);
    wind_chill::C0 + wind_chill::C1 * temp_f + wind_chill::C2 * v16 + wind_chill::C3 * temp_f * v16
}

/// Rothfusz heat index regression (°F), floored at the input temperature
///
/// The regression undershoots the air temperature near its applicability
/// edge; flooring keeps "feels like" from reading cooler than the air.
#[must_use]
pub fn heat_index_f(temp_f: f64, humidity_pct: f64) -> f64 {
    let t = temp_f;
    let r = humidity_pct;
    let c = &heat_index::C;
    let hi = c[0]
        + c[1] * t
        + c[2] * r
        + c[3] * t * r
        + c[4] * t * t
        + c[5] * r * r
        + c[6] * t * t * r
        + c[7] * t * r * r
        + c[8] * t * t * r * r;
    hi.max(temp_f)
}

/// Apparent ("feels like") temperature (°F) with hard NWS branch selection
///
/// Wind chill applies at or below 50 °F with wind above 3 mph; the heat index
/// applies at or above 80 °F with humidity at or above 40%. Everywhere else
/// the air temperature passes through unchanged. The regimes are disjoint by
/// construction, so exactly one branch ever fires.
#[must_use]
pub fn apparent_temperature_f(temp_f: f64, humidity_pct: f64, wind_mph: f64) -> f64 {
    if temp_f <= wind_chill::MAX_TEMP_F && wind_mph > wind_chill::MIN_WIND_MPH {
        wind_chill_f(temp_f, wind_mph)
    } else if temp_f >= heat_index::MIN_TEMP_F && humidity_pct >= heat_index::MIN_HUMIDITY_PCT {
        heat_index_f(temp_f, humidity_pct)
    } else {
        temp_f
    }
}
