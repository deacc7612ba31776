// ABOUTME: Mean radiant temperature estimate from standard weather-feed fields
// ABOUTME: Brutsaert clear-sky longwave plus a projected-area shortwave model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

//! Mean radiant temperature (MRT) without a pyranometer array.
//!
//! A running body exchanges longwave radiation with the sky and ground and
//! absorbs shortwave from the sun. Dedicated MRT instruments integrate six
//! directional fluxes; this module reconstructs a usable approximation from
//! the fields every hourly forecast already carries: air temperature,
//! humidity, global horizontal irradiance, and cloud cover.
//!
//! The longwave side uses Brutsaert's clear-sky emissivity blended toward a
//! black sky under cloud. The shortwave side splits global irradiance into
//! beam and diffuse parts and projects the beam onto a standing person with
//! the Underwood-Ward area factor. Output is clamped to a plausible offset
//! around air temperature so a bad radiation reading cannot poison the
//! thermal stress chain downstream.

use tracing::warn;

use runcast_core::constants::{physics, radiant};
use runcast_core::units::{fahrenheit_to_celsius, fahrenheit_to_kelvin, kelvin_to_fahrenheit};

use crate::psychrometrics::vapor_pressure_hpa;

/// Everything the estimator needs, already unit-normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiantInputs {
    /// Air temperature, °F
    pub air_temp_f: f64,
    /// Relative humidity, percent
    pub humidity_pct: f64,
    /// Global horizontal irradiance, W/m²
    pub solar_radiation_wm2: f64,
    /// Cloud cover, percent
    pub cloud_cover_pct: f64,
    /// Solar elevation above the horizon, degrees
    pub solar_elevation_deg: f64,
}

/// MRT result with the component fluxes that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiantEstimate {
    /// Mean radiant temperature, °F
    pub mrt_f: f64,
    /// Offset from air temperature, °F (bounded)
    pub delta_f: f64,
    /// Downwelling longwave flux, W/m²
    pub longwave_down_wm2: f64,
    /// Upwelling longwave flux from the ground, W/m²
    pub longwave_up_wm2: f64,
    /// Shortwave flux absorbed by the body, W/m² (emissivity-weighted)
    pub shortwave_wm2: f64,
}

/// Projected area factor of a standing person for beam radiation.
///
/// Polynomial fit over solar elevation in degrees; peaks near the horizon
/// where a low sun faces the whole body profile.
fn projected_area_factor(elevation_deg: f64) -> f64 {
    let g = elevation_deg;
    0.308 * (g * (0.998 - g * g / 50_000.0)).to_radians().cos()
}

/// Estimate mean radiant temperature from forecast-grade inputs.
///
/// Falls back to air temperature (with a warning) if the flux balance goes
/// non-physical, and always bounds the result to air temperature minus 20 °F
/// through plus 60 °F.
#[must_use]
pub fn mean_radiant_temperature(inputs: &RadiantInputs) -> RadiantEstimate {
    let air_k = fahrenheit_to_kelvin(inputs.air_temp_f);
    let air_c = fahrenheit_to_celsius(inputs.air_temp_f);
    let cloud = (inputs.cloud_cover_pct / 100.0).clamp(0.0, 1.0);

    // Brutsaert clear-sky emissivity from vapor pressure, blended toward a
    // black sky as cloud fills in.
    let vapor_hpa = vapor_pressure_hpa(air_c, inputs.humidity_pct);
    let clear_emissivity =
        radiant::BRUTSAERT_COEFF * (vapor_hpa / air_k).powf(radiant::BRUTSAERT_EXPONENT);
    let sky_emissivity = (cloud + (1.0 - cloud) * clear_emissivity)
        .clamp(radiant::SKY_EMISSIVITY_MIN, radiant::SKY_EMISSIVITY_MAX);

    let longwave_down = sky_emissivity * physics::STEFAN_BOLTZMANN * air_k.powi(4);

    // Ground runs a couple of kelvin warm during activity hours.
    let ground_k = air_k + radiant::GROUND_TEMP_EXCESS_K;
    let longwave_up = radiant::GROUND_EMISSIVITY * physics::STEFAN_BOLTZMANN * ground_k.powi(4);

    // Split global horizontal irradiance into beam and diffuse. With the sun
    // below the horizon everything is (near-zero) diffuse.
    let global = inputs.solar_radiation_wm2.max(0.0);
    let elevation = inputs.solar_elevation_deg;
    let direct_horizontal = if elevation > 0.0 {
        radiant::CLEAR_SKY_DIRECT_FRACTION * (1.0 - cloud) * global
    } else {
        0.0
    };
    let diffuse = global - direct_horizontal;
    let reflected = radiant::GROUND_REFLECTANCE * global;

    // Beam normal irradiance, with the divisor floored at sin 5° so a
    // grazing sun cannot explode the projection.
    let sin_elev = elevation.to_radians().sin().max(5.0_f64.to_radians().sin());
    let beam_normal = (direct_horizontal / sin_elev).min(radiant::BEAM_NORMAL_CAP_WM2);

    let fp = projected_area_factor(elevation.max(0.0));
    let shortwave = (radiant::BODY_SHORTWAVE_ABSORPTIVITY / radiant::BODY_LONGWAVE_EMISSIVITY)
        * (fp * beam_normal
            + radiant::VIEW_FACTOR_SKY * diffuse
            + radiant::VIEW_FACTOR_GROUND * reflected);

    let flux = radiant::VIEW_FACTOR_SKY * longwave_down
        + radiant::VIEW_FACTOR_GROUND * longwave_up
        + shortwave;

    let mrt_f = if flux.is_finite() && flux > 0.0 {
        kelvin_to_fahrenheit((flux / physics::STEFAN_BOLTZMANN).powf(0.25))
    } else {
        warn!(
            flux,
            air_temp_f = inputs.air_temp_f,
            "non-physical radiant flux balance, falling back to air temperature"
        );
        inputs.air_temp_f
    };

    let delta_f = (mrt_f - inputs.air_temp_f).clamp(radiant::MIN_DELTA_F, radiant::MAX_DELTA_F);
    RadiantEstimate {
        mrt_f: inputs.air_temp_f + delta_f,
        delta_f,
        longwave_down_wm2: longwave_down,
        longwave_up_wm2: longwave_up,
        shortwave_wm2: shortwave,
    }
}
