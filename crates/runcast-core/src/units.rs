// ABOUTME: Unit systems and metric/imperial conversion helpers
// ABOUTME: The engine computes in one imperial frame; metric snapshots convert once at entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

//! Unit systems and conversions.
//!
//! Every published threshold in the engine (ideal band, ladder edges, stress
//! category cut points) is expressed in the imperial frame: °F, mph, in/hr.
//! Pressure stays in hPa under both systems, following meteorological
//! convention. Snapshots declare the units of their own fields and are
//! normalized exactly once at the engine boundary; internal math never checks
//! units again.

use serde::{Deserialize, Serialize};

use crate::constants::physics::KELVIN_OFFSET;

/// Kilometers-per-hour to miles-per-hour factor
pub const KMH_TO_MPH: f64 = 0.621_371_192;

/// Miles-per-hour to meters-per-second factor
pub const MPH_TO_MS: f64 = 0.447_04;

/// Millimeters to inches factor
pub const MM_TO_IN: f64 = 1.0 / 25.4;

/// Declares the unit frame of a snapshot's fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// °F, mph, in/hr (the engine's internal computation frame)
    #[default]
    Imperial,
    /// °C, km/h, mm/hr
    Metric,
}

/// Convert Celsius to Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Convert Fahrenheit to Celsius
#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Convert kilometers per hour to miles per hour
#[must_use]
pub fn kmh_to_mph(kmh: f64) -> f64 {
    kmh * KMH_TO_MPH
}

/// Convert miles per hour to meters per second
#[must_use]
pub fn mph_to_ms(mph: f64) -> f64 {
    mph * MPH_TO_MS
}

/// Convert millimeters to inches
#[must_use]
pub fn mm_to_inches(mm: f64) -> f64 {
    mm * MM_TO_IN
}

/// Convert Fahrenheit to Kelvin
#[must_use]
pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> f64 {
    fahrenheit_to_celsius(fahrenheit) + KELVIN_OFFSET
}

/// Convert Kelvin to Fahrenheit
#[must_use]
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    celsius_to_fahrenheit(kelvin - KELVIN_OFFSET)
}
