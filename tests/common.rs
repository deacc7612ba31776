// ABOUTME: Shared weather fixtures for integration tests
// ABOUTME: Provides named snapshot builders and synthetic hourly strips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs
)]
//! Shared test fixtures for the `runcast` engine
//!
//! Every builder returns a fully-populated [`WeatherSnapshot`] so individual
//! tests only override the fields they care about.

use std::f64::consts::PI;

use chrono::{Duration, TimeZone, Utc};
use runcast::{UnitSystem, WeatherSnapshot};

/// A crisp 47 °F spring morning in Montreal: near-ideal running weather
pub fn clear_morning() -> WeatherSnapshot {
    WeatherSnapshot {
        air_temp: 47.0,
        apparent_temp: 47.0,
        humidity: 50.0,
        wind_speed: 3.0,
        precip_probability: 0.0,
        precip_rate: 0.0,
        uv_index: 2.0,
        cloud_cover: 25.0,
        pressure: 1013.25,
        solar_radiation: 150.0,
        is_daylight: true,
        timestamp: Utc.with_ymd_and_hms(2025, 4, 12, 12, 0, 0).unwrap(),
        latitude: 45.5,
        longitude: -73.6,
        timezone: "America/Montreal".into(),
        units: UnitSystem::Imperial,
    }
}

/// The clear-morning fixture pinned to a different air temperature
pub fn snapshot_at(air_f: f64) -> WeatherSnapshot {
    WeatherSnapshot {
        air_temp: air_f,
        apparent_temp: air_f,
        ..clear_morning()
    }
}

/// Midday in Phoenix during a July heat wave: 100 °F air, feels like 108
pub fn desert_heat_wave() -> WeatherSnapshot {
    WeatherSnapshot {
        air_temp: 100.0,
        apparent_temp: 108.0,
        humidity: 55.0,
        wind_speed: 5.0,
        precip_probability: 0.0,
        precip_rate: 0.0,
        uv_index: 10.0,
        cloud_cover: 5.0,
        pressure: 1008.0,
        solar_radiation: 850.0,
        is_daylight: true,
        timestamp: Utc.with_ymd_and_hms(2025, 7, 15, 20, 0, 0).unwrap(),
        latitude: 33.45,
        longitude: -112.07,
        timezone: "America/Phoenix".into(),
        units: UnitSystem::Imperial,
    }
}

/// A Toronto January morning with freezing drizzle just below the ice line
pub fn freezing_drizzle() -> WeatherSnapshot {
    WeatherSnapshot {
        air_temp: 33.0,
        apparent_temp: 31.0,
        humidity: 80.0,
        wind_speed: 10.0,
        precip_probability: 60.0,
        precip_rate: 0.05,
        uv_index: 0.0,
        cloud_cover: 100.0,
        pressure: 1019.0,
        solar_radiation: 40.0,
        is_daylight: true,
        timestamp: Utc.with_ymd_and_hms(2025, 1, 20, 13, 0, 0).unwrap(),
        latitude: 43.65,
        longitude: -79.38,
        timezone: "America/Toronto".into(),
        units: UnitSystem::Imperial,
    }
}

/// Deep polar night at 80 °N in December: brutal cold, no sun for weeks
pub fn polar_night() -> WeatherSnapshot {
    WeatherSnapshot {
        air_temp: -10.0,
        apparent_temp: -25.0,
        humidity: 70.0,
        wind_speed: 20.0,
        precip_probability: 20.0,
        precip_rate: 0.0,
        uv_index: 0.0,
        cloud_cover: 60.0,
        pressure: 1002.0,
        solar_radiation: 0.0,
        is_daylight: false,
        timestamp: Utc.with_ymd_and_hms(2025, 12, 21, 12, 0, 0).unwrap(),
        latitude: 80.0,
        longitude: 15.0,
        timezone: "Arctic/Longyearbyen".into(),
        units: UnitSystem::Imperial,
    }
}

/// Synthetic hourly strip for a June day in New York
///
/// Temperature follows a sinusoid peaking at 84 °F around 14:00 UTC with a
/// 58 °F pre-dawn low; UV and daylight track the clock. Strips longer than
/// 24 hours wrap around to the next day.
pub fn summer_day_strip(len: usize) -> Vec<WeatherSnapshot> {
    let base = Utc.with_ymd_and_hms(2025, 6, 10, 0, 0, 0).unwrap();
    (0..len)
        .map(|i| {
            let hour = i % 24;
            let phase = (hour as f64 - 14.0) * PI / 12.0;
            let air = 71.0 + 13.0 * phase.cos();
            let apparent = if air > 80.0 { air + 4.0 } else { air };
            let uv = if (12..=20).contains(&hour) {
                8.0 - (hour as f64 - 16.0).abs()
            } else {
                0.0
            };
            let precip_probability = if (15..=18).contains(&hour) { 35.0 } else { 10.0 };
            WeatherSnapshot {
                air_temp: air,
                apparent_temp: apparent,
                humidity: 55.0,
                wind_speed: 5.0,
                precip_probability,
                precip_rate: 0.0,
                uv_index: uv,
                cloud_cover: 20.0,
                pressure: 1013.25,
                solar_radiation: uv * 100.0,
                is_daylight: (9..=23).contains(&hour),
                timestamp: base + Duration::hours(i as i64),
                latitude: 40.7,
                longitude: -74.0,
                timezone: "America/New_York".into(),
                units: UnitSystem::Imperial,
            }
        })
        .collect()
}
