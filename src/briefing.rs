// ABOUTME: Briefing builder - flattens engine outputs into one serializable digest
// ABOUTME: The prompt payload for a generative-text collaborator; pure, no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

use serde::{Deserialize, Serialize};

use crate::advisory::Advisory;
use crate::outfit::OutfitRecommendation;
use crate::psychrometrics::dew_point_f;
use crate::scoring::ScoreBreakdown;
use crate::thermal::ThermalIndex;
use runcast_core::models::{RunType, WeatherSnapshot};

/// The handful of readings a narrator needs, already in imperial units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDigest {
    /// Dry-bulb temperature, °F
    pub air_temp_f: f64,
    /// Feels-like temperature, °F
    pub apparent_temp_f: f64,
    /// Dew point, °F
    pub dew_point_f: f64,
    /// Relative humidity, percent
    pub humidity_pct: f64,
    /// Sustained wind, mph
    pub wind_mph: f64,
    /// Chance of precipitation, percent
    pub precip_probability_pct: f64,
    /// Precipitation rate, in/hr
    pub precip_rate_in_hr: f64,
    /// UV index
    pub uv_index: f64,
}

/// Everything a text generator needs to narrate one run, flattened to
/// labels and numbers
///
/// Assembled from outputs the host has already computed; building the
/// briefing never re-runs any engine stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunBriefing {
    /// What kind of run this briefing covers
    pub run_type: String,
    /// Current conditions digest
    pub conditions: SnapshotDigest,
    /// Legacy score, 1-100
    pub score: u8,
    /// Labels of the dominant score factors, strongest first
    pub dominant_factors: Vec<String>,
    /// Thermal stress band label
    pub stress_category: String,
    /// Performance kit flattened to labels, head-to-toe
    pub performance_outfit: Vec<String>,
    /// Comfort kit flattened to labels, head-to-toe
    pub comfort_outfit: Vec<String>,
    /// Advisory tips, ranked
    pub tips: Vec<String>,
}

impl RunBriefing {
    /// Flatten computed engine outputs into the briefing payload
    #[must_use]
    pub fn assemble(
        snapshot: &WeatherSnapshot,
        run_type: RunType,
        breakdown: &ScoreBreakdown,
        index: &ThermalIndex,
        outfit: &OutfitRecommendation,
        advisory: &Advisory,
    ) -> Self {
        let snapshot = snapshot.normalized();
        let conditions = SnapshotDigest {
            air_temp_f: snapshot.air_temp,
            apparent_temp_f: snapshot.apparent_temp,
            dew_point_f: dew_point_f(snapshot.air_temp, snapshot.humidity),
            humidity_pct: snapshot.humidity,
            wind_mph: snapshot.wind_speed,
            precip_probability_pct: snapshot.precip_probability,
            precip_rate_in_hr: snapshot.precip_rate,
            uv_index: snapshot.uv_index,
        };

        Self {
            run_type: run_type.label().to_owned(),
            conditions,
            score: breakdown.score,
            dominant_factors: breakdown
                .dominant
                .iter()
                .map(|key| key.label().to_owned())
                .collect(),
            stress_category: index.category.label().to_owned(),
            performance_outfit: outfit
                .performance
                .iter()
                .map(|r| r.item.label().to_owned())
                .collect(),
            comfort_outfit: outfit
                .comfort
                .iter()
                .map(|r| r.item.label().to_owned())
                .collect(),
            tips: advisory.tips.clone(),
        }
    }
}
