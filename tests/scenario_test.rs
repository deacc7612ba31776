// ABOUTME: End-to-end scenario tests driving every engine stage from one snapshot
// ABOUTME: Covers ideal spring, desert heat, freezing drizzle, and polar night
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use chrono_tz::Arctic::Longyearbyen;
use common::{clear_morning, desert_heat_wave, freezing_drizzle, polar_night};
use runcast::advisory::{AdvisoryComposer, ScoreTier};
use runcast::astronomy::{moon_position, solar_elevation_deg, sun_events};
use runcast::briefing::RunBriefing;
use runcast::outfit::{GearItem, OutfitEngine, RecommendedItem, SockLevel};
use runcast::radiant::{mean_radiant_temperature, RadiantInputs};
use runcast::scoring::{FactorKey, FactorSeverity, ScoreEngine};
use runcast::thermal::{
    universal_thermal_climate_index, ImpactLevel, PrecipIntensity, ThermalIndex, ThermalInputs,
};
use runcast::{Personalization, RunType, WeatherSnapshot};

/// Run the whole thermal chain the way a host would: solar position, mean
/// radiant temperature, then the thermal index.
fn thermal_index_for(snapshot: &WeatherSnapshot) -> ThermalIndex {
    let normalized = snapshot.normalized();
    let elevation = solar_elevation_deg(
        normalized.timestamp,
        normalized.latitude,
        normalized.longitude,
    );
    let estimate = mean_radiant_temperature(&RadiantInputs {
        air_temp_f: normalized.air_temp,
        humidity_pct: normalized.humidity,
        solar_radiation_wm2: normalized.solar_radiation,
        cloud_cover_pct: normalized.cloud_cover,
        solar_elevation_deg: elevation,
    });
    universal_thermal_climate_index(&ThermalInputs::from_snapshot(&normalized, estimate.mrt_f))
}

fn items(kit: &[RecommendedItem]) -> Vec<GearItem> {
    kit.iter().map(|entry| entry.item).collect()
}

// === Scenario A: crisp spring morning, easy run ===

#[test]
fn test_crisp_spring_morning_is_a_great_easy_run() {
    let snapshot = clear_morning();
    let prefs = Personalization::default();
    let engine = ScoreEngine::new();

    let breakdown = engine.breakdown(&snapshot, RunType::Easy, &prefs);
    assert!(
        breakdown.score >= 95,
        "47F and calm should score near-perfect, got {}",
        breakdown.score
    );
    assert!(
        breakdown.dominant.is_empty(),
        "nothing should dominate a clean morning"
    );

    let index = thermal_index_for(&snapshot);
    assert!(!index.used_fallback);
    assert!(
        index.category.impact() <= ImpactLevel::Low,
        "mild morning landed in {:?}",
        index.category
    );
    assert!(engine.utci_score(&index).score >= 90);
}

#[test]
fn test_crisp_spring_morning_outfit_is_light() {
    let outfit = OutfitEngine::new().recommend(
        &clear_morning(),
        RunType::Easy,
        &Personalization::default(),
        &[],
    );

    let comfort = items(&outfit.comfort);
    assert!(comfort.contains(&GearItem::Tights));
    assert!(comfort.contains(&GearItem::LongSleeve));

    for kit in [items(&outfit.performance), comfort] {
        assert!(!kit.contains(&GearItem::RainShell));
        assert!(!kit.contains(&GearItem::Windbreaker));
    }
    assert_eq!(outfit.hand_protection_level, 0);
    assert_eq!(outfit.socks, SockLevel::Light);
}

#[test]
fn test_crisp_spring_morning_advisory_says_go() {
    let snapshot = clear_morning();
    let breakdown = ScoreEngine::new().breakdown(&snapshot, RunType::Easy, &Personalization::default());
    let advisory = AdvisoryComposer::new().compose(&breakdown, &snapshot, RunType::Easy, 0);

    assert_eq!(advisory.tier, ScoreTier::Excellent);
    assert_eq!(advisory.pace.seconds_per_mile, -5);
    assert!(!advisory.tips.is_empty());
}

// === Scenario B: desert heat wave, long run ===

#[test]
fn test_desert_heat_wave_scores_near_zero() {
    let breakdown = ScoreEngine::new().breakdown(
        &desert_heat_wave(),
        RunType::LongRun,
        &Personalization::default(),
    );

    assert!(
        breakdown.score <= 15,
        "108F feels-like should bottom out, got {}",
        breakdown.score
    );
    assert!(breakdown.dominant.contains(&FactorKey::Temperature));

    let temperature = breakdown
        .factors
        .iter()
        .find(|f| f.key == FactorKey::Temperature)
        .unwrap();
    assert_eq!(temperature.severity, FactorSeverity::High);
}

#[test]
fn test_desert_heat_wave_reaches_extreme_stress() {
    let index = thermal_index_for(&desert_heat_wave());

    assert!(!index.used_fallback);
    assert!(
        index.utci_f > 106.0,
        "full sun at 100F air should cross the extreme edge, got {:.1}",
        index.utci_f
    );
    assert_eq!(index.category.impact(), ImpactLevel::Extreme);
}

#[test]
fn test_desert_heat_wave_outfit_centers_on_sun_and_fluids() {
    let outfit = OutfitEngine::new().recommend(
        &desert_heat_wave(),
        RunType::LongRun,
        &Personalization::default(),
        &[],
    );

    let performance = items(&outfit.performance);
    for required in [
        GearItem::BrimmedCap,
        GearItem::Sunglasses,
        GearItem::Sunscreen,
        GearItem::HandheldWater,
        GearItem::EnergyGels,
    ] {
        assert!(performance.contains(&required), "missing {required:?}");
    }
    assert_eq!(outfit.hand_protection_level, 0);
    assert_eq!(outfit.socks, SockLevel::Light);

    // The long-run provisions are effort kit; the sun protection is not.
    let water = outfit
        .performance
        .iter()
        .find(|entry| entry.item == GearItem::HandheldWater)
        .unwrap();
    assert!(water.effort_specific);
    let cap = outfit
        .performance
        .iter()
        .find(|entry| entry.item == GearItem::BrimmedCap)
        .unwrap();
    assert!(!cap.effort_specific);
}

#[test]
fn test_desert_heat_wave_advisory_warns_hard() {
    let snapshot = desert_heat_wave();
    let breakdown =
        ScoreEngine::new().breakdown(&snapshot, RunType::LongRun, &Personalization::default());
    let advisory = AdvisoryComposer::new().compose(&breakdown, &snapshot, RunType::LongRun, 0);

    assert_eq!(advisory.tier, ScoreTier::Dangerous);
    assert_eq!(advisory.pace.seconds_per_mile, 60);
    assert!(advisory.tips.iter().any(|t| t.contains("compounding")));
    assert!(advisory.tips.iter().any(|t| t.contains("every 15 minutes")));
}

#[test]
fn test_desert_heat_wave_briefing_carries_the_band() {
    let snapshot = desert_heat_wave();
    let prefs = Personalization::default();
    let engine = ScoreEngine::new();

    let breakdown = engine.breakdown(&snapshot, RunType::LongRun, &prefs);
    let index = thermal_index_for(&snapshot);
    let outfit = OutfitEngine::new().recommend(&snapshot, RunType::LongRun, &prefs, &[]);
    let advisory = AdvisoryComposer::new().compose(&breakdown, &snapshot, RunType::LongRun, 0);

    let briefing = RunBriefing::assemble(
        &snapshot,
        RunType::LongRun,
        &breakdown,
        &index,
        &outfit,
        &advisory,
    );
    assert_eq!(briefing.run_type, "long run");
    assert_eq!(briefing.stress_category, "Extreme Heat");
    assert!(briefing.dominant_factors.contains(&"Temperature".to_owned()));
}

// === Scenario C: freezing drizzle at the ice line ===

#[test]
fn test_freezing_drizzle_flags_ice_danger() {
    let breakdown = ScoreEngine::new().breakdown(
        &freezing_drizzle(),
        RunType::Easy,
        &Personalization::default(),
    );

    let ice = breakdown
        .factors
        .iter()
        .find(|f| f.key == FactorKey::IceDanger)
        .unwrap();
    assert!(
        (ice.penalty - 25.0).abs() < 1e-9,
        "ice risk takes the full flat penalty"
    );
    assert_eq!(ice.severity, FactorSeverity::High);
    assert!(breakdown.dominant.contains(&FactorKey::IceDanger));
    assert_eq!(breakdown.score, 48);
}

#[test]
fn test_freezing_drizzle_advisory_mentions_traction() {
    let snapshot = freezing_drizzle();
    let breakdown =
        ScoreEngine::new().breakdown(&snapshot, RunType::Easy, &Personalization::default());
    let advisory = AdvisoryComposer::new().compose(&breakdown, &snapshot, RunType::Easy, 0);

    assert_eq!(advisory.tier, ScoreTier::Tough);
    assert!(advisory.tips.iter().any(|t| t.contains("traction")));
}

#[test]
fn test_freezing_drizzle_outfit_seals_out_the_wet() {
    let outfit = OutfitEngine::new().recommend(
        &freezing_drizzle(),
        RunType::Easy,
        &Personalization::default(),
        &[],
    );

    let performance = items(&outfit.performance);
    assert!(performance.contains(&GearItem::RainShell));
    assert!(performance.contains(&GearItem::Beanie));
    assert_eq!(outfit.socks, SockLevel::Heavy);
}

#[test]
fn test_freezing_drizzle_rain_correction_is_punitive() {
    let index = thermal_index_for(&freezing_drizzle());

    assert!(!index.used_fallback);
    assert_eq!(index.precip_intensity, PrecipIntensity::Light);
    assert!(index.rain_adjustment_f < 0.0);
    assert!(index.utci_f < index.dry_utci_f);
    assert_eq!(index.category.impact(), ImpactLevel::Moderate);
}

// === Scenario D: polar night at 80 N ===

#[test]
fn test_polar_winter_and_summer_have_no_sun_crossings() {
    let winter = sun_events(
        NaiveDate::from_ymd_opt(2025, 12, 21).unwrap(),
        80.0,
        15.0,
        Longyearbyen,
    );
    assert!(winter.is_polar());
    assert!(winter.sunrises.is_empty());
    assert!(winter.sunsets.is_empty());
    assert!(winter.civil_dawns.is_empty(), "sun never reaches -6 degrees");

    let summer = sun_events(
        NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
        80.0,
        15.0,
        Longyearbyen,
    );
    assert!(summer.is_polar(), "midnight sun never sets");
}

#[test]
fn test_polar_night_moon_is_still_computable() {
    let snapshot = polar_night();
    let moon = moon_position(snapshot.timestamp, snapshot.latitude, snapshot.longitude);

    assert!(moon.altitude_deg.is_finite());
    assert!(moon.azimuth_deg.is_finite());
    assert!((0.0..=1.0).contains(&moon.illuminated_fraction));
}

#[test]
fn test_polar_night_pipeline_survives_end_to_end() {
    let snapshot = polar_night();
    let prefs = Personalization::default();
    let engine = ScoreEngine::new();

    let breakdown = engine.breakdown(&snapshot, RunType::Easy, &prefs);
    assert!((1..=100).contains(&breakdown.score));
    assert!(breakdown.score <= 20, "-25F feels-like is not runnable");

    let index = thermal_index_for(&snapshot);
    assert!(index.utci_f.is_finite());
    assert!(index.category.impact() >= ImpactLevel::High);

    let outfit = OutfitEngine::new().recommend(&snapshot, RunType::Easy, &prefs, &[]);
    let performance = items(&outfit.performance);
    assert_eq!(outfit.hand_protection_level, 4);
    assert!(performance.contains(&GearItem::Mittens));
    assert!(performance.contains(&GearItem::Balaclava));
    assert_eq!(outfit.socks, SockLevel::Double);

    let advisory = AdvisoryComposer::new().compose(&breakdown, &snapshot, RunType::Easy, 0);
    assert_eq!(advisory.tier, ScoreTier::Dangerous);
    assert!(advisory.tips.iter().any(|t| t.contains("exposed skin")));

    let briefing = RunBriefing::assemble(
        &snapshot,
        RunType::Easy,
        &breakdown,
        &index,
        &outfit,
        &advisory,
    );
    assert!(serde_json::to_string(&briefing).is_ok());
}
