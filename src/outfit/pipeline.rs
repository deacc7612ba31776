// ABOUTME: Outfit pipeline stages - effective temp, base layers, modifiers, hands, variants
// ABOUTME: Pure functions over normalized snapshots; stage order is load-bearing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

use super::catalog::{GearCategory, GearItem};
use super::tables;
use super::SockLevel;
use crate::config::OutfitConfig;
use runcast_core::models::{Gender, Personalization, RunType, WeatherSnapshot};

/// Residual wind-chill slope beyond what providers fold into feels-like, °F per mph
const WIND_CHILL_SLOPE_F_PER_MPH: f64 = 0.3;
/// Humidity heat-load slope, °F per percent above the muggy threshold
const HUMIDITY_LOAD_SLOPE_F_PER_PCT: f64 = 0.2;
/// Fraction of the forecast temperature rise a long run dresses for
const LONG_RUN_RISE_FRACTION: f64 = 0.5;

/// Effective temperature at which a male workout goes shirtless (performance cut)
const SHIRTLESS_EFF_F: f64 = 62.0;
/// Headgear thresholds shift down this much for workouts
const WORKOUT_HEADGEAR_SHIFT_F: f64 = 5.0;
/// Comfort variant adds a light jacket below this effective temperature
const COMFORT_JACKET_BELOW_F: f64 = 44.0;
/// ...and a vest below this one
const COMFORT_VEST_BELOW_F: f64 = 52.0;
/// Comfort variant adds a neck gaiter below this temperature or above this wind
const COMFORT_GAITER_BELOW_F: f64 = 33.0;
const COMFORT_GAITER_WIND_MPH: f64 = 18.0;

/// Lookahead UV peak that triggers sun gear for long runs
const LONG_RUN_SUN_UV_PEAK: f64 = 6.0;
/// Lookahead apparent-temperature swing that earns arm sleeves, °F
const LONG_RUN_SLEEVE_SWING_F: f64 = 8.0;
/// Effective temperature above which a long run carries fuel
const LONG_RUN_GELS_ABOVE_F: f64 = 50.0;

/// Everything the stages need, bundled once
pub struct StageContext<'a> {
    pub snapshot: &'a WeatherSnapshot,
    pub run_type: RunType,
    pub prefs: Personalization,
    pub lookahead: &'a [WeatherSnapshot],
    pub config: &'a OutfitConfig,
}

/// One fully assembled recommendation, before effort tagging
pub struct AssembledKit {
    pub performance: Vec<GearItem>,
    pub comfort: Vec<GearItem>,
    pub hand_protection_level: u8,
    pub socks: SockLevel,
    pub effective_f: f64,
}

fn push_unique(kit: &mut Vec<GearItem>, item: GearItem) {
    if !kit.contains(&item) {
        kit.push(item);
    }
}

fn remove(kit: &mut Vec<GearItem>, item: GearItem) {
    kit.retain(|&i| i != item);
}

fn swap(kit: &mut Vec<GearItem>, from: GearItem, to: GearItem) {
    if kit.contains(&from) {
        remove(kit, from);
        push_unique(kit, to);
    }
}

/// Whether precipitation is likely enough to dress for
fn precip_active(snapshot: &WeatherSnapshot) -> bool {
    snapshot.precip_probability > 40.0 || snapshot.precip_rate > 0.02
}

fn lookahead_peak(lookahead: &[WeatherSnapshot], f: impl Fn(&WeatherSnapshot) -> f64) -> f64 {
    lookahead
        .iter()
        .map(f)
        .fold(f64::NEG_INFINITY, f64::max)
}

fn lookahead_swing_f(lookahead: &[WeatherSnapshot]) -> f64 {
    if lookahead.is_empty() {
        return 0.0;
    }
    let max = lookahead_peak(lookahead, |s| s.apparent_temp);
    let min = lookahead
        .iter()
        .map(|s| s.apparent_temp)
        .fold(f64::INFINITY, f64::min);
    max - min
}

/// Stage 1: the temperature the runner should dress for.
///
/// Starts from the provider feels-like and layers on what feels-like misses
/// for a body working at run effort: residual wind chill, muggy-air heat
/// load, direct sun, the prospect of soaked clothing, and the metabolic
/// surplus of hard or long efforts.
pub fn effective_temperature(ctx: &StageContext<'_>) -> f64 {
    let snapshot = ctx.snapshot;
    let config = ctx.config;
    let apparent = snapshot.apparent_temp;

    let mut eff = apparent;
    eff += config.sensitivity_step_f * f64::from(ctx.prefs.temperature_sensitivity);

    if apparent < 50.0 && snapshot.wind_speed > 10.0 {
        let chill = (snapshot.wind_speed - 10.0) * WIND_CHILL_SLOPE_F_PER_MPH;
        eff -= chill.min(config.wind_chill_cap_f);
    }
    if apparent > 55.0 && snapshot.humidity > 60.0 {
        let load = (snapshot.humidity - 60.0) * HUMIDITY_LOAD_SLOPE_F_PER_PCT;
        eff += load.min(config.humidity_load_cap_f);
    }
    if snapshot.uv_index > 3.0 && apparent > 45.0 && snapshot.is_daylight {
        eff += (snapshot.uv_index - 3.0).min(config.solar_gain_cap_f);
    }
    if snapshot.precip_probability > 50.0 && apparent < 60.0 {
        eff -= config.wet_clothing_offset_f;
    }

    match ctx.run_type {
        RunType::Easy => {}
        RunType::Workout => eff += config.hard_workout_boost_f,
        RunType::LongRun => {
            // Dress partway toward the warmest hour ahead rather than for
            // the start line.
            let peak = lookahead_peak(ctx.lookahead, |s| s.apparent_temp);
            let rise = (peak - apparent).max(0.0);
            if rise.is_finite() {
                eff += (rise * LONG_RUN_RISE_FRACTION).min(config.long_run_rise_cap_f);
            }
        }
    }
    eff
}

/// Stage 2: base torso and leg layers from the band table
fn base_layers(effective_f: f64, gender: Gender) -> Vec<GearItem> {
    let mut kit: Vec<GearItem> = tables::base_kit(effective_f).to_vec();
    if gender == Gender::Female {
        push_unique(&mut kit, GearItem::SportsBra);
        // Hottest band: the bra is the top.
        if effective_f >= 70.0 {
            remove(&mut kit, GearItem::Singlet);
        }
    }
    kit
}

/// Stage 3: condition-driven additions on top of the base layers
fn weather_modifiers(kit: &mut Vec<GearItem>, ctx: &StageContext<'_>, effective_f: f64) {
    let snapshot = ctx.snapshot;

    if precip_active(snapshot) {
        push_unique(kit, GearItem::RainShell);
        push_unique(kit, GearItem::Cap);
    }

    let (lower, upper) = tables::windbreaker_window(ctx.run_type, snapshot.wind_speed);
    if snapshot.wind_speed >= tables::WINDBREAKER_MIN_WIND_MPH
        && effective_f > lower
        && effective_f < upper
        && !kit.contains(&GearItem::RainShell)
    {
        push_unique(kit, GearItem::Windbreaker);
    }

    let long_sun = ctx.run_type == RunType::LongRun
        && lookahead_peak(ctx.lookahead, |s| s.uv_index) >= LONG_RUN_SUN_UV_PEAK;
    if snapshot.uv_index >= 7.0 || long_sun {
        push_unique(kit, GearItem::Sunglasses);
        push_unique(kit, GearItem::Sunscreen);
        push_unique(kit, GearItem::BrimmedCap);
    }

    if snapshot.humidity >= 75.0 && snapshot.apparent_temp >= 65.0 {
        push_unique(kit, GearItem::AntiChafeBalm);
        push_unique(kit, GearItem::HandheldWater);
    }

    let head_eff = if ctx.run_type == RunType::Workout {
        effective_f + WORKOUT_HEADGEAR_SHIFT_F
    } else {
        effective_f
    };
    for &item in tables::headgear(head_eff) {
        push_unique(kit, item);
    }

    if ctx.run_type == RunType::LongRun {
        push_unique(kit, GearItem::HandheldWater);
        push_unique(kit, GearItem::AntiChafeBalm);
        if effective_f > LONG_RUN_GELS_ABOVE_F {
            push_unique(kit, GearItem::EnergyGels);
        }
        if lookahead_swing_f(ctx.lookahead) > LONG_RUN_SLEEVE_SWING_F {
            push_unique(kit, GearItem::ArmSleeves);
        }
        if lookahead_peak(ctx.lookahead, |s| s.precip_probability) > 40.0 {
            push_unique(kit, GearItem::RainShell);
        }
    }
}

/// Stage 4: hand-protection level, 0 (bare) through 4 (mittens over liners)
pub fn hand_protection(ctx: &StageContext<'_>, effective_f: f64) -> u8 {
    let config = ctx.config;
    let hand_eff = if ctx.prefs.cold_hands {
        effective_f - config.cold_hands_shift_f
    } else {
        effective_f
    };
    if hand_eff >= config.no_gloves_at_or_above_f {
        return 0;
    }

    let ladder = if ctx.prefs.cold_hands {
        &tables::HAND_LADDER_COLD_HANDS_F
    } else {
        &tables::HAND_LADDER_DEFAULT_F
    };
    let mut level = ladder.iter().filter(|&&below| hand_eff < below).count() as u8;

    // Wind escalates protection that is already warranted.
    if level > 0 {
        for &rung in &tables::HAND_WIND_RUNGS_MPH {
            if ctx.snapshot.wind_speed >= rung {
                level += 1;
            }
        }
    }
    level.min(4)
}

/// Stage 5a: the stripped-down variant for racing and hard efforts
fn performance_variant(
    mut kit: Vec<GearItem>,
    ctx: &StageContext<'_>,
    effective_f: f64,
    hand_level: u8,
) -> Vec<GearItem> {
    for &item in tables::hand_items(hand_level.saturating_sub(1)) {
        push_unique(&mut kit, item);
    }

    if ctx.run_type == RunType::Workout || effective_f > 15.0 {
        swap(&mut kit, GearItem::WinterJacket, GearItem::LightJacket);
    }
    // A vest under a jacket, or at workout effort, is dead weight.
    let has_jacket =
        kit.contains(&GearItem::LightJacket) || kit.contains(&GearItem::WinterJacket);
    if has_jacket || ctx.run_type == RunType::Workout {
        remove(&mut kit, GearItem::Vest);
    }

    let bare_legs_above = match ctx.run_type {
        RunType::Easy => 42.0,
        RunType::Workout => 36.0,
        RunType::LongRun => 44.0,
    };
    if effective_f > bare_legs_above {
        let lighter = if ctx.run_type == RunType::Workout {
            GearItem::HalfTights
        } else {
            GearItem::Shorts
        };
        swap(&mut kit, GearItem::Tights, lighter);
    }

    if ctx.prefs.gender == Gender::Male
        && ctx.run_type == RunType::Workout
        && effective_f >= SHIRTLESS_EFF_F
    {
        for top in [GearItem::Singlet, GearItem::ShortSleeve, GearItem::LongSleeve] {
            remove(&mut kit, top);
        }
    }
    kit
}

/// Stage 5b: the bundled-up variant for runners who would rather be warm
fn comfort_variant(
    mut kit: Vec<GearItem>,
    ctx: &StageContext<'_>,
    effective_f: f64,
    hand_level: u8,
) -> Vec<GearItem> {
    let comfort_hands = if hand_level == 0 {
        0
    } else {
        (hand_level + 1).min(4)
    };
    for &item in tables::hand_items(comfort_hands) {
        push_unique(&mut kit, item);
    }

    let has_jacket =
        kit.contains(&GearItem::LightJacket) || kit.contains(&GearItem::WinterJacket);
    if !has_jacket {
        if effective_f < COMFORT_JACKET_BELOW_F {
            push_unique(&mut kit, GearItem::LightJacket);
        } else if effective_f < COMFORT_VEST_BELOW_F {
            push_unique(&mut kit, GearItem::Vest);
        }
    }

    if effective_f < COMFORT_GAITER_BELOW_F || ctx.snapshot.wind_speed >= COMFORT_GAITER_WIND_MPH {
        push_unique(&mut kit, GearItem::NeckGaiter);
    }
    kit
}

/// Item conflicts that hold in every variant
fn resolve_conflicts(kit: &mut Vec<GearItem>) {
    if kit.contains(&GearItem::BrimmedCap) {
        remove(kit, GearItem::Cap);
    }
    if kit.contains(&GearItem::RainShell) {
        remove(kit, GearItem::Windbreaker);
    }
}

/// Stage 6: socks, then head-to-toe ordering
fn finish(kit: &mut Vec<GearItem>, socks: SockLevel, order: &[GearCategory; 6]) {
    for sock in [
        GearItem::LightSocks,
        GearItem::HeavySocks,
        GearItem::DoubleLayerSocks,
    ] {
        remove(kit, sock);
    }
    kit.push(socks.item());

    kit.sort_by_key(|item| {
        let rank = order
            .iter()
            .position(|&c| c == item.category())
            .unwrap_or(usize::MAX);
        (rank, *item)
    });
}

const PERFORMANCE_ORDER: [GearCategory; 6] = [
    GearCategory::Head,
    GearCategory::Torso,
    GearCategory::Legs,
    GearCategory::Hands,
    GearCategory::Feet,
    GearCategory::Accessory,
];
const COMFORT_ORDER: [GearCategory; 6] = [
    GearCategory::Head,
    GearCategory::Torso,
    GearCategory::Hands,
    GearCategory::Legs,
    GearCategory::Feet,
    GearCategory::Accessory,
];

/// Run every stage and return both variants, unordered by effort tagging
pub fn assemble(ctx: &StageContext<'_>) -> AssembledKit {
    let effective_f = effective_temperature(ctx);

    let mut common = base_layers(effective_f, ctx.prefs.gender);
    weather_modifiers(&mut common, ctx, effective_f);

    let hand_level = hand_protection(ctx, effective_f);
    let socks = tables::sock_level(
        effective_f,
        precip_active(ctx.snapshot),
        ctx.snapshot.wind_speed,
    );

    let mut performance = performance_variant(common.clone(), ctx, effective_f, hand_level);
    let mut comfort = comfort_variant(common, ctx, effective_f, hand_level);

    resolve_conflicts(&mut performance);
    resolve_conflicts(&mut comfort);
    finish(&mut performance, socks, &PERFORMANCE_ORDER);
    finish(&mut comfort, socks, &COMFORT_ORDER);

    AssembledKit {
        performance,
        comfort,
        hand_protection_level: hand_level,
        socks,
        effective_f,
    }
}
