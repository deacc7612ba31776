// ABOUTME: Outfit lookup tables - base-layer bands, windbreaker window, cold ladders
// ABOUTME: Catalog-versioned data; tuning knobs that vary per-host live in OutfitConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

use super::catalog::GearItem;
use super::SockLevel;
use runcast_core::models::RunType;

/// One rung of the base-layer ladder: applies from `lower_f` up to the rung above
pub struct BaseBand {
    pub lower_f: f64,
    pub kit: &'static [GearItem],
}

/// Base torso/leg kit by effective temperature, warmest band first.
/// Head, hands and feet come from their own ladders.
pub const BASE_BANDS: [BaseBand; 11] = [
    BaseBand {
        lower_f: 70.0,
        kit: &[GearItem::Singlet, GearItem::Shorts],
    },
    BaseBand {
        lower_f: 62.0,
        kit: &[GearItem::Singlet, GearItem::Shorts],
    },
    BaseBand {
        lower_f: 55.0,
        kit: &[GearItem::ShortSleeve, GearItem::Shorts],
    },
    BaseBand {
        lower_f: 48.0,
        kit: &[GearItem::LongSleeve, GearItem::Shorts],
    },
    BaseBand {
        lower_f: 38.0,
        kit: &[GearItem::LongSleeve, GearItem::Tights],
    },
    BaseBand {
        lower_f: 32.0,
        kit: &[GearItem::LongSleeve, GearItem::Vest, GearItem::Tights],
    },
    BaseBand {
        lower_f: 24.0,
        kit: &[
            GearItem::HeavyBaseLayer,
            GearItem::LightJacket,
            GearItem::Tights,
        ],
    },
    BaseBand {
        lower_f: 16.0,
        kit: &[
            GearItem::HeavyBaseLayer,
            GearItem::WinterJacket,
            GearItem::ThermalTights,
        ],
    },
    BaseBand {
        lower_f: 8.0,
        kit: &[
            GearItem::HeavyBaseLayer,
            GearItem::WinterJacket,
            GearItem::ThermalTights,
            GearItem::WindPants,
        ],
    },
    BaseBand {
        lower_f: 0.0,
        kit: &[
            GearItem::HeavyBaseLayer,
            GearItem::LongSleeve,
            GearItem::WinterJacket,
            GearItem::ThermalTights,
            GearItem::WindPants,
        ],
    },
    BaseBand {
        lower_f: f64::NEG_INFINITY,
        kit: &[
            GearItem::HeavyBaseLayer,
            GearItem::LongSleeve,
            GearItem::WinterJacket,
            GearItem::ThermalTights,
            GearItem::WindPants,
        ],
    },
];

/// Base kit for an effective temperature
pub fn base_kit(effective_f: f64) -> &'static [GearItem] {
    for band in &BASE_BANDS {
        if effective_f >= band.lower_f {
            return band.kit;
        }
    }
    // NaN falls through every comparison; dress for the coldest band.
    BASE_BANDS[BASE_BANDS.len() - 1].kit
}

/// Windbreaker sweet spot (exclusive bounds) before wind widening
const WINDBREAKER_WINDOW_EASY_F: (f64, f64) = (38.0, 52.0);
const WINDBREAKER_WINDOW_WORKOUT_F: (f64, f64) = (33.0, 47.0);
const WINDBREAKER_WINDOW_LONG_F: (f64, f64) = (40.0, 54.0);

/// Wind speeds (mph) that widen the top of the windbreaker window, with the
/// widening each grants. The first rung doubles as the minimum wind for a
/// windbreaker to be worth its flap.
const WINDBREAKER_WIND_TIERS: [(f64, f64); 3] = [(20.0, 7.0), (14.0, 5.0), (8.0, 3.0)];

/// Minimum wind for the windbreaker rule to fire at all
pub const WINDBREAKER_MIN_WIND_MPH: f64 = WINDBREAKER_WIND_TIERS[2].0;

/// Effective-temperature window in which a windbreaker earns its place
pub fn windbreaker_window(run_type: RunType, wind_mph: f64) -> (f64, f64) {
    let (lower, upper) = match run_type {
        RunType::Easy => WINDBREAKER_WINDOW_EASY_F,
        RunType::Workout => WINDBREAKER_WINDOW_WORKOUT_F,
        RunType::LongRun => WINDBREAKER_WINDOW_LONG_F,
    };
    for &(wind_rung, widen) in &WINDBREAKER_WIND_TIERS {
        if wind_mph >= wind_rung {
            return (lower, upper + widen);
        }
    }
    (lower, upper)
}

/// Headgear by effective temperature, coldest rung first
const HEADGEAR_LADDER: [(f64, &[GearItem]); 4] = [
    (3.0, &[GearItem::Beanie, GearItem::Balaclava]),
    (18.0, &[GearItem::Beanie, GearItem::NeckGaiter]),
    (32.0, &[GearItem::Beanie]),
    (42.0, &[GearItem::EarBand]),
];

/// Cold-weather headgear for an effective temperature; empty when mild
pub fn headgear(effective_f: f64) -> &'static [GearItem] {
    for &(below_f, kit) in &HEADGEAR_LADDER {
        if effective_f < below_f {
            return kit;
        }
    }
    &[]
}

/// Hand-protection thresholds: level n+1 applies below `[n]` °F
pub const HAND_LADDER_DEFAULT_F: [f64; 4] = [42.0, 30.0, 15.0, 0.0];
/// Shifted ladder for runners whose hands run cold
pub const HAND_LADDER_COLD_HANDS_F: [f64; 4] = [55.0, 42.0, 28.0, 12.0];
/// Wind speeds that each escalate hand protection one level
pub const HAND_WIND_RUNGS_MPH: [f64; 2] = [12.0, 22.0];

/// Gear for a hand-protection level (0 = bare hands)
pub fn hand_items(level: u8) -> &'static [GearItem] {
    match level {
        0 => &[],
        1 => &[GearItem::LightGloves],
        2 => &[GearItem::MediumGloves],
        3 => &[GearItem::Mittens],
        _ => &[GearItem::Mittens, GearItem::GloveLiners],
    }
}

/// Sock weight for the conditions; precipitation and wind pull the cold
/// thresholds upward
pub fn sock_level(effective_f: f64, precip_active: bool, wind_mph: f64) -> SockLevel {
    if effective_f < 10.0 || (effective_f < 22.0 && precip_active) {
        SockLevel::Double
    } else if effective_f < 30.0 || (effective_f < 38.0 && (precip_active || wind_mph >= 15.0)) {
        SockLevel::Heavy
    } else {
        SockLevel::Light
    }
}
