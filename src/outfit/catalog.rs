// ABOUTME: Closed gear catalog - every item the outfit engine can recommend
// ABOUTME: Carries display labels, body-region categories and the catalog version
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

use serde::{Deserialize, Serialize};

/// Catalog revision, bumped whenever an item is added, removed or relabeled.
/// Hosts key cached recommendation renderings on this.
pub const CATALOG_VERSION: u32 = 3;

/// Body region a gear item belongs to, used for head-to-toe ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearCategory {
    /// Hats, bands, gaiters, eyewear
    Head,
    /// Base layers through shells
    Torso,
    /// Shorts through wind pants
    Legs,
    /// Gloves and liners
    Hands,
    /// Socks
    Feet,
    /// Everything carried rather than worn
    Accessory,
}

/// The closed set of recommendable gear
///
/// Declaration order within each category is the display order; the derived
/// `Ord` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearItem {
    // Head
    /// Knit winter hat
    Beanie,
    /// Ear warmer band
    EarBand,
    /// Full face and neck coverage
    Balaclava,
    /// Neck gaiter
    NeckGaiter,
    /// Brimmed cap for sun or rain
    BrimmedCap,
    /// Running cap
    Cap,
    /// Sunglasses
    Sunglasses,

    // Torso
    /// Sports bra
    SportsBra,
    /// Sleeveless singlet
    Singlet,
    /// Short-sleeve shirt
    ShortSleeve,
    /// Long-sleeve shirt
    LongSleeve,
    /// Heavyweight thermal base layer
    HeavyBaseLayer,
    /// Core-warmth vest
    Vest,
    /// Light running jacket
    LightJacket,
    /// Insulated winter jacket
    WinterJacket,
    /// Wind-blocking shell
    Windbreaker,
    /// Waterproof rain shell
    RainShell,

    // Legs
    /// Running shorts
    Shorts,
    /// Half tights
    HalfTights,
    /// Full-length tights
    Tights,
    /// Fleece-lined thermal tights
    ThermalTights,
    /// Wind-blocking overpants
    WindPants,

    // Hands
    /// Thin glove liners
    GloveLiners,
    /// Light gloves
    LightGloves,
    /// Medium-weight gloves
    MediumGloves,
    /// Mittens
    Mittens,

    // Feet
    /// Light socks
    LightSocks,
    /// Heavy cushioned socks
    HeavySocks,
    /// Double-layer socks
    DoubleLayerSocks,

    // Accessories
    /// Sunscreen
    Sunscreen,
    /// Handheld water bottle
    HandheldWater,
    /// Energy gels
    EnergyGels,
    /// Anti-chafe balm
    AntiChafeBalm,
    /// Removable arm sleeves
    ArmSleeves,
}

impl GearItem {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beanie => "Beanie",
            Self::EarBand => "Ear band",
            Self::Balaclava => "Balaclava",
            Self::NeckGaiter => "Neck gaiter",
            Self::BrimmedCap => "Brimmed cap",
            Self::Cap => "Cap",
            Self::Sunglasses => "Sunglasses",
            Self::SportsBra => "Sports bra",
            Self::Singlet => "Singlet",
            Self::ShortSleeve => "Short-sleeve shirt",
            Self::LongSleeve => "Long-sleeve shirt",
            Self::HeavyBaseLayer => "Heavy base layer",
            Self::Vest => "Vest",
            Self::LightJacket => "Light jacket",
            Self::WinterJacket => "Winter jacket",
            Self::Windbreaker => "Windbreaker",
            Self::RainShell => "Rain shell",
            Self::Shorts => "Shorts",
            Self::HalfTights => "Half tights",
            Self::Tights => "Tights",
            Self::ThermalTights => "Thermal tights",
            Self::WindPants => "Wind pants",
            Self::GloveLiners => "Glove liners",
            Self::LightGloves => "Light gloves",
            Self::MediumGloves => "Medium gloves",
            Self::Mittens => "Mittens",
            Self::LightSocks => "Light socks",
            Self::HeavySocks => "Heavy socks",
            Self::DoubleLayerSocks => "Double-layer socks",
            Self::Sunscreen => "Sunscreen",
            Self::HandheldWater => "Handheld water",
            Self::EnergyGels => "Energy gels",
            Self::AntiChafeBalm => "Anti-chafe balm",
            Self::ArmSleeves => "Arm sleeves",
        }
    }

    /// Body region for display grouping
    #[must_use]
    pub const fn category(self) -> GearCategory {
        match self {
            Self::Beanie
            | Self::EarBand
            | Self::Balaclava
            | Self::NeckGaiter
            | Self::BrimmedCap
            | Self::Cap
            | Self::Sunglasses => GearCategory::Head,
            Self::SportsBra
            | Self::Singlet
            | Self::ShortSleeve
            | Self::LongSleeve
            | Self::HeavyBaseLayer
            | Self::Vest
            | Self::LightJacket
            | Self::WinterJacket
            | Self::Windbreaker
            | Self::RainShell => GearCategory::Torso,
            Self::Shorts
            | Self::HalfTights
            | Self::Tights
            | Self::ThermalTights
            | Self::WindPants => GearCategory::Legs,
            Self::GloveLiners | Self::LightGloves | Self::MediumGloves | Self::Mittens => {
                GearCategory::Hands
            }
            Self::LightSocks | Self::HeavySocks | Self::DoubleLayerSocks => GearCategory::Feet,
            Self::Sunscreen
            | Self::HandheldWater
            | Self::EnergyGels
            | Self::AntiChafeBalm
            | Self::ArmSleeves => GearCategory::Accessory,
        }
    }
}
