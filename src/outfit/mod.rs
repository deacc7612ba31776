// ABOUTME: Outfit engine facade - runs the pipeline and tags effort-specific picks
// ABOUTME: Owns the public recommendation types hosts render from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

//! # Outfit Recommendation
//!
//! Rule-driven gear selection from a closed catalog. The pipeline runs six
//! stages in a fixed order:
//!
//! 1. **Effective temperature** - the provider feels-like adjusted for run
//!    effort, residual wind chill, humidity load, sun, and wet clothing
//! 2. **Base layers** - torso and legs from an eleven-band ladder
//! 3. **Weather modifiers** - rain shells, windbreakers, sun gear, headgear,
//!    long-run provisions
//! 4. **Hand protection** - a 0-4 glove ladder with wind escalation
//! 5. **Variants** - a stripped-down performance kit and a bundled-up
//!    comfort kit from the same shared base
//! 6. **Socks and ordering** - exactly one sock weight, head-to-toe order
//!
//! Items picked because of the run's effort (and not its weather) are tagged
//! [`RecommendedItem::effort_specific`] by re-running the pipeline at easy
//! effort and diffing.

mod catalog;
mod pipeline;
mod tables;

pub use catalog::{GearCategory, GearItem, CATALOG_VERSION};

use serde::{Deserialize, Serialize};

use crate::config::OutfitConfig;
use pipeline::StageContext;
use runcast_core::models::{Personalization, RunType, WeatherSnapshot};

/// Sock weight, set once per recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SockLevel {
    /// Everyday running socks
    Light,
    /// Cushioned or wool socks
    Heavy,
    /// Liner under a wool layer
    Double,
}

impl SockLevel {
    /// Catalog item for this sock weight
    #[must_use]
    pub const fn item(self) -> GearItem {
        match self {
            Self::Light => GearItem::LightSocks,
            Self::Heavy => GearItem::HeavySocks,
            Self::Double => GearItem::DoubleLayerSocks,
        }
    }
}

/// One recommended gear item with its effort attribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedItem {
    /// The catalog item
    pub item: GearItem,
    /// True when the item is there because of the run's effort profile
    /// rather than the weather alone
    pub effort_specific: bool,
}

/// Complete outfit output: two variants plus the summary fields hosts pin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    /// Stripped-down kit for racing and hard efforts, head-to-toe order
    pub performance: Vec<RecommendedItem>,
    /// Bundled-up kit for runners who would rather be warm, head-to-toe order
    pub comfort: Vec<RecommendedItem>,
    /// Hand-protection level, 0 (bare) through 4 (mittens over liners)
    pub hand_protection_level: u8,
    /// Sock weight shared by both variants
    pub socks: SockLevel,
    /// The dressing temperature the kit was selected for, °F
    pub effective_temp_f: f64,
    /// Catalog revision these items come from
    pub catalog_version: u32,
}

/// Stateless outfit engine configured once and reused across calls
#[derive(Debug, Clone, Default)]
pub struct OutfitEngine {
    config: OutfitConfig,
}

impl OutfitEngine {
    /// Engine with the stock tuning
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with host-supplied tuning
    #[must_use]
    pub const fn with_config(config: OutfitConfig) -> Self {
        Self { config }
    }

    /// Recommend kit for a run
    ///
    /// `lookahead` is the hourly forecast covering the planned run, used by
    /// long-run rules; pass an empty slice when unavailable. The snapshot and
    /// lookahead may be in either unit system.
    #[must_use]
    pub fn recommend(
        &self,
        snapshot: &WeatherSnapshot,
        run_type: RunType,
        prefs: &Personalization,
        lookahead: &[WeatherSnapshot],
    ) -> OutfitRecommendation {
        let snapshot = snapshot.normalized();
        let prefs = prefs.clamped();
        let lookahead: Vec<WeatherSnapshot> =
            lookahead.iter().map(WeatherSnapshot::normalized).collect();

        let ctx = StageContext {
            snapshot: &snapshot,
            run_type,
            prefs,
            lookahead: &lookahead,
            config: &self.config,
        };
        let kit = pipeline::assemble(&ctx);

        let (performance, comfort) = if run_type == RunType::Easy {
            (tag_against(kit.performance, None), tag_against(kit.comfort, None))
        } else {
            let easy_ctx = StageContext {
                run_type: RunType::Easy,
                ..ctx
            };
            let baseline = pipeline::assemble(&easy_ctx);
            (
                tag_against(kit.performance, Some(&baseline.performance)),
                tag_against(kit.comfort, Some(&baseline.comfort)),
            )
        };

        OutfitRecommendation {
            performance,
            comfort,
            hand_protection_level: kit.hand_protection_level,
            socks: kit.socks,
            effective_temp_f: kit.effective_f,
            catalog_version: CATALOG_VERSION,
        }
    }
}

/// Mark every item absent from the easy-effort baseline as effort-specific
fn tag_against(kit: Vec<GearItem>, baseline: Option<&[GearItem]>) -> Vec<RecommendedItem> {
    kit.into_iter()
        .map(|item| RecommendedItem {
            item,
            effort_specific: baseline.is_some_and(|b| !b.contains(&item)),
        })
        .collect()
}
