// ABOUTME: Library entry point for the Runcast weather intelligence engine
// ABOUTME: Pure synchronous computation: thermal modeling, run scoring, outfits, advisories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy; the engine is pure
//   arithmetic and has no business near raw pointers
#![deny(unsafe_code)]

//! # Runcast Engine
//!
//! The computational core of a running weather advisor. Hosts feed it a
//! [`WeatherSnapshot`] (from whatever provider they use) plus the runner's
//! [`Personalization`]; the engine answers with scores, outfit
//! recommendations, advisories, and briefings. Every public function is
//! synchronous, deterministic, and free of I/O.
//!
//! ## Features
//!
//! - **Thermal modeling**: mean radiant temperature estimation and a
//!   UTCI-equivalent index with rain adjustment and ten stress bands
//! - **Two score models**: a physically grounded thermal-index score and an
//!   explainable eight-factor legacy score
//! - **Outfit engine**: a staged rule pipeline over a closed gear catalog,
//!   producing performance and comfort variants
//! - **Advisories**: tiered tips, compound-condition warnings, and pace
//!   guidance shaped by the runner's boldness
//! - **Astronomy**: sunrise/sunset, civil twilight, solar position, and moon
//!   phase without any network dependency
//!
//! ## Architecture
//!
//! Primitive layers feed composite ones; nothing reaches back up:
//! - [`psychrometrics`], [`astronomy`] - closed-form formulas
//! - [`radiant`], [`thermal`] - physical modeling on top of them
//! - [`scoring`], [`outfit`], [`advisory`] - interpretation layers
//! - [`forecast`], [`briefing`] - batch and aggregation helpers
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use runcast::scoring::ScoreEngine;
//! use runcast::{Personalization, RunType, UnitSystem, WeatherSnapshot};
//!
//! let snapshot = WeatherSnapshot {
//!     air_temp: 47.0,
//!     apparent_temp: 47.0,
//!     humidity: 50.0,
//!     wind_speed: 3.0,
//!     precip_probability: 0.0,
//!     precip_rate: 0.0,
//!     uv_index: 2.0,
//!     cloud_cover: 25.0,
//!     pressure: 1013.25,
//!     solar_radiation: 150.0,
//!     is_daylight: true,
//!     timestamp: Utc::now(),
//!     latitude: 45.5,
//!     longitude: -73.6,
//!     timezone: "America/Montreal".into(),
//!     units: UnitSystem::Imperial,
//! };
//!
//! let engine = ScoreEngine::new();
//! let breakdown = engine.breakdown(&snapshot, RunType::Easy, &Personalization::default());
//! assert!(breakdown.score >= 95);
//! ```

/// Advisory composition: tiered tips, compound warnings, pace guidance
pub mod advisory;

/// Sun and moon events, solar position, and twilight windows
pub mod astronomy;

/// Serializable briefing payload for generative-text collaborators
pub mod briefing;

/// Engine tuning knobs and their JSON loading
pub mod config;

/// Batch scoring of hourly forecast slots
pub mod forecast;

/// Rule-pipeline outfit recommendations over a closed gear catalog
pub mod outfit;

/// Moist-air formulas: vapor pressure, dew point, wind chill, heat index
pub mod psychrometrics;

/// Mean radiant temperature estimation from irradiance and cloud cover
pub mod radiant;

/// The two run-score models and their shared engine facade
pub mod scoring;

/// UTCI-equivalent thermal index, rain adjustment, and stress bands
pub mod thermal;

pub use runcast_core::errors::{EngineError, EngineResult};
pub use runcast_core::models::{Gender, Personalization, RunType, WeatherSnapshot};
pub use runcast_core::units::UnitSystem;
