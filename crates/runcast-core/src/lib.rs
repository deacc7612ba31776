// ABOUTME: Core types and constants for the Runcast weather intelligence engine
// ABOUTME: Foundation crate with weather models, unit handling, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

#![deny(unsafe_code)]

//! # Runcast Core
//!
//! Foundation crate providing shared types and constants for the Runcast
//! weather intelligence engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `EngineError` for structural failures
//! - **models**: Weather snapshot, personalization, and run-type data models
//! - **units**: Unit systems and the metric/imperial conversion helpers
//! - **constants**: Physical and meteorological constants organized by domain

/// Unified error handling for structurally invalid engine input
pub mod errors;

/// Core data models (`WeatherSnapshot`, `Personalization`, `RunType`, etc.)
pub mod models;

/// Unit systems and metric/imperial conversions
pub mod units;

/// Physical and meteorological constants organized by domain
pub mod constants;
