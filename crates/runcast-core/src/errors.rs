// ABOUTME: Error types for structurally invalid engine input
// ABOUTME: Defines EngineError; numeric out-of-range input is sanitized, never an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

//! Error handling for the Runcast engine.
//!
//! The engine's error surface is deliberately narrow. Out-of-domain numerics
//! (negative wind, humidity above 100%, non-finite readings) are clamped or
//! replaced with documented defaults at the snapshot boundary and never reach
//! callers as errors. Only structurally invalid input, input the engine cannot
//! sanitize into something meaningful, is rejected.

use thiserror::Error;

/// Result alias for fallible engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors for structurally invalid engine input
///
/// Degraded-but-defined behavior (radiant estimate falling back to air
/// temperature, thermal index falling back to its linear approximation) is
/// reported through `tracing`, not through this type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The snapshot carries a timezone name that is not a known IANA zone
    #[error("Unknown IANA timezone: '{name}'")]
    UnknownTimezone {
        /// The unrecognized timezone string
        name: String,
    },

    /// A configuration document failed to deserialize
    #[error("Invalid engine configuration: {source}")]
    InvalidConfig {
        /// Underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}
