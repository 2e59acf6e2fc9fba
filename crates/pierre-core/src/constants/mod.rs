// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the thermal model, body zone rules and input limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.
//! The thermal and zone thresholds are empirically tuned values; they are kept
//! exactly as calibrated and must not be re-derived from physical models.

/// Effective temperature model constants (wind chill, heat index, workout offsets)
pub mod thermal;

/// Per body zone clothing thresholds
pub mod zones;

/// Unit conversion constants
pub mod units {
    /// Divide km/h by this factor to get m/s
    pub const KMH_PER_MS: f64 = 3.6;
}

/// Input range limits enforced at the request boundary
pub mod limits {
    /// Lowest accepted air temperature in Celsius
    pub const MIN_TEMPERATURE_CELSIUS: f64 = -60.0;
    /// Highest accepted air temperature in Celsius
    pub const MAX_TEMPERATURE_CELSIUS: f64 = 60.0;
    /// Relative humidity upper bound (percent)
    pub const MAX_HUMIDITY_PERCENTAGE: u8 = 100;
    /// Highest accepted wind speed in km/h
    pub const MAX_WIND_SPEED_KMH: f64 = 200.0;
    /// Longest accepted ride (24 hours)
    pub const MAX_DURATION_MINUTES: u32 = 1_440;
    /// Largest accepted personal thermal adjustment in either direction
    pub const MAX_THERMAL_ADJUSTMENT_CELSIUS: f64 = 15.0;
}

/// Defaults used when a caller omits workout parameters
pub mod defaults {
    /// Default ride duration in minutes
    pub const DURATION_MINUTES: u32 = 60;
    /// Default personal thermal adjustment
    pub const THERMAL_ADJUSTMENT_CELSIUS: f64 = 0.0;
}

/// Service names for structured logging
pub mod service_names {
    /// CLI / service name used in log records
    pub const PIERRE_OUTFIT: &str = "pierre-outfit";
}
