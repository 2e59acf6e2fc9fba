// ABOUTME: Effective temperature model constants for wind chill, heat index and workout offsets
// ABOUTME: Empirically tuned values consumed by the thermal model configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Wind chill gating and formula coefficients
///
/// The sub-zero branch uses the Environment Canada wind chill polynomial,
/// fed with wind speed in m/s. Above zero a linear approximation is used.
pub mod wind_chill {
    /// Wind chill only applies at or below this raw temperature
    pub const MAX_TEMPERATURE_CELSIUS: f64 = 15.0;
    /// Wind chill only applies at or above this wind speed
    pub const MIN_WIND_SPEED_KMH: f64 = 5.0;
    /// At or below this temperature the polynomial formula is used
    pub const FREEZING_CELSIUS: f64 = 0.0;
    /// Linear approximation: degrees lost per km/h of wind
    pub const LINEAR_FACTOR_PER_KMH: f64 = 0.3;
    /// Polynomial constant term
    pub const COEFF_CONSTANT: f64 = 13.12;
    /// Polynomial temperature coefficient
    pub const COEFF_TEMPERATURE: f64 = 0.6215;
    /// Polynomial wind coefficient
    pub const COEFF_WIND: f64 = 11.37;
    /// Polynomial temperature-wind interaction coefficient
    pub const COEFF_INTERACTION: f64 = 0.3965;
    /// Exponent applied to wind speed
    pub const WIND_EXPONENT: f64 = 0.16;
}

/// Heat index gating and coefficients
pub mod heat_index {
    /// Heat index only applies at or above this raw temperature
    pub const MIN_TEMPERATURE_CELSIUS: f64 = 18.0;
    /// Heat index only applies at or above this relative humidity
    pub const MIN_HUMIDITY_PERCENTAGE: u8 = 50;
    /// Humidity baseline subtracted before scaling
    pub const HUMIDITY_BASELINE: f64 = 40.0;
    /// Degrees added per humidity point above the baseline
    pub const FACTOR_PER_PERCENT: f64 = 0.2;
}

/// Additive offsets for workout intensity and duration
pub mod workout_adjustments {
    /// Intensive efforts feel this much warmer
    pub const INTENSIVE_OFFSET_CELSIUS: f64 = 2.0;
    /// Tempo efforts feel this much warmer
    pub const TEMPO_OFFSET_CELSIUS: f64 = 1.0;
    /// Rides at least this long count as long rides
    pub const LONG_RIDE_MINUTES: u32 = 120;
    /// Long rides feel this much warmer
    pub const LONG_RIDE_OFFSET_CELSIUS: f64 = 0.5;
}
