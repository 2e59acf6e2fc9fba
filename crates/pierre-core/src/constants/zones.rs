// ABOUTME: Clothing decision thresholds for each body zone
// ABOUTME: Temperatures refer to effective temperature unless the name says raw
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body zone thresholds.
//!
//! All `*_CELSIUS` bounds are inclusive upper bounds on the effective
//! temperature unless prefixed with `RAW_`, in which case they are inclusive
//! lower bounds on the (bias-shifted) air temperature. Wind bounds are
//! inclusive lower bounds in km/h, durations inclusive lower bounds in minutes.

/// Legs: long tights vs. bib shorts, optional leg warmers
pub mod legs {
    /// Long tights at or below this temperature
    pub const LONG_TIGHTS_MAX_CELSIUS: f64 = 15.0;
    /// Long tights for intensive rides at or below this temperature
    pub const INTENSIVE_LONG_TIGHTS_MAX_CELSIUS: f64 = 15.0;
    /// Long tights for tempo rides at or below this temperature
    pub const TEMPO_LONG_TIGHTS_MAX_CELSIUS: f64 = 14.0;
    /// Long windy rides: minimum duration
    pub const WINDY_LONG_RIDE_MINUTES: u32 = 120;
    /// Long windy rides: minimum wind
    pub const WINDY_LONG_RIDE_WIND_KMH: f64 = 15.0;
    /// Very long rides: minimum duration
    pub const VERY_LONG_RIDE_MINUTES: u32 = 180;
    /// Very long rides: long tights at or below this temperature
    pub const VERY_LONG_RIDE_MAX_CELSIUS: f64 = 25.0;
    /// Leg warmers over shorts: minimum duration
    pub const LEG_WARMERS_MIN_MINUTES: u32 = 90;
    /// Leg warmers over shorts at or below this temperature
    pub const LEG_WARMERS_MAX_CELSIUS: f64 = 16.0;
}

/// Torso: base / mid / outer layer ladder
pub mod torso {
    /// Full winter layering at or below this temperature
    pub const FREEZING_MAX_CELSIUS: f64 = -2.0;
    /// Upper bound of the cold band (base + mid, conditional outer)
    pub const COLD_MAX_CELSIUS: f64 = 6.0;
    /// Winter jacket in the cold band at or below this temperature
    pub const COLD_WINTER_JACKET_MAX_CELSIUS: f64 = 2.0;
    /// Wind jacket in the cold band from this wind speed
    pub const COLD_WIND_JACKET_WIND_KMH: f64 = 15.0;
    /// Wind jacket in damp cold from this wind speed
    pub const COLD_DAMP_WIND_JACKET_WIND_KMH: f64 = 10.0;
    /// Wind jacket in damp cold from this humidity
    pub const COLD_DAMP_HUMIDITY_PERCENTAGE: u8 = 80;
    /// Upper bound of the cool band (conditional mid, vest)
    pub const COOL_MAX_CELSIUS: f64 = 13.0;
    /// Tempo mid layer in the cool band at or below this temperature
    pub const COOL_TEMPO_MID_MAX_CELSIUS: f64 = 11.0;
    /// Relaxed-pace mid layer in the cool band at or below this temperature
    pub const COOL_RELAXED_MID_MAX_CELSIUS: f64 = 10.0;
    /// Relaxed-pace mid layer in the cool band from this duration
    pub const COOL_RELAXED_MID_MIN_MINUTES: u32 = 120;
    /// Wind vest in the cool band from this wind speed
    pub const COOL_VEST_WIND_KMH: f64 = 15.0;
    /// Upper bound of the mild band
    pub const MILD_MAX_CELSIUS: f64 = 18.0;
    /// Wind vest in the mild band from this wind speed
    pub const MILD_VEST_WIND_KMH: f64 = 18.0;
    /// Wind vest in the mild band from this duration
    pub const MILD_VEST_MIN_MINUTES: u32 = 90;
    /// Relaxed-pace mid layer in the mild band from this duration
    pub const MILD_RELAXED_MID_MIN_MINUTES: u32 = 150;
    /// Warm band extras require at least this raw temperature
    pub const RAW_WARM_MIN_CELSIUS: f64 = 20.0;
    /// Wind vest in the warm band from this wind speed
    pub const WARM_VEST_WIND_KMH: f64 = 15.0;
    /// Wind vest in the warm band from this duration
    pub const WARM_VEST_MIN_MINUTES: u32 = 90;
    /// Light sun layer from this duration
    pub const SUN_LAYER_MIN_MINUTES: u32 = 180;
    /// Light sun layer from this raw temperature
    pub const RAW_SUN_LAYER_MIN_CELSIUS: f64 = 25.0;
}

/// Arms: arm warmers
pub mod arms {
    /// Arm warmers from this duration
    pub const ARM_WARMERS_MIN_MINUTES: u32 = 90;
    /// Arm warmers at or below this temperature
    pub const ARM_WARMERS_MAX_CELSIUS: f64 = 18.0;
}

/// Head: cap for warmth or sun
pub mod head {
    /// Cap for warmth at or below this temperature
    pub const COLD_CAP_MAX_CELSIUS: f64 = 12.0;
    /// Sun cap from this raw temperature
    pub const RAW_SUN_CAP_MIN_CELSIUS: f64 = 13.0;
    /// Sun cap from this duration
    pub const SUN_CAP_MIN_MINUTES: u32 = 60;
    /// Sun cap during intensive rides from this raw temperature
    pub const RAW_INTENSIVE_SUN_CAP_MIN_CELSIUS: f64 = 15.0;
}

/// Hands: glove tier selection and upgrades
pub mod hands {
    /// Winter gloves at or below this temperature
    pub const WINTER_MAX_CELSIUS: f64 = 5.0;
    /// Transition gloves at or below this temperature
    pub const TRANSITION_MAX_CELSIUS: f64 = 12.0;
    /// Intensive / long-ride upgrade to winter at or below this temperature
    pub const UPGRADE_TO_WINTER_MAX_CELSIUS: f64 = 10.0;
    /// Long ride upgrade to winter from this duration
    pub const LONG_RIDE_WINTER_MIN_MINUTES: u32 = 120;
    /// Summer gloves become transition from this duration
    pub const VERY_LONG_RIDE_MIN_MINUTES: u32 = 180;
    /// Summer gloves become transition from this wind speed
    pub const STRONG_WIND_KMH: f64 = 25.0;
}

/// Neck: gaiter
pub mod neck {
    /// Gaiter at or below this temperature
    pub const COLD_MAX_CELSIUS: f64 = 8.0;
    /// Gaiter from this wind speed
    pub const WIND_KMH: f64 = 18.0;
    /// Damp conditions: gaiter at or below this temperature
    pub const DAMP_MAX_CELSIUS: f64 = 10.0;
    /// Damp conditions: minimum humidity
    pub const DAMP_HUMIDITY_PERCENTAGE: u8 = 80;
    /// Intensive rides: gaiter at or below this temperature
    pub const INTENSIVE_MAX_CELSIUS: f64 = 13.0;
    /// Long windy rides: minimum duration
    pub const LONG_RIDE_MIN_MINUTES: u32 = 120;
    /// Long windy rides: minimum wind
    pub const LONG_RIDE_WIND_KMH: f64 = 18.0;
    /// Gaiter regardless of weather from this duration
    pub const ALWAYS_MIN_MINUTES: u32 = 200;
}

/// Feet: sock weight and shoe covers
pub mod feet {
    /// Shoe covers at or below this temperature
    pub const FREEZING_MAX_CELSIUS: f64 = -2.0;
    /// Shoe covers from this wind speed
    pub const STORM_WIND_KMH: f64 = 25.0;
    /// Damp cold: covers at or below this temperature
    pub const DAMP_MAX_CELSIUS: f64 = 6.0;
    /// Damp cold: minimum humidity
    pub const DAMP_HUMIDITY_PERCENTAGE: u8 = 80;
    /// Intensive rides: covers at or below this temperature
    pub const INTENSIVE_MAX_CELSIUS: f64 = 10.0;
    /// Tempo rides: covers at or below this temperature
    pub const TEMPO_MAX_CELSIUS: f64 = 8.0;
    /// Windy cool rides: minimum wind
    pub const WINDY_WIND_KMH: f64 = 20.0;
    /// Windy cool rides: covers at or below this temperature
    pub const WINDY_MAX_CELSIUS: f64 = 12.0;
    /// Winter socks at or below this temperature
    pub const WINTER_SOCKS_MAX_CELSIUS: f64 = 12.0;
}
