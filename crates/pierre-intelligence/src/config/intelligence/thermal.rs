// ABOUTME: Thermal model configuration for effective temperature calculation
// ABOUTME: Wind chill, heat index and workout offset parameters with environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Thermal Model Configuration
//!
//! Gating thresholds and additive offsets used to turn raw weather into a
//! felt temperature. Defaults are the calibrated values from
//! `pierre_core::constants::thermal`; the sub-zero wind chill polynomial
//! coefficients are fixed and not configurable.

use super::error::ConfigError;
use pierre_core::constants::thermal::{heat_index, wind_chill, workout_adjustments};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Wind chill gating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindChillConfig {
    /// Wind chill applies at or below this raw temperature
    pub max_temperature_celsius: f64,
    /// Wind chill applies at or above this wind speed
    pub min_wind_speed_kmh: f64,
    /// Degrees lost per km/h of wind above freezing
    pub linear_factor_per_kmh: f64,
}

/// Heat index gating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatIndexConfig {
    /// Heat index applies at or above this raw temperature
    pub min_temperature_celsius: f64,
    /// Heat index applies at or above this humidity
    pub min_humidity_percentage: u8,
    /// Humidity baseline subtracted before scaling
    pub humidity_baseline: f64,
    /// Degrees added per humidity point above the baseline
    pub factor_per_percent: f64,
}

/// Workout intensity and duration offsets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutAdjustmentConfig {
    /// Offset added for intensive workouts
    pub intensive_offset_celsius: f64,
    /// Offset added for tempo workouts
    pub tempo_offset_celsius: f64,
    /// Rides at least this long receive the long ride offset
    pub long_ride_minutes: u32,
    /// Offset added for long rides
    pub long_ride_offset_celsius: f64,
}

/// Complete thermal model configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThermalModelConfig {
    /// Wind chill gating
    pub wind_chill: WindChillConfig,
    /// Heat index gating
    pub heat_index: HeatIndexConfig,
    /// Workout offsets
    pub workout: WorkoutAdjustmentConfig,
}

impl Default for WindChillConfig {
    fn default() -> Self {
        Self {
            max_temperature_celsius: wind_chill::MAX_TEMPERATURE_CELSIUS,
            min_wind_speed_kmh: wind_chill::MIN_WIND_SPEED_KMH,
            linear_factor_per_kmh: wind_chill::LINEAR_FACTOR_PER_KMH,
        }
    }
}

impl Default for HeatIndexConfig {
    fn default() -> Self {
        Self {
            min_temperature_celsius: heat_index::MIN_TEMPERATURE_CELSIUS,
            min_humidity_percentage: heat_index::MIN_HUMIDITY_PERCENTAGE,
            humidity_baseline: heat_index::HUMIDITY_BASELINE,
            factor_per_percent: heat_index::FACTOR_PER_PERCENT,
        }
    }
}

impl Default for WorkoutAdjustmentConfig {
    fn default() -> Self {
        Self {
            intensive_offset_celsius: workout_adjustments::INTENSIVE_OFFSET_CELSIUS,
            tempo_offset_celsius: workout_adjustments::TEMPO_OFFSET_CELSIUS,
            long_ride_minutes: workout_adjustments::LONG_RIDE_MINUTES,
            long_ride_offset_celsius: workout_adjustments::LONG_RIDE_OFFSET_CELSIUS,
        }
    }
}

/// Read `name` from the environment, falling back to `default` when unset
fn env_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("{name}={raw}"))),
        Err(_) => Ok(default),
    }
}

impl ThermalModelConfig {
    /// Load configuration from `OUTFIT_*` environment variables over the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            wind_chill: WindChillConfig {
                max_temperature_celsius: env_or(
                    "OUTFIT_WIND_CHILL_MAX_TEMP_CELSIUS",
                    defaults.wind_chill.max_temperature_celsius,
                )?,
                min_wind_speed_kmh: env_or(
                    "OUTFIT_WIND_CHILL_MIN_WIND_KMH",
                    defaults.wind_chill.min_wind_speed_kmh,
                )?,
                linear_factor_per_kmh: env_or(
                    "OUTFIT_WIND_CHILL_LINEAR_FACTOR",
                    defaults.wind_chill.linear_factor_per_kmh,
                )?,
            },
            heat_index: HeatIndexConfig {
                min_temperature_celsius: env_or(
                    "OUTFIT_HEAT_INDEX_MIN_TEMP_CELSIUS",
                    defaults.heat_index.min_temperature_celsius,
                )?,
                min_humidity_percentage: env_or(
                    "OUTFIT_HEAT_INDEX_MIN_HUMIDITY",
                    defaults.heat_index.min_humidity_percentage,
                )?,
                humidity_baseline: env_or(
                    "OUTFIT_HEAT_INDEX_HUMIDITY_BASELINE",
                    defaults.heat_index.humidity_baseline,
                )?,
                factor_per_percent: env_or(
                    "OUTFIT_HEAT_INDEX_FACTOR",
                    defaults.heat_index.factor_per_percent,
                )?,
            },
            workout: WorkoutAdjustmentConfig {
                intensive_offset_celsius: env_or(
                    "OUTFIT_INTENSIVE_OFFSET_CELSIUS",
                    defaults.workout.intensive_offset_celsius,
                )?,
                tempo_offset_celsius: env_or(
                    "OUTFIT_TEMPO_OFFSET_CELSIUS",
                    defaults.workout.tempo_offset_celsius,
                )?,
                long_ride_minutes: env_or(
                    "OUTFIT_LONG_RIDE_MINUTES",
                    defaults.workout.long_ride_minutes,
                )?,
                long_ride_offset_celsius: env_or(
                    "OUTFIT_LONG_RIDE_OFFSET_CELSIUS",
                    defaults.workout.long_ride_offset_celsius,
                )?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a value is not finite or negative where it must
    /// not be, or when the wind chill and heat index ranges overlap
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            self.wind_chill.max_temperature_celsius,
            self.wind_chill.min_wind_speed_kmh,
            self.wind_chill.linear_factor_per_kmh,
            self.heat_index.min_temperature_celsius,
            self.heat_index.humidity_baseline,
            self.heat_index.factor_per_percent,
            self.workout.intensive_offset_celsius,
            self.workout.tempo_offset_celsius,
            self.workout.long_ride_offset_celsius,
        ];
        if finite.iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "thermal model values must be finite",
            ));
        }

        if self.wind_chill.min_wind_speed_kmh < 0.0 || self.wind_chill.linear_factor_per_kmh < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "wind chill wind speed and factor must be non-negative",
            ));
        }

        if self.heat_index.min_humidity_percentage > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "heat index humidity threshold must be within 0-100",
            ));
        }

        if self.heat_index.factor_per_percent < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "heat index factor must be non-negative",
            ));
        }

        // Wind chill and heat index must never both fire on the same reading
        if self.wind_chill.max_temperature_celsius >= self.heat_index.min_temperature_celsius {
            return Err(ConfigError::InvalidRange(
                "wind chill max temperature must be < heat index min temperature",
            ));
        }

        if self.workout.intensive_offset_celsius < 0.0
            || self.workout.tempo_offset_celsius < 0.0
            || self.workout.long_ride_offset_celsius < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "workout offsets must be non-negative",
            ));
        }

        if self.workout.long_ride_minutes == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "long ride threshold must be positive",
            ));
        }

        Ok(())
    }
}
