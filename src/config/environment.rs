// ABOUTME: Environment configuration for outfit request defaults and output rendering
// ABOUTME: Parses OUTFIT_* variables, validates them and bundles the thermal model and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;
use pierre_core::constants::{defaults, limits};
use pierre_core::models::WorkoutIntensity;
use pierre_intelligence::config::ThermalModelConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// How recommendations are rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable, one line per zone
    #[default]
    Text,
    /// Serialized recommendation
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_input(format!(
                "unknown output format '{other}', expected text or json"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Settings for serving outfit requests
#[derive(Debug, Clone)]
pub struct OutfitServiceConfig {
    /// Thermal adjustment used when a request carries none
    pub default_thermal_adjustment: f64,
    /// Intensity used when a request carries none
    pub default_intensity: WorkoutIntensity,
    /// Ride duration used when a request carries none
    pub default_duration_minutes: u32,
    /// Output rendering
    pub output_format: OutputFormat,
    /// Thermal model for the effective temperature
    pub thermal_model: ThermalModelConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl Default for OutfitServiceConfig {
    fn default() -> Self {
        Self {
            default_thermal_adjustment: defaults::THERMAL_ADJUSTMENT_CELSIUS,
            default_intensity: WorkoutIntensity::default(),
            default_duration_minutes: defaults::DURATION_MINUTES,
            output_format: OutputFormat::default(),
            thermal_model: ThermalModelConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl OutfitServiceConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable cannot be parsed or is out of range
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let config = Self {
            default_thermal_adjustment: parse_env(
                "OUTFIT_DEFAULT_THERMAL_ADJUSTMENT",
                defaults.default_thermal_adjustment,
            )?,
            default_intensity: parse_env("OUTFIT_DEFAULT_INTENSITY", defaults.default_intensity)?,
            default_duration_minutes: parse_env(
                "OUTFIT_DEFAULT_DURATION_MINUTES",
                defaults.default_duration_minutes,
            )?,
            output_format: parse_env("OUTFIT_OUTPUT_FORMAT", defaults.output_format)?,
            thermal_model: ThermalModelConfig::from_env()?,
            logging: LoggingConfig::from_env(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for out of range defaults or an inconsistent thermal model
    pub fn validate(&self) -> AppResult<()> {
        if !self.default_thermal_adjustment.is_finite()
            || self.default_thermal_adjustment.abs() > limits::MAX_THERMAL_ADJUSTMENT_CELSIUS
        {
            return Err(AppError::config_invalid(format!(
                "OUTFIT_DEFAULT_THERMAL_ADJUSTMENT must be within ±{}",
                limits::MAX_THERMAL_ADJUSTMENT_CELSIUS
            )));
        }
        if self.default_duration_minutes == 0
            || self.default_duration_minutes > limits::MAX_DURATION_MINUTES
        {
            return Err(AppError::config_invalid(format!(
                "OUTFIT_DEFAULT_DURATION_MINUTES must be between 1 and {}",
                limits::MAX_DURATION_MINUTES
            )));
        }
        self.thermal_model.validate()?;
        Ok(())
    }
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}
