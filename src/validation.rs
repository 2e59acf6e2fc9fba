// ABOUTME: Boundary validation for outfit recommendation requests
// ABOUTME: Rejects non-finite or out of range inputs before they reach the pure engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Request validation
//!
//! The engine accepts any numeric input. Range checks live here so callers
//! get a typed error instead of a nonsensical outfit.

use crate::errors::{AppError, AppResult};
use pierre_core::constants::limits;
use pierre_core::models::{
    ClothingRecommendation, PersonalizationBias, WeatherSnapshot, WorkoutContext,
};
use pierre_intelligence::{OutfitEngine, OutfitRecommender};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One recommendation request as received from a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Current conditions
    pub weather: WeatherSnapshot,
    /// Planned ride
    pub workout: WorkoutContext,
    /// Personal thermal preference
    #[serde(default)]
    pub bias: PersonalizationBias,
}

impl RecommendationRequest {
    /// Bundle a request
    #[must_use]
    pub const fn new(
        weather: WeatherSnapshot,
        workout: WorkoutContext,
        bias: PersonalizationBias,
    ) -> Self {
        Self {
            weather,
            workout,
            bias,
        }
    }

    /// Check every field against the accepted input ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-finite numbers and `ValueOutOfRange` for
    /// values outside the limits in `pierre_core::constants::limits`
    pub fn validate(&self) -> AppResult<()> {
        let result = self.check();
        if let Err(ref error) = result {
            warn!(error = %error, "rejected outfit request");
        }
        result
    }

    /// Validate, then run `engine`
    ///
    /// # Errors
    ///
    /// Returns the validation error; the engine itself cannot fail
    pub fn recommend_with<R: OutfitRecommender>(
        &self,
        engine: &R,
    ) -> AppResult<ClothingRecommendation> {
        self.validate()?;
        Ok(engine.recommend(&self.weather, &self.workout, &self.bias))
    }

    /// Validate, then run the default engine
    ///
    /// # Errors
    ///
    /// Returns the validation error; the engine itself cannot fail
    pub fn recommend(&self) -> AppResult<ClothingRecommendation> {
        self.recommend_with(&OutfitEngine::new())
    }

    fn check(&self) -> AppResult<()> {
        let weather = &self.weather;
        let temperature = finite("temperature_celsius", weather.temperature_celsius)?;
        if !(limits::MIN_TEMPERATURE_CELSIUS..=limits::MAX_TEMPERATURE_CELSIUS)
            .contains(&temperature)
        {
            return Err(AppError::value_out_of_range(
                "temperature_celsius",
                format_args!(
                    "{temperature} outside {}..={}",
                    limits::MIN_TEMPERATURE_CELSIUS,
                    limits::MAX_TEMPERATURE_CELSIUS
                ),
            ));
        }

        if weather.humidity_percentage > limits::MAX_HUMIDITY_PERCENTAGE {
            return Err(AppError::value_out_of_range(
                "humidity_percentage",
                format_args!(
                    "{} above {}",
                    weather.humidity_percentage,
                    limits::MAX_HUMIDITY_PERCENTAGE
                ),
            ));
        }

        let wind = finite("wind_speed_kmh", weather.wind_speed_kmh)?;
        if !(0.0..=limits::MAX_WIND_SPEED_KMH).contains(&wind) {
            return Err(AppError::value_out_of_range(
                "wind_speed_kmh",
                format_args!("{wind} outside 0..={}", limits::MAX_WIND_SPEED_KMH),
            ));
        }

        let minutes = self.workout.duration_minutes;
        if minutes == 0 || minutes > limits::MAX_DURATION_MINUTES {
            return Err(AppError::value_out_of_range(
                "duration_minutes",
                format_args!("{minutes} outside 1..={}", limits::MAX_DURATION_MINUTES),
            ));
        }

        let adjustment = finite("thermal_adjustment", self.bias.thermal_adjustment)?;
        if adjustment.abs() > limits::MAX_THERMAL_ADJUSTMENT_CELSIUS {
            return Err(AppError::value_out_of_range(
                "thermal_adjustment",
                format_args!(
                    "{adjustment} beyond ±{}",
                    limits::MAX_THERMAL_ADJUSTMENT_CELSIUS
                ),
            ));
        }

        Ok(())
    }
}

fn finite(field: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::invalid_input(format!("{field} must be a finite number")))
    }
}
