// ABOUTME: Effective temperature calculation from weather and workout context
// ABOUTME: Applies wind chill, heat index, intensity and duration adjustments in a fixed order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Effective ("felt") temperature.
//!
//! The steps run in a fixed order and each one feeds the next:
//!
//! 1. raw air temperature
//! 2. wind chill (cold, windy) or
//! 3. heat index (warm, humid), never both
//! 4. intensity offset
//! 5. long ride offset
//! 6. round to one decimal
//!
//! Workout offsets are applied to the weather-adjusted value, never to the
//! raw temperature.

use crate::config::ThermalModelConfig;
use pierre_core::constants::{thermal::wind_chill, units::KMH_PER_MS};
use pierre_core::models::{
    EffectiveTemperature, WeatherSnapshot, WorkoutContext, WorkoutIntensity,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Every intermediate value of one effective temperature calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveTemperatureBreakdown {
    /// Air temperature the calculation started from
    pub raw_celsius: f64,
    /// Value after the wind chill step
    pub after_wind_chill_celsius: f64,
    /// Value after the heat index step
    pub after_heat_index_celsius: f64,
    /// Offset added for workout intensity
    pub intensity_offset_celsius: f64,
    /// Offset added for ride duration
    pub duration_offset_celsius: f64,
    /// Final rounded value
    pub effective: EffectiveTemperature,
}

impl EffectiveTemperatureBreakdown {
    /// Whether the wind chill step changed the value
    #[must_use]
    pub fn wind_chill_applied(&self) -> bool {
        (self.after_wind_chill_celsius - self.raw_celsius).abs() > f64::EPSILON
    }

    /// Whether the heat index step changed the value
    #[must_use]
    pub fn heat_index_applied(&self) -> bool {
        (self.after_heat_index_celsius - self.after_wind_chill_celsius).abs() > f64::EPSILON
    }
}

/// Calculator bound to one thermal model
#[derive(Debug, Clone, Default)]
pub struct EffectiveTemperatureCalculator {
    config: ThermalModelConfig,
}

impl EffectiveTemperatureCalculator {
    /// Calculator with the calibrated default model
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator with a custom model
    #[must_use]
    pub const fn with_config(config: ThermalModelConfig) -> Self {
        Self { config }
    }

    /// Thermal model in use
    #[must_use]
    pub const fn config(&self) -> &ThermalModelConfig {
        &self.config
    }

    /// Compute the effective temperature
    #[must_use]
    pub fn compute(
        &self,
        weather: &WeatherSnapshot,
        workout: &WorkoutContext,
    ) -> EffectiveTemperature {
        self.breakdown(weather, workout).effective
    }

    /// Compute the effective temperature and keep every intermediate value
    #[must_use]
    pub fn breakdown(
        &self,
        weather: &WeatherSnapshot,
        workout: &WorkoutContext,
    ) -> EffectiveTemperatureBreakdown {
        let raw = weather.temperature_celsius;
        let after_wind_chill = self.apply_wind_chill(raw, weather.wind_speed_kmh);
        let after_heat_index =
            self.apply_heat_index(raw, after_wind_chill, weather.humidity_percentage);
        let intensity_offset = self.intensity_offset(workout.intensity);
        let duration_offset = if workout.lasts_at_least(self.config.workout.long_ride_minutes) {
            self.config.workout.long_ride_offset_celsius
        } else {
            0.0
        };

        let effective = EffectiveTemperature::from_celsius(
            after_heat_index + intensity_offset + duration_offset,
        );

        debug!(
            raw_celsius = raw,
            after_wind_chill,
            after_heat_index,
            intensity_offset,
            duration_offset,
            effective = effective.celsius(),
            "computed effective temperature"
        );

        EffectiveTemperatureBreakdown {
            raw_celsius: raw,
            after_wind_chill_celsius: after_wind_chill,
            after_heat_index_celsius: after_heat_index,
            intensity_offset_celsius: intensity_offset,
            duration_offset_celsius: duration_offset,
            effective,
        }
    }

    fn apply_wind_chill(&self, temperature: f64, wind_speed_kmh: f64) -> f64 {
        let gate = &self.config.wind_chill;
        if temperature > gate.max_temperature_celsius || wind_speed_kmh < gate.min_wind_speed_kmh {
            return temperature;
        }

        if temperature <= wind_chill::FREEZING_CELSIUS {
            let wind_factor = (wind_speed_kmh / KMH_PER_MS).powf(wind_chill::WIND_EXPONENT);
            let base =
                wind_chill::COEFF_TEMPERATURE.mul_add(temperature, wind_chill::COEFF_CONSTANT);
            let chilled = wind_chill::COEFF_WIND.mul_add(-wind_factor, base);
            wind_chill::COEFF_INTERACTION.mul_add(temperature * wind_factor, chilled)
        } else {
            wind_speed_kmh.mul_add(-gate.linear_factor_per_kmh, temperature)
        }
    }

    fn apply_heat_index(&self, raw: f64, running: f64, humidity_percentage: u8) -> f64 {
        let gate = &self.config.heat_index;
        if raw < gate.min_temperature_celsius || humidity_percentage < gate.min_humidity_percentage
        {
            return running;
        }
        (f64::from(humidity_percentage) - gate.humidity_baseline)
            .mul_add(gate.factor_per_percent, running)
    }

    fn intensity_offset(&self, intensity: WorkoutIntensity) -> f64 {
        match intensity {
            WorkoutIntensity::Intensive => self.config.workout.intensive_offset_celsius,
            WorkoutIntensity::Tempo => self.config.workout.tempo_offset_celsius,
            WorkoutIntensity::Recreational | WorkoutIntensity::Endurance => 0.0,
        }
    }
}

/// Compute the effective temperature with the calibrated default model
#[must_use]
pub fn compute_effective_temperature(
    weather: &WeatherSnapshot,
    workout: &WorkoutContext,
) -> EffectiveTemperature {
    EffectiveTemperatureCalculator::new().compute(weather, workout)
}
