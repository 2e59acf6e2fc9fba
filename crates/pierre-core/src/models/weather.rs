// ABOUTME: Weather snapshot and effective temperature value types
// ABOUTME: Inputs resolved upstream by a weather collaborator; the engine never fetches weather
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved weather for the start of a ride
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Air temperature in Celsius
    pub temperature_celsius: f64,
    /// Relative humidity (0-100)
    pub humidity_percentage: u8,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
}

impl WeatherSnapshot {
    /// Create a weather snapshot
    #[must_use]
    pub const fn new(
        temperature_celsius: f64,
        humidity_percentage: u8,
        wind_speed_kmh: f64,
    ) -> Self {
        Self {
            temperature_celsius,
            humidity_percentage,
            wind_speed_kmh,
        }
    }

    /// Same conditions with the air temperature shifted by `delta_celsius`
    #[must_use]
    pub fn shifted_by(self, delta_celsius: f64) -> Self {
        Self {
            temperature_celsius: self.temperature_celsius + delta_celsius,
            ..self
        }
    }
}

/// Felt temperature after wind chill, heat index and workout adjustments
///
/// Always rounded to one decimal place. Constructed once per recommendation
/// and shared read-only by every body zone rule.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectiveTemperature(f64);

impl EffectiveTemperature {
    /// Round `celsius` to one decimal and wrap it
    ///
    /// Halves round toward positive infinity, so `-1.95` becomes `-1.9`.
    #[must_use]
    pub fn from_celsius(celsius: f64) -> Self {
        Self(celsius.mul_add(10.0, 0.5).floor() / 10.0)
    }

    /// Value in Celsius
    #[must_use]
    pub const fn celsius(self) -> f64 {
        self.0
    }

    /// True when the felt temperature is at or below `bound`
    #[must_use]
    pub fn at_most(self, bound: f64) -> bool {
        self.0 <= bound
    }
}

impl fmt::Display for EffectiveTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°C", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_temperature_rounds_to_one_decimal() {
        assert!((EffectiveTemperature::from_celsius(-6.7654).celsius() + 6.8).abs() < 1e-9);
        assert!((EffectiveTemperature::from_celsius(13.549).celsius() - 13.5).abs() < 1e-9);
        assert_eq!(EffectiveTemperature::from_celsius(4.0).to_string(), "4.0°C");
    }

    #[test]
    fn test_halves_round_toward_positive_infinity() {
        assert!((EffectiveTemperature::from_celsius(0.25).celsius() - 0.3).abs() < 1e-9);
        assert!((EffectiveTemperature::from_celsius(-0.25).celsius() + 0.2).abs() < 1e-9);
        assert!((EffectiveTemperature::from_celsius(-1.95).celsius() + 1.9).abs() < 1e-9);
    }

    #[test]
    fn test_shift_only_touches_temperature() {
        let weather = WeatherSnapshot::new(10.0, 65, 12.0).shifted_by(-3.0);
        assert!((weather.temperature_celsius - 7.0).abs() < f64::EPSILON);
        assert_eq!(weather.humidity_percentage, 65);
        assert!((weather.wind_speed_kmh - 12.0).abs() < f64::EPSILON);
    }
}
