// ABOUTME: Neck decision: gaiter for cold, wind, damp, hard or very long rides
// ABOUTME: Rides of 200 minutes or more always get a gaiter regardless of temperature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ZoneDecision, ZoneInputs};
use pierre_core::constants::zones::neck::{
    ALWAYS_MIN_MINUTES, COLD_MAX_CELSIUS, DAMP_HUMIDITY_PERCENTAGE, DAMP_MAX_CELSIUS,
    INTENSIVE_MAX_CELSIUS, LONG_RIDE_MIN_MINUTES, LONG_RIDE_WIND_KMH, WIND_KMH,
};
use pierre_core::models::{BodyZone, ClothingItem};

/// Neck coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeckDecision {
    /// Neck gaiter worn
    pub gaiter: bool,
}

impl ZoneDecision for NeckDecision {
    const ZONE: BodyZone = BodyZone::Neck;

    fn items(&self) -> Vec<ClothingItem> {
        if self.gaiter {
            vec![ClothingItem::NeckGaiter]
        } else {
            Vec::new()
        }
    }
}

/// Decide neck coverage
#[must_use]
pub fn decide(inputs: &ZoneInputs) -> NeckDecision {
    let gaiter = inputs.feels_at_most(COLD_MAX_CELSIUS)
        || inputs.wind_at_least(WIND_KMH)
        || (inputs.feels_at_most(DAMP_MAX_CELSIUS)
            && inputs.humidity_at_least(DAMP_HUMIDITY_PERCENTAGE))
        || (inputs.feels_at_most(INTENSIVE_MAX_CELSIUS) && inputs.workout.is_intensive())
        || (inputs.lasts_at_least(LONG_RIDE_MIN_MINUTES)
            && inputs.wind_at_least(LONG_RIDE_WIND_KMH))
        || inputs.lasts_at_least(ALWAYS_MIN_MINUTES);
    NeckDecision { gaiter }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_core::models::{
        EffectiveTemperature, WeatherSnapshot, WorkoutContext, WorkoutIntensity,
    };

    fn gaiter(
        effective: f64,
        humidity: u8,
        wind: f64,
        intensity: WorkoutIntensity,
        minutes: u32,
    ) -> bool {
        decide(&ZoneInputs::new(
            WeatherSnapshot::new(effective, humidity, wind),
            WorkoutContext::new(intensity, minutes),
            EffectiveTemperature::from_celsius(effective),
        ))
        .gaiter
    }

    #[test]
    fn test_gaiter_rules() {
        let rec = WorkoutIntensity::Recreational;
        assert!(gaiter(8.0, 50, 0.0, rec, 60));
        assert!(!gaiter(8.1, 50, 0.0, rec, 60));
        assert!(gaiter(20.0, 50, 18.0, rec, 60));
        assert!(gaiter(10.0, 80, 0.0, rec, 60));
        assert!(!gaiter(10.0, 79, 0.0, rec, 60));
        assert!(gaiter(13.0, 50, 0.0, WorkoutIntensity::Intensive, 60));
        assert!(!gaiter(13.0, 50, 0.0, WorkoutIntensity::Tempo, 60));
    }

    #[test]
    fn test_very_long_rides_always_get_a_gaiter() {
        assert!(gaiter(30.0, 40, 0.0, WorkoutIntensity::Endurance, 200));
        assert!(!gaiter(30.0, 40, 0.0, WorkoutIntensity::Endurance, 199));
    }
}
