// ABOUTME: Legs decision: long tights versus bib shorts with optional leg warmers
// ABOUTME: Leg warmers only ever layer onto shorts, never onto tights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ZoneDecision, ZoneInputs};
use pierre_core::constants::zones::legs::{
    INTENSIVE_LONG_TIGHTS_MAX_CELSIUS, LEG_WARMERS_MAX_CELSIUS, LEG_WARMERS_MIN_MINUTES,
    LONG_TIGHTS_MAX_CELSIUS, TEMPO_LONG_TIGHTS_MAX_CELSIUS, VERY_LONG_RIDE_MAX_CELSIUS,
    VERY_LONG_RIDE_MINUTES, WINDY_LONG_RIDE_MINUTES, WINDY_LONG_RIDE_WIND_KMH,
};
use pierre_core::models::{BodyZone, ClothingItem};

/// Leg coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegsDecision {
    /// Full-length tights
    LongTights,
    /// Bib shorts, optionally with leg warmers
    Shorts {
        /// Leg warmers over the shorts
        leg_warmers: bool,
    },
}

impl LegsDecision {
    /// Ordinal coverage: shorts < shorts with warmers < tights
    #[must_use]
    pub const fn coverage(self) -> u8 {
        match self {
            Self::Shorts { leg_warmers: false } => 0,
            Self::Shorts { leg_warmers: true } => 1,
            Self::LongTights => 2,
        }
    }

    /// Whether the rider wears shorts
    #[must_use]
    pub const fn is_shorts(self) -> bool {
        matches!(self, Self::Shorts { .. })
    }
}

impl ZoneDecision for LegsDecision {
    const ZONE: BodyZone = BodyZone::Legs;

    fn items(&self) -> Vec<ClothingItem> {
        match self {
            Self::LongTights => vec![ClothingItem::LongTights],
            Self::Shorts { leg_warmers: true } => {
                vec![ClothingItem::BibShorts, ClothingItem::LegWarmers]
            }
            Self::Shorts { leg_warmers: false } => vec![ClothingItem::BibShorts],
        }
    }
}

/// Decide leg coverage
#[must_use]
pub fn decide(inputs: &ZoneInputs) -> LegsDecision {
    let workout = &inputs.workout;
    let long_tights = inputs.feels_at_most(LONG_TIGHTS_MAX_CELSIUS)
        || (workout.is_intensive() && inputs.feels_at_most(INTENSIVE_LONG_TIGHTS_MAX_CELSIUS))
        || (workout.is_tempo() && inputs.feels_at_most(TEMPO_LONG_TIGHTS_MAX_CELSIUS))
        || (inputs.lasts_at_least(WINDY_LONG_RIDE_MINUTES)
            && inputs.wind_at_least(WINDY_LONG_RIDE_WIND_KMH))
        || (inputs.lasts_at_least(VERY_LONG_RIDE_MINUTES)
            && inputs.feels_at_most(VERY_LONG_RIDE_MAX_CELSIUS));

    if long_tights {
        return LegsDecision::LongTights;
    }

    LegsDecision::Shorts {
        leg_warmers: inputs.lasts_at_least(LEG_WARMERS_MIN_MINUTES)
            && inputs.feels_at_most(LEG_WARMERS_MAX_CELSIUS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_core::models::{
        EffectiveTemperature, WeatherSnapshot, WorkoutContext, WorkoutIntensity,
    };

    fn inputs(effective: f64, wind: f64, intensity: WorkoutIntensity, minutes: u32) -> ZoneInputs {
        ZoneInputs::new(
            WeatherSnapshot::new(effective, 50, wind),
            WorkoutContext::new(intensity, minutes),
            EffectiveTemperature::from_celsius(effective),
        )
    }

    #[test]
    fn test_fifteen_degrees_is_inclusive() {
        let decision = decide(&inputs(15.0, 0.0, WorkoutIntensity::Recreational, 60));
        assert_eq!(decision, LegsDecision::LongTights);
        assert_eq!(decision.items(), vec![ClothingItem::LongTights]);
    }

    #[test]
    fn test_shorts_with_leg_warmers_on_long_cool_ride() {
        let decision = decide(&inputs(16.0, 0.0, WorkoutIntensity::Recreational, 90));
        assert_eq!(decision, LegsDecision::Shorts { leg_warmers: true });
        assert_eq!(
            decision.items(),
            vec![ClothingItem::BibShorts, ClothingItem::LegWarmers]
        );

        let short_ride = decide(&inputs(16.0, 0.0, WorkoutIntensity::Recreational, 89));
        assert_eq!(short_ride, LegsDecision::Shorts { leg_warmers: false });
    }

    #[test]
    fn test_wind_and_duration_force_tights() {
        let windy = decide(&inputs(22.0, 15.0, WorkoutIntensity::Tempo, 120));
        assert_eq!(windy, LegsDecision::LongTights);

        let epic = decide(&inputs(25.0, 0.0, WorkoutIntensity::Endurance, 180));
        assert_eq!(epic, LegsDecision::LongTights);

        let hot_epic = decide(&inputs(25.1, 0.0, WorkoutIntensity::Endurance, 180));
        assert!(hot_epic.is_shorts());
    }
}
