// ABOUTME: Arms decision: arm warmers for long cool rides
// ABOUTME: Independent of the torso ladder; dropped by the assembler when legs choose tights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ZoneDecision, ZoneInputs};
use pierre_core::constants::zones::arms::{ARM_WARMERS_MAX_CELSIUS, ARM_WARMERS_MIN_MINUTES};
use pierre_core::models::{BodyZone, ClothingItem};

/// Arm coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmsDecision {
    /// Arm warmers worn
    pub arm_warmers: bool,
}

impl ZoneDecision for ArmsDecision {
    const ZONE: BodyZone = BodyZone::Arms;

    fn items(&self) -> Vec<ClothingItem> {
        if self.arm_warmers {
            vec![ClothingItem::ArmWarmers]
        } else {
            Vec::new()
        }
    }
}

/// Decide arm coverage
#[must_use]
pub fn decide(inputs: &ZoneInputs) -> ArmsDecision {
    ArmsDecision {
        arm_warmers: inputs.lasts_at_least(ARM_WARMERS_MIN_MINUTES)
            && inputs.feels_at_most(ARM_WARMERS_MAX_CELSIUS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_core::models::{
        EffectiveTemperature, WeatherSnapshot, WorkoutContext, WorkoutIntensity,
    };

    #[test]
    fn test_arm_warmers_need_duration_and_cool_air() {
        let at = |effective: f64, minutes: u32| {
            decide(&ZoneInputs::new(
                WeatherSnapshot::new(effective, 50, 0.0),
                WorkoutContext::new(WorkoutIntensity::Recreational, minutes),
                EffectiveTemperature::from_celsius(effective),
            ))
        };
        assert_eq!(at(18.0, 90).items(), vec![ClothingItem::ArmWarmers]);
        assert!(at(18.1, 90).items().is_empty());
        assert!(at(10.0, 89).items().is_empty());
    }
}
