// ABOUTME: Head decision: cycling cap for warmth or sun protection
// ABOUTME: Sun rules look at the air temperature, the warmth rule at the felt temperature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ZoneDecision, ZoneInputs};
use pierre_core::constants::zones::head::{
    COLD_CAP_MAX_CELSIUS, RAW_INTENSIVE_SUN_CAP_MIN_CELSIUS, RAW_SUN_CAP_MIN_CELSIUS,
    SUN_CAP_MIN_MINUTES,
};
use pierre_core::models::{BodyZone, ClothingItem};

/// Why the cap was recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapReason {
    /// Keeps the head warm
    Warmth,
    /// Shades the head on long or hard rides in warm air
    SunProtection,
}

/// Head coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadDecision {
    /// Cap and the rule that selected it
    pub cap: Option<CapReason>,
}

impl ZoneDecision for HeadDecision {
    const ZONE: BodyZone = BodyZone::Head;

    fn items(&self) -> Vec<ClothingItem> {
        self.cap.map(|_| ClothingItem::Cap).into_iter().collect()
    }
}

/// Decide head coverage
#[must_use]
pub fn decide(inputs: &ZoneInputs) -> HeadDecision {
    let long_sunny_ride = inputs.air_at_least(RAW_SUN_CAP_MIN_CELSIUS)
        && inputs.lasts_at_least(SUN_CAP_MIN_MINUTES);
    let hard_sunny_ride =
        inputs.air_at_least(RAW_INTENSIVE_SUN_CAP_MIN_CELSIUS) && inputs.workout.is_intensive();

    let cap = if inputs.feels_at_most(COLD_CAP_MAX_CELSIUS) {
        Some(CapReason::Warmth)
    } else if long_sunny_ride || hard_sunny_ride {
        Some(CapReason::SunProtection)
    } else {
        None
    };
    HeadDecision { cap }
}
