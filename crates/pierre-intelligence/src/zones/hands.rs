// ABOUTME: Hands decision: exactly one glove tier with upgrade rules
// ABOUTME: Duration and wind alone can lift summer gloves to transition, never to winter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ZoneDecision, ZoneInputs};
use pierre_core::constants::zones::hands::{
    LONG_RIDE_WINTER_MIN_MINUTES, STRONG_WIND_KMH, TRANSITION_MAX_CELSIUS,
    UPGRADE_TO_WINTER_MAX_CELSIUS, VERY_LONG_RIDE_MIN_MINUTES, WINTER_MAX_CELSIUS,
};
use pierre_core::models::{BodyZone, ClothingItem};

/// Glove warmth tier, ordered lightest to warmest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GloveTier {
    /// Fingerless summer mitts
    Summer,
    /// Light full-finger gloves
    Transition,
    /// Insulated gloves
    Winter,
}

/// Hand coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandsDecision {
    /// Selected tier
    pub tier: GloveTier,
}

impl ZoneDecision for HandsDecision {
    const ZONE: BodyZone = BodyZone::Hands;

    fn items(&self) -> Vec<ClothingItem> {
        vec![match self.tier {
            GloveTier::Summer => ClothingItem::SummerGloves,
            GloveTier::Transition => ClothingItem::TransitionGloves,
            GloveTier::Winter => ClothingItem::WinterGloves,
        }]
    }
}

/// Decide glove tier
#[must_use]
pub fn decide(inputs: &ZoneInputs) -> HandsDecision {
    let mut tier = if inputs.feels_at_most(WINTER_MAX_CELSIUS) {
        GloveTier::Winter
    } else if inputs.feels_at_most(TRANSITION_MAX_CELSIUS) {
        GloveTier::Transition
    } else {
        GloveTier::Summer
    };

    let chilly = inputs.feels_at_most(UPGRADE_TO_WINTER_MAX_CELSIUS);
    if chilly
        && (inputs.workout.is_intensive() || inputs.lasts_at_least(LONG_RIDE_WINTER_MIN_MINUTES))
    {
        tier = GloveTier::Winter;
    }

    if tier == GloveTier::Summer
        && (inputs.lasts_at_least(VERY_LONG_RIDE_MIN_MINUTES)
            || inputs.wind_at_least(STRONG_WIND_KMH))
    {
        tier = GloveTier::Transition;
    }

    HandsDecision { tier }
}
