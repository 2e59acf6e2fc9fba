// ABOUTME: Outfit recommendation engine assembling the seven body zone decisions
// ABOUTME: Applies the personal bias, computes the felt temperature once and merges zone items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Outfit assembly

use crate::config::ThermalModelConfig;
use crate::effective_temperature::{EffectiveTemperatureBreakdown, EffectiveTemperatureCalculator};
use crate::zones::{
    ArmsDecision, FeetDecision, HandsDecision, HeadDecision, LegsDecision, NeckDecision,
    TorsoDecision, ZoneDecision, ZoneDecisions, ZoneInputs,
};
use pierre_core::models::{
    ClothingItem, ClothingRecommendation, PersonalizationBias, WeatherSnapshot, WorkoutContext,
};
use tracing::debug;

/// Trait for producing a clothing recommendation
pub trait OutfitRecommender {
    /// Recommend an outfit for one ride
    fn recommend(
        &self,
        weather: &WeatherSnapshot,
        workout: &WorkoutContext,
        bias: &PersonalizationBias,
    ) -> ClothingRecommendation;
}

/// Outfit engine bound to one thermal model
#[derive(Debug, Clone, Default)]
pub struct OutfitEngine {
    calculator: EffectiveTemperatureCalculator,
}

impl OutfitEngine {
    /// Engine with the calibrated default thermal model
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom thermal model
    #[must_use]
    pub const fn with_config(config: ThermalModelConfig) -> Self {
        Self {
            calculator: EffectiveTemperatureCalculator::with_config(config),
        }
    }

    /// Engine using the process-wide thermal model (environment overrides included)
    #[must_use]
    pub fn from_global() -> Self {
        Self::with_config(ThermalModelConfig::global().clone())
    }

    /// Calculator used for the felt temperature
    #[must_use]
    pub const fn calculator(&self) -> &EffectiveTemperatureCalculator {
        &self.calculator
    }

    /// Every step of the felt temperature the zones will see, bias applied
    #[must_use]
    pub fn breakdown(
        &self,
        weather: &WeatherSnapshot,
        workout: &WorkoutContext,
        bias: &PersonalizationBias,
    ) -> EffectiveTemperatureBreakdown {
        self.calculator.breakdown(&biased(weather, bias), workout)
    }

    /// Shared zone inputs after applying the bias
    #[must_use]
    pub fn zone_inputs(
        &self,
        weather: &WeatherSnapshot,
        workout: &WorkoutContext,
        bias: &PersonalizationBias,
    ) -> ZoneInputs {
        let shifted = biased(weather, bias);
        let effective_temperature = self.calculator.compute(&shifted, workout);
        ZoneInputs::new(shifted, *workout, effective_temperature)
    }

    /// Per-zone decisions with cross-zone rules already enforced
    #[must_use]
    pub fn zone_decisions(
        &self,
        weather: &WeatherSnapshot,
        workout: &WorkoutContext,
        bias: &PersonalizationBias,
    ) -> ZoneDecisions {
        decide_all(&self.zone_inputs(weather, workout, bias))
    }
}

fn biased(weather: &WeatherSnapshot, bias: &PersonalizationBias) -> WeatherSnapshot {
    weather.shifted_by(bias.thermal_adjustment)
}

fn decide_all(inputs: &ZoneInputs) -> ZoneDecisions {
    let mut decisions = ZoneDecisions::decide(inputs);

    // arm warmers only pair with shorts
    if decisions.legs == LegsDecision::LongTights {
        decisions.arms.arm_warmers = false;
    }

    log_decisions(inputs, &decisions);
    decisions
}

impl OutfitRecommender for OutfitEngine {
    fn recommend(
        &self,
        weather: &WeatherSnapshot,
        workout: &WorkoutContext,
        bias: &PersonalizationBias,
    ) -> ClothingRecommendation {
        let inputs = self.zone_inputs(weather, workout, bias);
        let decisions = decide_all(&inputs);

        let mut items = vec![ClothingItem::Helmet];
        items.extend(decisions.items());

        ClothingRecommendation {
            items,
            effective_temperature: inputs.effective_temperature,
            preference_override: bias.preference_override.clone(),
        }
    }
}

fn log_decisions(inputs: &ZoneInputs, decisions: &ZoneDecisions) {
    let effective = inputs.effective_temperature.celsius();
    debug!(
        zone = %TorsoDecision::ZONE,
        effective,
        band = ?decisions.torso.band,
        layers = decisions.torso.layer_count(),
        "torso decided"
    );
    debug!(zone = %LegsDecision::ZONE, effective, decision = ?decisions.legs, "legs decided");
    debug!(
        zone = %ArmsDecision::ZONE,
        arm_warmers = decisions.arms.arm_warmers,
        "arms decided"
    );
    debug!(zone = %HeadDecision::ZONE, cap = ?decisions.head.cap, "head decided");
    debug!(zone = %HandsDecision::ZONE, tier = ?decisions.hands.tier, "hands decided");
    debug!(
        zone = %NeckDecision::ZONE,
        gaiter = decisions.neck.gaiter,
        "neck decided"
    );
    debug!(
        zone = %FeetDecision::ZONE,
        socks = ?decisions.feet.socks,
        shoe_covers = decisions.feet.shoe_covers,
        "feet decided"
    );
}

/// Recommend an outfit with the calibrated default thermal model
#[must_use]
pub fn generate_recommendation(
    weather: &WeatherSnapshot,
    workout: &WorkoutContext,
    bias: &PersonalizationBias,
) -> ClothingRecommendation {
    OutfitEngine::new().recommend(weather, workout, bias)
}
