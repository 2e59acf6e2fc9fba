// ABOUTME: Torso layering ladder evaluated by effective temperature band
// ABOUTME: Chooses mid and outer layers per band, then the base layer consistent with them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Torso layering.
//!
//! The ladder is a priority classification, not a set of independent
//! checks: the band is chosen first, and only that band's rules run. The base
//! layer is derived last so it always matches what sits on top of it.

use super::{ZoneDecision, ZoneInputs};
use pierre_core::constants::zones::torso::{
    COLD_DAMP_HUMIDITY_PERCENTAGE, COLD_DAMP_WIND_JACKET_WIND_KMH, COLD_MAX_CELSIUS,
    COLD_WINTER_JACKET_MAX_CELSIUS, COLD_WIND_JACKET_WIND_KMH, COOL_MAX_CELSIUS,
    COOL_RELAXED_MID_MAX_CELSIUS, COOL_RELAXED_MID_MIN_MINUTES, COOL_TEMPO_MID_MAX_CELSIUS,
    COOL_VEST_WIND_KMH, FREEZING_MAX_CELSIUS, MILD_MAX_CELSIUS, MILD_RELAXED_MID_MIN_MINUTES,
    MILD_VEST_MIN_MINUTES, MILD_VEST_WIND_KMH, RAW_SUN_LAYER_MIN_CELSIUS, RAW_WARM_MIN_CELSIUS,
    SUN_LAYER_MIN_MINUTES, WARM_VEST_MIN_MINUTES, WARM_VEST_WIND_KMH,
};
use pierre_core::models::{BodyZone, ClothingItem, EffectiveTemperature, WorkoutIntensity};

/// Effective temperature band selecting the torso rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TorsoBand {
    /// At or below -2 °C
    Freezing,
    /// Above -2 °C up to 6 °C
    Cold,
    /// Above 6 °C up to 13 °C
    Cool,
    /// Above 13 °C up to 18 °C
    Mild,
    /// Above 18 °C
    Warm,
}

impl TorsoBand {
    /// Classify an effective temperature
    #[must_use]
    pub fn classify(effective: EffectiveTemperature) -> Self {
        if effective.at_most(FREEZING_MAX_CELSIUS) {
            Self::Freezing
        } else if effective.at_most(COLD_MAX_CELSIUS) {
            Self::Cold
        } else if effective.at_most(COOL_MAX_CELSIUS) {
            Self::Cool
        } else if effective.at_most(MILD_MAX_CELSIUS) {
            Self::Mild
        } else {
            Self::Warm
        }
    }
}

/// Next-to-skin torso garment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseLayer {
    /// Long-sleeve thermal, worn under other layers
    Thermal,
    /// Short-sleeve jersey, worn alone
    Jersey,
}

/// Shell worn over the base and mid layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OuterLayer {
    /// Sleeveless wind vest
    WindVest,
    /// Windproof shell jacket
    WindJacket,
    /// Insulated winter jacket
    WinterJacket,
}

/// Torso layering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorsoDecision {
    /// Effective temperature band the decision came from
    pub band: TorsoBand,
    /// Base layer
    pub base: BaseLayer,
    /// Whether a mid layer is worn
    pub mid_layer: bool,
    /// Optional outer layer
    pub outer: Option<OuterLayer>,
}

impl TorsoDecision {
    fn layered(band: TorsoBand, mid_layer: bool, outer: Option<OuterLayer>) -> Self {
        let base = if mid_layer || outer.is_some() {
            BaseLayer::Thermal
        } else {
            BaseLayer::Jersey
        };
        Self {
            band,
            base,
            mid_layer,
            outer,
        }
    }

    /// Number of torso garments
    #[must_use]
    pub fn layer_count(&self) -> usize {
        1 + usize::from(self.mid_layer) + usize::from(self.outer.is_some())
    }
}

impl ZoneDecision for TorsoDecision {
    const ZONE: BodyZone = BodyZone::Torso;

    fn items(&self) -> Vec<ClothingItem> {
        let mut items = vec![match self.base {
            BaseLayer::Thermal => ClothingItem::ThermalBaseLayer,
            BaseLayer::Jersey => ClothingItem::JerseyBaseLayer,
        }];
        if self.mid_layer {
            items.push(ClothingItem::MidLayer);
        }
        if let Some(outer) = self.outer {
            items.push(match outer {
                OuterLayer::WindVest => ClothingItem::WindVest,
                OuterLayer::WindJacket => ClothingItem::WindJacket,
                OuterLayer::WinterJacket => ClothingItem::WinterJacket,
            });
        }
        items
    }
}

/// Decide torso layering
#[must_use]
pub fn decide(inputs: &ZoneInputs) -> TorsoDecision {
    let band = TorsoBand::classify(inputs.effective_temperature);
    let (mid_layer, outer) = match band {
        TorsoBand::Freezing => (true, Some(OuterLayer::WinterJacket)),
        TorsoBand::Cold => (true, cold_outer(inputs)),
        TorsoBand::Cool => cool_layers(inputs),
        TorsoBand::Mild => mild_layers(inputs),
        TorsoBand::Warm => warm_layers(inputs),
    };
    TorsoDecision::layered(band, mid_layer, outer)
}

fn cold_outer(inputs: &ZoneInputs) -> Option<OuterLayer> {
    let damp_breeze = inputs.wind_at_least(COLD_DAMP_WIND_JACKET_WIND_KMH)
        && inputs.humidity_at_least(COLD_DAMP_HUMIDITY_PERCENTAGE);
    if inputs.wind_at_least(COLD_WIND_JACKET_WIND_KMH) || damp_breeze {
        Some(OuterLayer::WindJacket)
    } else if inputs.feels_at_most(COLD_WINTER_JACKET_MAX_CELSIUS) {
        Some(OuterLayer::WinterJacket)
    } else {
        None
    }
}

fn cool_layers(inputs: &ZoneInputs) -> (bool, Option<OuterLayer>) {
    let mid_layer = match inputs.workout.intensity {
        WorkoutIntensity::Intensive => true,
        WorkoutIntensity::Tempo => inputs.feels_at_most(COOL_TEMPO_MID_MAX_CELSIUS),
        WorkoutIntensity::Recreational | WorkoutIntensity::Endurance => {
            inputs.feels_at_most(COOL_RELAXED_MID_MAX_CELSIUS)
                || inputs.lasts_at_least(COOL_RELAXED_MID_MIN_MINUTES)
        }
    };
    let vest = inputs.wind_at_least(COOL_VEST_WIND_KMH);
    (mid_layer, vest.then_some(OuterLayer::WindVest))
}

fn mild_layers(inputs: &ZoneInputs) -> (bool, Option<OuterLayer>) {
    let vest =
        inputs.wind_at_least(MILD_VEST_WIND_KMH) && inputs.lasts_at_least(MILD_VEST_MIN_MINUTES);
    let mid_layer =
        inputs.workout.is_relaxed_pace() && inputs.lasts_at_least(MILD_RELAXED_MID_MIN_MINUTES);
    (mid_layer, vest.then_some(OuterLayer::WindVest))
}

fn warm_layers(inputs: &ZoneInputs) -> (bool, Option<OuterLayer>) {
    if !inputs.air_at_least(RAW_WARM_MIN_CELSIUS) {
        return (false, None);
    }
    let vest =
        inputs.wind_at_least(WARM_VEST_WIND_KMH) && inputs.lasts_at_least(WARM_VEST_MIN_MINUTES);
    let sun_layer = inputs.lasts_at_least(SUN_LAYER_MIN_MINUTES)
        && inputs.air_at_least(RAW_SUN_LAYER_MIN_CELSIUS);
    (sun_layer, vest.then_some(OuterLayer::WindVest))
}
