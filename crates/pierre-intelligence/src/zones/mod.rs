// ABOUTME: Body zone decision procedures sharing one set of immutable inputs
// ABOUTME: Defines ZoneInputs, the ZoneDecision trait and the combined per-zone outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Zone Decision Engine
//!
//! Seven independent pure procedures, one per body zone. Each takes the same
//! [`ZoneInputs`] and returns a typed decision that expands into zero or more
//! [`ClothingItem`]s. The effective temperature inside `ZoneInputs` is
//! computed once by the caller and is never recomputed here.

/// Arm warmers
pub mod arms;
/// Sock weight and shoe covers
pub mod feet;
/// Glove tier selection
pub mod hands;
/// Cap for warmth or sun
pub mod head;
/// Tights vs. shorts and leg warmers
pub mod legs;
/// Neck gaiter
pub mod neck;
/// Base / mid / outer layering ladder
pub mod torso;

pub use arms::ArmsDecision;
pub use feet::{FeetDecision, SockWeight};
pub use hands::{GloveTier, HandsDecision};
pub use head::{CapReason, HeadDecision};
pub use legs::LegsDecision;
pub use neck::NeckDecision;
pub use torso::{BaseLayer, OuterLayer, TorsoBand, TorsoDecision};

use pierre_core::models::{
    BodyZone, ClothingItem, EffectiveTemperature, WeatherSnapshot, WorkoutContext,
};

/// Inputs shared read-only by every zone procedure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneInputs {
    /// Weather after the personal thermal adjustment
    pub weather: WeatherSnapshot,
    /// Planned workout
    pub workout: WorkoutContext,
    /// Felt temperature computed once for this recommendation
    pub effective_temperature: EffectiveTemperature,
}

impl ZoneInputs {
    /// Bundle the inputs
    #[must_use]
    pub const fn new(
        weather: WeatherSnapshot,
        workout: WorkoutContext,
        effective_temperature: EffectiveTemperature,
    ) -> Self {
        Self {
            weather,
            workout,
            effective_temperature,
        }
    }

    /// Effective temperature at or below `celsius`
    #[must_use]
    pub fn feels_at_most(&self, celsius: f64) -> bool {
        self.effective_temperature.at_most(celsius)
    }

    /// Air temperature at or above `celsius`
    #[must_use]
    pub fn air_at_least(&self, celsius: f64) -> bool {
        self.weather.temperature_celsius >= celsius
    }

    /// Wind speed at or above `kmh`
    #[must_use]
    pub fn wind_at_least(&self, kmh: f64) -> bool {
        self.weather.wind_speed_kmh >= kmh
    }

    /// Humidity at or above `percentage`
    #[must_use]
    pub const fn humidity_at_least(&self, percentage: u8) -> bool {
        self.weather.humidity_percentage >= percentage
    }

    /// Ride lasts at least `minutes`
    #[must_use]
    pub const fn lasts_at_least(&self, minutes: u32) -> bool {
        self.workout.lasts_at_least(minutes)
    }
}

/// Outcome of one zone procedure
pub trait ZoneDecision {
    /// Zone the decision dresses
    const ZONE: BodyZone;

    /// Garments selected for the zone, in layering order
    fn items(&self) -> Vec<ClothingItem>;
}

/// Decisions for all seven zones, taken from the same inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneDecisions {
    /// Torso layering
    pub torso: TorsoDecision,
    /// Legs
    pub legs: LegsDecision,
    /// Arms
    pub arms: ArmsDecision,
    /// Head
    pub head: HeadDecision,
    /// Hands
    pub hands: HandsDecision,
    /// Neck
    pub neck: NeckDecision,
    /// Feet
    pub feet: FeetDecision,
}

impl ZoneDecisions {
    /// Run every zone procedure against `inputs`
    #[must_use]
    pub fn decide(inputs: &ZoneInputs) -> Self {
        Self {
            torso: torso::decide(inputs),
            legs: legs::decide(inputs),
            arms: arms::decide(inputs),
            head: head::decide(inputs),
            hands: hands::decide(inputs),
            neck: neck::decide(inputs),
            feet: feet::decide(inputs),
        }
    }

    /// Concatenate zone items in output order (torso, legs, arms, head, hands, neck, feet)
    #[must_use]
    pub fn items(&self) -> Vec<ClothingItem> {
        let mut items = self.torso.items();
        items.extend(self.legs.items());
        items.extend(self.arms.items());
        items.extend(self.head.items());
        items.extend(self.hands.items());
        items.extend(self.neck.items());
        items.extend(self.feet.items());
        items
    }
}
