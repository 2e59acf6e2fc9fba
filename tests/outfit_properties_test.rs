// ABOUTME: Property-based tests for outfit recommendation invariants
// ABOUTME: Checks helmet presence, determinism, monotonic zones and freezing torso layering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Invariants that hold for every input:
//! - every outfit starts with a helmet
//! - identical inputs give identical outfits
//! - legs, feet and hands never get lighter as the felt temperature drops
//! - air at or below -2 °C always gets three torso layers
//! - calm, easy rides outside the heat gate feel like the air temperature

use pierre_intelligence::zones::{OuterLayer, ZoneDecisions, ZoneInputs};
use pierre_outfit::models::{
    ClothingItem, EffectiveTemperature, PersonalizationBias, WeatherSnapshot, WorkoutContext,
    WorkoutIntensity,
};
use pierre_outfit::{compute_effective_temperature, generate_recommendation, OutfitEngine};
use proptest::prelude::*;

fn intensity() -> impl Strategy<Value = WorkoutIntensity> {
    prop::sample::select(WorkoutIntensity::ALL.to_vec())
}

fn weather() -> impl Strategy<Value = WeatherSnapshot> {
    (-40.0..45.0f64, 0u8..=100, 0.0..80.0f64)
        .prop_map(|(temperature, humidity, wind)| WeatherSnapshot::new(temperature, humidity, wind))
}

fn workout() -> impl Strategy<Value = WorkoutContext> {
    (intensity(), 10u32..600).prop_map(|(intensity, minutes)| WorkoutContext::new(intensity, minutes))
}

fn decisions_at(weather: WeatherSnapshot, workout: WorkoutContext, felt: f64) -> ZoneDecisions {
    ZoneDecisions::decide(&ZoneInputs::new(
        weather,
        workout,
        EffectiveTemperature::from_celsius(felt),
    ))
}

proptest! {
    #[test]
    fn prop_helmet_always_first(weather in weather(), workout in workout(), bias in -10.0..10.0f64) {
        let outfit = generate_recommendation(&weather, &workout, &PersonalizationBias::new(bias));
        prop_assert_eq!(outfit.items.first(), Some(&ClothingItem::Helmet));
        prop_assert_eq!(outfit.items.iter().filter(|item| **item == ClothingItem::Helmet).count(), 1);
    }

    #[test]
    fn prop_recommendation_is_deterministic(weather in weather(), workout in workout()) {
        let engine = OutfitEngine::new();
        let bias = PersonalizationBias::default();
        prop_assert_eq!(
            generate_recommendation(&weather, &workout, &bias),
            generate_recommendation(&weather, &workout, &bias)
        );
        prop_assert_eq!(
            engine.zone_decisions(&weather, &workout, &bias),
            engine.zone_decisions(&weather, &workout, &bias)
        );
    }

    #[test]
    fn prop_colder_never_dresses_lighter(
        weather in weather(),
        workout in workout(),
        colder in -30.0..35.0f64,
        gap in 0.0..20.0f64,
    ) {
        let cold = decisions_at(weather, workout, colder);
        let warm = decisions_at(weather, workout, colder + gap);
        prop_assert!(cold.legs.coverage() >= warm.legs.coverage());
        prop_assert!(cold.feet.protection() >= warm.feet.protection());
        prop_assert!(cold.hands.tier >= warm.hands.tier);
    }

    #[test]
    fn prop_bias_ordering_follows_felt_temperature(
        weather in weather(),
        workout in workout(),
        shift in 0.5..8.0f64,
    ) {
        let engine = OutfitEngine::new();
        let minus = engine.zone_inputs(&weather, &workout, &PersonalizationBias::new(-shift));
        let plus = engine.zone_inputs(&weather, &workout, &PersonalizationBias::new(shift));
        let (cold, warm) = if minus.effective_temperature <= plus.effective_temperature {
            (minus, plus)
        } else {
            (plus, minus)
        };
        let cold = ZoneDecisions::decide(&cold);
        let warm = ZoneDecisions::decide(&warm);
        prop_assert!(cold.legs.coverage() >= warm.legs.coverage());
        prop_assert!(cold.feet.protection() >= warm.feet.protection());
        prop_assert!(cold.hands.tier >= warm.hands.tier);
    }

    #[test]
    fn prop_freezing_air_gets_three_torso_layers(
        temperature in -40.0..=-2.0f64,
        humidity in 0u8..=100,
        wind in 0.0..80.0f64,
        workout in workout(),
    ) {
        let engine = OutfitEngine::new();
        let decisions = engine.zone_decisions(
            &WeatherSnapshot::new(temperature, humidity, wind),
            &workout,
            &PersonalizationBias::default(),
        );
        prop_assert_eq!(decisions.torso.layer_count(), 3);
        prop_assert!(decisions.torso.mid_layer);
        prop_assert!(decisions.torso.outer.is_some());
        let felt = engine
            .zone_inputs(&WeatherSnapshot::new(temperature, humidity, wind), &workout, &PersonalizationBias::default())
            .effective_temperature;
        if felt.at_most(-2.0) {
            prop_assert_eq!(decisions.torso.outer, Some(OuterLayer::WinterJacket));
        }
    }

    #[test]
    fn prop_calm_easy_ride_feels_like_the_air(
        temperature in -30.0..17.9f64,
        humidity in 0u8..=100,
        wind in 0.0..4.99f64,
        minutes in 10u32..120,
        endurance in any::<bool>(),
    ) {
        let intensity = if endurance { WorkoutIntensity::Endurance } else { WorkoutIntensity::Recreational };
        let felt = compute_effective_temperature(
            &WeatherSnapshot::new(temperature, humidity, wind),
            &WorkoutContext::new(intensity, minutes),
        );
        prop_assert_eq!(felt, EffectiveTemperature::from_celsius(temperature));
    }
}
