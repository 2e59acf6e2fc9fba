// ABOUTME: Integration tests for complete outfit recommendations on reference rides
// ABOUTME: Covers freezing, hot, boundary wind and personal bias rides end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_celsius, bias, init_test_logging, recreational, ride, weather};
use pierre_intelligence::zones::{GloveTier, LegsDecision, OuterLayer, SockWeight};
use pierre_outfit::models::{
    BodyZone, ClothingItem, PersonalizationBias, WorkoutIntensity,
};
use pierre_outfit::{generate_recommendation, OutfitEngine, OutfitRecommender};

#[test]
fn test_freezing_windy_ride() {
    init_test_logging();
    let outfit = generate_recommendation(
        &weather(-5.0, 70, 15.0),
        &recreational(90),
        &PersonalizationBias::default(),
    );

    for item in [
        ClothingItem::WinterJacket,
        ClothingItem::WinterGloves,
        ClothingItem::ShoeCovers,
        ClothingItem::NeckGaiter,
        ClothingItem::LongTights,
    ] {
        assert!(outfit.contains(item), "missing {item}");
    }
    assert!(!outfit.contains(ClothingItem::BibShorts));
    assert!(!outfit.contains(ClothingItem::ArmWarmers));
    assert_celsius(outfit.effective_temperature.celsius(), -6.8);
}

#[test]
fn test_hot_humid_ride() {
    init_test_logging();
    let outfit = generate_recommendation(
        &weather(28.0, 50, 5.0),
        &recreational(60),
        &PersonalizationBias::default(),
    );

    assert!(outfit.contains(ClothingItem::BibShorts));
    assert!(outfit.contains(ClothingItem::SummerSocks));
    assert!(!outfit.contains(ClothingItem::ShoeCovers));
    assert!(!outfit.contains(ClothingItem::MidLayer));
    assert_eq!(
        outfit.items_for_zone(BodyZone::Torso),
        vec![ClothingItem::JerseyBaseLayer]
    );
    assert_celsius(outfit.effective_temperature.celsius(), 30.0);
}

#[test]
fn test_fifteen_degrees_is_long_tights_either_side_of_the_wind_gate() {
    let calm = generate_recommendation(
        &weather(15.0, 60, 4.9),
        &recreational(60),
        &PersonalizationBias::default(),
    );
    assert_celsius(calm.effective_temperature.celsius(), 15.0);
    assert!(calm.contains(ClothingItem::LongTights));

    let breezy = generate_recommendation(
        &weather(15.0, 60, 5.0),
        &recreational(60),
        &PersonalizationBias::default(),
    );
    assert_celsius(breezy.effective_temperature.celsius(), 13.5);
    assert!(breezy.contains(ClothingItem::LongTights));
}

#[test]
fn test_half_degree_rounds_up_out_of_the_freezing_band() {
    init_test_logging();
    let outfit = generate_recommendation(
        &weather(-1.95, 50, 0.0),
        &recreational(60),
        &PersonalizationBias::default(),
    );

    assert_celsius(outfit.effective_temperature.celsius(), -1.9);
    assert!(outfit.contains(ClothingItem::WinterJacket));
    assert!(outfit.contains(ClothingItem::WinterSocks));
    assert!(!outfit.contains(ClothingItem::ShoeCovers));
}

#[test]
fn test_rider_who_runs_cold_is_dressed_at_least_as_warmly() {
    let engine = OutfitEngine::new();
    let conditions = weather(8.0, 60, 10.0);
    let workout = recreational(90);

    let cold = engine.zone_decisions(&conditions, &workout, &bias(-3.0));
    let warm = engine.zone_decisions(&conditions, &workout, &bias(3.0));

    assert_eq!(cold.torso.outer, Some(OuterLayer::WinterJacket));
    assert_eq!(warm.torso.outer, None);
    assert!(cold.torso.layer_count() > warm.torso.layer_count());
    assert_eq!(cold.hands.tier, GloveTier::Winter);
    assert_eq!(warm.hands.tier, GloveTier::Transition);
    assert!(cold.legs.coverage() >= warm.legs.coverage());
    assert!(cold.feet.protection() >= warm.feet.protection());

    let cold_outfit = engine.recommend(&conditions, &workout, &bias(-3.0));
    let warm_outfit = engine.recommend(&conditions, &workout, &bias(3.0));
    assert_celsius(cold_outfit.effective_temperature.celsius(), 2.0);
    assert_celsius(warm_outfit.effective_temperature.celsius(), 8.0);
}

#[test]
fn test_helmet_leads_every_outfit() {
    for temperature in [-20.0, 0.0, 12.0, 35.0] {
        let outfit = generate_recommendation(
            &weather(temperature, 50, 10.0),
            &ride(WorkoutIntensity::Tempo, 45),
            &PersonalizationBias::default(),
        );
        assert_eq!(outfit.items.first(), Some(&ClothingItem::Helmet));
    }
}

#[test]
fn test_shorts_with_leg_and_arm_warmers_on_a_cool_long_ride() {
    // 16 C, no wind, humidity below the heat gate: felt 16, shorts with warmers
    let engine = OutfitEngine::new();
    let decisions = engine.zone_decisions(
        &weather(16.0, 40, 0.0),
        &recreational(100),
        &PersonalizationBias::default(),
    );
    assert_eq!(decisions.legs, LegsDecision::Shorts { leg_warmers: true });
    assert!(decisions.arms.arm_warmers);
    assert_eq!(decisions.feet.socks, SockWeight::Summer);

    let outfit = engine.recommend(
        &weather(16.0, 40, 0.0),
        &recreational(100),
        &PersonalizationBias::default(),
    );
    assert_eq!(
        outfit.items_for_zone(BodyZone::Legs),
        vec![ClothingItem::BibShorts, ClothingItem::LegWarmers]
    );
    assert!(outfit.contains(ClothingItem::ArmWarmers));
}

#[test]
fn test_outfit_serializes_with_snake_case_items() {
    let outfit = generate_recommendation(
        &weather(28.0, 50, 5.0),
        &recreational(60),
        &PersonalizationBias::default(),
    );
    let json = serde_json::to_value(&outfit).unwrap();
    assert_eq!(json["items"][0], "helmet");
    assert_eq!(json["effective_temperature"], 30.0);
    assert!(json.get("preference_override").is_none());
}
