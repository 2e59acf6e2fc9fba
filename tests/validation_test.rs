// ABOUTME: Integration tests for recommendation request validation
// ABOUTME: Validates range limits, error codes and the validated recommendation path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{bias, init_test_logging, recreational, request, weather};
use pierre_outfit::errors::{ErrorCode, ErrorResponse};
use pierre_outfit::models::{ClothingItem, WorkoutContext, WorkoutIntensity};
use pierre_outfit::validation::RecommendationRequest;
use pierre_outfit::OutfitEngine;

#[test]
fn test_valid_request_produces_outfit() {
    init_test_logging();
    let outfit = request(weather(-5.0, 70, 15.0), recreational(90))
        .recommend()
        .unwrap();
    assert!(outfit.contains(ClothingItem::WinterJacket));
}

#[test]
fn test_temperature_limits() {
    assert!(request(weather(-60.0, 50, 0.0), recreational(60)).validate().is_ok());
    assert!(request(weather(60.0, 50, 0.0), recreational(60)).validate().is_ok());

    let error = request(weather(60.5, 50, 0.0), recreational(60))
        .validate()
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert!(error.message.contains("temperature_celsius"));

    let error = request(weather(f64::INFINITY, 50, 0.0), recreational(60))
        .validate()
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_humidity_and_wind_limits() {
    assert!(request(weather(10.0, 100, 0.0), recreational(60)).validate().is_ok());
    assert!(request(weather(10.0, 101, 0.0), recreational(60)).validate().is_err());
    assert!(request(weather(10.0, 50, -0.1), recreational(60)).validate().is_err());
    assert!(request(weather(10.0, 50, 200.1), recreational(60)).validate().is_err());
    assert!(request(weather(10.0, 50, f64::NAN), recreational(60)).validate().is_err());
}

#[test]
fn test_duration_limits() {
    let tempo = |minutes| WorkoutContext::new(WorkoutIntensity::Tempo, minutes);
    assert!(request(weather(10.0, 50, 5.0), tempo(1)).validate().is_ok());
    assert!(request(weather(10.0, 50, 5.0), tempo(1_440)).validate().is_ok());
    assert!(request(weather(10.0, 50, 5.0), tempo(0)).validate().is_err());
    assert!(request(weather(10.0, 50, 5.0), tempo(1_441)).validate().is_err());
}

#[test]
fn test_bias_limits() {
    let with_bias = |adjustment| {
        RecommendationRequest::new(weather(10.0, 50, 5.0), recreational(60), bias(adjustment))
    };
    assert!(with_bias(-15.0).validate().is_ok());
    assert!(with_bias(15.0).validate().is_ok());
    assert!(with_bias(15.5).validate().is_err());
    assert!(with_bias(f64::NAN).validate().is_err());
}

#[test]
fn test_validation_runs_before_custom_engine() {
    let engine = OutfitEngine::new();
    let error = request(weather(10.0, 120, 5.0), recreational(60))
        .recommend_with(&engine)
        .unwrap_err();
    assert_eq!(error.http_status(), 400);

    let response = ErrorResponse::from(error);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["error"]["code"], "VALUE_OUT_OF_RANGE");
}

#[test]
fn test_request_deserializes_without_bias() {
    let parsed: RecommendationRequest = serde_json::from_str(
        r#"{
            "weather": {"temperature_celsius": 4.0, "humidity_percentage": 85, "wind_speed_kmh": 12.0},
            "workout": {"intensity": "tempo", "duration_minutes": 75}
        }"#,
    )
    .unwrap();
    assert!(parsed.bias.thermal_adjustment.abs() < f64::EPSILON);
    assert_eq!(parsed.workout.intensity, WorkoutIntensity::Tempo);
    assert!(parsed.validate().is_ok());
}
