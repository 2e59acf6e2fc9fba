// ABOUTME: Shared test utilities and builders for outfit integration tests
// ABOUTME: Provides quiet logging setup and weather / workout / request constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `pierre_outfit`

use pierre_outfit::models::{
    PersonalizationBias, WeatherSnapshot, WorkoutContext, WorkoutIntensity,
};
use pierre_outfit::validation::RecommendationRequest;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Weather snapshot shorthand
pub const fn weather(temperature: f64, humidity: u8, wind_kmh: f64) -> WeatherSnapshot {
    WeatherSnapshot::new(temperature, humidity, wind_kmh)
}

/// Recreational ride of `minutes`
pub const fn recreational(minutes: u32) -> WorkoutContext {
    WorkoutContext::new(WorkoutIntensity::Recreational, minutes)
}

/// Ride at `intensity` for `minutes`
pub const fn ride(intensity: WorkoutIntensity, minutes: u32) -> WorkoutContext {
    WorkoutContext::new(intensity, minutes)
}

/// Bias with only a thermal adjustment
pub const fn bias(adjustment: f64) -> PersonalizationBias {
    PersonalizationBias::new(adjustment)
}

/// Request with no personal bias
pub fn request(weather: WeatherSnapshot, workout: WorkoutContext) -> RecommendationRequest {
    RecommendationRequest::new(weather, workout, PersonalizationBias::default())
}

/// Assert a felt temperature to one decimal
pub fn assert_celsius(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
