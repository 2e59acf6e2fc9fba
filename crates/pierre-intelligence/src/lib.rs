// ABOUTME: Outfit intelligence crate: felt temperature, body zone rules and outfit assembly
// ABOUTME: Pure synchronous engine turning weather and workout context into clothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Decision logic for weather-aware cycling outfits. Everything here is a pure
//! function of its inputs: no I/O, no shared mutable state.
//!
//! ## Modules
//!
//! - **config**: Thermal model configuration with environment overrides
//! - **effective_temperature**: Wind chill, heat index and workout offsets
//! - **zones**: One decision procedure per body zone
//! - **recommendation_engine**: Bias handling and outfit assembly
//!
//! ## Example
//!
//! ```
//! use pierre_core::models::{
//!     ClothingItem, PersonalizationBias, WeatherSnapshot, WorkoutContext, WorkoutIntensity,
//! };
//! use pierre_intelligence::generate_recommendation;
//!
//! let outfit = generate_recommendation(
//!     &WeatherSnapshot::new(-5.0, 70, 15.0),
//!     &WorkoutContext::new(WorkoutIntensity::Recreational, 90),
//!     &PersonalizationBias::default(),
//! );
//! assert!(outfit.contains(ClothingItem::WinterJacket));
//! ```

/// Thermal model configuration
pub mod config;

/// Effective temperature calculator
pub mod effective_temperature;

/// Outfit assembly
pub mod recommendation_engine;

/// Body zone decision procedures
pub mod zones;

pub use config::{ConfigError, ThermalModelConfig};
pub use effective_temperature::{
    compute_effective_temperature, EffectiveTemperatureBreakdown, EffectiveTemperatureCalculator,
};
pub use recommendation_engine::{generate_recommendation, OutfitEngine, OutfitRecommender};
pub use zones::{ZoneDecision, ZoneDecisions, ZoneInputs};
