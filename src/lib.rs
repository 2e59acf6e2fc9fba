// ABOUTME: Main library entry point for Pierre Outfit weather-aware clothing recommendations
// ABOUTME: Wires validation, configuration and logging around the pure outfit engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Pierre Outfit
//!
//! Turns a weather snapshot and a planned ride into a per body zone cycling
//! outfit.
//!
//! ## Architecture
//!
//! - **pierre-core**: Models, thresholds and the shared error type
//! - **pierre-intelligence**: Effective temperature, zone rules and assembly
//! - **this crate**: Request validation, configuration, logging and the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use pierre_outfit::models::{
//!     PersonalizationBias, WeatherSnapshot, WorkoutContext, WorkoutIntensity,
//! };
//! use pierre_outfit::validation::RecommendationRequest;
//!
//! let request = RecommendationRequest::new(
//!     WeatherSnapshot::new(28.0, 50, 5.0),
//!     WorkoutContext::new(WorkoutIntensity::Recreational, 60),
//!     PersonalizationBias::default(),
//! );
//! let outfit = request.recommend()?;
//! println!("feels like {}", outfit.effective_temperature);
//! # Ok::<(), pierre_outfit::errors::AppError>(())
//! ```

/// Configuration management
pub mod config;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Request validation
pub mod validation;

/// Domain models re-exported from `pierre-core`
pub mod models {
    pub use pierre_core::models::*;
}

pub use pierre_intelligence::{
    compute_effective_temperature, generate_recommendation, EffectiveTemperatureBreakdown,
    EffectiveTemperatureCalculator, OutfitEngine, OutfitRecommender,
};
