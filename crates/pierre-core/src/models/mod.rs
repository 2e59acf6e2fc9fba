// ABOUTME: Core data models for outfit recommendations
// ABOUTME: Re-exports weather, workout, bias, clothing vocabulary and recommendation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every model here is an immutable value object built fresh for one
//! recommendation request and dropped afterwards. None carries identity.
//!
//! ## Core Models
//!
//! - `WeatherSnapshot`: resolved air temperature, humidity and wind
//! - `WorkoutContext`: intensity and planned duration of the ride
//! - `PersonalizationBias`: pre-computed personal thermal offset
//! - `EffectiveTemperature`: felt temperature shared by every zone rule
//! - `ClothingItem` / `BodyZone` / `LayerSlot`: the closed clothing vocabulary
//! - `ClothingRecommendation`: ordered engine output

mod clothing;
mod recommendation;
mod weather;
mod workout;

pub use clothing::{BodyZone, ClothingItem, LayerSlot};
pub use recommendation::ClothingRecommendation;
pub use weather::{EffectiveTemperature, WeatherSnapshot};
pub use workout::{PersonalizationBias, WorkoutContext, WorkoutIntensity};
