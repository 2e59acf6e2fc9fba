// ABOUTME: Configuration module for pierre-intelligence crate
// ABOUTME: Re-exports thermal model configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence module configuration (thermal model)
pub mod intelligence;

pub use intelligence::{
    ConfigError, HeatIndexConfig, ThermalModelConfig, WindChillConfig, WorkoutAdjustmentConfig,
};
