// ABOUTME: Intelligence configuration for the outfit recommendation engine
// ABOUTME: Provides the validated thermal model and its process-wide singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! - `thermal` - Effective temperature gating and offsets
//! - `error` - Validation and parse errors

pub mod error;
pub mod thermal;

pub use error::ConfigError;
pub use thermal::{HeatIndexConfig, ThermalModelConfig, WindChillConfig, WorkoutAdjustmentConfig};

use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static THERMAL_MODEL_CONFIG: OnceLock<ThermalModelConfig> = OnceLock::new();

impl ThermalModelConfig {
    /// Get the global configuration instance, loaded from the environment once
    pub fn global() -> &'static Self {
        THERMAL_MODEL_CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                warn!("Failed to load thermal model config: {}, using defaults", e);
                Self::default()
            })
        })
    }
}
