// ABOUTME: Configuration management module for the outfit CLI and service callers
// ABOUTME: Loads request defaults, output format and the thermal model from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Pierre Outfit
//!
//! - **Environment**: Request defaults and output settings from environment variables
//! - **Intelligence**: Thermal model overrides, re-exported from `pierre-intelligence`

/// Environment configuration
pub mod environment;

pub use environment::{OutfitServiceConfig, OutputFormat};
pub use pierre_intelligence::config::{ConfigError, ThermalModelConfig};
