// ABOUTME: Feels-like command for pierre-outfit
// ABOUTME: Prints the effective temperature, with every calculation step when verbose
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_outfit::config::OutfitServiceConfig;
use pierre_outfit::errors::AppResult;
use pierre_outfit::validation::RecommendationRequest;
use pierre_outfit::OutfitEngine;

use crate::helpers::display::display_breakdown;

/// Compute and print the felt temperature
pub fn run(
    config: &OutfitServiceConfig,
    request: &RecommendationRequest,
    detailed: bool,
) -> AppResult<()> {
    request.validate()?;

    let engine = OutfitEngine::with_config(config.thermal_model.clone());
    let breakdown = engine.breakdown(&request.weather, &request.workout, &request.bias);

    if detailed {
        display_breakdown(&breakdown);
    } else {
        println!("{}", breakdown.effective);
    }
    Ok(())
}
