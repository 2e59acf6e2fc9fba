// ABOUTME: Recommend command for pierre-outfit
// ABOUTME: Validates the ride, runs the engine under the configured thermal model and prints the outfit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_outfit::config::{OutfitServiceConfig, OutputFormat};
use pierre_outfit::errors::AppResult;
use pierre_outfit::validation::RecommendationRequest;
use pierre_outfit::OutfitEngine;
use tracing::info;

use crate::helpers::display::display_recommendation;

/// Recommend and print an outfit
pub fn run(
    config: &OutfitServiceConfig,
    request: &RecommendationRequest,
    format: OutputFormat,
) -> AppResult<()> {
    let engine = OutfitEngine::with_config(config.thermal_model.clone());
    let outfit = request.recommend_with(&engine)?;
    info!(
        effective = outfit.effective_temperature.celsius(),
        items = outfit.len(),
        "Outfit recommended"
    );

    match format {
        OutputFormat::Text => display_recommendation(&outfit),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outfit)?),
    }
    Ok(())
}
