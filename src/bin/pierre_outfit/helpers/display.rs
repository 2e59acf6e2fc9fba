// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for pierre-outfit
// ABOUTME: Provides consistent display functions for outfits and felt temperature breakdowns

use pierre_outfit::models::ClothingRecommendation;
use pierre_outfit::EffectiveTemperatureBreakdown;

/// Display an outfit, one line per dressed zone
pub fn display_recommendation(outfit: &ClothingRecommendation) {
    println!("Feels like {}", outfit.effective_temperature);
    println!("{}", "=".repeat(50));
    for (zone, items) in outfit.by_zone() {
        let labels: Vec<&str> = items.iter().map(|item| item.display_name()).collect();
        println!("   {:<7} {}", zone.as_str(), labels.join(", "));
    }
}

/// Display each step of the felt temperature calculation
pub fn display_breakdown(breakdown: &EffectiveTemperatureBreakdown) {
    println!("Air temperature:    {:>6.1}°C", breakdown.raw_celsius);
    if breakdown.wind_chill_applied() {
        println!("After wind chill:   {:>6.1}°C", breakdown.after_wind_chill_celsius);
    }
    if breakdown.heat_index_applied() {
        println!("After heat index:   {:>6.1}°C", breakdown.after_heat_index_celsius);
    }
    println!("Intensity offset:   {:>+6.1}°C", breakdown.intensity_offset_celsius);
    println!("Duration offset:    {:>+6.1}°C", breakdown.duration_offset_celsius);
    let felt = breakdown.effective.to_string();
    println!("{}", "=".repeat(30));
    println!("Feels like:         {felt:>8}");
}
