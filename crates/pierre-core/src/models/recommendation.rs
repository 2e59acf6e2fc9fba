// ABOUTME: Ordered clothing recommendation returned by the outfit engine
// ABOUTME: Carries the items, the effective temperature behind them and opaque caller preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{BodyZone, ClothingItem, EffectiveTemperature};
use serde::{Deserialize, Serialize};

/// Outfit for one ride
///
/// Items are ordered helmet, torso base/mid/outer, legs, arms, head, hands,
/// neck, feet. The order carries no meaning for consumers but is stable so
/// outputs stay diffable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingRecommendation {
    /// Recommended garments in build order
    pub items: Vec<ClothingItem>,
    /// Felt temperature every zone decision was based on
    pub effective_temperature: EffectiveTemperature,
    /// Caller preferences passed through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_override: Option<serde_json::Value>,
}

impl ClothingRecommendation {
    /// Whether `item` is part of the outfit
    #[must_use]
    pub fn contains(&self, item: ClothingItem) -> bool {
        self.items.contains(&item)
    }

    /// Items for a single zone, in build order
    #[must_use]
    pub fn items_for_zone(&self, zone: BodyZone) -> Vec<ClothingItem> {
        self.items
            .iter()
            .copied()
            .filter(|item| item.zone() == zone)
            .collect()
    }

    /// Items grouped by zone, skipping zones with nothing selected
    #[must_use]
    pub fn by_zone(&self) -> Vec<(BodyZone, Vec<ClothingItem>)> {
        BodyZone::ALL
            .into_iter()
            .map(|zone| (zone, self.items_for_zone(zone)))
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }

    /// Number of recommended items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no item was recommended
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
