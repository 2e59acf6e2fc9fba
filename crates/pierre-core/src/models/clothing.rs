// ABOUTME: Closed clothing vocabulary with body zone and layer slot mapping
// ABOUTME: Every item maps to exactly one zone and slot through exhaustive matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Body region that receives its own clothing decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyZone {
    /// Unconditional safety equipment
    Safety,
    /// Upper body layering
    Torso,
    /// Legs
    Legs,
    /// Arms (separate from torso sleeves)
    Arms,
    /// Head, under the helmet
    Head,
    /// Hands
    Hands,
    /// Neck
    Neck,
    /// Feet
    Feet,
}

impl BodyZone {
    /// Zones in recommendation output order
    pub const ALL: [Self; 8] = [
        Self::Safety,
        Self::Torso,
        Self::Legs,
        Self::Arms,
        Self::Head,
        Self::Hands,
        Self::Neck,
        Self::Feet,
    ];

    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safety => "safety",
            Self::Torso => "torso",
            Self::Legs => "legs",
            Self::Arms => "arms",
            Self::Head => "head",
            Self::Hands => "hands",
            Self::Neck => "neck",
            Self::Feet => "feet",
        }
    }
}

impl fmt::Display for BodyZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slot an item occupies inside its zone
///
/// Torso items stack base, mid, outer. Feet stack socks then covers. Leg
/// warmers are an overlay on shorts. Every other zone holds a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerSlot {
    /// Next-to-skin torso garment
    Base,
    /// Insulating torso garment
    Mid,
    /// Wind or weather shell
    Outer,
    /// Added over another garment in the same zone
    Overlay,
    /// Socks
    Socks,
    /// Over-shoe covers
    Covers,
    /// Only garment in its zone
    Single,
}

/// Every garment the engine can recommend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClothingItem {
    /// Helmet, always recommended
    Helmet,
    /// Long-sleeve thermal base layer
    ThermalBaseLayer,
    /// Short-sleeve jersey worn as the only torso garment
    JerseyBaseLayer,
    /// Long-sleeve mid layer, also worn as a light sun layer
    MidLayer,
    /// Insulated winter jacket
    WinterJacket,
    /// Windproof shell jacket
    WindJacket,
    /// Sleeveless wind vest
    WindVest,
    /// Full-length tights
    LongTights,
    /// Bib shorts
    BibShorts,
    /// Leg warmers worn over shorts
    LegWarmers,
    /// Arm warmers
    ArmWarmers,
    /// Cycling cap
    Cap,
    /// Insulated full-finger gloves
    WinterGloves,
    /// Light full-finger gloves
    TransitionGloves,
    /// Fingerless summer mitts
    SummerGloves,
    /// Neck gaiter
    NeckGaiter,
    /// Wool or thermal socks
    WinterSocks,
    /// Light ankle socks
    SummerSocks,
    /// Over-shoe covers
    ShoeCovers,
}

impl ClothingItem {
    /// Full vocabulary in output order
    pub const ALL: [Self; 19] = [
        Self::Helmet,
        Self::ThermalBaseLayer,
        Self::JerseyBaseLayer,
        Self::MidLayer,
        Self::WinterJacket,
        Self::WindJacket,
        Self::WindVest,
        Self::LongTights,
        Self::BibShorts,
        Self::LegWarmers,
        Self::ArmWarmers,
        Self::Cap,
        Self::WinterGloves,
        Self::TransitionGloves,
        Self::SummerGloves,
        Self::NeckGaiter,
        Self::WinterSocks,
        Self::SummerSocks,
        Self::ShoeCovers,
    ];

    /// Zone this item dresses
    #[must_use]
    pub const fn zone(self) -> BodyZone {
        match self {
            Self::Helmet => BodyZone::Safety,
            Self::ThermalBaseLayer
            | Self::JerseyBaseLayer
            | Self::MidLayer
            | Self::WinterJacket
            | Self::WindJacket
            | Self::WindVest => BodyZone::Torso,
            Self::LongTights | Self::BibShorts | Self::LegWarmers => BodyZone::Legs,
            Self::ArmWarmers => BodyZone::Arms,
            Self::Cap => BodyZone::Head,
            Self::WinterGloves | Self::TransitionGloves | Self::SummerGloves => BodyZone::Hands,
            Self::NeckGaiter => BodyZone::Neck,
            Self::WinterSocks | Self::SummerSocks | Self::ShoeCovers => BodyZone::Feet,
        }
    }

    /// Slot this item occupies inside its zone
    #[must_use]
    pub const fn slot(self) -> LayerSlot {
        match self {
            Self::ThermalBaseLayer | Self::JerseyBaseLayer => LayerSlot::Base,
            Self::MidLayer => LayerSlot::Mid,
            Self::WinterJacket | Self::WindJacket | Self::WindVest => LayerSlot::Outer,
            Self::LegWarmers => LayerSlot::Overlay,
            Self::WinterSocks | Self::SummerSocks => LayerSlot::Socks,
            Self::ShoeCovers => LayerSlot::Covers,
            Self::Helmet
            | Self::LongTights
            | Self::BibShorts
            | Self::ArmWarmers
            | Self::Cap
            | Self::WinterGloves
            | Self::TransitionGloves
            | Self::SummerGloves
            | Self::NeckGaiter => LayerSlot::Single,
        }
    }

    /// Stable snake_case identifier, identical to the serde representation
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Helmet => "helmet",
            Self::ThermalBaseLayer => "thermal_base_layer",
            Self::JerseyBaseLayer => "jersey_base_layer",
            Self::MidLayer => "mid_layer",
            Self::WinterJacket => "winter_jacket",
            Self::WindJacket => "wind_jacket",
            Self::WindVest => "wind_vest",
            Self::LongTights => "long_tights",
            Self::BibShorts => "bib_shorts",
            Self::LegWarmers => "leg_warmers",
            Self::ArmWarmers => "arm_warmers",
            Self::Cap => "cap",
            Self::WinterGloves => "winter_gloves",
            Self::TransitionGloves => "transition_gloves",
            Self::SummerGloves => "summer_gloves",
            Self::NeckGaiter => "neck_gaiter",
            Self::WinterSocks => "winter_socks",
            Self::SummerSocks => "summer_socks",
            Self::ShoeCovers => "shoe_covers",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Helmet => "Helmet",
            Self::ThermalBaseLayer => "Thermal base layer",
            Self::JerseyBaseLayer => "Short-sleeve jersey",
            Self::MidLayer => "Long-sleeve mid layer",
            Self::WinterJacket => "Winter jacket",
            Self::WindJacket => "Wind jacket",
            Self::WindVest => "Wind vest",
            Self::LongTights => "Long tights",
            Self::BibShorts => "Bib shorts",
            Self::LegWarmers => "Leg warmers",
            Self::ArmWarmers => "Arm warmers",
            Self::Cap => "Cycling cap",
            Self::WinterGloves => "Winter gloves",
            Self::TransitionGloves => "Transition gloves",
            Self::SummerGloves => "Summer gloves",
            Self::NeckGaiter => "Neck gaiter",
            Self::WinterSocks => "Winter socks",
            Self::SummerSocks => "Summer socks",
            Self::ShoeCovers => "Shoe covers",
        }
    }
}

impl fmt::Display for ClothingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ClothingItem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|item| item.id() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("unknown clothing item '{s}'")))
    }
}
