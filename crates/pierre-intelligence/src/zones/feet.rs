// ABOUTME: Feet decision: sock weight plus optional shoe covers
// ABOUTME: Covers are the full protection state; without them the rider wears socks only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ZoneDecision, ZoneInputs};
use pierre_core::constants::zones::feet::{
    DAMP_HUMIDITY_PERCENTAGE, DAMP_MAX_CELSIUS, FREEZING_MAX_CELSIUS, INTENSIVE_MAX_CELSIUS,
    STORM_WIND_KMH, TEMPO_MAX_CELSIUS, WINDY_MAX_CELSIUS, WINDY_WIND_KMH,
    WINTER_SOCKS_MAX_CELSIUS,
};
use pierre_core::models::{BodyZone, ClothingItem};

/// Sock weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SockWeight {
    /// Light ankle socks
    Summer,
    /// Wool or thermal socks
    Winter,
}

/// Foot coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeetDecision {
    /// Sock weight, chosen independently of the covers
    pub socks: SockWeight,
    /// Shoe covers over the shoes
    pub shoe_covers: bool,
}

impl FeetDecision {
    /// Ordinal protection: sock weight first, covers dominate
    #[must_use]
    pub fn protection(&self) -> u8 {
        let socks = match self.socks {
            SockWeight::Summer => 0,
            SockWeight::Winter => 1,
        };
        socks + if self.shoe_covers { 2 } else { 0 }
    }
}

impl ZoneDecision for FeetDecision {
    const ZONE: BodyZone = BodyZone::Feet;

    fn items(&self) -> Vec<ClothingItem> {
        let mut items = vec![match self.socks {
            SockWeight::Summer => ClothingItem::SummerSocks,
            SockWeight::Winter => ClothingItem::WinterSocks,
        }];
        if self.shoe_covers {
            items.push(ClothingItem::ShoeCovers);
        }
        items
    }
}

/// Decide foot coverage
#[must_use]
pub fn decide(inputs: &ZoneInputs) -> FeetDecision {
    let workout = &inputs.workout;
    let shoe_covers = inputs.feels_at_most(FREEZING_MAX_CELSIUS)
        || inputs.wind_at_least(STORM_WIND_KMH)
        || (inputs.feels_at_most(DAMP_MAX_CELSIUS)
            && inputs.humidity_at_least(DAMP_HUMIDITY_PERCENTAGE))
        || (inputs.feels_at_most(INTENSIVE_MAX_CELSIUS) && workout.is_intensive())
        || (inputs.feels_at_most(TEMPO_MAX_CELSIUS) && workout.is_tempo())
        || (inputs.wind_at_least(WINDY_WIND_KMH) && inputs.feels_at_most(WINDY_MAX_CELSIUS));

    let socks = if inputs.feels_at_most(WINTER_SOCKS_MAX_CELSIUS) {
        SockWeight::Winter
    } else {
        SockWeight::Summer
    };

    FeetDecision { socks, shoe_covers }
}
