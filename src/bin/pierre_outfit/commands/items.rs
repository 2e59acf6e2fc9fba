// ABOUTME: Items command for pierre-outfit
// ABOUTME: Lists every clothing item with its zone, layer slot, id and label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_outfit::models::{BodyZone, ClothingItem};

/// Print the clothing vocabulary
pub fn run() {
    for zone in BodyZone::ALL {
        println!("{zone}");
        for item in ClothingItem::ALL.iter().filter(|item| item.zone() == zone) {
            println!(
                "   {:<20} {:<8} {}",
                item.id(),
                format!("{:?}", item.slot()).to_lowercase(),
                item.display_name()
            );
        }
    }
}
