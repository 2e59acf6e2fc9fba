// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for pierre-outfit
// ABOUTME: Provides access to the recommend, feels-like and items commands

pub mod feels_like;
pub mod items;
pub mod recommend;
