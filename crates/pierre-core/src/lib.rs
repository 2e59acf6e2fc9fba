// ABOUTME: Core types and constants for Pierre outfit recommendations
// ABOUTME: Foundation crate with error handling, domain models and tuned thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the Pierre outfit
//! recommendation engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Thermal model and body zone thresholds, input limits
//! - **models**: Weather, workout, bias, clothing vocabulary and recommendation

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (weather, workout, clothing, recommendation)
pub mod models;
