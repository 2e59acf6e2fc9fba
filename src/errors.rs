// ABOUTME: Error types for the outfit crate, shared with the engine crates
// ABOUTME: Re-exports the core AppError, ErrorCode and response shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The error model lives in `pierre-core` so the engine crates and this crate
//! report failures the same way.

pub use pierre_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails};
