// ABOUTME: Core types and constants for the Recipe Finder application
// ABOUTME: Foundation crate with error handling, storage keys, and recipe data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Finder Core
//!
//! Foundation crate providing shared types and constants for the Recipe Finder
//! application. It has no I/O of its own and changes rarely, so the main crate
//! and its binaries build on top of it incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Storage keys, filter option catalogues, and defaults
//! - **models**: Recipe, ingredient, nutrition, difficulty, and category records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Recipe fixture data models
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{Category, Difficulty, Ingredient, Nutrition, Recipe};
