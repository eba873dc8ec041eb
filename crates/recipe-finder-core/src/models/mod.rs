// ABOUTME: Recipe fixture data models shared across the workspace
// ABOUTME: Recipe, Ingredient, Nutrition, Difficulty, and Category definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Category records shown in the category browser
pub mod category;
/// Recipe records and their parts
pub mod recipe;

pub use category::Category;
pub use recipe::{Difficulty, Ingredient, Nutrition, Recipe};
