// ABOUTME: Benchmark fixtures that scale the built-in recipe catalog
// ABOUTME: Provides deterministic recipe sets for reproducible query measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic recipe catalogs for benchmarks.

use recipe_finder::fixture::Fixture;
use recipe_finder::models::Recipe;

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// The built-in fixture as shipped
    Builtin,
    /// 100 copies of the fixture, a large personal collection
    Large,
}

impl CatalogSize {
    /// Number of times the fixture is repeated
    #[must_use]
    pub const fn copies(self) -> usize {
        match self {
            Self::Builtin => 1,
            Self::Large => 100,
        }
    }

    /// Label used in benchmark ids
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Large => "large",
        }
    }
}

/// Repeat the built-in recipes with unique ids and varied cook times
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn generate_catalog(size: CatalogSize) -> Vec<Recipe> {
    let fixture = Fixture::builtin();
    (0..size.copies())
        .flat_map(|copy| {
            fixture.all_recipes().iter().map(move |recipe| {
                let mut recipe = recipe.clone();
                if copy > 0 {
                    recipe.id = format!("{}-{copy}", recipe.id);
                    recipe.cook_time += (copy % 7) as u32;
                }
                recipe
            })
        })
        .collect()
}
