// ABOUTME: Pure search, filter, and stable sort over the recipe fixture
// ABOUTME: Returns a fresh ordered view of borrowed recipes; the fixture is never touched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CategorySelection, FilterState, SortBy};
use crate::models::Recipe;
use tracing::debug;

/// Derive the visible recipes
///
/// Keeps a recipe when all of these hold:
/// - `search_text` is empty, or its lowercase form is a substring of the
///   title, the cuisine, or any ingredient name (whitespace is significant)
/// - it belongs to `category`
/// - it carries every required dietary tag
/// - it is within the cook time limit
/// - it has the required difficulty
///
/// The survivors are then stable-sorted by `filters.sort_by`, so recipes
/// with equal keys keep their fixture order.
#[must_use]
pub fn query<'r>(
    recipes: &'r [Recipe],
    search_text: &str,
    category: &CategorySelection,
    filters: &FilterState,
) -> Vec<&'r Recipe> {
    let needle = search_text.to_lowercase();

    let mut results: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| needle.is_empty() || recipe.matches_search(&needle))
        .filter(|recipe| category.matches(recipe))
        .filter(|recipe| filters.allows(recipe))
        .collect();

    sort_recipes(&mut results, filters.sort_by);

    debug!(
        query.search = %needle,
        query.category = category.as_id(),
        query.sort = filters.sort_by.as_str(),
        query.total = recipes.len(),
        query.matched = results.len(),
        "Recomputed visible recipes"
    );

    results
}

/// Stable in-place sort by the given key
pub fn sort_recipes(recipes: &mut [&Recipe], sort_by: SortBy) {
    match sort_by {
        SortBy::CookTime => recipes.sort_by_key(|recipe| recipe.cook_time),
        SortBy::Rating => recipes.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Popularity => {
            recipes.sort_by(|a, b| b.popularity().total_cmp(&a.popularity()));
        }
    }
}
