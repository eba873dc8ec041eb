// ABOUTME: Integration tests for the recipe query pipeline over the built-in fixture
// ABOUTME: Covers search, category, dietary, cook time, difficulty, and stable sorting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::ids;
use recipe_finder::fixture::Fixture;
use recipe_finder::models::{Difficulty, Recipe};
use recipe_finder::query::{
    query, CategorySelection, CookTimeLimit, DifficultyFilter, FilterPatch, FilterState, QueryStats,
    SortBy,
};

fn sorted_by(sort_by: SortBy) -> FilterState {
    FilterState::default().apply(FilterPatch {
        sort_by: Some(sort_by),
        ..FilterPatch::default()
    })
}

#[test]
fn test_neutral_filters_keep_search_matches_in_key_order() {
    let fixture = Fixture::builtin();
    let recipes = fixture.all_recipes();

    let results = query(recipes, "egg", &CategorySelection::All, &sorted_by(SortBy::CookTime));

    let mut expected: Vec<&Recipe> = recipes.iter().filter(|r| r.matches_search("egg")).collect();
    expected.sort_by_key(|r| r.cook_time);
    assert_eq!(ids(&results), ids(&expected));
    assert!(!results.is_empty());
}

#[test]
fn test_egg_search_sorted_by_cook_time() {
    let fixture = Fixture::builtin();
    let results = query(
        fixture.all_recipes(),
        "EGG",
        &CategorySelection::All,
        &sorted_by(SortBy::CookTime),
    );

    let times: Vec<u32> = results.iter().map(|r| r.cook_time).collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]), "{times:?}");

    // Pancakes and carbonara both take 20 minutes; fixture order breaks the tie
    let ids = ids(&results);
    let pancakes = ids.iter().position(|id| id == "fluffy-pancakes").unwrap();
    let carbonara = ids.iter().position(|id| id == "spaghetti-carbonara").unwrap();
    assert!(pancakes < carbonara);
}

#[test]
fn test_rating_sort_is_non_increasing_and_stable() {
    let fixture = Fixture::builtin();
    let recipes = fixture.all_recipes();
    let results = query(recipes, "", &CategorySelection::All, &sorted_by(SortBy::Rating));

    assert_eq!(results.len(), recipes.len());
    for pair in results.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
        if pair[0].rating.total_cmp(&pair[1].rating).is_eq() {
            let first = recipes.iter().position(|r| r.id == pair[0].id).unwrap();
            let second = recipes.iter().position(|r| r.id == pair[1].id).unwrap();
            assert!(first < second, "{} before {}", pair[0].id, pair[1].id);
        }
    }
}

#[test]
fn test_popularity_is_default_order() {
    let fixture = Fixture::builtin();
    let results = query(
        fixture.all_recipes(),
        "",
        &CategorySelection::All,
        &FilterState::default(),
    );
    assert_eq!(results[0].id, "vegan-banana-bread");
    assert!(results
        .windows(2)
        .all(|w| w[0].popularity() >= w[1].popularity()));
}

#[test]
fn test_dietary_filter_requires_every_tag() {
    let fixture = Fixture::builtin();
    let filters = FilterState::default()
        .toggle_dietary("vegan")
        .toggle_dietary("gluten-free");

    let results = query(fixture.all_recipes(), "", &CategorySelection::All, &filters);

    assert!(!results.is_empty());
    assert!(results
        .iter()
        .all(|r| r.has_tag("vegan") && r.has_tag("gluten-free")));
    let excluded = fixture
        .all_recipes()
        .iter()
        .filter(|r| r.has_tag("vegan") && !r.has_tag("gluten-free"))
        .count();
    assert!(excluded > 0, "fixture should contain a vegan recipe with gluten");
}

#[test]
fn test_category_and_limits_compose() {
    let fixture = Fixture::builtin();
    let filters = FilterState {
        cook_time: CookTimeLimit::parse_lossy("30"),
        difficulty: DifficultyFilter::Only(Difficulty::Medium),
        ..FilterState::default()
    };

    let results = query(
        fixture.all_recipes(),
        "",
        &CategorySelection::from_id("dinner"),
        &filters,
    );

    assert!(!results.is_empty());
    for recipe in &results {
        assert_eq!(recipe.category, "dinner");
        assert!(recipe.cook_time <= 30);
        assert_eq!(recipe.difficulty, Difficulty::Medium);
    }
}

#[test]
fn test_malformed_cook_time_means_no_limit() {
    let fixture = Fixture::builtin();
    let filters = FilterState {
        cook_time: CookTimeLimit::parse_lossy("soon"),
        ..FilterState::default()
    };
    let results = query(fixture.all_recipes(), "", &CategorySelection::All, &filters);
    assert_eq!(results.len(), fixture.all_recipes().len());
}

#[test]
fn test_query_leaves_fixture_untouched() {
    let fixture = Fixture::builtin();
    let before = fixture.all_recipes().to_vec();
    let _ = query(
        fixture.all_recipes(),
        "a",
        &CategorySelection::All,
        &sorted_by(SortBy::CookTime),
    );
    assert_eq!(fixture.all_recipes(), before.as_slice());
}

#[test]
fn test_stats_follow_results() {
    let fixture = Fixture::builtin();
    let results = query(
        fixture.all_recipes(),
        "no recipe has this text",
        &CategorySelection::All,
        &FilterState::default(),
    );
    assert_eq!(QueryStats::from_recipes(&results), QueryStats::default());

    let all = query(
        fixture.all_recipes(),
        "",
        &CategorySelection::All,
        &FilterState::default(),
    );
    let stats = QueryStats::from_recipes(&all);
    assert_eq!(stats.count, fixture.all_recipes().len());
    assert!(stats.average_cook_time.is_some());
}
