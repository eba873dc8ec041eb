// ABOUTME: Browsing commands for recipe-finder
// ABOUTME: Handles search, show, categories, and filter options over the recipe fixture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_finder::errors::AppResult;
use recipe_finder::query::{CookTimeLimit, DifficultyFilter, FilterState, SortBy};
use recipe_finder::session::RecipeSession;
use tracing::info;

use crate::helpers::display::{
    print_categories, print_detail, print_filter_options, print_recipe_list, print_stats,
};

/// Parsed `search` arguments
pub struct SearchArgs {
    pub query: String,
    pub category: String,
    pub diet: Vec<String>,
    pub max_time: String,
    pub difficulty: DifficultyFilter,
    pub sort: SortBy,
}

/// Run the query pipeline and print the result list with statistics
pub fn search(session: &mut RecipeSession, args: SearchArgs) {
    session.set_search_text(args.query);
    session.select_category(&args.category);
    session.set_filter(FilterState {
        dietary: args.diet.into_iter().collect(),
        cook_time: CookTimeLimit::parse_lossy(&args.max_time),
        difficulty: args.difficulty,
        sort_by: args.sort,
    });

    let results = session.visible_recipes();
    info!(matched = results.len(), "Search complete");

    print_recipe_list(&results, session.favorites());
    print_stats(&session.stats(), session.filters());
}

/// Print one recipe in detail
pub fn show(session: &mut RecipeSession, id: &str) -> AppResult<()> {
    let is_favorite = session.favorites().is_favorite(id);
    let detail = session.select_recipe(id)?;
    print_detail(detail, is_favorite);
    Ok(())
}

/// Print every category with its count
pub fn categories(session: &RecipeSession) {
    print_categories(session.categories());
}

/// Print the accepted filter and sort values
pub fn options() {
    print_filter_options();
}
