// ABOUTME: Output formatting helpers for recipe-finder
// ABOUTME: Provides consistent display functions for recipe lists, details, and the shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_finder::detail::RecipeDetail;
use recipe_finder::favorites::Favorites;
use recipe_finder::models::{Category, Recipe};
use recipe_finder::query::{FilterState, QueryStats, SortBy};
use recipe_finder::session::RecipeSession;
use recipe_finder::shopping::ShoppingList;

const RULE_WIDTH: usize = 72;

/// Print a recipe table, marking favorites with `*`
pub fn print_recipe_list(recipes: &[&Recipe], favorites: &Favorites) {
    if recipes.is_empty() {
        println!("No recipes match.");
        return;
    }

    println!(
        "  {:<24} {:<30} {:>6} {:>6} {:<7}",
        "ID", "TITLE", "MIN", "RATING", "LEVEL"
    );
    println!("{}", "-".repeat(RULE_WIDTH));
    for recipe in recipes {
        let marker = if favorites.is_favorite(&recipe.id) { '*' } else { ' ' };
        println!(
            "{marker} {:<24} {:<30} {:>6} {:>6.1} {:<7}",
            recipe.id,
            recipe.title,
            recipe.cook_time,
            recipe.rating,
            recipe.difficulty.as_str()
        );
    }
}

/// Print result statistics and the active filters
pub fn print_stats(stats: &QueryStats, filters: &FilterState) {
    println!("{}", "-".repeat(RULE_WIDTH));
    let minutes = stats
        .average_cook_time
        .map_or_else(|| "-".to_owned(), |m| format!("{m} min"));
    println!(
        "{} recipe(s), avg cook time {minutes}, avg rating {}, sorted by {}",
        stats.count,
        stats.rating_label(),
        filters.sort_by.label()
    );

    if filters.has_active_filters() {
        let diets: Vec<&str> = filters.dietary.iter().map(String::as_str).collect();
        println!(
            "Filters: diet [{}], max time {}, difficulty {}",
            diets.join(", "),
            filters.cook_time,
            String::from(filters.difficulty)
        );
    }
}

/// Print the detail view of a recipe
pub fn print_detail(detail: &RecipeDetail, is_favorite: bool) {
    let recipe = detail.recipe();
    let star = if is_favorite { " *" } else { "" };

    println!("\n{}{star}", recipe.title);
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", recipe.description);
    println!(
        "\n{} | {} | {} min | serves {} | {} | rating {:.1}",
        recipe.cuisine,
        recipe.category,
        recipe.cook_time,
        recipe.servings,
        recipe.difficulty,
        recipe.rating
    );
    if !recipe.dietary.is_empty() {
        println!("Diet: {}", recipe.dietary.join(", "));
    }

    println!("\nIngredients:");
    for line in detail.shopping_entries() {
        println!("  - {line}");
    }

    println!("\nInstructions:");
    for (step, text) in recipe.instructions.iter().enumerate() {
        println!("  {}. {text}", step + 1);
    }

    if let Some(nutrition) = &recipe.nutrition {
        println!(
            "\nNutrition per serving: {:.0} kcal, {:.0} g protein, {:.0} g carbs, {:.0} g fat",
            nutrition.calories, nutrition.protein, nutrition.carbs, nutrition.fat
        );
    }
}

/// Print categories with their counts
pub fn print_categories(categories: &[Category]) {
    for category in categories {
        println!(
            "{} {:<12} {:<16} {:>3}",
            category.icon, category.id, category.name, category.count
        );
    }
}

/// Print the values accepted by the `search` filter flags
pub fn print_filter_options() {
    println!("Diets (--diet):");
    for tag in FilterState::dietary_options() {
        println!("  {tag}");
    }

    println!("\nCook time (--max-time):");
    for (limit, label) in FilterState::cook_time_options() {
        println!("  {:<8} {label}", limit.to_string());
    }

    println!("\nDifficulty (--difficulty):");
    for (filter, label) in FilterState::difficulty_options() {
        println!("  {:<8} {label}", String::from(filter));
    }

    println!("\nSort (--sort):");
    for sort_by in SortBy::ALL {
        println!("  {:<12} {}", sort_by.as_str(), sort_by.label());
    }
}

/// Print the shopping list with positions and checkmarks
pub fn print_shopping_list(list: &ShoppingList) {
    if list.is_empty() {
        println!("Your shopping list is empty.");
        return;
    }

    for (index, item) in list.items().iter().enumerate() {
        let mark = if list.is_checked(index) { 'x' } else { ' ' };
        println!("{index:>3}. [{mark}] {item}");
    }
    println!(
        "{} item(s), {} completed",
        list.len(),
        list.completed_count()
    );
}

/// Tell the user when storage failed and changes were not saved
pub fn warn_if_not_persistent(session: &RecipeSession) {
    if !session.is_persistent() {
        eprintln!("Warning: storage is unavailable, changes from this run were not saved.");
    }
}
