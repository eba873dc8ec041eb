// ABOUTME: Favorites commands for recipe-finder
// ABOUTME: Lists favorite recipes and toggles membership
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_finder::session::RecipeSession;
use tracing::warn;

use crate::helpers::display::print_recipe_list;

/// Print favorite recipes in fixture order
pub fn list(session: &RecipeSession) {
    let recipes = session.favorite_recipes();
    if recipes.is_empty() {
        println!("No favorites yet. Add one with `recipe-finder favorites toggle <ID>`.");
        return;
    }
    print_recipe_list(&recipes, session.favorites());
}

/// Toggle a favorite and report the new state
pub fn toggle(session: &mut RecipeSession, id: &str) {
    if session.fixture().recipe(id).is_none() {
        warn!(recipe.id = %id, "Favoriting an identifier that is not in the fixture");
    }

    if session.toggle_favorite(id) {
        println!("Added {id} to favorites ({} total)", session.favorites().count());
    } else {
        println!("Removed {id} from favorites ({} total)", session.favorites().count());
    }
}
