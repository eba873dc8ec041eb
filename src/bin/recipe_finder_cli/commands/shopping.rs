// ABOUTME: Shopping list commands for recipe-finder
// ABOUTME: Handles list, add, add-recipe, remove, and complete operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_finder::errors::AppResult;
use recipe_finder::session::RecipeSession;
use std::collections::BTreeSet;

use crate::helpers::display::print_shopping_list;

/// Print the shopping list
pub fn list(session: &RecipeSession) {
    print_shopping_list(session.shopping_list());
}

/// Add a free-text item
pub fn add(session: &mut RecipeSession, text: &str) {
    if session.add_shopping_item(text) {
        println!("Added \"{}\"", text.trim());
    } else {
        println!("Nothing to add");
    }
}

/// Add every ingredient of a recipe
pub fn add_recipe(session: &mut RecipeSession, id: &str) -> AppResult<()> {
    let added = session.add_recipe_to_shopping_list(id)?;
    println!(
        "Added {added} new item(s) from {id}, {} on the list",
        session.shopping_list().len()
    );
    Ok(())
}

/// Remove the item at `index`
pub fn remove(session: &mut RecipeSession, index: usize) -> AppResult<()> {
    let removed = session.remove_shopping_item(index)?;
    println!("Removed \"{removed}\"");
    Ok(())
}

/// Check the given items and clear them in one pass
///
/// Checked state lives only for the session, so marking and clearing
/// happen together. Every index is validated before anything is cleared.
pub fn complete(session: &mut RecipeSession, indices: &[usize]) -> AppResult<()> {
    let unique: BTreeSet<usize> = indices.iter().copied().collect();
    for &index in &unique {
        session.toggle_shopping_checked(index)?;
    }
    let cleared = session.clear_completed_shopping_items();
    println!(
        "Cleared {cleared} completed item(s), {} left",
        session.shopping_list().len()
    );
    Ok(())
}
