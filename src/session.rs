// ABOUTME: Explicit session context owning filter state, selection, favorites, and shopping list
// ABOUTME: Translates user intents into controller calls and derives view data on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session
//!
//! A [`RecipeSession`] is the single owner of everything a user can change:
//! search text, category, filters, the opened recipe, favorites, and the
//! shopping list. Intent methods mutate that state; view methods recompute
//! derived data from it every time they are called, so there is no cached
//! result list to go stale.

use crate::detail::RecipeDetail;
use crate::errors::{AppError, AppResult};
use crate::favorites::Favorites;
use crate::fixture::Fixture;
use crate::models::{Category, Recipe};
use crate::query::{query, CategorySelection, FilterPatch, FilterState, QueryStats};
use crate::shopping::ShoppingList;
use crate::storage::SharedStore;
use std::sync::Arc;
use tracing::{debug, info};

/// State of one user session
#[derive(Debug)]
pub struct RecipeSession {
    fixture: Arc<Fixture>,
    search_text: String,
    category: CategorySelection,
    filters: FilterState,
    selected: Option<RecipeDetail>,
    favorites: Favorites,
    shopping: ShoppingList,
}

impl RecipeSession {
    /// Start a session, loading favorites and the shopping list from `store`
    #[must_use]
    pub fn open(fixture: Arc<Fixture>, store: SharedStore) -> Self {
        let backend = store.backend_name();
        let favorites = Favorites::open(Arc::clone(&store));
        let shopping = ShoppingList::open(store);

        info!(
            store.backend = backend,
            recipes = fixture.all_recipes().len(),
            favorites = favorites.count(),
            shopping_items = shopping.len(),
            "Recipe session opened"
        );

        Self {
            fixture,
            search_text: String::new(),
            category: CategorySelection::All,
            filters: FilterState::default(),
            selected: None,
            favorites,
            shopping,
        }
    }

    /// Start a session that never touches storage
    #[must_use]
    pub fn in_memory(fixture: Arc<Fixture>) -> Self {
        Self {
            fixture,
            search_text: String::new(),
            category: CategorySelection::All,
            filters: FilterState::default(),
            selected: None,
            favorites: Favorites::in_memory(),
            shopping: ShoppingList::in_memory(),
        }
    }

    // ------------------------------------------------------------------
    // Query intents
    // ------------------------------------------------------------------

    /// Replace the search text
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Select a category by identifier (`all` clears the restriction)
    pub fn select_category(&mut self, category_id: &str) {
        self.category = CategorySelection::from_id(category_id);
    }

    /// Replace the whole filter state
    pub fn set_filter(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    /// Merge a partial update into the filter state
    pub fn update_filter(&mut self, patch: FilterPatch) {
        self.filters = self.filters.apply(patch);
    }

    /// Add or remove one required dietary tag
    pub fn toggle_dietary(&mut self, tag: &str) {
        self.filters = self.filters.toggle_dietary(tag);
    }

    /// Reset filters and sort order to their defaults
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::cleared();
    }

    // ------------------------------------------------------------------
    // Selection intents
    // ------------------------------------------------------------------

    /// Open the detail view of a recipe, resetting its checklists
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an identifier missing from the fixture;
    /// the previous selection is kept
    pub fn select_recipe(&mut self, recipe_id: &str) -> AppResult<&RecipeDetail> {
        let recipe = self
            .fixture
            .recipe(recipe_id)
            .ok_or_else(|| AppError::not_found(format!("Recipe '{recipe_id}'")))?
            .clone();
        debug!(recipe.id = %recipe_id, "Selected recipe");
        Ok(self.selected.insert(RecipeDetail::new(recipe)))
    }

    /// Close the detail view
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Flip an ingredient checkmark of the opened recipe
    ///
    /// # Errors
    ///
    /// Returns an error when no recipe is open or the index is out of range
    pub fn toggle_selected_ingredient(&mut self, index: usize) -> AppResult<bool> {
        self.selected_mut()?.toggle_ingredient(index)
    }

    /// Flip a step checkmark of the opened recipe
    ///
    /// # Errors
    ///
    /// Returns an error when no recipe is open or the index is out of range
    pub fn toggle_selected_step(&mut self, index: usize) -> AppResult<bool> {
        self.selected_mut()?.toggle_step(index)
    }

    // ------------------------------------------------------------------
    // Favorites and shopping list intents
    // ------------------------------------------------------------------

    /// Toggle a favorite, returning whether it is now a favorite
    pub fn toggle_favorite(&mut self, recipe_id: &str) -> bool {
        self.favorites.toggle(recipe_id)
    }

    /// Append a free-text item; blank text is ignored
    pub fn add_shopping_item(&mut self, text: &str) -> bool {
        self.shopping.add_item(text)
    }

    /// Append the entries that are not on the shopping list yet
    pub fn add_ingredients_to_shopping_list<S: AsRef<str>>(&mut self, entries: &[S]) -> usize {
        self.shopping.add_ingredients(entries)
    }

    /// Merge every ingredient of a fixture recipe into the shopping list
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown recipe identifier
    pub fn add_recipe_to_shopping_list(&mut self, recipe_id: &str) -> AppResult<usize> {
        let entries = self
            .fixture
            .recipe(recipe_id)
            .ok_or_else(|| AppError::not_found(format!("Recipe '{recipe_id}'")))?
            .shopping_entries();
        Ok(self.shopping.add_ingredients(&entries))
    }

    /// Merge the opened recipe's ingredients into the shopping list
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no recipe is open
    pub fn add_selected_recipe_to_shopping_list(&mut self) -> AppResult<usize> {
        let entries = self
            .selected
            .as_ref()
            .ok_or_else(|| AppError::not_found("Selected recipe"))?
            .shopping_entries();
        Ok(self.shopping.add_ingredients(&entries))
    }

    /// Remove the entry at `index`, returning its text
    ///
    /// # Errors
    ///
    /// Returns a value-out-of-range error for an invalid index
    pub fn remove_shopping_item(&mut self, index: usize) -> AppResult<String> {
        self.shopping.remove_item(index)
    }

    /// Flip the checked state of the entry at `index`
    ///
    /// # Errors
    ///
    /// Returns a value-out-of-range error for an invalid index
    pub fn toggle_shopping_checked(&mut self, index: usize) -> AppResult<bool> {
        self.shopping.toggle_checked(index)
    }

    /// Remove every checked entry, returning how many were removed
    pub fn clear_completed_shopping_items(&mut self) -> usize {
        self.shopping.clear_completed()
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// Recipes matching the current search, category, and filters
    #[must_use]
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        query(
            self.fixture.all_recipes(),
            &self.search_text,
            &self.category,
            &self.filters,
        )
    }

    /// Statistics over [`Self::visible_recipes`]
    #[must_use]
    pub fn stats(&self) -> QueryStats {
        QueryStats::from_recipes(&self.visible_recipes())
    }

    /// Favorite recipes in fixture order
    #[must_use]
    pub fn favorite_recipes(&self) -> Vec<&Recipe> {
        self.favorites.favorite_recipes(&self.fixture)
    }

    /// Favorites controller (read-only)
    #[must_use]
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Shopping list (read-only)
    #[must_use]
    pub const fn shopping_list(&self) -> &ShoppingList {
        &self.shopping
    }

    /// All categories in fixture order
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        self.fixture.all_categories()
    }

    /// The shared fixture
    #[must_use]
    pub fn fixture(&self) -> &Fixture {
        &self.fixture
    }

    /// The opened recipe, if any
    #[must_use]
    pub const fn selected(&self) -> Option<&RecipeDetail> {
        self.selected.as_ref()
    }

    /// Current search text
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Current category selection
    #[must_use]
    pub const fn category(&self) -> &CategorySelection {
        &self.category
    }

    /// Current filter state
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Whether both collections are still persisted
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.favorites.is_persistent() && self.shopping.is_persistent()
    }

    fn selected_mut(&mut self) -> AppResult<&mut RecipeDetail> {
        self.selected
            .as_mut()
            .ok_or_else(|| AppError::not_found("Selected recipe"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::query::SortBy;

    fn session() -> RecipeSession {
        RecipeSession::in_memory(Fixture::builtin())
    }

    #[test]
    fn test_fresh_session_shows_everything_by_popularity() {
        let session = session();
        let visible = session.visible_recipes();
        assert_eq!(visible.len(), session.fixture().all_recipes().len());
        assert_eq!(session.filters().sort_by, SortBy::Popularity);
        assert!(visible
            .windows(2)
            .all(|w| w[0].popularity() >= w[1].popularity()));
    }

    #[test]
    fn test_unknown_recipe_keeps_previous_selection() {
        let mut session = session();
        session.select_recipe("grilled-salmon").unwrap();
        let err = session.select_recipe("nope").unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
        assert_eq!(session.selected().unwrap().recipe().id, "grilled-salmon");
    }

    #[test]
    fn test_reselecting_resets_checklists() {
        let mut session = session();
        session.select_recipe("grilled-salmon").unwrap();
        session.toggle_selected_ingredient(0).unwrap();
        assert_eq!(session.selected().unwrap().progress().ingredients_checked, 1);

        session.select_recipe("grilled-salmon").unwrap();
        assert_eq!(session.selected().unwrap().progress().ingredients_checked, 0);

        session.clear_selection();
        assert!(session.toggle_selected_step(0).is_err());
    }

    #[test]
    fn test_selected_recipe_goes_to_shopping_list_once() {
        let mut session = session();
        assert!(session.add_selected_recipe_to_shopping_list().is_err());

        let expected = session
            .select_recipe("avocado-toast")
            .unwrap()
            .shopping_entries()
            .len();
        assert_eq!(session.add_selected_recipe_to_shopping_list().unwrap(), expected);
        assert_eq!(session.add_selected_recipe_to_shopping_list().unwrap(), 0);
        assert_eq!(session.shopping_list().len(), expected);
    }
}
