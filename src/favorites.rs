// ABOUTME: Favorites controller toggling recipe identifiers in a persisted collection
// ABOUTME: Keeps insertion order and never holds duplicates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::storage_keys;
use crate::fixture::Fixture;
use crate::models::Recipe;
use crate::storage::{PersistedCollection, SharedStore};
use tracing::debug;

/// Toggle `recipe_id` in a favorites list
///
/// Present ids are removed (every occurrence, so a list that was stored
/// with duplicates heals itself); absent ids are appended. Identifiers are
/// not checked against the fixture.
#[must_use]
pub fn toggle_favorite(favorites: &[String], recipe_id: &str) -> Vec<String> {
    if favorites.iter().any(|id| id == recipe_id) {
        favorites
            .iter()
            .filter(|id| *id != recipe_id)
            .cloned()
            .collect()
    } else {
        let mut next = favorites.to_vec();
        next.push(recipe_id.to_owned());
        next
    }
}

/// Persisted list of favorite recipe identifiers
#[derive(Debug)]
pub struct Favorites {
    ids: PersistedCollection<String>,
}

impl Favorites {
    /// Load favorites from `store`
    #[must_use]
    pub fn open(store: SharedStore) -> Self {
        Self {
            ids: PersistedCollection::open(store, storage_keys::FAVORITES),
        }
    }

    /// Favorites that are never persisted
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            ids: PersistedCollection::in_memory(storage_keys::FAVORITES),
        }
    }

    /// Toggle membership of `recipe_id`, returning whether it is now a favorite
    pub fn toggle(&mut self, recipe_id: &str) -> bool {
        let next = toggle_favorite(self.ids.items(), recipe_id);
        let added = next.len() > self.ids.len();
        self.ids.replace(next);
        debug!(recipe.id = %recipe_id, favorite = added, "Toggled favorite");
        added
    }

    /// Whether `recipe_id` is a favorite
    #[must_use]
    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.ids.items().iter().any(|id| id == recipe_id)
    }

    /// Favorite identifiers in insertion order
    #[must_use]
    pub fn ids(&self) -> &[String] {
        self.ids.items()
    }

    /// Number of favorites
    #[must_use]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Whether changes are still persisted
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.ids.is_persistent()
    }

    /// Fixture recipes that are favorites, in fixture order
    ///
    /// Identifiers with no matching recipe are skipped.
    #[must_use]
    pub fn favorite_recipes<'f>(&self, fixture: &'f Fixture) -> Vec<&'f Recipe> {
        fixture
            .all_recipes()
            .iter()
            .filter(|recipe| self.is_favorite(&recipe.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|&v| v.to_owned()).collect()
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let start = ids(&["b", "a", "c"]);
        // absent ids and the most recent favorite come back to the same place
        for id in ["c", "z"] {
            let once = toggle_favorite(&start, id);
            assert_ne!(once, start);
            assert_eq!(toggle_favorite(&once, id), start);
        }
    }

    #[test]
    fn test_toggle_removes_every_occurrence() {
        assert_eq!(toggle_favorite(&ids(&["a", "b", "a"]), "a"), ids(&["b"]));
    }

    #[test]
    fn test_toggle_persists_under_favorites_key() {
        let memory = Arc::new(MemoryStore::new());
        let store: SharedStore = memory.clone();
        let mut favorites = Favorites::open(store);

        assert!(favorites.toggle("spaghetti-carbonara"));
        assert!(favorites.toggle("unknown-id"));
        assert!(!favorites.toggle("spaghetti-carbonara"));

        assert_eq!(
            memory.get(storage_keys::FAVORITES).unwrap().as_deref(),
            Some(r#"["unknown-id"]"#)
        );
        assert_eq!(favorites.count(), 1);
    }

    #[test]
    fn test_favorite_recipes_follow_fixture_order() {
        let fixture = Fixture::builtin();
        let mut favorites = Favorites::in_memory();
        favorites.toggle("classic-hummus");
        favorites.toggle("does-not-exist");
        favorites.toggle("fluffy-pancakes");

        let titles: Vec<&str> = favorites
            .favorite_recipes(&fixture)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(titles, vec!["fluffy-pancakes", "classic-hummus"]);
    }
}
