// ABOUTME: Shopping list controller over a persisted collection of free-text entries
// ABOUTME: Tracks checked entries by stable per-entry identifiers rather than positions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Shopping List
//!
//! Entries are stored as a plain JSON array of strings. Each entry gets a
//! random [`EntryId`] when it is created or loaded; the checked set holds
//! those ids, so removing an entry never shifts another entry's checkmark.
//! Positional views such as [`ShoppingList::checked_indices`] are derived
//! from the current order on demand.
//!
//! The checked set lives only for the session and is never persisted.

use crate::constants::storage_keys;
use crate::errors::{AppError, AppResult};
use crate::storage::{PersistedCollection, SharedStore};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Session-local identity of a shopping list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generate a fresh identifier
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of the shopping list
///
/// Serialized as its bare text; deserializing assigns a new id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ShoppingEntry {
    id: EntryId,
    text: String,
}

impl ShoppingEntry {
    /// Create an entry with a fresh id
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            text: text.into(),
        }
    }

    /// Stable identifier for this session
    #[must_use]
    pub const fn id(&self) -> EntryId {
        self.id
    }

    /// Entry text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<String> for ShoppingEntry {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<ShoppingEntry> for String {
    fn from(entry: ShoppingEntry) -> Self {
        entry.text
    }
}

/// Values of `batch` to append to `list`, in batch order
///
/// A value is skipped when it is already on the list or appeared earlier in
/// the batch. The list itself is never deduplicated, so a batch drawn entirely
/// from `list` yields nothing.
#[must_use]
pub fn new_unique_values<L, B>(list: &[L], batch: &[B]) -> Vec<String>
where
    L: AsRef<str>,
    B: AsRef<str>,
{
    let mut seen: HashSet<&str> = list.iter().map(|value| value.as_ref()).collect();
    batch
        .iter()
        .map(|value| value.as_ref())
        .filter(|value| seen.insert(*value))
        .map(str::to_owned)
        .collect()
}

/// Persisted shopping list plus the session's checked set
#[derive(Debug)]
pub struct ShoppingList {
    entries: PersistedCollection<ShoppingEntry>,
    checked: HashSet<EntryId>,
}

impl ShoppingList {
    /// Load the list from `store`; nothing starts checked
    #[must_use]
    pub fn open(store: SharedStore) -> Self {
        Self {
            entries: PersistedCollection::open(store, storage_keys::SHOPPING_LIST),
            checked: HashSet::new(),
        }
    }

    /// A list that is never persisted
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            entries: PersistedCollection::in_memory(storage_keys::SHOPPING_LIST),
            checked: HashSet::new(),
        }
    }

    /// Append `text` trimmed; blank input is ignored
    ///
    /// Returns whether an entry was added. Duplicates are allowed here.
    pub fn add_item(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.entries
            .update(|entries| entries.push(ShoppingEntry::new(trimmed)));
        debug!(item = %trimmed, len = self.entries.len(), "Added shopping item");
        true
    }

    /// Append the batch values (typically a recipe's ingredients) that are
    /// not listed yet
    ///
    /// Existing entries, duplicates included, keep their ids and checkmarks.
    /// Returns the number of entries added.
    pub fn add_ingredients<S: AsRef<str>>(&mut self, batch: &[S]) -> usize {
        let existing: Vec<&str> = self
            .entries
            .items()
            .iter()
            .map(ShoppingEntry::text)
            .collect();
        let fresh = new_unique_values(&existing, batch);
        let added = fresh.len();
        if added > 0 {
            self.entries
                .update(|entries| entries.extend(fresh.into_iter().map(ShoppingEntry::new)));
        }
        debug!(
            batch = batch.len(),
            added,
            len = self.entries.len(),
            "Merged ingredients into shopping list"
        );
        added
    }

    /// Remove the entry at `index`, returning its text
    ///
    /// Checkmarks of the other entries stay with those entries.
    ///
    /// # Errors
    ///
    /// Returns a value-out-of-range error when `index >= len()`; the list is
    /// left unchanged
    pub fn remove_item(&mut self, index: usize) -> AppResult<String> {
        let id = self.entry_at(index)?.id;
        let removed = self.entries.update(|entries| entries.remove(index));
        self.checked.remove(&id);
        debug!(index, item = %removed.text, "Removed shopping item");
        Ok(removed.text)
    }

    /// Flip the checked state of the entry at `index`, returning the new state
    ///
    /// # Errors
    ///
    /// Returns a value-out-of-range error when `index >= len()`
    pub fn toggle_checked(&mut self, index: usize) -> AppResult<bool> {
        let id = self.entry_at(index)?.id;
        let now_checked = if self.checked.remove(&id) {
            false
        } else {
            self.checked.insert(id);
            true
        };
        Ok(now_checked)
    }

    /// Remove every checked entry in one pass and empty the checked set
    ///
    /// Returns the number of entries removed.
    pub fn clear_completed(&mut self) -> usize {
        if self.checked.is_empty() {
            return 0;
        }
        let checked = std::mem::take(&mut self.checked);
        let survivors: Vec<ShoppingEntry> = self
            .entries
            .items()
            .iter()
            .filter(|entry| !checked.contains(&entry.id))
            .cloned()
            .collect();
        let removed = self.entries.len() - survivors.len();
        self.entries.replace(survivors);
        debug!(removed, remaining = self.entries.len(), "Cleared completed shopping items");
        removed
    }

    /// Entries in order
    #[must_use]
    pub fn entries(&self) -> &[ShoppingEntry] {
        self.entries.items()
    }

    /// Entry texts in order
    #[must_use]
    pub fn items(&self) -> Vec<&str> {
        self.entries.items().iter().map(ShoppingEntry::text).collect()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of checked entries
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.checked.len()
    }

    /// Whether the entry at `index` is checked (`false` when out of range)
    #[must_use]
    pub fn is_checked(&self, index: usize) -> bool {
        self.entries
            .items()
            .get(index)
            .is_some_and(|entry| self.checked.contains(&entry.id))
    }

    /// Positions of the checked entries in the current order
    #[must_use]
    pub fn checked_indices(&self) -> BTreeSet<usize> {
        self.entries
            .items()
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.checked.contains(&entry.id))
            .map(|(index, _)| index)
            .collect()
    }

    /// Whether changes are still persisted
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.entries.is_persistent()
    }

    fn entry_at(&self, index: usize) -> AppResult<&ShoppingEntry> {
        self.entries
            .items()
            .get(index)
            .ok_or_else(|| AppError::value_out_of_range("shopping list", index, self.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn list_of(items: &[&str]) -> ShoppingList {
        let mut list = ShoppingList::in_memory();
        for item in items {
            assert!(list.add_item(item));
        }
        list
    }

    #[test]
    fn test_add_item_trims_and_ignores_blank() {
        let mut list = ShoppingList::in_memory();
        assert!(list.add_item("  milk \n"));
        assert!(!list.add_item("   "));
        assert!(list.add_item("milk"));
        assert_eq!(list.items(), vec!["milk", "milk"]);
    }

    #[test]
    fn test_remove_keeps_checkmarks_attached() {
        let mut list = list_of(&["a", "b", "c"]);
        list.toggle_checked(2).unwrap();

        assert_eq!(list.remove_item(0).unwrap(), "a");

        assert_eq!(list.items(), vec!["b", "c"]);
        assert_eq!(list.checked_indices(), BTreeSet::from([1]));
    }

    #[test]
    fn test_clear_completed_removes_checked_in_one_pass() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        list.toggle_checked(1).unwrap();
        list.toggle_checked(3).unwrap();

        assert_eq!(list.clear_completed(), 2);

        assert_eq!(list.items(), vec!["a", "c"]);
        assert!(list.checked_indices().is_empty());
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn test_toggle_is_symmetric() {
        let mut list = list_of(&["a"]);
        assert!(list.toggle_checked(0).unwrap());
        assert!(list.is_checked(0));
        assert!(!list.toggle_checked(0).unwrap());
        assert!(!list.is_checked(0));
    }

    #[test]
    fn test_out_of_range_is_rejected_without_mutation() {
        let mut list = list_of(&["a"]);
        list.toggle_checked(0).unwrap();

        let err = list.remove_item(1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        let err = list.toggle_checked(5).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);

        assert_eq!(list.items(), vec!["a"]);
        assert!(list.is_checked(0));
        assert!(!list.is_checked(7));
    }

    #[test]
    fn test_add_ingredients_subset_is_noop() {
        let mut list = list_of(&["2 cups flour", "3 eggs"]);
        list.toggle_checked(1).unwrap();

        assert_eq!(list.add_ingredients(&["3 eggs"]), 0);

        assert_eq!(list.items(), vec!["2 cups flour", "3 eggs"]);
        assert_eq!(list.checked_indices(), BTreeSet::from([1]));
    }

    #[test]
    fn test_add_ingredients_appends_new_values_in_batch_order() {
        let mut list = list_of(&["salt"]);
        let added = list.add_ingredients(&["pepper", "salt", "oil", "pepper"]);
        assert_eq!(added, 2);
        assert_eq!(list.items(), vec!["salt", "pepper", "oil"]);
    }

    #[test]
    fn test_new_unique_values() {
        assert_eq!(new_unique_values(&["a", "b"], &["b", "c", "a", "c"]), vec!["c"]);
        assert!(new_unique_values(&["a", "a", "b"], &["a"]).is_empty());
    }

    #[test]
    fn test_add_ingredients_keeps_existing_duplicates_and_checks() {
        let mut list = list_of(&["milk", "milk", "eggs"]);
        list.toggle_checked(1).unwrap();

        assert_eq!(list.add_ingredients(&["milk"]), 0);

        assert_eq!(list.items(), vec!["milk", "milk", "eggs"]);
        assert_eq!(list.checked_indices(), BTreeSet::from([1]));
    }

    #[test]
    fn test_entries_serialize_as_plain_strings() {
        let entries = vec![ShoppingEntry::new("milk"), ShoppingEntry::new("bread")];
        let json = serde_json::to_string(&entries).unwrap();
        assert_eq!(json, r#"["milk","bread"]"#);

        let loaded: Vec<ShoppingEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded[1].text(), "bread");
        assert_ne!(loaded[0].id(), loaded[1].id());
    }
}
