// ABOUTME: Recipe detail view state with ingredient and step checklists
// ABOUTME: Checklists are per selection and reset whenever another recipe is opened
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::Recipe;
use serde::Serialize;
use std::collections::BTreeSet;

/// Checklist progress of the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailProgress {
    /// Checked ingredients
    pub ingredients_checked: usize,
    /// Total ingredients
    pub ingredients_total: usize,
    /// Completed steps
    pub steps_completed: usize,
    /// Total steps
    pub steps_total: usize,
}

impl DetailProgress {
    /// Whether every ingredient and step is checked
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.ingredients_checked == self.ingredients_total
            && self.steps_completed == self.steps_total
    }
}

/// The recipe currently opened, plus its session-local checklists
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetail {
    recipe: Recipe,
    checked_ingredients: BTreeSet<usize>,
    checked_steps: BTreeSet<usize>,
}

impl RecipeDetail {
    /// Open `recipe` with nothing checked
    #[must_use]
    pub const fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            checked_ingredients: BTreeSet::new(),
            checked_steps: BTreeSet::new(),
        }
    }

    /// The recipe shown
    #[must_use]
    pub const fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Flip an ingredient checkmark, returning the new state
    ///
    /// # Errors
    ///
    /// Returns a value-out-of-range error for an index past the ingredient list
    pub fn toggle_ingredient(&mut self, index: usize) -> AppResult<bool> {
        let len = self.recipe.ingredients.len();
        toggle_index(&mut self.checked_ingredients, index, len, "ingredient list")
    }

    /// Flip a step checkmark, returning the new state
    ///
    /// # Errors
    ///
    /// Returns a value-out-of-range error for an index past the instructions
    pub fn toggle_step(&mut self, index: usize) -> AppResult<bool> {
        let len = self.recipe.instructions.len();
        toggle_index(&mut self.checked_steps, index, len, "instruction list")
    }

    /// Checked ingredient positions
    #[must_use]
    pub const fn checked_ingredients(&self) -> &BTreeSet<usize> {
        &self.checked_ingredients
    }

    /// Completed step positions
    #[must_use]
    pub const fn checked_steps(&self) -> &BTreeSet<usize> {
        &self.checked_steps
    }

    /// Counts for both checklists
    #[must_use]
    pub fn progress(&self) -> DetailProgress {
        DetailProgress {
            ingredients_checked: self.checked_ingredients.len(),
            ingredients_total: self.recipe.ingredients.len(),
            steps_completed: self.checked_steps.len(),
            steps_total: self.recipe.instructions.len(),
        }
    }

    /// Shopping list lines for every ingredient, in recipe order
    #[must_use]
    pub fn shopping_entries(&self) -> Vec<String> {
        self.recipe.shopping_entries()
    }
}

fn toggle_index(set: &mut BTreeSet<usize>, index: usize, len: usize, what: &str) -> AppResult<bool> {
    if index >= len {
        return Err(AppError::value_out_of_range(what, index, len));
    }
    if set.remove(&index) {
        Ok(false)
    } else {
        set.insert(index);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::fixture::Fixture;

    fn pancakes() -> RecipeDetail {
        let fixture = Fixture::builtin();
        RecipeDetail::new(fixture.recipe("fluffy-pancakes").unwrap().clone())
    }

    #[test]
    fn test_toggles_and_progress() {
        let mut detail = pancakes();
        let total = detail.progress();
        assert_eq!(total.ingredients_checked, 0);
        assert!(!total.is_complete());

        assert!(detail.toggle_ingredient(0).unwrap());
        assert!(detail.toggle_step(1).unwrap());
        assert!(!detail.toggle_ingredient(0).unwrap());

        let progress = detail.progress();
        assert_eq!(progress.ingredients_checked, 0);
        assert_eq!(progress.steps_completed, 1);
        assert_eq!(detail.checked_steps(), &BTreeSet::from([1]));
    }

    #[test]
    fn test_out_of_range_toggle_is_rejected() {
        let mut detail = pancakes();
        let len = detail.recipe().ingredients.len();
        let err = detail.toggle_ingredient(len).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(detail.checked_ingredients().is_empty());
    }

    #[test]
    fn test_shopping_entries_cover_every_ingredient() {
        let detail = pancakes();
        let entries = detail.shopping_entries();
        assert_eq!(entries.len(), detail.recipe().ingredients.len());
        assert!(entries.iter().all(|line| !line.contains("  ")));
    }
}
