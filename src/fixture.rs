// ABOUTME: Static recipe and category fixture, loaded once and shared read-only
// ABOUTME: Embeds data/recipes.json and reports data-consistency problems without failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Fixture
//!
//! The fixture is the only source of recipes. It is never mutated after
//! loading; every accessor hands out the same ordered slices.
//!
//! Category counts are authored by hand. [`Fixture::consistency_issues`]
//! compares them with the recipes and the loader logs any disagreement, but
//! nothing is corrected automatically.

use crate::errors::{AppError, AppResult};
use crate::models::{Category, Recipe};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, warn};

/// Built-in fixture compiled into the binary (single source of truth)
const BUILTIN_FIXTURE_JSON: &str = include_str!("../data/recipes.json");

static BUILTIN_FIXTURE: OnceLock<Arc<Fixture>> = OnceLock::new();

/// Read-only recipe and category dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    recipes: Vec<Recipe>,
    categories: Vec<Category>,
}

/// A disagreement between the fixture's declared metadata and its records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureIssue {
    /// Two recipes share an identifier
    DuplicateRecipeId {
        /// The repeated identifier
        id: String,
    },
    /// A category's declared count differs from the number of recipes in it
    CategoryCountMismatch {
        /// Category identifier
        category: String,
        /// Count written in the fixture
        declared: usize,
        /// Count derived from the recipes
        actual: usize,
    },
    /// A recipe references a category that is not listed
    UnknownCategory {
        /// Recipe identifier
        recipe_id: String,
        /// Category it claims
        category: String,
    },
}

impl fmt::Display for FixtureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRecipeId { id } => write!(f, "duplicate recipe id '{id}'"),
            Self::CategoryCountMismatch {
                category,
                declared,
                actual,
            } => write!(
                f,
                "category '{category}' declares {declared} recipes but has {actual}"
            ),
            Self::UnknownCategory {
                recipe_id,
                category,
            } => write!(
                f,
                "recipe '{recipe_id}' uses unlisted category '{category}'"
            ),
        }
    }
}

impl Fixture {
    /// Build a fixture from records
    #[must_use]
    pub fn new(recipes: Vec<Recipe>, categories: Vec<Category>) -> Self {
        Self {
            recipes,
            categories,
        }
    }

    /// The built-in fixture, parsed on first use and shared afterwards
    ///
    /// The embedded document is covered by tests; should it ever fail to
    /// parse, the error is logged and an empty fixture is returned so the
    /// application still starts.
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        Arc::clone(BUILTIN_FIXTURE.get_or_init(|| {
            let fixture = Self::from_json(BUILTIN_FIXTURE_JSON).unwrap_or_else(|e| {
                error!("Failed to parse built-in recipe fixture: {e}");
                Self::default()
            });
            fixture.report_issues("builtin");
            Arc::new(fixture)
        }))
    }

    /// Parse a fixture document
    ///
    /// # Errors
    ///
    /// Returns an invalid-format error if the JSON does not match the fixture schema
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            AppError::invalid_format(format!("recipe fixture is malformed: {e}")).with_source(e)
        })
    }

    /// Load an external fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::not_found(format!("fixture file {}", path.display())).with_source(e)
        })?;
        let fixture = Self::from_json(&json)?;
        fixture.report_issues(&path.display().to_string());
        Ok(fixture)
    }

    /// All recipes in fixture order
    #[must_use]
    pub fn all_recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// All categories in fixture order
    #[must_use]
    pub fn all_categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a recipe by identifier
    #[must_use]
    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Look up a category by identifier
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Compare declared metadata with the records
    #[must_use]
    pub fn consistency_issues(&self) -> Vec<FixtureIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for recipe in &self.recipes {
            if !seen.insert(recipe.id.as_str()) {
                issues.push(FixtureIssue::DuplicateRecipeId {
                    id: recipe.id.clone(),
                });
            }
        }

        let mut actual: HashMap<&str, usize> = HashMap::new();
        for recipe in &self.recipes {
            *actual.entry(recipe.category.as_str()).or_default() += 1;
        }

        for category in &self.categories {
            let count = if category.is_all() {
                self.recipes.len()
            } else {
                actual.get(category.id.as_str()).copied().unwrap_or(0)
            };
            if count != category.count {
                issues.push(FixtureIssue::CategoryCountMismatch {
                    category: category.id.clone(),
                    declared: category.count,
                    actual: count,
                });
            }
        }

        for recipe in &self.recipes {
            if self.category(&recipe.category).is_none() {
                issues.push(FixtureIssue::UnknownCategory {
                    recipe_id: recipe.id.clone(),
                    category: recipe.category.clone(),
                });
            }
        }

        issues
    }

    fn report_issues(&self, source: &str) {
        let issues = self.consistency_issues();
        for issue in &issues {
            warn!(fixture.source = %source, "Fixture inconsistency: {issue}");
        }
        debug!(
            fixture.source = %source,
            recipes = self.recipes.len(),
            categories = self.categories.len(),
            issues = issues.len(),
            "Recipe fixture loaded"
        );
    }
}
