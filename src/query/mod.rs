// ABOUTME: Filter state, category selection, and sort order for the recipe query pipeline
// ABOUTME: Typed replacements for the "all"/threshold strings used by filter inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Query
//!
//! [`query`] derives the visible recipe list from the fixture, the search
//! text, the selected category, and a [`FilterState`]. Filter inputs arrive
//! as strings (`"all"`, `"30"`, `"easy"`), so every filter type keeps a
//! string wire form through serde while the pipeline works on typed values.

/// The search/filter/sort pipeline
pub mod pipeline;
/// Aggregate statistics over a result set
pub mod stats;

pub use pipeline::query;
pub use stats::QueryStats;

use crate::constants::{filter_options, selection};
use crate::errors::{AppError, AppResult};
use crate::models::{Difficulty, Recipe};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Which category the user is browsing
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategorySelection {
    /// No category restriction
    #[default]
    All,
    /// Only recipes whose category equals this identifier
    Only(String),
}

impl CategorySelection {
    /// Interpret a category identifier, `all` meaning no restriction
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        if id == selection::ALL {
            Self::All
        } else {
            Self::Only(id.to_owned())
        }
    }

    /// Identifier form (`all` for no restriction)
    #[must_use]
    pub fn as_id(&self) -> &str {
        match self {
            Self::All => selection::ALL,
            Self::Only(id) => id,
        }
    }

    /// Whether `recipe` belongs to the selection
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => recipe.category == *id,
        }
    }
}

impl From<String> for CategorySelection {
    fn from(id: String) -> Self {
        Self::from_id(&id)
    }
}

impl From<CategorySelection> for String {
    fn from(selection: CategorySelection) -> Self {
        selection.as_id().to_owned()
    }
}

/// Upper bound on cooking time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CookTimeLimit {
    /// No limit
    #[default]
    Any,
    /// Keep recipes with `cook_time <= minutes`
    AtMost(u32),
}

impl CookTimeLimit {
    /// Parse a threshold, treating anything unparsable as no limit
    ///
    /// Accepts `all` (any case) or a non-negative integer, surrounding
    /// whitespace ignored. Inputs such as `"abc"`, `"-5"` or `"30min"` mean
    /// [`CookTimeLimit::Any`] rather than an error.
    #[must_use]
    pub fn parse_lossy(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case(selection::ALL) {
            return Self::Any;
        }
        trimmed.parse::<u32>().map_or(Self::Any, Self::AtMost)
    }

    /// Whether `recipe` is within the limit
    #[must_use]
    pub fn allows(self, recipe: &Recipe) -> bool {
        match self {
            Self::Any => true,
            Self::AtMost(minutes) => recipe.cook_time <= minutes,
        }
    }
}

impl From<String> for CookTimeLimit {
    fn from(value: String) -> Self {
        Self::parse_lossy(&value)
    }
}

impl From<CookTimeLimit> for String {
    fn from(limit: CookTimeLimit) -> Self {
        limit.to_string()
    }
}

impl fmt::Display for CookTimeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(selection::ALL),
            Self::AtMost(minutes) => write!(f, "{minutes}"),
        }
    }
}

/// Required difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DifficultyFilter {
    /// Any difficulty
    #[default]
    Any,
    /// Exactly this difficulty
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Whether `recipe` passes the filter
    #[must_use]
    pub fn allows(self, recipe: &Recipe) -> bool {
        match self {
            Self::Any => true,
            Self::Only(difficulty) => recipe.difficulty == difficulty,
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        if s.trim().eq_ignore_ascii_case(selection::ALL) {
            Ok(Self::Any)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl TryFrom<String> for DifficultyFilter {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        value.parse()
    }
}

impl From<DifficultyFilter> for String {
    fn from(filter: DifficultyFilter) -> Self {
        match filter {
            DifficultyFilter::Any => selection::ALL.to_owned(),
            DifficultyFilter::Only(difficulty) => difficulty.as_str().to_owned(),
        }
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// Highest `rating × servings` first
    #[default]
    Popularity,
    /// Highest rating first
    Rating,
    /// Quickest first
    CookTime,
}

impl SortBy {
    /// Every sort order in display order
    pub const ALL: [Self; 3] = [Self::Popularity, Self::Rating, Self::CookTime];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::Rating => "rating",
            Self::CookTime => "cookTime",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Popularity => "Most Popular",
            Self::Rating => "Highest Rated",
            Self::CookTime => "Quickest First",
        }
    }
}

impl FromStr for SortBy {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim() {
            "popularity" => Ok(Self::Popularity),
            "rating" => Ok(Self::Rating),
            "cookTime" | "cook-time" | "cook_time" => Ok(Self::CookTime),
            other => Err(AppError::invalid_input(format!(
                "unknown sort order '{other}', expected popularity, rating or cookTime"
            ))),
        }
    }
}

/// User-configurable predicates and ordering
///
/// Edits never patch a shared instance: every change produces a new value
/// that replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Tags a recipe must all carry
    pub dietary: BTreeSet<String>,
    /// Maximum cooking time
    pub cook_time: CookTimeLimit,
    /// Required difficulty
    pub difficulty: DifficultyFilter,
    /// Result ordering
    pub sort_by: SortBy,
}

impl FilterState {
    /// The default state: no filters, sorted by popularity
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Whether any predicate is active (sort order does not count)
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.dietary.is_empty()
            || self.cook_time != CookTimeLimit::Any
            || self.difficulty != DifficultyFilter::Any
    }

    /// A copy with `tag` added if absent or removed if present
    #[must_use]
    pub fn toggle_dietary(&self, tag: &str) -> Self {
        let mut next = self.clone();
        if !next.dietary.remove(tag) {
            next.dietary.insert(tag.to_owned());
        }
        next
    }

    /// A copy with the fields present in `patch` replaced
    #[must_use]
    pub fn apply(&self, patch: FilterPatch) -> Self {
        Self {
            dietary: patch.dietary.unwrap_or_else(|| self.dietary.clone()),
            cook_time: patch.cook_time.unwrap_or(self.cook_time),
            difficulty: patch.difficulty.unwrap_or(self.difficulty),
            sort_by: patch.sort_by.unwrap_or(self.sort_by),
        }
    }

    /// Whether `recipe` passes every active predicate except search and category
    #[must_use]
    pub fn allows(&self, recipe: &Recipe) -> bool {
        recipe.has_all_tags(&self.dietary)
            && self.cook_time.allows(recipe)
            && self.difficulty.allows(recipe)
    }

    /// Dietary tags offered by the filter panel
    #[must_use]
    pub fn dietary_options() -> &'static [&'static str] {
        &filter_options::DIETARY_TAGS
    }

    /// Cook time choices offered by the filter panel, with display labels
    #[must_use]
    pub fn cook_time_options() -> Vec<(CookTimeLimit, &'static str)> {
        filter_options::COOK_TIME_OPTIONS
            .iter()
            .map(|&(value, label)| (CookTimeLimit::parse_lossy(value), label))
            .collect()
    }

    /// Difficulty choices offered by the filter panel, with display labels
    ///
    /// Unknown values in the catalogue are skipped.
    #[must_use]
    pub fn difficulty_options() -> Vec<(DifficultyFilter, &'static str)> {
        filter_options::DIFFICULTY_OPTIONS
            .iter()
            .filter_map(|&(value, label)| {
                value
                    .parse::<DifficultyFilter>()
                    .ok()
                    .map(|filter| (filter, label))
            })
            .collect()
    }
}

/// Partial filter update; absent fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterPatch {
    /// New dietary tag set
    pub dietary: Option<BTreeSet<String>>,
    /// New cook time limit
    pub cook_time: Option<CookTimeLimit>,
    /// New difficulty filter
    pub difficulty: Option<DifficultyFilter>,
    /// New sort order
    pub sort_by: Option<SortBy>,
}
