// ABOUTME: Main library entry point for the Recipe Finder application
// ABOUTME: Wires the fixture, query pipeline, persisted collections, and session together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Finder
//!
//! Recipe browsing over a static fixture: free-text search, category and
//! dietary filtering, sorting, a persisted favorites list, and a persisted
//! shopping list with session-local completion tracking.
//!
//! ## Architecture
//!
//! - **Fixture**: read-only recipes and categories, loaded once
//! - **Query**: pure search/filter/sort pipeline over the fixture
//! - **Storage**: key-value backends and the `PersistedCollection` mirror
//! - **Favorites / Shopping**: controllers over persisted collections
//! - **Detail**: per-selection ingredient and step checklists
//! - **Session**: explicit context object that owns all mutable state and
//!   translates user intents into controller calls
//!
//! ## Example Usage
//!
//! ```text
//! use recipe_finder::{fixture::Fixture, session::RecipeSession, storage::MemoryStore};
//!
//! let mut session = RecipeSession::open(Fixture::builtin(), Arc::new(MemoryStore::new()));
//! session.set_search_text("egg");
//! for recipe in session.visible_recipes() {
//!     println!("{} ({} min)", recipe.title, recipe.cook_time);
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Recipe detail view state (ingredient and step checklists)
pub mod detail;

/// Favorites controller
pub mod favorites;

/// Static recipe and category fixture
pub mod fixture;

/// Structured logging setup
pub mod logging;

/// Search, filter, and sort pipeline
pub mod query;

/// Explicit session state and intent handling
pub mod session;

/// Shopping list controller
pub mod shopping;

/// Key-value persistence backends and persisted collections
pub mod storage;

/// Re-export of the core crate's error handling
pub mod errors {
    pub use recipe_finder_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};
}

/// Re-export of the core crate's data models
pub mod models {
    pub use recipe_finder_core::models::{Category, Difficulty, Ingredient, Nutrition, Recipe};
}

/// Re-export of the core crate's constants
pub use recipe_finder_core::constants;
