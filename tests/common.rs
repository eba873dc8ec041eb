// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides session builders, recipe lookups, and misbehaving stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `recipe_finder`

use recipe_finder::errors::{AppError, AppResult};
use recipe_finder::fixture::Fixture;
use recipe_finder::models::Recipe;
use recipe_finder::session::RecipeSession;
use recipe_finder::storage::{KeyValueStore, MemoryStore, SharedStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Session over the built-in fixture backed by a fresh memory store
pub fn memory_session() -> (RecipeSession, Arc<MemoryStore>) {
    init_test_logging();
    let memory = Arc::new(MemoryStore::new());
    let store: SharedStore = memory.clone();
    (RecipeSession::open(Fixture::builtin(), store), memory)
}

/// Identifiers of a result list, in order
pub fn ids(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.id.clone()).collect()
}

/// Store whose reads succeed empty and whose writes always fail
#[derive(Debug, Default)]
pub struct FailingWriteStore {
    pub attempts: AtomicUsize,
}

impl KeyValueStore for FailingWriteStore {
    fn get(&self, _key: &str) -> AppResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> AppResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AppError::storage(format!("write to {key} refused")))
    }

    fn remove(&self, _key: &str) -> AppResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "failing-write"
    }
}

/// Store that cannot be read at all
#[derive(Debug, Default)]
pub struct UnreadableStore {
    pub writes: AtomicUsize,
}

impl KeyValueStore for UnreadableStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Err(AppError::storage(format!("read of {key} refused")))
    }

    fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, _key: &str) -> AppResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "unreadable"
    }
}
