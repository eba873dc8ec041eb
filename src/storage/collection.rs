// ABOUTME: Ordered in-memory collection mirrored wholesale to a single storage key
// ABOUTME: Falls back to in-memory-only operation after the first storage failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::SharedStore;
use crate::errors::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// An ordered collection whose every change is written to storage
///
/// The in-memory items are authoritative. Storage is best effort: when a
/// read at open time or any later write fails, the collection logs a warning,
/// drops its store handle, and keeps working in memory for the rest of the
/// session.
pub struct PersistedCollection<T> {
    key: String,
    items: Vec<T>,
    store: Option<SharedStore>,
}

impl<T> PersistedCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Load the collection stored under `key`
    ///
    /// A missing key yields an empty collection. Unparsable contents are
    /// discarded (the next write replaces them). An unreadable store puts
    /// the collection straight into in-memory mode.
    #[must_use]
    pub fn open(store: SharedStore, key: impl Into<String>) -> Self {
        let key = key.into();
        match store.get(&key) {
            Ok(Some(json)) => {
                let items = serde_json::from_str::<Vec<T>>(&json).unwrap_or_else(|e| {
                    warn!(
                        store.key = %key,
                        store.backend = store.backend_name(),
                        "Discarding unreadable stored collection: {e}"
                    );
                    Vec::new()
                });
                debug!(store.key = %key, items = items.len(), "Loaded collection");
                Self {
                    key,
                    items,
                    store: Some(store),
                }
            }
            Ok(None) => Self {
                key,
                items: Vec::new(),
                store: Some(store),
            },
            Err(e) => {
                warn!(
                    store.key = %key,
                    store.backend = store.backend_name(),
                    "Storage unavailable, continuing without persistence: {e}"
                );
                Self::in_memory(key)
            }
        }
    }

    /// A collection that never touches storage
    #[must_use]
    pub fn in_memory(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            items: Vec::new(),
            store: None,
        }
    }

    /// Current items in order
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether changes are still being written to storage
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    /// Replace the whole collection and write it out
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.persist();
    }

    /// Mutate the items in place, then write the result out
    pub fn update<R>(&mut self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let result = f(&mut self.items);
        self.persist();
        result
    }

    fn persist(&mut self) {
        let Some(store) = self.store.as_ref() else {
            return;
        };

        let written = serde_json::to_string(&self.items)
            .map_err(AppError::from)
            .and_then(|json| store.set(&self.key, &json));

        if let Err(e) = written {
            warn!(
                store.key = %self.key,
                store.backend = store.backend_name(),
                error.code = ?e.code,
                "Persisting collection failed, continuing in memory only: {e}"
            );
            self.store = None;
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistedCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedCollection")
            .field("key", &self.key)
            .field("items", &self.items)
            .field("persistent", &self.store.is_some())
            .finish()
    }
}
