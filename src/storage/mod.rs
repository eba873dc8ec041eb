// ABOUTME: Key-value persistence abstraction with file and in-memory backends
// ABOUTME: PersistedCollection mirrors an ordered in-memory collection to one storage key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Storage
//!
//! Collections are stored as whole JSON documents under fixed keys and are
//! rewritten in full after every change; no key is ever patched in place.
//! Concurrent sessions pointed at the same key simply overwrite each other
//! (last writer wins).
//!
//! Backends:
//! - [`FileStore`]: one `<key>.json` file per key, replaced atomically
//! - [`MemoryStore`]: process-local map with an optional byte quota

/// Persisted ordered collections
pub mod collection;
/// Directory-backed store
pub mod file;
/// In-memory store
pub mod memory;

pub use collection::PersistedCollection;
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::AppResult;
use std::sync::Arc;

/// Durable string key-value store
///
/// Values are complete serialized documents. `set` either stores the whole
/// value or fails without changing what a later `get` returns.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` when absent
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns a storage or quota error if the value was not stored
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`; deleting an absent key succeeds
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    fn remove(&self, key: &str) -> AppResult<()>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}

/// Store handle shared by every collection of a session
pub type SharedStore = Arc<dyn KeyValueStore>;
