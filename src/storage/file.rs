// ABOUTME: Directory-backed key-value store writing one JSON file per key
// ABOUTME: Replaces files atomically through a temporary sibling so readers never see torn writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use crate::constants::defaults::STORE_FILE_EXTENSION;
use crate::errors::{AppError, AppResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key-value store rooted at a directory
///
/// The directory is created lazily on the first write, so opening a store
/// on a fresh machine does not touch the filesystem.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the key files
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for keys that are not plain file names
    pub fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(AppError::invalid_input(format!(
                "storage key '{key}' must be a plain file name"
            )));
        }
        Ok(self.root.join(format!("{key}.{STORE_FILE_EXTENSION}")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("failed to read {}", path.display()))
                .with_resource_id(key)
                .with_source(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|e| {
            AppError::storage(format!("failed to create {}", self.root.display())).with_source(e)
        })?;

        let tmp = path.with_extension(format!("{STORE_FILE_EXTENSION}.tmp"));
        fs::write(&tmp, value).map_err(|e| {
            AppError::storage(format!("failed to write {}", tmp.display()))
                .with_resource_id(key)
                .with_source(e)
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            AppError::storage(format!("failed to replace {}", path.display()))
                .with_resource_id(key)
                .with_source(e)
        })?;

        debug!(store.key = %key, store.bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!("failed to remove {}", path.display()))
                .with_resource_id(key)
                .with_source(e)),
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
