// ABOUTME: Environment configuration for storage location, fixture source, and deployment mode
// ABOUTME: Parses environment variables into typed settings and builds the configured store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::defaults;
use crate::fixture::Fixture;
use crate::storage::{FileStore, MemoryStore, SharedStore};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Directory for persisted data (defaults to the platform data dir)
pub const DATA_DIR_ENV: &str = "RECIPE_FINDER_DATA_DIR";
/// Storage backend selector: `file` or `memory`
pub const STORAGE_ENV: &str = "RECIPE_FINDER_STORAGE";
/// Optional path of an external fixture document
pub const FIXTURE_ENV: &str = "RECIPE_FINDER_FIXTURE";
/// Deployment environment name
pub const ENVIRONMENT_ENV: &str = "ENVIRONMENT";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Installed for real use
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        })
    }
}

/// Where favorites and the shopping list are kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum StorageBackend {
    /// One JSON file per key inside `dir`
    File {
        /// Data directory
        dir: PathBuf,
    },
    /// Process memory only; nothing survives the session
    Memory,
}

impl StorageBackend {
    /// Short backend name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::File { .. } => "file",
            Self::Memory => "memory",
        }
    }
}

impl Default for StorageBackend {
    fn default() -> Self {
        Self::File {
            dir: default_data_dir(),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { dir } => write!(f, "file ({})", dir.display()),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Platform data directory for the application, `./.recipe-finder` when unknown
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || PathBuf::from(defaults::FALLBACK_DATA_DIR),
        |dir| dir.join(defaults::DATA_DIR_NAME),
    )
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Persistence backend
    pub storage: StorageBackend,
    /// External fixture replacing the built-in one
    pub fixture_path: Option<PathBuf>,
    /// Deployment environment
    pub environment: Environment,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `RECIPE_FINDER_STORAGE` names an unknown backend
    /// or a variable holds non-UTF-8 data
    pub fn from_env() -> Result<Self> {
        let data_dir = env_var_opt(DATA_DIR_ENV)?.map_or_else(default_data_dir, PathBuf::from);

        let storage = match env_var_opt(STORAGE_ENV)?.as_deref().map(str::trim) {
            None | Some("" | "file") => StorageBackend::File { dir: data_dir },
            Some("memory") => StorageBackend::Memory,
            Some(other) => bail!("Invalid {STORAGE_ENV} value '{other}', expected 'file' or 'memory'"),
        };

        let config = Self {
            storage,
            fixture_path: env_var_opt(FIXTURE_ENV)?
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            environment: Environment::from_str_or_default(
                &env_var_opt(ENVIRONMENT_ENV)?.unwrap_or_default(),
            ),
        };

        info!(
            storage = config.storage.name(),
            environment = %config.environment,
            "Loaded configuration from environment"
        );
        Ok(config)
    }

    /// Override the data directory (implies file storage)
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage = StorageBackend::File { dir: dir.into() };
        self
    }

    /// Switch to in-memory storage
    #[must_use]
    pub fn with_memory_storage(mut self) -> Self {
        self.storage = StorageBackend::Memory;
        self
    }

    /// Use an external fixture
    #[must_use]
    pub fn with_fixture(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixture_path = Some(path.into());
        self
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture file is missing or the data directory
    /// path points at a regular file
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.fixture_path {
            if !path.is_file() {
                bail!("Fixture file {} does not exist", path.display());
            }
        }

        if let StorageBackend::File { dir } = &self.storage {
            if dir.is_file() {
                bail!("Data directory {} is a file", dir.display());
            }
            if dir.is_relative() && self.environment.is_production() {
                warn!(
                    data_dir = %dir.display(),
                    "Relative data directory in production, persisted data depends on the working directory"
                );
            }
        }

        Ok(())
    }

    /// Human readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Finder Configuration:\n\
             - Storage: {}\n\
             - Fixture: {}\n\
             - Environment: {}",
            self.storage,
            self.fixture_path
                .as_deref()
                .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string()),
            self.environment,
        )
    }

    /// Build the configured key-value store
    #[must_use]
    pub fn open_store(&self) -> SharedStore {
        match &self.storage {
            StorageBackend::File { dir } => Arc::new(FileStore::new(dir.clone())),
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
        }
    }

    /// Load the configured fixture (the built-in one unless a path is set)
    ///
    /// # Errors
    ///
    /// Returns an error if an external fixture cannot be read or parsed
    pub fn load_fixture(&self) -> Result<Arc<Fixture>> {
        match &self.fixture_path {
            None => Ok(Fixture::builtin()),
            Some(path) => load_external_fixture(path),
        }
    }
}

fn load_external_fixture(path: &Path) -> Result<Arc<Fixture>> {
    let fixture = Fixture::load(path)
        .with_context(|| format!("Failed to load fixture from {}", path.display()))?;
    Ok(Arc::new(fixture))
}

/// Read an optional environment variable, rejecting non-UTF-8 values
fn env_var_opt(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Invalid {name} value")),
    }
}
