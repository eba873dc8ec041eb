// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment parsing, storage selection, and fixture overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use recipe_finder::config::environment::{
    AppConfig, Environment, StorageBackend, DATA_DIR_ENV, ENVIRONMENT_ENV, FIXTURE_ENV, STORAGE_ENV,
};
use recipe_finder::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

fn clear_env() {
    for name in [DATA_DIR_ENV, STORAGE_ENV, FIXTURE_ENV, ENVIRONMENT_ENV, "LOG_FORMAT"] {
        env::remove_var(name);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
}

#[test]
#[serial]
fn test_from_env_defaults_to_file_storage() {
    clear_env();
    let dir = TempDir::new().unwrap();
    env::set_var(DATA_DIR_ENV, dir.path());

    let config = AppConfig::from_env().unwrap();

    assert_eq!(
        config.storage,
        StorageBackend::File {
            dir: dir.path().to_path_buf()
        }
    );
    assert_eq!(config.fixture_path, None);
    assert_eq!(config.environment, Environment::Development);
    config.validate().unwrap();
    clear_env();
}

#[test]
#[serial]
fn test_memory_storage_selection() {
    clear_env();
    env::set_var(STORAGE_ENV, "memory");
    env::set_var(ENVIRONMENT_ENV, "production");

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.storage, StorageBackend::Memory);
    assert!(config.environment.is_production());
    assert!(config.summary().contains("Storage: memory"));
    clear_env();
}

#[test]
#[serial]
fn test_unknown_storage_backend_is_rejected() {
    clear_env();
    env::set_var(STORAGE_ENV, "bogus");

    let err = AppConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("bogus"));
    clear_env();
}

#[test]
#[serial]
fn test_fixture_override_is_loaded() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fixture.json");
    fs::write(
        &path,
        r#"{
            "categories": [{"id": "snack", "name": "Snacks", "icon": "S", "count": 1}],
            "recipes": [{
                "id": "toast",
                "title": "Toast",
                "description": "Bread, toasted",
                "image": "toast.jpg",
                "cuisine": "British",
                "category": "snack",
                "cookTime": 3,
                "servings": 1,
                "difficulty": "easy",
                "rating": 4.0,
                "dietary": ["vegetarian"],
                "ingredients": [{"name": "bread", "amount": "1", "unit": "slice"}],
                "instructions": ["Toast the bread"]
            }]
        }"#,
    )
    .unwrap();
    env::set_var(FIXTURE_ENV, &path);
    env::set_var(STORAGE_ENV, "memory");

    let config = AppConfig::from_env().unwrap();
    config.validate().unwrap();
    let fixture = config.load_fixture().unwrap();

    assert_eq!(fixture.all_recipes().len(), 1);
    assert_eq!(fixture.all_recipes()[0].id, "toast");
    clear_env();
}

#[test]
#[serial]
fn test_data_dir_pointing_at_file_fails_validation() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("not-a-dir");
    fs::write(&file, "").unwrap();

    let config = AppConfig::default().with_data_dir(&file);
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    env::set_var(ENVIRONMENT_ENV, "production");

    let config = LoggingConfig::from_env();

    assert!(matches!(config.format, LogFormat::Json));
    assert_eq!(config.environment, "production");
    assert!(config.include_location);
    clear_env();
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "warn");
    assert!(matches!(config.format, LogFormat::Compact));
    assert_eq!(config.service_name, "recipe-finder");
    assert!(!config.include_location);
}
