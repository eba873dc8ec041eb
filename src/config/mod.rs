// ABOUTME: Configuration module for storage, fixture, and environment settings
// ABOUTME: Re-exports the environment-driven application configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the Recipe Finder
//!
//! - **Environment**: storage backend, data directory, fixture source, and
//!   deployment mode read from environment variables

/// Environment-driven application configuration
pub mod environment;

pub use environment::{AppConfig, Environment, StorageBackend};
