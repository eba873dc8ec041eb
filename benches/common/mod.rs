// ABOUTME: Common benchmark utilities and data generators for recipe queries
// ABOUTME: Provides reusable catalog builders for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities.

pub mod fixtures;
