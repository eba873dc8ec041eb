// ABOUTME: Re-exports command modules for recipe-finder
// ABOUTME: Provides access to browsing, favorites, and shopping list commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod browse;
pub mod favorites;
pub mod shopping;
