// ABOUTME: Category record shown by the category browser
// ABOUTME: Carries display metadata and the author-maintained recipe count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::selection;
use serde::{Deserialize, Serialize};

/// A browsable recipe category
///
/// `count` is maintained by whoever authors the fixture and is not derived
/// from the recipes. The `all` pseudo-category counts every recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier matched against `Recipe::category`
    pub id: String,
    /// Display name
    pub name: String,
    /// Icon glyph (usually an emoji)
    pub icon: String,
    /// Declared number of recipes in this category
    pub count: usize,
}

impl Category {
    /// Whether this is the catch-all pseudo-category
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.id == selection::ALL
    }
}
