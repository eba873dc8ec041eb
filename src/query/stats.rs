// ABOUTME: Summary statistics over a query result set
// ABOUTME: Count, rounded average cook time, and average rating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::Recipe;
use serde::{Deserialize, Serialize};

/// Aggregates shown next to the result list
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryStats {
    /// Number of recipes in the result
    pub count: usize,
    /// Mean cook time rounded to whole minutes, `None` for an empty result
    pub average_cook_time: Option<u32>,
    /// Mean rating, `None` for an empty result
    pub average_rating: Option<f64>,
}

impl QueryStats {
    /// Compute statistics for a result list
    #[must_use]
    pub fn from_recipes(recipes: &[&Recipe]) -> Self {
        let count = recipes.len();
        if count == 0 {
            return Self::default();
        }

        #[allow(clippy::cast_precision_loss)]
        let n = count as f64;
        let total_minutes: f64 = recipes.iter().map(|r| f64::from(r.cook_time)).sum();
        let total_rating: f64 = recipes.iter().map(|r| r.rating).sum();

        // Mean of u32 values is within u32 range and non-negative
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let average_cook_time = (total_minutes / n).round() as u32;

        Self {
            count,
            average_cook_time: Some(average_cook_time),
            average_rating: Some(total_rating / n),
        }
    }

    /// Average rating formatted with one decimal, or `-` when empty
    #[must_use]
    pub fn rating_label(&self) -> String {
        self.average_rating
            .map_or_else(|| "-".to_owned(), |rating| format!("{rating:.1}"))
    }
}
