// ABOUTME: Recipe data model matching the fixture wire format
// ABOUTME: Defines Recipe, Ingredient, Nutrition, and the Difficulty enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How demanding a recipe is to cook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Few steps, basic techniques
    Easy,
    /// Some technique or timing required
    Medium,
    /// Advanced techniques or long preparation
    Hard,
}

impl Difficulty {
    /// All difficulties in display order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Wire and display name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(AppError::invalid_input(format!(
                "unknown difficulty '{other}', expected easy, medium or hard"
            ))),
        }
    }
}

/// Single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name, searched by the query pipeline
    pub name: String,
    /// Free-form quantity ("2", "1/2", "a pinch")
    pub amount: String,
    /// Measurement unit, may be empty for counted items
    #[serde(default)]
    pub unit: String,
}

impl Ingredient {
    /// Create an ingredient line
    #[must_use]
    pub fn new(name: impl Into<String>, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
        }
    }

    /// Text used when the ingredient is sent to the shopping list
    ///
    /// Renders `"<amount> <unit> <name>"`, skipping empty parts so counted
    /// items read `"2 eggs"` rather than carrying a double space.
    #[must_use]
    pub fn shopping_entry(&self) -> String {
        [self.amount.trim(), self.unit.trim(), self.name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Per-serving nutrition facts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

/// A fixture recipe. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique identifier within the fixture
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Image reference (URL or path)
    pub image: String,
    /// Cuisine name ("Italian", "Thai", ...)
    pub cuisine: String,
    /// Category identifier, matches `Category::id`
    pub category: String,
    /// Cooking time in minutes
    pub cook_time: u32,
    /// Number of servings, at least one
    pub servings: u32,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Average rating, expected in `0.0..=5.0`
    pub rating: f64,
    /// Dietary tags ("vegan", "gluten-free", ...)
    #[serde(default)]
    pub dietary: Vec<String>,
    /// Ordered ingredient lines
    pub ingredients: Vec<Ingredient>,
    /// Ordered instruction steps
    pub instructions: Vec<String>,
    /// Optional per-serving nutrition facts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl Recipe {
    /// Whether the recipe carries the given dietary tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.dietary.iter().any(|t| t == tag)
    }

    /// Whether the recipe carries every tag in `tags` (vacuously true when empty)
    #[must_use]
    pub fn has_all_tags<I, S>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter().all(|tag| self.has_tag(tag.as_ref()))
    }

    /// Case-insensitive match of an already-lowercased needle against
    /// title, cuisine, and ingredient names
    #[must_use]
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.cuisine.to_lowercase().contains(needle_lower)
            || self
                .ingredients
                .iter()
                .any(|ing| ing.name.to_lowercase().contains(needle_lower))
    }

    /// Popularity score: rating weighted by servings
    #[must_use]
    pub fn popularity(&self) -> f64 {
        self.rating * f64::from(self.servings)
    }

    /// Shopping list text for every ingredient, in recipe order
    #[must_use]
    pub fn shopping_entries(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(Ingredient::shopping_entry)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn omelette() -> Recipe {
        Recipe {
            id: "omelette".into(),
            title: "Herb Omelette".into(),
            description: "Fluffy eggs".into(),
            image: "/img/omelette.jpg".into(),
            cuisine: "French".into(),
            category: "breakfast".into(),
            cook_time: 10,
            servings: 2,
            difficulty: Difficulty::Easy,
            rating: 4.5,
            dietary: vec!["vegetarian".into(), "gluten-free".into()],
            ingredients: vec![
                Ingredient::new("Eggs", "3", ""),
                Ingredient::new("Chives", "1", "tbsp"),
            ],
            instructions: vec!["Whisk".into(), "Cook".into()],
            nutrition: None,
        }
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("Medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(" hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let recipe = omelette();
        assert!(recipe.matches_search("omelette"));
        assert!(recipe.matches_search("french"));
        assert!(recipe.matches_search("chive"));
        assert!(!recipe.matches_search("bacon"));
    }

    #[test]
    fn test_tag_conjunction() {
        let recipe = omelette();
        assert!(recipe.has_all_tags(Vec::<String>::new()));
        assert!(recipe.has_all_tags(&["vegetarian", "gluten-free"]));
        assert!(!recipe.has_all_tags(&["vegetarian", "vegan"]));
    }

    #[test]
    fn test_shopping_entries_skip_empty_unit() {
        assert_eq!(omelette().shopping_entries(), vec!["3 Eggs", "1 tbsp Chives"]);
    }

    #[test]
    fn test_popularity() {
        assert!((omelette().popularity() - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(omelette()).unwrap();
        assert_eq!(json["cookTime"], 10);
        assert_eq!(json["difficulty"], "easy");
        assert!(json.get("nutrition").is_none());
    }
}
