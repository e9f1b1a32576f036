// ABOUTME: Domain models for recipes, nutrition facts, and search suggestions
// ABOUTME: RecipeSummary, RecipeDetail, NutritionFacts, NutrientValue, and Suggestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable snapshot of a recipe as listed by the catalog.
///
/// Wire format is camelCase; missing optional counters default to zero.
/// Never persisted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    /// Catalog identifier
    pub id: u64,
    /// Display title
    pub title: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Preparation time in minutes
    #[serde(default)]
    pub ready_in_minutes: u32,
    /// Number of servings
    #[serde(default)]
    pub servings: u32,
}

/// Full recipe view assembled from the information and nutrition fetches.
///
/// Fetched on demand, never cached across requests.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetail {
    /// The summary fields shared with list views
    pub summary: RecipeSummary,
    /// Ingredient lines in catalog order
    pub ingredients: Vec<String>,
    /// Instruction steps in catalog order
    pub instruction_steps: Vec<String>,
    /// Nutrition facts, degraded to unavailable when the sub-fetch failed
    pub nutrition: NutritionFacts,
}

/// A single nutrient value, or the explicit absence of one
#[derive(Debug, Clone, PartialEq)]
pub enum NutrientValue {
    /// Amount and unit as reported by the catalog
    Available {
        /// Nutrient amount
        amount: f64,
        /// Nutrient unit (kcal, g, ...)
        unit: String,
    },
    /// The catalog did not report this nutrient, or the fetch failed
    Unavailable,
}

impl NutrientValue {
    /// Whether a concrete value is present
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

impl fmt::Display for NutrientValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Rounded for display, matching the catalog widget
            Self::Available { amount, unit } => write!(f, "{} {unit}", amount.round()),
            Self::Unavailable => f.write_str("unavailable"),
        }
    }
}

/// Calories, fat, and protein for one recipe
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionFacts {
    /// Energy content
    pub calories: NutrientValue,
    /// Fat content
    pub fat: NutrientValue,
    /// Protein content
    pub protein: NutrientValue,
}

impl NutritionFacts {
    /// All three fields marked unavailable, used when the nutrition
    /// sub-fetch fails
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            calories: NutrientValue::Unavailable,
            fat: NutrientValue::Unavailable,
            protein: NutrientValue::Unavailable,
        }
    }

    /// Whether any field carries a concrete value
    #[must_use]
    pub const fn any_available(&self) -> bool {
        self.calories.is_available() || self.fat.is_available() || self.protein.is_available()
    }
}

/// One autocomplete suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Catalog identifier of the suggested recipe
    pub id: u64,
    /// Suggested title, used as the committed query on selection
    pub title: String,
}
