// ABOUTME: Spoonacular-compatible HTTP implementation of CatalogProvider
// ABOUTME: Wire payload types, query building, error mapping, and nutrition degrade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{instrument, warn};

use super::http_client::shared_client;
use super::CatalogProvider;
use crate::config::CatalogConfig;
use crate::errors::{AppError, AppResult, CatalogOperation};
use crate::models::{NutrientValue, NutritionFacts, RecipeDetail, RecipeSummary, Suggestion};

/// Nutrient names as reported by the catalog widget
const NUTRIENT_CALORIES: &str = "Calories";
const NUTRIENT_FAT: &str = "Fat";
const NUTRIENT_PROTEIN: &str = "Protein";

/// HTTP client for a Spoonacular-compatible recipe catalog
pub struct SpoonacularClient {
    config: CatalogConfig,
}

impl SpoonacularClient {
    /// Create a client for the configured catalog endpoint
    #[must_use]
    pub const fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Issue a GET request and parse the JSON response.
    ///
    /// Single attempt; any transport, status, or parse failure maps to
    /// `CatalogUnavailable` for `operation`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: CatalogOperation,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let url = format!("{}{path}", self.config.base_url);

        let response = shared_client()
            .get(&url)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|err| AppError::catalog(operation, err))?
            .error_for_status()
            .map_err(|err| AppError::catalog(operation, err))?;

        response
            .json::<T>()
            .await
            .map_err(|err| AppError::catalog(operation, err))
    }

    /// Fetch the nutrition widget payload for one recipe
    async fn nutrition(&self, id: u64) -> AppResult<NutritionFacts> {
        let payload: NutritionResponse = self
            .get_json(
                CatalogOperation::Nutrition,
                &format!("/{id}/nutritionWidget.json"),
                &[],
            )
            .await
            .map_err(|err| {
                warn!(recipe_id = id, error = %err, "nutrition widget fetch failed");
                AppError::NutritionUnavailable { recipe_id: id }
            })?;
        Ok(payload.into_facts())
    }
}

#[async_trait]
impl CatalogProvider for SpoonacularClient {
    #[instrument(skip(self), fields(api_call = "autocomplete", query = %query))]
    async fn autocomplete(&self, query: &str, limit: u32) -> AppResult<Vec<Suggestion>> {
        self.get_json(
            CatalogOperation::Autocomplete,
            "/autocomplete",
            &[
                ("query", query.to_owned()),
                ("number", limit.to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self), fields(api_call = "search", query = %query))]
    async fn search(&self, query: &str, page_size: u32) -> AppResult<Vec<RecipeSummary>> {
        let payload: SearchResponse = self
            .get_json(
                CatalogOperation::Search,
                "/complexSearch",
                &[
                    ("query", query.to_owned()),
                    ("addRecipeInformation", "true".to_owned()),
                    ("number", page_size.to_string()),
                ],
            )
            .await?;
        Ok(payload.results)
    }

    #[instrument(skip(self), fields(api_call = "detail", recipe_id = %id))]
    async fn detail(&self, id: u64) -> AppResult<RecipeDetail> {
        let info: InformationResponse = self
            .get_json(CatalogOperation::Detail, &format!("/{id}/information"), &[])
            .await?;

        // Nutrition is secondary: a failed sub-fetch must not block
        // ingredient and instruction display
        let nutrition = self
            .nutrition(id)
            .await
            .unwrap_or_else(|_| NutritionFacts::unavailable());

        Ok(info.into_detail(nutrition))
    }

    #[instrument(skip(self), fields(api_call = "random"))]
    async fn random(&self, page_size: u32) -> AppResult<Vec<RecipeSummary>> {
        let payload: RandomResponse = self
            .get_json(
                CatalogOperation::Random,
                "/random",
                &[("number", page_size.to_string())],
            )
            .await?;
        Ok(payload.recipes)
    }
}

// Wire payload types. Only the fields this core reads are declared; the
// catalog sends many more.

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RecipeSummary>,
}

#[derive(Debug, Deserialize)]
struct RandomResponse {
    #[serde(default)]
    recipes: Vec<RecipeSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InformationResponse {
    id: u64,
    title: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    ready_in_minutes: u32,
    #[serde(default)]
    servings: u32,
    #[serde(default)]
    extended_ingredients: Vec<WireIngredient>,
    #[serde(default)]
    analyzed_instructions: Vec<WireInstructionSet>,
}

#[derive(Debug, Deserialize)]
struct WireIngredient {
    original: String,
}

#[derive(Debug, Deserialize)]
struct WireInstructionSet {
    #[serde(default)]
    steps: Vec<WireStep>,
}

#[derive(Debug, Deserialize)]
struct WireStep {
    step: String,
}

#[derive(Debug, Deserialize)]
struct NutritionResponse {
    #[serde(default)]
    nutrients: Vec<WireNutrient>,
}

#[derive(Debug, Deserialize)]
struct WireNutrient {
    name: String,
    amount: f64,
    unit: String,
}

impl InformationResponse {
    fn into_detail(self, nutrition: NutritionFacts) -> RecipeDetail {
        let ingredients = self
            .extended_ingredients
            .into_iter()
            .map(|ingredient| ingredient.original)
            .collect();

        // Only the first instruction set is displayed, like the widget
        let instruction_steps = self
            .analyzed_instructions
            .into_iter()
            .next()
            .map(|set| set.steps.into_iter().map(|s| s.step).collect())
            .unwrap_or_default();

        RecipeDetail {
            summary: RecipeSummary {
                id: self.id,
                title: self.title,
                image: self.image,
                ready_in_minutes: self.ready_in_minutes,
                servings: self.servings,
            },
            ingredients,
            instruction_steps,
            nutrition,
        }
    }
}

impl NutritionResponse {
    fn into_facts(self) -> NutritionFacts {
        let find = |name: &str| {
            self.nutrients
                .iter()
                .find(|nutrient| nutrient.name == name)
                .map_or(NutrientValue::Unavailable, |nutrient| {
                    NutrientValue::Available {
                        amount: nutrient.amount,
                        unit: nutrient.unit.clone(),
                    }
                })
        };

        NutritionFacts {
            calories: find(NUTRIENT_CALORIES),
            fat: find(NUTRIENT_FAT),
            protein: find(NUTRIENT_PROTEIN),
        }
    }
}
