// ABOUTME: Catalog provider abstraction over the external recipe service
// ABOUTME: CatalogProvider trait plus the Spoonacular HTTP implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors

/// Shared HTTP client with connection pooling
pub mod http_client;
/// Spoonacular-compatible HTTP implementation
pub mod spoonacular;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{RecipeDetail, RecipeSummary, Suggestion};

pub use spoonacular::SpoonacularClient;

/// Read access to the external recipe catalog.
///
/// Every operation is a single request/response attempt; transport or
/// parse failures map to [`crate::errors::AppError::CatalogUnavailable`]
/// carrying the failed operation.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch up to `limit` title suggestions for a partial query
    async fn autocomplete(&self, query: &str, limit: u32) -> AppResult<Vec<Suggestion>>;

    /// Search recipes matching `query`, one page of `page_size` results
    async fn search(&self, query: &str, page_size: u32) -> AppResult<Vec<RecipeSummary>>;

    /// Fetch full detail for one recipe.
    ///
    /// Implementations assemble the nutrition sub-fetch into the result;
    /// a failed nutrition lookup degrades the fields to unavailable
    /// rather than failing the detail.
    async fn detail(&self, id: u64) -> AppResult<RecipeDetail>;

    /// Fetch one page of random recipes
    async fn random(&self, page_size: u32) -> AppResult<Vec<RecipeSummary>>;
}
