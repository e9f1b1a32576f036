// ABOUTME: Recipe catalog browsing core: search, suggestions, detail, and persisted favorites
// ABOUTME: Library root declaring modules and re-exporting the main types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors

//! Headless client core for browsing a Spoonacular-compatible recipe
//! catalog: debounced search suggestions, full search, recipe detail
//! with nutrition, random recipes, and a locally persisted favorites
//! set kept consistent with the rendered surface.
//!
//! The rendering surface, the catalog service, and durable storage are
//! external collaborators reached through the [`render::Renderer`],
//! [`catalog::CatalogProvider`], and [`favorites::FavoritesBackend`]
//! traits.

/// Top-level controller wiring all the pieces together
pub mod app;
/// Catalog provider trait and the Spoonacular HTTP implementation
pub mod catalog;
/// Environment-driven configuration
pub mod config;
/// Crate-wide constants
pub mod constants;
/// Unified error types
pub mod errors;
/// Write-through favorites store
pub mod favorites;
/// Tracing setup
pub mod logging;
/// Domain models
pub mod models;
/// Rendering surface contract
pub mod render;
/// Debounced search-suggestion state machine
pub mod search;
/// List-view navigation state with detail overlay
pub mod view;

pub use app::RecipeApp;
pub use catalog::{CatalogProvider, SpoonacularClient};
pub use config::{AppConfig, CatalogConfig, SearchConfig, StorageConfig};
pub use errors::{AppError, AppResult, CatalogOperation};
pub use favorites::{FavoritesBackend, FavoritesStore, FileBackend, MemoryBackend};
pub use models::{NutrientValue, NutritionFacts, RecipeDetail, RecipeSummary, Suggestion};
pub use render::{RecipeCard, Renderer};
pub use search::{FetchTicket, InputAction, SearchController, SearchPhase};
pub use view::{ListView, ListViewKind, ViewState};
