// ABOUTME: Top-level controller wiring catalog fetches, favorites, search, and the renderer
// ABOUTME: Owns navigation, staleness guards, the favorites batch fetch, and debounced suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors

use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::Mutex;
use tracing::warn;

use crate::catalog::CatalogProvider;
use crate::config::SearchConfig;
use crate::errors::AppResult;
use crate::favorites::FavoritesStore;
use crate::models::{RecipeSummary, Suggestion};
use crate::render::{RecipeCard, Renderer};
use crate::search::{FetchTicket, InputAction, SearchController};
use crate::view::{ListView, ListViewKind, ViewState};

/// The favorites-synchronized recipe-browsing controller.
///
/// Cheap to clone; all state sits behind a shared inner so spawned
/// debounce tasks can outlive the caller. Interleaved async completions
/// are guarded by the search and view generation counters.
#[derive(Clone)]
pub struct RecipeApp {
    inner: Arc<AppInner>,
}

/// Shared controller state. Lock order where both are held: view before
/// favorites.
struct AppInner {
    catalog: Arc<dyn CatalogProvider>,
    renderer: Arc<dyn Renderer>,
    favorites: Mutex<FavoritesStore>,
    search: Mutex<SearchController>,
    view: Mutex<ViewState>,
    config: SearchConfig,
}

impl RecipeApp {
    /// Wire up a controller over its collaborators
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        renderer: Arc<dyn Renderer>,
        favorites: FavoritesStore,
        config: SearchConfig,
    ) -> Self {
        let search = SearchController::new(&config);
        Self {
            inner: Arc::new(AppInner {
                catalog,
                renderer,
                favorites: Mutex::new(favorites),
                search: Mutex::new(search),
                view: Mutex::new(ViewState::new()),
                config,
            }),
        }
    }

    /// Navigate to the Home view and load random recipes
    pub async fn go_home(&self) {
        let inner = &self.inner;
        inner.renderer.set_active_nav(ListViewKind::Home);
        let generation = inner
            .view
            .lock()
            .await
            .begin_list_navigation(ListView::Home);

        inner.renderer.show_loading();
        let result = inner.catalog.random(inner.config.page_size).await;
        inner.finish_list_fetch(generation, result).await;
    }

    /// Navigate to the Favorites view and batch-fetch its recipes.
    ///
    /// One concurrent detail request per favorited id; a failed id is
    /// omitted from the rendered list and never aborts the others. The
    /// view only surfaces an error when every fetch failed.
    pub async fn go_favorites(&self) {
        let inner = &self.inner;
        inner.renderer.set_active_nav(ListViewKind::Favorites);
        let generation = inner
            .view
            .lock()
            .await
            .begin_list_navigation(ListView::Favorites);

        let ids = inner.favorites.lock().await.list();
        if ids.is_empty() {
            inner.renderer.hide_loading();
            inner.renderer.show_empty_favorites_message();
            return;
        }

        inner.renderer.show_loading();
        let results = join_all(ids.iter().map(|&id| inner.catalog.detail(id))).await;

        let mut recipes = Vec::with_capacity(ids.len());
        let mut first_error = None;
        for (id, result) in ids.iter().zip(results) {
            match result {
                Ok(detail) => recipes.push(detail.summary),
                Err(err) => {
                    warn!(recipe_id = id, error = %err, "favorite detail fetch failed, omitting");
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        let outcome = match first_error {
            Some(err) if recipes.is_empty() => Err(err),
            _ => Ok(recipes),
        };
        inner.finish_list_fetch(generation, outcome).await;
    }

    /// Commit the current query to a full search
    pub async fn submit_search(&self, query: &str) {
        let query = self.inner.search.lock().await.commit(query);
        self.inner.renderer.render_suggestions(&[]);
        self.inner.run_search(query).await;
    }

    /// Commit a selected suggestion, bypassing any in-flight suggestion
    /// fetch
    pub async fn select_suggestion(&self, suggestion: &Suggestion) {
        let query = self.inner.search.lock().await.select_suggestion(suggestion);
        self.inner.renderer.render_suggestions(&[]);
        self.inner.run_search(query).await;
    }

    /// Process one search-box keystroke.
    ///
    /// Below the activation threshold this clears the dropdown;
    /// otherwise it arms the debounce window on a spawned task that
    /// re-checks the ticket after sleeping and again on completion.
    pub async fn on_search_input(&self, query: &str) {
        let action = self.inner.search.lock().await.on_input(query);
        match action {
            InputAction::Clear => self.inner.renderer.render_suggestions(&[]),
            InputAction::Debounce(ticket) => {
                let inner = Arc::clone(&self.inner);
                tokio::spawn(async move {
                    inner.debounced_suggestion_fetch(ticket).await;
                });
            }
        }
    }

    /// Open the detail modal for a recipe.
    ///
    /// The underlying list view keeps its data; the completion is
    /// discarded when the user navigated away or closed the modal
    /// while the fetch was in flight.
    pub async fn open_detail(&self, id: u64) {
        let inner = &self.inner;
        let generation = {
            let mut view = inner.view.lock().await;
            view.open_detail(id);
            view.generation()
        };

        let result = inner.catalog.detail(id).await;

        {
            let view = inner.view.lock().await;
            if !view.is_current(generation) || view.detail() != Some(id) {
                return;
            }
        }

        match result {
            Ok(detail) => inner.renderer.render_detail(&detail),
            Err(err) => {
                warn!(recipe_id = id, error = %err, "detail fetch failed");
                inner.renderer.show_error_message(&err.to_string());
            }
        }
    }

    /// Close the detail modal, returning to the prior list view with no
    /// re-fetch
    pub async fn close_detail(&self) {
        if self.inner.view.lock().await.close_detail() {
            self.inner.renderer.close_detail();
        }
    }

    /// Flip a recipe's favorite state and update just its card.
    ///
    /// A persistence failure surfaces as a non-blocking notice; the
    /// indicator follows the in-memory set, which keeps the attempted
    /// change.
    pub async fn toggle_favorite(&self, id: u64) {
        let inner = &self.inner;
        let result = inner.favorites.lock().await.toggle(id);
        match result {
            Ok(active) => inner.renderer.set_favorite_indicator(id, active),
            Err(err) => {
                warn!(recipe_id = id, error = %err, "favorite write-through failed");
                let active = inner.favorites.lock().await.is_favorite(id);
                inner.renderer.set_favorite_indicator(id, active);
                inner.renderer.show_notice(&err.to_string());
            }
        }
    }

    /// Whether a recipe is currently favorited
    pub async fn is_favorite(&self, id: u64) -> bool {
        self.inner.favorites.lock().await.is_favorite(id)
    }

    /// The active list view
    pub async fn current_view(&self) -> ListView {
        self.inner.view.lock().await.list().clone()
    }

    /// The retained recipe snapshot of the active list view
    pub async fn rendered_recipes(&self) -> Vec<RecipeSummary> {
        self.inner.view.lock().await.recipes().to_vec()
    }

    /// Suggestions for the most recent completed query
    pub async fn current_suggestions(&self) -> Vec<Suggestion> {
        self.inner.search.lock().await.suggestions().to_vec()
    }
}

impl AppInner {
    async fn run_search(&self, query: String) {
        self.renderer.set_active_nav(ListViewKind::SearchResults);
        let generation = self
            .view
            .lock()
            .await
            .begin_list_navigation(ListView::SearchResults {
                query: query.clone(),
            });

        self.renderer.show_loading();
        let result = self.catalog.search(&query, self.config.page_size).await;
        self.finish_list_fetch(generation, result).await;
    }

    /// Deliver a completed list fetch, discarding it when the user has
    /// navigated away. The loading indicator is hidden on both the
    /// success and failure paths; a stale completion touches nothing
    /// because the newest navigation owns the indicator.
    async fn finish_list_fetch(&self, generation: u64, result: AppResult<Vec<RecipeSummary>>) {
        let mut view = self.view.lock().await;
        if !view.is_current(generation) {
            return;
        }

        self.renderer.hide_loading();
        match result {
            Ok(recipes) => {
                let cards = {
                    let favorites = self.favorites.lock().await;
                    recipes
                        .iter()
                        .map(|recipe| RecipeCard {
                            recipe: recipe.clone(),
                            favorite: favorites.is_favorite(recipe.id),
                        })
                        .collect::<Vec<_>>()
                };
                view.set_recipes(recipes);
                self.renderer.render_list(&cards);
            }
            Err(err) => {
                warn!(error = %err, "list fetch failed");
                self.renderer.show_error_message(&err.to_string());
            }
        }
    }

    async fn debounced_suggestion_fetch(&self, ticket: FetchTicket) {
        tokio::time::sleep(self.config.debounce).await;

        // A newer keystroke during the quiet window strands this ticket
        // before any fetch is issued
        if !self.search.lock().await.is_current(&ticket) {
            return;
        }

        match self
            .catalog
            .autocomplete(&ticket.query, self.config.suggestion_limit)
            .await
        {
            Ok(list) => {
                let mut search = self.search.lock().await;
                if search.accept_suggestions(&ticket, list) {
                    self.renderer.render_suggestions(search.suggestions());
                }
            }
            // Suggestion failures are logged, never surfaced
            Err(err) => warn!(query = %ticket.query, error = %err, "suggestion fetch failed"),
        }
    }
}
