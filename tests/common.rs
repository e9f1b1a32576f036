// ABOUTME: Shared test utilities: recording renderer, scripted mock catalog, failing backend
// ABOUTME: Keeps the integration tests free of duplicated wiring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors
#![allow(dead_code, clippy::unwrap_used, clippy::panic)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;

use savora::catalog::CatalogProvider;
use savora::config::SearchConfig;
use savora::errors::{AppError, AppResult, CatalogOperation};
use savora::favorites::{FavoritesBackend, FavoritesStore, MemoryBackend};
use savora::models::{NutritionFacts, RecipeDetail, RecipeSummary, Suggestion};
use savora::render::{RecipeCard, Renderer};
use savora::view::ListViewKind;
use savora::RecipeApp;

static INIT_LOGGER: Once = Once::new();

/// Quiet logging for tests; `TEST_LOG=debug` to see everything
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let level = std::env::var("TEST_LOG").unwrap_or_else(|_| "warn".into());
        savora::logging::init(&level);
    });
}

/// Build a summary with plausible fields
pub fn summary(id: u64, title: &str) -> RecipeSummary {
    RecipeSummary {
        id,
        title: title.to_owned(),
        image: format!("https://img.example/{id}.jpg"),
        ready_in_minutes: 25,
        servings: 4,
    }
}

/// Build a full detail for `id` with available nutrition
pub fn detail(id: u64, title: &str) -> RecipeDetail {
    RecipeDetail {
        summary: summary(id, title),
        ingredients: vec!["1 onion".into(), "2 cloves garlic".into()],
        instruction_steps: vec!["Chop everything.".into(), "Simmer for 20 minutes.".into()],
        nutrition: NutritionFacts {
            calories: savora::NutrientValue::Available {
                amount: 320.0,
                unit: "kcal".into(),
            },
            fat: savora::NutrientValue::Available {
                amount: 11.0,
                unit: "g".into(),
            },
            protein: savora::NutrientValue::Available {
                amount: 18.0,
                unit: "g".into(),
            },
        },
    }
}

/// Everything the controller asked the surface to show, in order
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    List(Vec<u64>),
    Suggestions(Vec<String>),
    Detail(u64),
    CloseDetail,
    ShowLoading,
    HideLoading,
    ActiveNav(ListViewKind),
    FavoriteIndicator(u64, bool),
    EmptyFavorites,
    Error(String),
    Notice(String),
}

/// Renderer that records every call for later assertions
#[derive(Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<RenderEvent>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: RenderEvent) {
        self.events.lock().unwrap().push(event);
    }

    /// Ids of the most recently rendered grid, if any list was rendered
    pub fn last_list(&self) -> Option<Vec<u64>> {
        self.events()
            .into_iter()
            .rev()
            .find_map(|event| match event {
                RenderEvent::List(ids) => Some(ids),
                _ => None,
            })
    }

    /// Titles of the most recently rendered suggestion dropdown
    pub fn last_suggestions(&self) -> Option<Vec<String>> {
        self.events()
            .into_iter()
            .rev()
            .find_map(|event| match event {
                RenderEvent::Suggestions(titles) => Some(titles),
                _ => None,
            })
    }

    pub fn count(&self, matches: impl Fn(&RenderEvent) -> bool) -> usize {
        self.events().iter().filter(|event| matches(event)).count()
    }
}

impl Renderer for RecordingRenderer {
    fn render_list(&self, cards: &[RecipeCard]) {
        self.push(RenderEvent::List(
            cards.iter().map(|card| card.recipe.id).collect(),
        ));
    }

    fn render_suggestions(&self, suggestions: &[Suggestion]) {
        self.push(RenderEvent::Suggestions(
            suggestions.iter().map(|s| s.title.clone()).collect(),
        ));
    }

    fn render_detail(&self, detail: &RecipeDetail) {
        self.push(RenderEvent::Detail(detail.summary.id));
    }

    fn close_detail(&self) {
        self.push(RenderEvent::CloseDetail);
    }

    fn show_loading(&self) {
        self.push(RenderEvent::ShowLoading);
    }

    fn hide_loading(&self) {
        self.push(RenderEvent::HideLoading);
    }

    fn set_active_nav(&self, view: ListViewKind) {
        self.push(RenderEvent::ActiveNav(view));
    }

    fn set_favorite_indicator(&self, id: u64, active: bool) {
        self.push(RenderEvent::FavoriteIndicator(id, active));
    }

    fn show_empty_favorites_message(&self) {
        self.push(RenderEvent::EmptyFavorites);
    }

    fn show_error_message(&self, text: &str) {
        self.push(RenderEvent::Error(text.to_owned()));
    }

    fn show_notice(&self, text: &str) {
        self.push(RenderEvent::Notice(text.to_owned()));
    }
}

/// Scripted in-process catalog with per-operation call counters
#[derive(Default)]
pub struct MockCatalog {
    suggestions: Mutex<HashMap<String, Vec<Suggestion>>>,
    autocomplete_delays: Mutex<HashMap<String, Duration>>,
    search_results: Mutex<HashMap<String, Vec<RecipeSummary>>>,
    random_results: Mutex<Vec<RecipeSummary>>,
    details: Mutex<HashMap<u64, RecipeDetail>>,
    failing_details: Mutex<HashSet<u64>>,
    detail_delay: Mutex<Option<Duration>>,
    search_delay: Mutex<Option<Duration>>,
    random_delay: Mutex<Option<Duration>>,
    fail_search: AtomicBool,
    fail_random: AtomicBool,

    autocomplete_calls: AtomicUsize,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    random_calls: AtomicUsize,
    autocomplete_queries: Mutex<Vec<String>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_suggestions(&self, query: &str, suggestions: Vec<Suggestion>) {
        self.suggestions
            .lock()
            .unwrap()
            .insert(query.to_owned(), suggestions);
    }

    /// Make one query's autocomplete resolve only after `delay`
    pub fn delay_autocomplete(&self, query: &str, delay: Duration) {
        self.autocomplete_delays
            .lock()
            .unwrap()
            .insert(query.to_owned(), delay);
    }

    pub fn set_search(&self, query: &str, recipes: Vec<RecipeSummary>) {
        self.search_results
            .lock()
            .unwrap()
            .insert(query.to_owned(), recipes);
    }

    pub fn set_random(&self, recipes: Vec<RecipeSummary>) {
        *self.random_results.lock().unwrap() = recipes;
    }

    pub fn insert_detail(&self, detail: RecipeDetail) {
        self.details
            .lock()
            .unwrap()
            .insert(detail.summary.id, detail);
    }

    /// Make the detail fetch for `id` fail
    pub fn fail_detail(&self, id: u64) {
        self.failing_details.lock().unwrap().insert(id);
    }

    /// Delay every detail fetch by `delay`
    pub fn delay_detail(&self, delay: Duration) {
        *self.detail_delay.lock().unwrap() = Some(delay);
    }

    /// Delay every search fetch by `delay`
    pub fn delay_search(&self, delay: Duration) {
        *self.search_delay.lock().unwrap() = Some(delay);
    }

    /// Delay every random fetch by `delay`
    pub fn delay_random(&self, delay: Duration) {
        *self.random_delay.lock().unwrap() = Some(delay);
    }

    /// Make every search fetch fail
    pub fn fail_search(&self) {
        self.fail_search.store(true, Ordering::SeqCst);
    }

    /// Make every random fetch fail
    pub fn fail_random(&self) {
        self.fail_random.store(true, Ordering::SeqCst);
    }

    pub fn autocomplete_calls(&self) -> usize {
        self.autocomplete_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn random_calls(&self) -> usize {
        self.random_calls.load(Ordering::SeqCst)
    }

    /// Queries actually issued to autocomplete, in order
    pub fn autocomplete_queries(&self) -> Vec<String> {
        self.autocomplete_queries.lock().unwrap().clone()
    }

    fn unavailable(operation: CatalogOperation, what: &str) -> AppError {
        AppError::catalog(
            operation,
            std::io::Error::new(std::io::ErrorKind::Other, format!("scripted failure: {what}")),
        )
    }
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    async fn autocomplete(&self, query: &str, limit: u32) -> AppResult<Vec<Suggestion>> {
        self.autocomplete_calls.fetch_add(1, Ordering::SeqCst);
        self.autocomplete_queries
            .lock()
            .unwrap()
            .push(query.to_owned());

        let delay = self.autocomplete_delays.lock().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self.suggestions.lock().unwrap().get(query).cloned();
        let mut list = scripted.unwrap_or_else(|| {
            vec![Suggestion {
                id: 100,
                title: format!("{query} classic"),
            }]
        });
        list.truncate(limit as usize);
        Ok(list)
    }

    async fn search(&self, query: &str, page_size: u32) -> AppResult<Vec<RecipeSummary>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.search_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_search.load(Ordering::SeqCst) {
            return Err(Self::unavailable(CatalogOperation::Search, "search"));
        }
        let scripted = self.search_results.lock().unwrap().get(query).cloned();
        let mut list =
            scripted.unwrap_or_else(|| vec![summary(1, &format!("{query} plate"))]);
        list.truncate(page_size as usize);
        Ok(list)
    }

    async fn detail(&self, id: u64) -> AppResult<RecipeDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.detail_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing_details.lock().unwrap().contains(&id) {
            return Err(Self::unavailable(CatalogOperation::Detail, "detail"));
        }
        let scripted = self.details.lock().unwrap().get(&id).cloned();
        Ok(scripted.unwrap_or_else(|| detail(id, &format!("recipe {id}"))))
    }

    async fn random(&self, page_size: u32) -> AppResult<Vec<RecipeSummary>> {
        self.random_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.random_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_random.load(Ordering::SeqCst) {
            return Err(Self::unavailable(CatalogOperation::Random, "random"));
        }
        let mut list = self.random_results.lock().unwrap().clone();
        if list.is_empty() {
            list = vec![summary(11, "daily special"), summary(12, "chef's pick")];
        }
        list.truncate(page_size as usize);
        Ok(list)
    }
}

/// Backend whose writes always fail, for persistence-failure paths
pub struct FailingBackend;

impl FavoritesBackend for FailingBackend {
    fn load(&self) -> AppResult<Option<String>> {
        Ok(None)
    }

    fn store(&self, _value: &str) -> AppResult<()> {
        Err(AppError::persistence("storage quota exceeded"))
    }
}

/// App over a mock catalog, recording renderer, and in-memory favorites
pub fn test_app(catalog: Arc<MockCatalog>, renderer: Arc<RecordingRenderer>) -> Arc<RecipeApp> {
    init_test_logging();
    let favorites = FavoritesStore::open(Box::new(MemoryBackend::new()));
    Arc::new(RecipeApp::new(
        catalog,
        renderer,
        favorites,
        SearchConfig::default(),
    ))
}

/// Same as [`test_app`] but with a caller-supplied favorites store
pub fn test_app_with_favorites(
    catalog: Arc<MockCatalog>,
    renderer: Arc<RecordingRenderer>,
    favorites: FavoritesStore,
) -> Arc<RecipeApp> {
    init_test_logging();
    Arc::new(RecipeApp::new(
        catalog,
        renderer,
        favorites,
        SearchConfig::default(),
    ))
}
