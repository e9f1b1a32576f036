// ABOUTME: View state for list navigation and the detail overlay
// ABOUTME: One active list view, a retained recipe snapshot, and a navigation generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors

use crate::models::RecipeSummary;

/// The active list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Random recipes landing view
    Home,
    /// Results for a committed query
    SearchResults {
        /// The committed query
        query: String,
    },
    /// The favorited recipes
    Favorites,
}

impl ListView {
    /// The nav entry this view belongs to
    #[must_use]
    pub const fn kind(&self) -> ListViewKind {
        match self {
            Self::Home => ListViewKind::Home,
            Self::SearchResults { .. } => ListViewKind::SearchResults,
            Self::Favorites => ListViewKind::Favorites,
        }
    }
}

/// Nav entry identity, without view payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListViewKind {
    /// Home nav entry
    Home,
    /// Search results (not a nav entry, but highlights search)
    SearchResults,
    /// Favorites nav entry
    Favorites,
}

/// What is currently rendered.
///
/// Exactly one list view is active; a detail modal may overlay it
/// without discarding the list's fetched data. Replaced on navigation,
/// never stacked.
#[derive(Debug)]
pub struct ViewState {
    list: ListView,
    recipes: Vec<RecipeSummary>,
    detail: Option<u64>,
    generation: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            list: ListView::Home,
            recipes: Vec::new(),
            detail: None,
            generation: 0,
        }
    }
}

impl ViewState {
    /// Fresh state on the Home view with nothing fetched
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active list view, returning the new navigation
    /// generation. Clears the overlay and the stale recipe snapshot;
    /// any in-flight fetch for the previous view becomes stale.
    pub fn begin_list_navigation(&mut self, list: ListView) -> u64 {
        self.generation += 1;
        self.list = list;
        self.detail = None;
        self.recipes.clear();
        self.generation
    }

    /// Whether a fetch started under `generation` still owns the view
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Current navigation generation
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The active list view
    #[must_use]
    pub const fn list(&self) -> &ListView {
        &self.list
    }

    /// Store the fetched recipes for the active view
    pub fn set_recipes(&mut self, recipes: Vec<RecipeSummary>) {
        self.recipes = recipes;
    }

    /// The retained recipe snapshot for the active view
    #[must_use]
    pub fn recipes(&self) -> &[RecipeSummary] {
        &self.recipes
    }

    /// Overlay the detail modal for `id`, keeping the list underneath
    pub fn open_detail(&mut self, id: u64) {
        self.detail = Some(id);
    }

    /// Close the overlay. Returns whether one was open. The underlying
    /// list view and its data are untouched.
    pub fn close_detail(&mut self) -> bool {
        self.detail.take().is_some()
    }

    /// The overlaid recipe id, when the modal is open
    #[must_use]
    pub const fn detail(&self) -> Option<u64> {
        self.detail
    }
}
