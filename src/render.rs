// ABOUTME: Rendering surface contract consumed by the app controller
// ABOUTME: Renderer trait and the RecipeCard list item it renders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors

use crate::models::{RecipeDetail, RecipeSummary, Suggestion};
use crate::view::ListViewKind;

/// One list entry: a recipe plus its favorite indicator state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    /// The recipe to render
    pub recipe: RecipeSummary,
    /// Whether the favorite indicator is active
    pub favorite: bool,
}

/// The visible surface this core drives.
///
/// Implementations own all presentation concerns; the controller only
/// says what to show. Methods take `&self` so implementations can be
/// shared across spawned tasks.
pub trait Renderer: Send + Sync {
    /// Replace the grid with the given cards
    fn render_list(&self, cards: &[RecipeCard]);

    /// Replace the suggestion dropdown; an empty list hides it
    fn render_suggestions(&self, suggestions: &[Suggestion]);

    /// Show the detail modal for a recipe
    fn render_detail(&self, detail: &RecipeDetail);

    /// Hide the detail modal
    fn close_detail(&self);

    /// Show the loading indicator in place of the grid
    fn show_loading(&self);

    /// Hide the loading indicator
    fn hide_loading(&self);

    /// Highlight the active nav entry
    fn set_active_nav(&self, view: ListViewKind);

    /// Update one card's favorite indicator without a full re-render
    fn set_favorite_indicator(&self, id: u64, active: bool);

    /// Replace the grid with the empty-favorites message
    fn show_empty_favorites_message(&self);

    /// Replace the grid with inline error text
    fn show_error_message(&self, text: &str);

    /// Show a non-blocking notice without touching the grid
    fn show_notice(&self, text: &str);
}
