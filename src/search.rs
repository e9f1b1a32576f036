// ABOUTME: Debounced search-suggestion state machine with staleness discard
// ABOUTME: SearchController turns keystrokes into debounce tickets guarded by a generation counter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors

use std::time::Duration;

use crate::config::SearchConfig;
use crate::models::Suggestion;

/// Where the controller is in the keystroke lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Query too short for suggestions
    Idle,
    /// Debounce window armed, no fetch issued yet
    Pending,
    /// Suggestions fetched and displayed
    Suggested,
    /// Query committed to a full search, suggestions cleared
    Committed,
}

/// Token for one scheduled suggestion fetch.
///
/// Carries the generation it was issued under; any newer keystroke,
/// commit, or clear bumps the controller generation and strands the
/// ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Generation at scheduling time
    pub generation: u64,
    /// Trimmed query to fetch suggestions for
    pub query: String,
}

/// What a keystroke asks the caller to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Query below threshold: clear any displayed suggestions
    Clear,
    /// Arm the debounce window, then fetch if the ticket is still current
    Debounce(FetchTicket),
}

/// State machine over keystroke events.
///
/// Owns the debounce contract: each qualifying keystroke restarts the
/// quiet window, and only the last keystroke's fetch fires. Completions
/// are re-checked against the generation so displayed suggestions always
/// correspond to the most recent query that completed, never an
/// out-of-order earlier one.
pub struct SearchController {
    min_query_len: usize,
    debounce: Duration,
    generation: u64,
    phase: SearchPhase,
    suggestions: Vec<Suggestion>,
}

impl SearchController {
    /// Create a controller with the given timing configuration
    #[must_use]
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            min_query_len: config.min_query_len,
            debounce: config.debounce,
            generation: 0,
            phase: SearchPhase::Idle,
            suggestions: Vec::new(),
        }
    }

    /// Current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Configured quiet window
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Suggestions for the most recent completed query
    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Process one keystroke.
    ///
    /// Always bumps the generation, stranding any armed or in-flight
    /// fetch for an earlier keystroke.
    pub fn on_input(&mut self, query: &str) -> InputAction {
        let query = query.trim();
        self.generation += 1;

        if query.chars().count() < self.min_query_len {
            self.phase = SearchPhase::Idle;
            self.suggestions.clear();
            return InputAction::Clear;
        }

        self.phase = SearchPhase::Pending;
        InputAction::Debounce(FetchTicket {
            generation: self.generation,
            query: query.to_owned(),
        })
    }

    /// Whether a ticket still corresponds to the latest keystroke.
    ///
    /// Checked after the quiet window elapses (a stranded ticket never
    /// issues its fetch) and again when the fetch completes.
    #[must_use]
    pub const fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.generation == ticket.generation
    }

    /// Deliver a completed suggestion fetch.
    ///
    /// Returns `false` without touching state when the ticket is stale,
    /// implementing the ordering guarantee.
    pub fn accept_suggestions(&mut self, ticket: &FetchTicket, list: Vec<Suggestion>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = SearchPhase::Suggested;
        self.suggestions = list;
        true
    }

    /// Commit a query for a full search, clearing suggestions and
    /// invalidating any in-flight suggestion fetch. Returns the trimmed
    /// query to search for.
    pub fn commit(&mut self, query: &str) -> String {
        self.generation += 1;
        self.phase = SearchPhase::Committed;
        self.suggestions.clear();
        query.trim().to_owned()
    }

    /// Commit directly from a selected suggestion, bypassing any
    /// in-flight fetch
    pub fn select_suggestion(&mut self, suggestion: &Suggestion) -> String {
        self.commit(&suggestion.title)
    }
}
