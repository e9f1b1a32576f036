// ABOUTME: Crate-wide constants grouped by concern
// ABOUTME: Catalog limits, search timing, and favorites storage names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors

/// Catalog request limits
pub mod catalog_limits {
    /// Maximum suggestions per autocomplete fetch
    pub const SUGGESTION_LIMIT: u32 = 5;
    /// Fixed page size for search, random, and favorites list views
    pub const PAGE_SIZE: u32 = 12;
}

/// Search input timing
pub mod search {
    /// Minimum query length before suggestions activate
    pub const MIN_QUERY_LEN: usize = 3;
    /// Quiet window a keystroke burst must outlast before a suggestion
    /// fetch fires
    pub const DEBOUNCE_MS: u64 = 300;
}

/// Favorites storage names
pub mod storage {
    /// File name for the persisted favorites set
    pub const FAVORITES_FILE: &str = "favorites.json";
    /// Application directory under the platform data dir
    pub const APP_DIR: &str = "savora";
}

/// Catalog service defaults
pub mod catalog_service {
    /// Default base URL for the recipe catalog API
    pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com/recipes";
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}
