// ABOUTME: Environment-driven configuration for catalog access, search timing, and storage
// ABOUTME: CatalogConfig, SearchConfig, StorageConfig, and the combined AppConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::constants::{catalog_limits, catalog_service, search, storage};
use crate::errors::{AppError, AppResult};

/// Catalog service access configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// API credential sent with every request
    pub api_key: String,
    /// Base URL of the recipe catalog API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl CatalogConfig {
    /// Load catalog configuration from the environment.
    ///
    /// `CATALOG_API_KEY` is required; everything else defaults.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var("CATALOG_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::config_missing("CATALOG_API_KEY"))?;

        Ok(Self {
            api_key,
            base_url: env::var("CATALOG_BASE_URL")
                .unwrap_or_else(|_| catalog_service::DEFAULT_BASE_URL.to_owned()),
            timeout_secs: env_u64(
                "HTTP_CLIENT_TIMEOUT_SECS",
                catalog_service::DEFAULT_TIMEOUT_SECS,
            ),
            connect_timeout_secs: env_u64(
                "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
                catalog_service::DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        })
    }
}

/// Search and suggestion behavior
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum query length before suggestions activate
    pub min_query_len: usize,
    /// Debounce quiet window for suggestion fetches
    pub debounce: Duration,
    /// Maximum suggestions per fetch
    pub suggestion_limit: u32,
    /// Page size for list fetches
    pub page_size: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: search::MIN_QUERY_LEN,
            debounce: Duration::from_millis(search::DEBOUNCE_MS),
            suggestion_limit: catalog_limits::SUGGESTION_LIMIT,
            page_size: catalog_limits::PAGE_SIZE,
        }
    }
}

impl SearchConfig {
    /// Load search configuration from the environment, defaulting each
    /// field independently
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            min_query_len: env_u64("SEARCH_MIN_QUERY_LEN", search::MIN_QUERY_LEN as u64) as usize,
            debounce: Duration::from_millis(env_u64("SEARCH_DEBOUNCE_MS", search::DEBOUNCE_MS)),
            suggestion_limit: env_u64(
                "SEARCH_SUGGESTION_LIMIT",
                u64::from(catalog_limits::SUGGESTION_LIMIT),
            ) as u32,
            page_size: env_u64("SEARCH_PAGE_SIZE", u64::from(catalog_limits::PAGE_SIZE)) as u32,
        }
    }
}

/// Favorites storage location
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path of the persisted favorites file
    pub favorites_path: PathBuf,
}

impl StorageConfig {
    /// Load the favorites path from `FAVORITES_PATH`, falling back to the
    /// platform data directory and finally the working directory
    #[must_use]
    pub fn from_env() -> Self {
        let favorites_path = env::var("FAVORITES_PATH").map_or_else(
            |_| {
                dirs::data_dir()
                    .map(|dir| dir.join(storage::APP_DIR).join(storage::FAVORITES_FILE))
                    .unwrap_or_else(|| PathBuf::from(storage::FAVORITES_FILE))
            },
            PathBuf::from,
        );
        Self { favorites_path }
    }
}

/// Combined application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Catalog service access
    pub catalog: CatalogConfig,
    /// Search and suggestion behavior
    pub search: SearchConfig,
    /// Favorites storage location
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load the full configuration from the environment
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            catalog: CatalogConfig::from_env()?,
            search: SearchConfig::from_env(),
            storage: StorageConfig::from_env(),
        })
    }
}

/// Read a u64 environment variable, warning and defaulting on bad values
fn env_u64(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default, "ignoring unparseable environment value");
            default
        }),
        Err(_) => default,
    }
}
