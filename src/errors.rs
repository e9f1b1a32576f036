// ABOUTME: Unified error types for catalog, nutrition, persistence, and config failures
// ABOUTME: Defines AppError with structured context and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors

use std::fmt;

/// Catalog operations that can fail independently.
///
/// Carried inside [`AppError::CatalogUnavailable`] so the surface can say
/// which call went away.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOperation {
    /// Suggestion lookup for a partial query
    Autocomplete,
    /// Full recipe search
    Search,
    /// Recipe information fetch
    Detail,
    /// Nutrition widget fetch (secondary to detail)
    Nutrition,
    /// Random recipe listing
    Random,
}

impl CatalogOperation {
    /// Stable lowercase name used in logs and error messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Autocomplete => "autocomplete",
            Self::Search => "search",
            Self::Detail => "detail",
            Self::Nutrition => "nutrition",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for CatalogOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the application
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A catalog call failed on transport or parse. Single attempt, no
    /// retry; list views surface this as inline error text.
    #[error("catalog {operation} request failed")]
    CatalogUnavailable {
        /// Which catalog operation failed
        operation: CatalogOperation,
        /// Underlying transport or parse error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The nutrition sub-fetch for a recipe failed. Swallowed at the
    /// detail-assembly boundary; fields degrade to unavailable.
    #[error("nutrition unavailable for recipe {recipe_id}")]
    NutritionUnavailable {
        /// Recipe whose nutrition lookup failed
        recipe_id: u64,
    },

    /// Writing the favorites set through to durable storage failed. The
    /// in-memory set keeps the attempted change for the session.
    #[error("favorites persistence failed: {reason}")]
    Persistence {
        /// What went wrong
        reason: String,
        /// Underlying storage error, when one exists
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Missing or invalid environment configuration
    #[error("invalid configuration for {key}: {reason}")]
    Config {
        /// Environment variable at fault
        key: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl AppError {
    /// A catalog call failed with the given underlying error
    pub fn catalog(
        operation: CatalogOperation,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::CatalogUnavailable {
            operation,
            source: Box::new(source),
        }
    }

    /// A favorites write failed without a distinct underlying error
    pub fn persistence(reason: impl Into<String>) -> Self {
        Self::Persistence {
            reason: reason.into(),
            source: None,
        }
    }

    /// A favorites write failed with an underlying storage error
    pub fn persistence_with_source(
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Persistence {
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Required configuration is missing
    pub fn config_missing(key: &'static str) -> Self {
        Self::Config {
            key,
            reason: "not set".into(),
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
