// ABOUTME: Write-through favorites store over a whole-value key-value backend
// ABOUTME: FavoritesBackend trait with file and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Contributors

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use crate::errors::{AppError, AppResult};

/// Durable whole-value storage for the serialized favorites set.
///
/// One logical key; `store` must be synchronous write-through so a crash
/// immediately after a toggle never loses the mutation.
pub trait FavoritesBackend: Send + Sync {
    /// Read the stored value, `None` when nothing was ever written
    fn load(&self) -> AppResult<Option<String>>;
    /// Replace the stored value
    fn store(&self, value: &str) -> AppResult<()>;
}

/// File-backed storage, one JSON document per favorites set
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend storing at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FavoritesBackend for FileBackend {
    fn load(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::persistence_with_source(
                format!("failed to read {}", self.path.display()),
                err,
            )),
        }
    }

    fn store(&self, value: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                AppError::persistence_with_source(
                    format!("failed to create {}", parent.display()),
                    err,
                )
            })?;
        }
        fs::write(&self.path, value).map_err(|err| {
            AppError::persistence_with_source(
                format!("failed to write {}", self.path.display()),
                err,
            )
        })
    }
}

/// In-memory storage for sessions without durable state
#[derive(Default)]
pub struct MemoryBackend {
    value: Mutex<Option<String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesBackend for MemoryBackend {
    fn load(&self) -> AppResult<Option<String>> {
        Ok(self
            .value
            .lock()
            .map_err(|_| AppError::persistence("favorites memory backend poisoned"))?
            .clone())
    }

    fn store(&self, value: &str) -> AppResult<()> {
        *self
            .value
            .lock()
            .map_err(|_| AppError::persistence("favorites memory backend poisoned"))? =
            Some(value.to_owned());
        Ok(())
    }
}

/// Owner of the favorite-recipe id set.
///
/// The single authority for whether a recipe's favorite indicator is
/// active. Every mutation is written through the backend before the UI
/// reflects it; a failed write keeps the in-memory change for the rest
/// of the session (best-effort) and reports `Persistence`.
pub struct FavoritesStore {
    set: HashSet<u64>,
    backend: Box<dyn FavoritesBackend>,
}

impl FavoritesStore {
    /// Open the store, loading whatever the backend holds.
    ///
    /// A missing or corrupt stored value starts an empty set with a
    /// warning rather than failing the session.
    pub fn open(backend: Box<dyn FavoritesBackend>) -> Self {
        let set = match backend.load() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<u64>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(err) => {
                    warn!(error = %err, "stored favorites value is corrupt, starting empty");
                    HashSet::new()
                }
            },
            Ok(None) => HashSet::new(),
            Err(err) => {
                warn!(error = %err, "failed to load favorites, starting empty");
                HashSet::new()
            }
        };
        Self { set, backend }
    }

    /// Whether `id` is currently favorited. Pure lookup, no side effect.
    #[must_use]
    pub fn is_favorite(&self, id: u64) -> bool {
        self.set.contains(&id)
    }

    /// Flip the favorite state of `id` and persist the updated set.
    ///
    /// Returns the new state: `true` when `id` was inserted, `false`
    /// when removed. Idempotent under pairs of toggles. On persistence
    /// failure the in-memory set keeps the attempted change and the
    /// error is returned for the caller to surface.
    pub fn toggle(&mut self, id: u64) -> AppResult<bool> {
        let now_favorite = if self.set.remove(&id) {
            false
        } else {
            self.set.insert(id);
            true
        };
        self.persist()?;
        Ok(now_favorite)
    }

    /// Current favorite ids, sorted for stable iteration
    #[must_use]
    pub fn list(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.set.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of favorited recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Whether no recipe is favorited
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    fn persist(&self) -> AppResult<()> {
        let raw = serde_json::to_string(&self.list())
            .map_err(|err| AppError::persistence_with_source("failed to serialize set", err))?;
        self.backend.store(&raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn toggle_inserts_then_removes() {
        let mut store = FavoritesStore::open(Box::new(MemoryBackend::new()));
        assert!(store.toggle(7).unwrap());
        assert!(store.is_favorite(7));
        assert!(!store.toggle(7).unwrap());
        assert!(!store.is_favorite(7));
    }

    #[test]
    fn list_is_sorted() {
        let mut store = FavoritesStore::open(Box::new(MemoryBackend::new()));
        store.toggle(30).unwrap();
        store.toggle(1).unwrap();
        store.toggle(12).unwrap();
        assert_eq!(store.list(), vec![1, 12, 30]);
    }

    #[test]
    fn corrupt_value_starts_empty() {
        let backend = MemoryBackend::new();
        backend.store("not json at all").unwrap();
        let store = FavoritesStore::open(Box::new(backend));
        assert!(store.is_empty());
    }

    #[test]
    fn reopened_store_sees_persisted_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let mut store = FavoritesStore::open(Box::new(FileBackend::new(&path)));
        store.toggle(42).unwrap();
        drop(store);

        let reopened = FavoritesStore::open(Box::new(FileBackend::new(&path)));
        assert!(reopened.is_favorite(42));
        assert_eq!(reopened.len(), 1);
    }
}
