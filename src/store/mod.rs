//! Typed persistence for books, categories, and theme over a key-value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Store` owns the storage-key layout and the JSON encoding. Category and
//! theme reads are forgiving: a missing or corrupt value falls back to the
//! documented default and is logged. The book list is the user's data, so
//! its read reports corruption instead of returning an empty list. Writes
//! surface every failure so the manager can keep memory and storage in step.

pub mod kv;


pub use kv::{BrowserStore, KeyValueStore, MemoryStore};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::StorageKeys;
use crate::error::StorageError;
use crate::state::book::Book;
use crate::util::theme::Theme;

#[derive(Clone, Debug)]
pub struct Store<S> {
    kv: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> Store<S> {
    pub fn new(kv: S, keys: StorageKeys) -> Self {
        Self { kv, keys }
    }

    #[must_use]
    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Backend access, mainly for assertions in tests.
    #[must_use]
    pub fn backend(&self) -> &S {
        &self.kv
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.kv
    }

    /// Move the book list from the legacy key to the current key.
    ///
    /// Only runs when the current key is absent and the legacy key holds a
    /// value. Returns whether a value was moved.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend fails; on a failed write the
    /// legacy key is left in place.
    pub fn migrate_legacy_books(&mut self) -> Result<bool, StorageError> {
        let Some(legacy_key) = self.keys.legacy_books.clone() else {
            return Ok(false);
        };
        if self.kv.get(&self.keys.books)?.is_some() {
            return Ok(false);
        }
        let Some(raw) = self.kv.get(&legacy_key)? else {
            return Ok(false);
        };
        self.kv.set(&self.keys.books, &raw)?;
        self.kv.remove(&legacy_key)?;
        log::info!("store: migrated book list from {legacy_key} to {}", self.keys.books);
        Ok(true)
    }

    /// Stored books. A missing key reads as an empty list.
    ///
    /// # Errors
    ///
    /// [`StorageError::Corrupt`] when the stored value is not a book list, or
    /// the backend's read error. The stored bytes are never modified.
    pub fn load_books(&self) -> Result<Vec<Book>, StorageError> {
        let key = &self.keys.books;
        let Some(raw) = self.kv.get(key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: key.clone(),
            source,
        })
    }

    /// # Errors
    ///
    /// Returns [`StorageError`] when encoding or the backend write fails.
    pub fn save_books(&mut self, books: &[Book]) -> Result<(), StorageError> {
        let key = self.keys.books.clone();
        self.save_json(&key, &books)
    }

    /// Stored categories, or `defaults` when missing or unreadable.
    #[must_use]
    pub fn load_categories(&self, defaults: &[String]) -> Vec<String> {
        self.load_json(&self.keys.categories)
            .unwrap_or_else(|| defaults.to_vec())
    }

    /// # Errors
    ///
    /// Returns [`StorageError`] when encoding or the backend write fails.
    pub fn save_categories(&mut self, categories: &[String]) -> Result<(), StorageError> {
        let key = self.keys.categories.clone();
        self.save_json(&key, &categories)
    }

    /// Stored theme, or `default` when missing or unrecognized.
    #[must_use]
    pub fn load_theme(&self, default: Theme) -> Theme {
        match self.kv.get(&self.keys.theme) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                log::warn!("store: ignoring unknown theme {raw:?}");
                default
            }),
            Ok(None) => default,
            Err(e) => {
                log::warn!("store: failed to read {}: {e}", self.keys.theme);
                default
            }
        }
    }

    /// Theme is stored as a bare string, not JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend write fails.
    pub fn save_theme(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.kv.set(&self.keys.theme, theme.as_str())
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.kv.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("store: failed to read {key}: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("store: discarding unreadable {key}: {e}");
                None
            }
        }
    }

    fn save_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_owned(),
            source,
        })?;
        self.kv.set(key, &raw)
    }
}
