//! Typed configuration for the library data manager and the SSR server.
//!
//! DESIGN
//! ======
//! Browser builds have no environment, so `LibraryConfig` is built from
//! `Default` (the historical storage keys and category set). The server reads
//! its handful of settings from environment variables through an injectable
//! lookup so parsing stays testable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;
use crate::util::theme::Theme;

pub const DEFAULT_PORT: u16 = 3000;
pub const PLACEHOLDER_COVER_URL: &str = "https://placehold.co/400x600?text=No+Cover";

/// `localStorage` keys for the three persisted collections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub books: String,
    pub categories: String,
    pub theme: String,
    /// Key the book list lived under before the `_v2` rename. Migrated once
    /// on load when `books` is absent.
    pub legacy_books: Option<String>,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            books: "bookApp_library_v2".to_owned(),
            categories: "bookApp_categories".to_owned(),
            theme: "bookApp_theme".to_owned(),
            legacy_books: Some("bookApp_library".to_owned()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryConfig {
    pub keys: StorageKeys,
    /// Category list used when nothing is stored yet.
    pub default_categories: Vec<String>,
    pub default_theme: Theme,
    /// Store the sample catalog when the loaded book list is empty.
    pub seed_when_empty: bool,
    pub placeholder_cover: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            default_categories: ["Fiction", "Non-Fiction", "Sci-Fi", "Biography", "Technology"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            default_theme: Theme::Dark,
            seed_when_empty: true,
            placeholder_cover: PLACEHOLDER_COVER_URL.to_owned(),
        }
    }
}

/// Settings for the SSR binary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    /// Build server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build server config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
        };
        Ok(Self { port })
    }
}
