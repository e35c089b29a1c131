//! Error types for the storage layer and library operations.

/// Error returned by [`crate::store::KeyValueStore`] backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// `window.localStorage` is missing or access was denied.
    #[error("local storage is unavailable")]
    Unavailable,
    /// A write would exceed the backend's byte quota.
    #[error("storage quota exceeded while writing `{key}`")]
    QuotaExceeded { key: String },
    /// The browser raised an exception for a storage call.
    #[error("browser storage error: {0}")]
    Browser(String),
    /// A stored value is present but does not decode.
    #[error("stored `{key}` is unreadable: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// A value could not be serialized before writing.
    #[error("failed to encode `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Error returned by library state and manager operations.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("book not found: {0}")]
    NotFound(String),
    #[error("\"{0}\" is already borrowed")]
    AlreadyBorrowed(String),
    #[error("\"{0}\" is not currently borrowed")]
    NotBorrowed(String),
    /// A required form field was empty after trimming.
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// The stored book list did not decode at load, so book writes are
    /// refused until it reads cleanly.
    #[error("the stored book list is unreadable; changes are disabled to keep it intact")]
    CatalogUnreadable,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Error returned by [`crate::config::ServerConfig::from_env`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
