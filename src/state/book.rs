//! Book record, loan history, and the Available/Borrowed status pair.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so records written by earlier builds of
//! the app (and by hand in devtools) load unchanged. A book is `Borrowed`
//! exactly when its last history entry has no return date; the state module
//! maintains that pairing on every transition.

#[cfg(test)]
#[path = "book_test.rs"]
mod book_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Borrowed,
}

impl BookStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Borrowed => "Borrowed",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Available" => Some(Self::Available),
            "Borrowed" => Some(Self::Borrowed),
            _ => None,
        }
    }
}

/// One loan. `return_date` is `None` while the book is out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub borrower: String,
    pub borrow_date: String,
    pub return_date: Option<String>,
}

impl HistoryEntry {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub status: BookStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub added_date: String,
    /// Append-only loan log, oldest first.
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl Book {
    #[must_use]
    pub fn is_borrowed(&self) -> bool {
        self.status == BookStatus::Borrowed
    }

    /// The open loan, if the last history entry has not been returned.
    #[must_use]
    pub fn current_loan(&self) -> Option<&HistoryEntry> {
        self.history.last().filter(|entry| entry.is_open())
    }

    /// Cover image, falling back to `placeholder` for a missing or blank URL.
    #[must_use]
    pub fn cover_url<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.image.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url,
            _ => placeholder,
        }
    }
}

/// Add-book form payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub category: String,
    pub image: String,
}
