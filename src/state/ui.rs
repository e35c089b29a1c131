//! UI state: open dialog, pending confirmation, and error banner.
//!
//! DESIGN
//! ======
//! Destructive actions go through a two-step flow. A button stores a
//! [`PendingAction`] in [`Modal::Confirm`]; only the confirm button hands it
//! to [`crate::manager::LibraryManager::apply`]. Cancelling clears the modal.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::error::LibraryError;

/// An action that needs explicit confirmation before it runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingAction {
    Delete { book_id: String, title: String },
    Return { book_id: String, title: String },
}

impl PendingAction {
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Delete { .. } => "Are you sure you want to delete this book?",
            Self::Return { .. } => "Return this book?",
        }
    }

    #[must_use]
    pub fn confirm_label(&self) -> &'static str {
        match self {
            Self::Delete { .. } => "Delete",
            Self::Return { .. } => "Return",
        }
    }

    #[must_use]
    pub fn book_id(&self) -> &str {
        match self {
            Self::Delete { book_id, .. } | Self::Return { book_id, .. } => book_id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Delete { title, .. } | Self::Return { title, .. } => title,
        }
    }
}

/// The dialog currently shown, if any. At most one is open at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Modal {
    AddBook,
    Borrow { book_id: String },
    History { book_id: String },
    Confirm(PendingAction),
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub modal: Option<Modal>,
    /// Last failed operation, shown until dismissed or replaced.
    pub error: Option<String>,
}

impl UiState {
    pub fn open(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    pub fn close(&mut self) {
        self.modal = None;
    }

    /// Record the outcome of a library operation for the error banner.
    ///
    /// Success clears any previous error; failure replaces it and is logged.
    pub fn record<T>(&mut self, result: Result<T, LibraryError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.error = None;
                Some(value)
            }
            Err(e) => {
                log::warn!("library: {e}");
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Take the pending action out of an open confirmation dialog, closing it.
    pub fn take_confirmed(&mut self) -> Option<PendingAction> {
        match self.modal.take() {
            Some(Modal::Confirm(action)) => Some(action),
            other => {
                self.modal = other;
                None
            }
        }
    }
}
