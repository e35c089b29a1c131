//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the library chrome and dialogs while reading/writing
//! the shared manager and UI state from Leptos context providers.

pub mod book_card;
pub mod book_dialog;
pub mod borrow_dialog;
pub mod category_sidebar;
pub mod confirm_dialog;
pub mod history_dialog;
pub mod toolbar;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use leptos::prelude::*;

use crate::app::AppLibrary;
use crate::error::LibraryError;
use crate::state::ui::UiState;

/// Run a manager operation and route its outcome to the error banner.
/// Returns the operation's value on success.
pub(crate) fn run<T>(
    library: RwSignal<AppLibrary>,
    ui: RwSignal<UiState>,
    op: impl FnOnce(&mut AppLibrary) -> Result<T, LibraryError>,
) -> Option<T> {
    let result = library.try_update(op)?;
    let mut out = None;
    ui.update(|u| out = u.record(result));
    out
}

/// Run a read-only manager query without notifying the manager's
/// subscribers, routing a failure to the error banner.
pub(crate) fn query<T>(
    library: RwSignal<AppLibrary>,
    ui: RwSignal<UiState>,
    op: impl FnOnce(&AppLibrary) -> Result<T, LibraryError>,
) -> Option<T> {
    let result = library.try_with_untracked(op)?;
    let mut out = None;
    ui.update(|u| out = u.record(result));
    out
}
