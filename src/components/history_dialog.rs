//! Modal listing a book's loans, newest last.

#[cfg(test)]
#[path = "history_dialog_test.rs"]
mod history_dialog_test;

use leptos::prelude::*;

use crate::app::AppLibrary;
use crate::state::book::HistoryEntry;
use crate::state::ui::UiState;
use crate::util::dates::display_date;

pub const NO_HISTORY_MESSAGE: &str = "No history available for this book.";
pub const OPEN_LOAN_LABEL: &str = "Current";

/// One rendered history line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct HistoryRow {
    pub borrower: String,
    pub borrowed: String,
    /// Display date, or [`OPEN_LOAN_LABEL`] while the loan is open.
    pub returned: String,
    pub open: bool,
}

pub(crate) fn history_rows(entries: &[HistoryEntry]) -> Vec<HistoryRow> {
    entries
        .iter()
        .map(|entry| HistoryRow {
            borrower: entry.borrower.clone(),
            borrowed: display_date(&entry.borrow_date),
            returned: entry
                .return_date
                .as_deref()
                .map_or_else(|| OPEN_LOAN_LABEL.to_owned(), display_date),
            open: entry.is_open(),
        })
        .collect()
}

#[component]
pub fn HistoryDialog(book_id: String) -> impl IntoView {
    let library = expect_context::<RwSignal<AppLibrary>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_close = Callback::new(move |()| ui.update(UiState::close));

    let (title, rows) = library.with(|lib| {
        let title = lib.book(&book_id).map(|b| b.title.clone()).unwrap_or_default();
        let rows = lib.history(&book_id).map(history_rows).unwrap_or_default();
        (title, rows)
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div id="history-modal" class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Borrow History"</h2>
                <p class="dialog__subtitle">{title}</p>
                <div id="history-list-container" class="history-list">
                    {if rows.is_empty() {
                        view! { <p class="text-secondary">{NO_HISTORY_MESSAGE}</p> }.into_any()
                    } else {
                        rows.into_iter()
                            .map(|row| {
                                view! {
                                    <div class="history-list__entry">
                                        <div><strong>{row.borrower}</strong></div>
                                        <div class="history-list__dates">
                                            "Borrowed: " {row.borrowed}
                                            <br/>
                                            "Returned: "
                                            <span class:history-list__current=row.open>{row.returned}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
                <div class="dialog__actions">
                    <button class="btn close-modal-btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
