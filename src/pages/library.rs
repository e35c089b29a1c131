//! Library page: toolbar, category sidebar, book grid, and dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. It reads the shared manager and UI signals from context
//! and mounts whichever dialog `UiState::modal` names.

use leptos::prelude::*;

use crate::app::AppLibrary;
use crate::components::book_card::BookCard;
use crate::components::book_dialog::BookFormDialog;
use crate::components::borrow_dialog::BorrowDialog;
use crate::components::category_sidebar::CategorySidebar;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::history_dialog::HistoryDialog;
use crate::components::toolbar::Toolbar;
use crate::state::ui::{Modal, UiState};

pub const EMPTY_SHELF_MESSAGE: &str = "No books found matching your criteria.";

#[component]
pub fn LibraryPage() -> impl IntoView {
    let library = expect_context::<RwSignal<AppLibrary>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let visible = move || {
        library.with(|lib| lib.visible_books().into_iter().cloned().collect::<Vec<_>>())
    };
    let placeholder = move || library.with(|lib| lib.config().placeholder_cover.clone());

    view! {
        <div class="library-page">
            <Toolbar/>

            <Show when=move || ui.with(|u| u.error.is_some())>
                <div class="library-page__error" role="alert">
                    <span>{move || ui.with(|u| u.error.clone().unwrap_or_default())}</span>
                    <button class="btn btn--icon" on:click=move |_| ui.update(|u| u.error = None) title="Dismiss">
                        "✕"
                    </button>
                </div>
            </Show>

            <div class="library-page__body">
                <CategorySidebar/>

                <main class="library-page__main">
                    <header class="library-page__grid-header">
                        <h2>"Books"</h2>
                        <span class="library-page__count">{move || library.with(|lib| lib.visible_count_label())}</span>
                    </header>

                    <Show
                        when=move || library.with(|lib| lib.is_loaded())
                        fallback=move || view! { <p class="library-page__loading">"Loading library..."</p> }
                    >
                        {move || {
                            let books = visible();
                            if books.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <p>{EMPTY_SHELF_MESSAGE}</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                let placeholder = placeholder();
                                view! {
                                    <div class="book-grid">
                                        {books
                                            .into_iter()
                                            .map(|book| view! { <BookCard book=book placeholder=placeholder.clone()/> })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </Show>
                </main>
            </div>

            {move || {
                ui.with(|u| u.modal.clone())
                    .map(|modal| match modal {
                        Modal::AddBook => view! { <BookFormDialog/> }.into_any(),
                        Modal::Borrow { book_id } => view! { <BorrowDialog book_id=book_id/> }.into_any(),
                        Modal::History { book_id } => view! { <HistoryDialog book_id=book_id/> }.into_any(),
                        Modal::Confirm(action) => view! { <ConfirmDialog action=action/> }.into_any(),
                    })
            }}
        </div>
    }
}
