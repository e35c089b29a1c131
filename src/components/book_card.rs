//! Card for one book in the grid, with lend/return, history, and delete
//! actions.

#[cfg(test)]
#[path = "book_card_test.rs"]
mod book_card_test;

use leptos::prelude::*;

use crate::app::AppLibrary;
use crate::components::query;
use crate::state::book::{Book, BookStatus};
use crate::state::ui::{Modal, UiState};

/// CSS modifier for the status badge.
pub(crate) fn badge_class(status: BookStatus) -> &'static str {
    match status {
        BookStatus::Available => "badge available status-badge",
        BookStatus::Borrowed => "badge borrowed status-badge",
    }
}

pub(crate) fn byline(author: &str) -> String {
    format!("by {author}")
}

#[component]
pub fn BookCard(book: Book, placeholder: String) -> impl IntoView {
    let library = expect_context::<RwSignal<AppLibrary>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let cover = book.cover_url(&placeholder).to_owned();
    let alt = format!("{} cover", book.title);
    let is_borrowed = book.is_borrowed();
    let id = book.id.clone();

    let borrow_id = id.clone();
    let on_borrow = move |_| {
        ui.update(|u| {
            u.open(Modal::Borrow {
                book_id: borrow_id.clone(),
            });
        });
    };

    let return_id = id.clone();
    let on_return = move |_| {
        let id = return_id.clone();
        if let Some(action) = query(library, ui, |lib| lib.request_return(&id)) {
            ui.update(|u| u.open(Modal::Confirm(action)));
        }
    };

    let history_id = id.clone();
    let on_history = move |_| {
        ui.update(|u| {
            u.open(Modal::History {
                book_id: history_id.clone(),
            });
        });
    };

    let on_delete = move |_| {
        let id = id.clone();
        if let Some(action) = query(library, ui, |lib| lib.request_delete(&id)) {
            ui.update(|u| u.open(Modal::Confirm(action)));
        }
    };

    view! {
        <article class="card book-card fade-in">
            <div class="card-image">
                <img src=cover alt=alt loading="lazy"/>
                <span class={badge_class(book.status)}>{book.status.as_str()}</span>
            </div>
            <div class="card-content">
                <div class="card-header">
                    <h3>{book.title.clone()}</h3>
                    <p class="author">{byline(&book.author)}</p>
                </div>
                <p class="category">{book.category.clone()}</p>
                <div class="card-actions">
                    {if is_borrowed {
                        view! {
                            <button class="btn btn-outline" on:click=on_return>
                                "Return"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <button class="btn btn-primary" on:click=on_borrow>
                                "Borrow"
                            </button>
                        }
                            .into_any()
                    }}
                    <button class="btn btn-icon" on:click=on_history title="History">
                        "🕮"
                    </button>
                    <button class="btn btn-icon btn-danger" on:click=on_delete title="Delete">
                        "🗑"
                    </button>
                </div>
            </div>
        </article>
    }
}
