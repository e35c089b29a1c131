//! Modal form for lending a book: borrower name and loan date.

use leptos::prelude::*;

use crate::app::AppLibrary;
use crate::components::run;
use crate::state::ui::UiState;

#[component]
pub fn BorrowDialog(book_id: String) -> impl IntoView {
    let library = expect_context::<RwSignal<AppLibrary>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let book_title = library.with_untracked(|lib| lib.book(&book_id).map(|b| b.title.clone()).unwrap_or_default());
    let borrower = RwSignal::new(String::new());
    let date = RwSignal::new(library.with_untracked(|lib| lib.today_value()));

    let on_cancel = Callback::new(move |()| ui.update(UiState::close));

    let submit = Callback::new(move |()| {
        let borrower = borrower.get_untracked();
        let date = date.get_untracked();
        let id = book_id.clone();
        if run(library, ui, move |lib| lib.borrow_book(&id, &borrower, &date)).is_some() {
            ui.update(UiState::close);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form
                id="borrow-form"
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <h2>"Borrow Book"</h2>
                <p id="borrow-book-title" class="dialog__subtitle">{book_title}</p>
                <label class="dialog__label">
                    "Borrower"
                    <input
                        id="borrower-name"
                        class="dialog__input"
                        type="text"
                        required
                        autofocus
                        prop:value=move || borrower.get()
                        on:input=move |ev| borrower.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Date"
                    <input
                        id="borrow-date"
                        class="dialog__input"
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn close-modal-btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit">
                        "Borrow"
                    </button>
                </div>
            </form>
        </div>
    }
}
