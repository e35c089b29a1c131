//! Modal form for cataloging a new book.

use leptos::prelude::*;

use crate::app::AppLibrary;
use crate::components::run;
use crate::state::book::NewBook;
use crate::state::ui::UiState;

#[component]
pub fn BookFormDialog() -> impl IntoView {
    let library = expect_context::<RwSignal<AppLibrary>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let title = RwSignal::new(String::new());
    let author = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let image = RwSignal::new(String::new());

    let on_cancel = Callback::new(move |()| ui.update(UiState::close));

    let submit = Callback::new(move |()| {
        let draft = NewBook {
            title: title.get_untracked(),
            author: author.get_untracked(),
            category: category.get_untracked(),
            image: image.get_untracked(),
        };
        if run(library, ui, move |lib| lib.add_book(draft)).is_some() {
            ui.update(UiState::close);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form
                id="book-form"
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <h2>"Add Book"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        required
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Author"
                    <input
                        class="dialog__input"
                        type="text"
                        required
                        prop:value=move || author.get()
                        on:input=move |ev| author.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Category"
                    <input
                        class="dialog__input"
                        type="text"
                        list="category-list-suggestions"
                        required
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                    <datalist id="category-list-suggestions">
                        {move || {
                            library
                                .with(|lib| lib.categories().to_vec())
                                .into_iter()
                                .map(|c| view! { <option value=c></option> })
                                .collect_view()
                        }}
                    </datalist>
                </label>
                <label class="dialog__label">
                    "Cover image URL"
                    <input
                        class="dialog__input"
                        type="url"
                        placeholder="Optional"
                        prop:value=move || image.get()
                        on:input=move |ev| image.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn close-modal-btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit">
                        "Add Book"
                    </button>
                </div>
            </form>
        </div>
    }
}
