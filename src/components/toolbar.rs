//! Top bar: title, search box, add-book button, and theme toggle.

use leptos::prelude::*;

use crate::app::AppLibrary;
use crate::components::run;
use crate::state::ui::{Modal, UiState};
use crate::util::theme;

#[component]
pub fn Toolbar() -> impl IntoView {
    let library = expect_context::<RwSignal<AppLibrary>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_theme = move |_| {
        if let Some(next) = run(library, ui, AppLibrary::toggle_theme) {
            theme::apply(next);
        }
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__title">"My Library"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>

            <input
                id="search-input"
                class="toolbar__search"
                type="search"
                placeholder="Search by title or author..."
                prop:value=move || library.with(|lib| lib.filter().search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    library.update(|lib| lib.set_search(value));
                }
            />

            <span class="toolbar__spacer"></span>

            <button class="btn btn--primary" on:click=move |_| ui.update(|u| u.open(Modal::AddBook))>
                "+ Add Book"
            </button>
            <button class="btn toolbar__theme-toggle" on:click=on_toggle_theme title="Toggle theme">
                {move || library.with(|lib| lib.theme().icon())}
            </button>
        </header>
    }
}
