//! Confirmation modal guarding delete and return.

use leptos::prelude::*;

use crate::app::AppLibrary;
use crate::components::run;
use crate::state::ui::{PendingAction, UiState};

#[component]
pub fn ConfirmDialog(action: PendingAction) -> impl IntoView {
    let library = expect_context::<RwSignal<AppLibrary>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let prompt = action.prompt();
    let confirm_label = action.confirm_label();
    let title = action.title().to_owned();
    let danger = matches!(action, PendingAction::Delete { .. });

    let on_cancel = Callback::new(move |()| ui.update(UiState::close));

    let on_confirm = move |_| {
        let Some(confirmed) = ui.try_update(UiState::take_confirmed).flatten() else {
            return;
        };
        run(library, ui, move |lib| lib.apply(&confirmed));
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" role="alertdialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class:dialog__danger=danger>{prompt}</p>
                <div class="dialog__actions">
                    <button class="btn close-modal-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn"
                        class:btn--danger=danger
                        class:btn--primary={!danger}
                        on:click=on_confirm
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
