use super::*;
use crate::config::LibraryConfig;
use crate::state::book::NewBook;
use crate::state::ui::PendingAction;
use crate::store::BrowserStore;
use crate::util::dates::SystemClock;

fn signals() -> (RwSignal<AppLibrary>, RwSignal<UiState>) {
    let library = RwSignal::new(AppLibrary::unloaded(BrowserStore, LibraryConfig::default(), SystemClock));
    let ui = RwSignal::new(UiState::default());
    (library, ui)
}

#[test]
fn query_failure_sets_error_banner() {
    let owner = Owner::new();
    owner.set();
    let (library, ui) = signals();

    let action = query(library, ui, |lib| lib.request_delete("missing"));
    assert!(action.is_none());
    assert_eq!(ui.get_untracked().error.as_deref(), Some("book not found: missing"));
}

#[test]
fn query_success_returns_value_and_clears_error() {
    let owner = Owner::new();
    owner.set();
    let (library, ui) = signals();
    ui.update(|u| u.error = Some("stale".to_owned()));

    let draft = NewBook {
        title: "Dune".to_owned(),
        author: "Frank Herbert".to_owned(),
        category: "Sci-Fi".to_owned(),
        image: String::new(),
    };
    let id = library.try_update(|lib| lib.add_book(draft)).unwrap().unwrap();

    let action = query(library, ui, |lib| lib.request_delete(&id));
    assert!(matches!(action, Some(PendingAction::Delete { ref book_id, .. }) if *book_id == id));
    assert!(ui.get_untracked().error.is_none());
}
