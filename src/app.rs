//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::LibraryConfig;
use crate::manager::LibraryManager;
use crate::pages::library::LibraryPage;
use crate::state::ui::UiState;
use crate::store::BrowserStore;
use crate::util::dates::SystemClock;
use crate::util::theme;

/// The manager type shared through context.
pub type AppLibrary = LibraryManager<BrowserStore, SystemClock>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the library manager and UI state contexts. The manager starts
/// unloaded so the hydrating client renders the same markup as the server,
/// then reads `localStorage` once mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let library = RwSignal::new(AppLibrary::unloaded(BrowserStore, LibraryConfig::default(), SystemClock));
    let ui = RwSignal::new(UiState::default());

    provide_context(library);
    provide_context(ui);

    // Effects only run in the browser.
    Effect::new(move || {
        library.update(|lib| lib.reload());
        theme::apply(library.with_untracked(|lib| lib.theme()));
        let writable = library.with_untracked(AppLibrary::check_writable);
        ui.update(|u| {
            u.record(writable);
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/shelfmark.css"/>
        <Title text="My Library"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LibraryPage/>
            </Routes>
        </Router>
    }
}
