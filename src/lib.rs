//! # shelfmark
//!
//! Leptos + WASM personal library tracker. A single user catalogs books,
//! lends and takes them back, filters the shelf, and switches between light
//! and dark themes. Everything persists in the browser's `localStorage`.
//!
//! The library logic (`state`, `store`, `manager`) is UI-framework agnostic
//! and tested natively; `app`, `pages`, and `components` are thin Leptos glue
//! over [`manager::LibraryManager`].

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod manager;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod server;
pub mod state;
pub mod store;
pub mod util;

/// Browser entry point: installs console logging and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
