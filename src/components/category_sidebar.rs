//! Sidebar with category buttons, status radios, and shelf counts.

#[cfg(test)]
#[path = "category_sidebar_test.rs"]
mod category_sidebar_test;

use leptos::prelude::*;

use crate::app::AppLibrary;
use crate::state::book::BookStatus;
use crate::state::filter::{ALL_VALUE, CategoryFilter, StatusFilter};

#[derive(Clone, Copy)]
struct StatusOption {
    value: &'static str,
    label: &'static str,
}

const STATUS_OPTIONS: &[StatusOption] = &[
    StatusOption { value: ALL_VALUE, label: "All" },
    StatusOption { value: "Available", label: "Available" },
    StatusOption { value: "Borrowed", label: "Borrowed" },
];

/// Sidebar entries: `("all", "All Books")` followed by each category.
pub(crate) fn category_entries(categories: &[String]) -> Vec<(String, String)> {
    std::iter::once((ALL_VALUE.to_owned(), "All Books".to_owned()))
        .chain(categories.iter().map(|c| (c.clone(), c.clone())))
        .collect()
}

#[component]
pub fn CategorySidebar() -> impl IntoView {
    let library = expect_context::<RwSignal<AppLibrary>>();

    let active_category = move || library.with(|lib| lib.filter().category.as_value().to_owned());
    let active_status = move || library.with(|lib| lib.filter().status.as_value());

    view! {
        <aside class="category-sidebar">
            <h3 class="category-sidebar__heading">"Categories"</h3>
            <ul id="category-filter-list" class="category-sidebar__list">
                {move || {
                    let entries = library.with(|lib| category_entries(lib.categories()));
                    entries
                        .into_iter()
                        .map(|(value, label)| {
                            let value_for_class = value.clone();
                            view! {
                                <li>
                                    <button
                                        class="filter-btn"
                                        class:active=move || active_category() == value_for_class
                                        on:click=move |_| {
                                            let filter = CategoryFilter::from_value(&value);
                                            library.update(|lib| lib.set_category_filter(filter));
                                        }
                                    >
                                        {label}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>

            <h3 class="category-sidebar__heading">"Status"</h3>
            <div id="status-filter-group" class="category-sidebar__status">
                {STATUS_OPTIONS
                    .iter()
                    .map(|option| {
                        let value = option.value;
                        view! {
                            <label class="category-sidebar__radio">
                                <input
                                    type="radio"
                                    name="status-filter"
                                    value=value
                                    prop:checked=move || active_status() == value
                                    on:change=move |_| {
                                        let filter = StatusFilter::from_value(value);
                                        library.update(|lib| lib.set_status_filter(filter));
                                    }
                                />
                                {option.label}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>

            <dl class="category-sidebar__stats">
                <dt>"Total"</dt>
                <dd>{move || library.with(|lib| lib.stats().total)}</dd>
                <dt>{BookStatus::Available.as_str()}</dt>
                <dd>{move || library.with(|lib| lib.stats().available)}</dd>
                <dt>{BookStatus::Borrowed.as_str()}</dt>
                <dd>{move || library.with(|lib| lib.stats().borrowed)}</dd>
            </dl>
        </aside>
    }
}
