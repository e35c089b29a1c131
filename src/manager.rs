//! The library data manager: in-memory state kept in step with storage.
//!
//! DESIGN
//! ======
//! `LibraryManager` is the single object presentation glue talks to. Each
//! mutation follows the same write-through order: build the next book list
//! from a copy, persist it, and only then commit it to memory. A rejected
//! write therefore leaves memory exactly as storage has it.
//!
//! Category writes are secondary. Every load re-derives the categories of
//! stored books, so a failed category write after a successful book write is
//! logged rather than failing the operation.
//!
//! A stored book list that does not decode is never replaced: the manager
//! skips seeding and refuses book writes until a reload reads it cleanly.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use crate::config::LibraryConfig;
use crate::error::LibraryError;
use crate::state::book::{Book, HistoryEntry, NewBook};
use crate::state::filter::{CategoryFilter, LibraryFilter, StatusFilter, count_label};
use crate::state::library::{LibraryState, LibraryStats};
use crate::state::seed::{SEED_CATEGORIES, seed_books};
use crate::state::ui::PendingAction;
use crate::store::{KeyValueStore, Store};
use crate::util::dates::{self, Clock, SystemClock};
use crate::util::theme::Theme;

#[derive(Clone, Debug)]
pub struct LibraryManager<S, C = SystemClock> {
    store: Store<S>,
    clock: C,
    config: LibraryConfig,
    state: LibraryState,
    theme: Theme,
    loaded: bool,
    books_unreadable: bool,
}

impl<S: KeyValueStore, C: Clock> LibraryManager<S, C> {
    /// Manager with empty state that has not read storage yet.
    ///
    /// Used for the first render so server and client markup agree; call
    /// [`Self::reload`] once running in the browser.
    pub fn unloaded(kv: S, config: LibraryConfig, clock: C) -> Self {
        let store = Store::new(kv, config.keys.clone());
        Self {
            store,
            clock,
            theme: config.default_theme,
            config,
            state: LibraryState::default(),
            loaded: false,
            books_unreadable: false,
        }
    }

    /// Manager loaded from storage, seeded if the catalog is empty.
    pub fn open(kv: S, config: LibraryConfig, clock: C) -> Self {
        let mut manager = Self::unloaded(kv, config, clock);
        manager.reload();
        manager
    }

    /// Re-read all three collections from storage. The active filter is
    /// kept.
    pub fn reload(&mut self) {
        if let Err(e) = self.store.migrate_legacy_books() {
            log::warn!("library: legacy book list migration failed: {e}");
        }
        match self.store.load_books() {
            Ok(books) => {
                self.state.books = books;
                self.books_unreadable = false;
            }
            Err(e) => {
                log::error!("library: leaving stored book list untouched: {e}");
                self.state.books = Vec::new();
                self.books_unreadable = true;
            }
        }
        self.state.categories = self.store.load_categories(&self.config.default_categories);
        self.derive_categories();
        self.theme = self.store.load_theme(self.config.default_theme);
        self.loaded = true;
        log::debug!(
            "library: loaded {} books, {} categories, {} theme",
            self.state.books.len(),
            self.state.categories.len(),
            self.theme.as_str()
        );

        if self.state.books.is_empty() && !self.books_unreadable && self.config.seed_when_empty {
            self.seed();
        }
    }

    fn seed(&mut self) {
        let now = dates::timestamp(self.clock.now());
        let books = seed_books(&now, new_id);
        if let Err(e) = self.store.save_books(&books) {
            log::warn!("library: failed to store sample catalog: {e}");
            return;
        }
        self.state.books = books;
        for category in SEED_CATEGORIES {
            self.state.ensure_category(category);
        }
        self.persist_categories();
        log::info!("library: seeded {} sample books", self.state.books.len());
    }

    /// Add any book category missing from the list and store the result.
    fn derive_categories(&mut self) {
        let names: Vec<String> = self.state.books.iter().map(|b| b.category.clone()).collect();
        let mut added = 0;
        for name in &names {
            if self.state.ensure_category(name) {
                added += 1;
            }
        }
        if added > 0 {
            log::info!("library: restored {added} categories from stored books");
            self.persist_categories();
        }
    }

    fn persist_categories(&mut self) {
        if let Err(e) = self.store.save_categories(&self.state.categories) {
            log::warn!("library: failed to store categories: {e}");
        }
    }

    /// Run `op` on a copy of the state, persist the resulting books, then
    /// commit. Returns `op`'s value and whether the category list grew.
    fn commit<T>(
        &mut self,
        op: impl FnOnce(&mut LibraryState) -> Result<T, LibraryError>,
    ) -> Result<(T, bool), LibraryError> {
        self.check_writable()?;
        let mut next = self.state.clone();
        let value = op(&mut next)?;
        self.store.save_books(&next.books)?;
        let categories_changed = next.categories != self.state.categories;
        self.state = next;
        if categories_changed {
            self.persist_categories();
        }
        Ok((value, categories_changed))
    }

    // =============================================================
    // Accessors
    // =============================================================

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// # Errors
    ///
    /// [`LibraryError::CatalogUnreadable`] when the last load found a stored
    /// book list it could not decode.
    pub fn check_writable(&self) -> Result<(), LibraryError> {
        if self.books_unreadable {
            return Err(LibraryError::CatalogUnreadable);
        }
        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> &LibraryState {
        &self.state
    }

    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.state.books
    }

    #[must_use]
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.state.book(id)
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.state.categories
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &Store<S> {
        &self.store
    }

    #[must_use]
    pub fn filter(&self) -> &LibraryFilter {
        &self.state.filter
    }

    #[must_use]
    pub fn visible_books(&self) -> Vec<&Book> {
        self.state.visible_books()
    }

    /// Count label for the filtered grid.
    #[must_use]
    pub fn visible_count_label(&self) -> String {
        count_label(self.visible_books().len())
    }

    #[must_use]
    pub fn stats(&self) -> LibraryStats {
        self.state.stats()
    }

    /// # Errors
    ///
    /// [`LibraryError::NotFound`] when no book has `id`.
    pub fn history(&self, id: &str) -> Result<&[HistoryEntry], LibraryError> {
        self.state.history(id)
    }

    /// Default value for the borrow form's date input.
    #[must_use]
    pub fn today_value(&self) -> String {
        dates::date_value(self.clock.now().date())
    }

    // =============================================================
    // Filter
    // =============================================================

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.state.filter.search = search.into();
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.state.filter.category = category;
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.state.filter.status = status;
    }

    // =============================================================
    // Mutations
    // =============================================================

    /// Catalog a book and return its new id.
    ///
    /// # Errors
    ///
    /// [`LibraryError::MissingField`] for blank required fields, or
    /// [`LibraryError::Storage`] when the book list cannot be written.
    pub fn add_book(&mut self, draft: NewBook) -> Result<String, LibraryError> {
        let id = new_id();
        let added_date = dates::timestamp(self.clock.now());
        let (id, new_category) = self.commit(|state| state.add_book(draft, id, added_date).map(|b| b.id.clone()))?;
        log::info!("library: added book {id} (new category: {new_category})");
        Ok(id)
    }

    /// # Errors
    ///
    /// [`LibraryError::NotFound`] or [`LibraryError::Storage`].
    pub fn delete_book(&mut self, id: &str) -> Result<Book, LibraryError> {
        let (removed, _) = self.commit(|state| state.remove_book(id))?;
        log::info!("library: deleted book {id}");
        Ok(removed)
    }

    /// Lend a book. `date` is a `YYYY-MM-DD` input value; blank means today.
    ///
    /// # Errors
    ///
    /// [`LibraryError::InvalidDate`], [`LibraryError::MissingField`],
    /// [`LibraryError::NotFound`], [`LibraryError::AlreadyBorrowed`], or
    /// [`LibraryError::Storage`].
    pub fn borrow_book(&mut self, id: &str, borrower: &str, date: &str) -> Result<(), LibraryError> {
        let borrow_date = if date.trim().is_empty() {
            self.today_value()
        } else {
            dates::date_value(dates::parse_date_value(date)?)
        };
        self.commit(|state| state.borrow_book(id, borrower, borrow_date))?;
        log::info!("library: lent book {id}");
        Ok(())
    }

    /// Take a book back, stamping today's date on the open loan.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`], [`LibraryError::NotBorrowed`], or
    /// [`LibraryError::Storage`].
    pub fn return_book(&mut self, id: &str) -> Result<(), LibraryError> {
        let returned_on = self.today_value();
        self.commit(|state| state.return_book(id, returned_on))?;
        log::info!("library: returned book {id}");
        Ok(())
    }

    /// Execute a destructive action the user has confirmed.
    ///
    /// # Errors
    ///
    /// Whatever [`Self::delete_book`] or [`Self::return_book`] returns.
    pub fn apply(&mut self, action: &PendingAction) -> Result<(), LibraryError> {
        match action {
            PendingAction::Delete { book_id, .. } => self.delete_book(book_id).map(|_| ()),
            PendingAction::Return { book_id, .. } => self.return_book(book_id),
        }
    }

    /// Build the confirmation for deleting a book.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`] when no book has `id`.
    pub fn request_delete(&self, id: &str) -> Result<PendingAction, LibraryError> {
        let book = self.book(id).ok_or_else(|| LibraryError::NotFound(id.to_owned()))?;
        Ok(PendingAction::Delete {
            book_id: book.id.clone(),
            title: book.title.clone(),
        })
    }

    /// Build the confirmation for returning a book.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`], or [`LibraryError::NotBorrowed`] when the
    /// book is already available.
    pub fn request_return(&self, id: &str) -> Result<PendingAction, LibraryError> {
        let book = self.book(id).ok_or_else(|| LibraryError::NotFound(id.to_owned()))?;
        if !book.is_borrowed() {
            return Err(LibraryError::NotBorrowed(book.title.clone()));
        }
        Ok(PendingAction::Return {
            book_id: book.id.clone(),
            title: book.title.clone(),
        })
    }

    /// Flip light/dark, persist it, and return the new theme.
    ///
    /// # Errors
    ///
    /// [`LibraryError::Storage`] when the flag cannot be written; the theme
    /// is unchanged in that case.
    pub fn toggle_theme(&mut self) -> Result<Theme, LibraryError> {
        let next = self.theme.toggled();
        self.store.save_theme(next)?;
        self.theme = next;
        Ok(next)
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
