//! In-memory book collection, category list, and active filter.
//!
//! DESIGN
//! ======
//! Every operation here is pure over owned data: no storage, no clock. Ids
//! and dates are supplied by the caller ([`crate::manager::LibraryManager`])
//! so transitions are deterministic under test. A failed operation leaves the
//! state untouched.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use super::book::{Book, BookStatus, HistoryEntry, NewBook};
use super::filter::LibraryFilter;
use crate::error::LibraryError;

/// Status counts across the whole collection (ignores the filter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LibraryStats {
    pub total: usize,
    pub available: usize,
    pub borrowed: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LibraryState {
    pub books: Vec<Book>,
    /// Known categories in insertion order; drives the sidebar and the
    /// add-book suggestions.
    pub categories: Vec<String>,
    pub filter: LibraryFilter,
}

impl LibraryState {
    #[must_use]
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    fn book_mut(&mut self, id: &str) -> Result<&mut Book, LibraryError> {
        self.books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| LibraryError::NotFound(id.to_owned()))
    }

    /// Append `name` to the category list if missing. Returns whether it was
    /// added.
    pub fn ensure_category(&mut self, name: &str) -> bool {
        if self.categories.iter().any(|c| c == name) {
            return false;
        }
        self.categories.push(name.to_owned());
        true
    }

    /// Catalog a new book as `Available` with an empty history.
    ///
    /// # Errors
    ///
    /// [`LibraryError::MissingField`] when title, author, or category is blank.
    pub fn add_book(&mut self, draft: NewBook, id: String, added_date: String) -> Result<&Book, LibraryError> {
        let title = required(&draft.title, "title")?;
        let author = required(&draft.author, "author")?;
        let category = required(&draft.category, "category")?;
        let image = draft.image.trim();

        self.ensure_category(&category);
        self.books.push(Book {
            id,
            title,
            author,
            category,
            status: BookStatus::Available,
            image: (!image.is_empty()).then(|| image.to_owned()),
            added_date,
            history: Vec::new(),
        });
        Ok(&self.books[self.books.len() - 1])
    }

    /// # Errors
    ///
    /// [`LibraryError::NotFound`] when no book has `id`.
    pub fn remove_book(&mut self, id: &str) -> Result<Book, LibraryError> {
        let index = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| LibraryError::NotFound(id.to_owned()))?;
        Ok(self.books.remove(index))
    }

    /// Lend an available book, opening a history entry.
    ///
    /// # Errors
    ///
    /// [`LibraryError::MissingField`] for a blank borrower,
    /// [`LibraryError::NotFound`], or [`LibraryError::AlreadyBorrowed`].
    pub fn borrow_book(&mut self, id: &str, borrower: &str, borrow_date: String) -> Result<(), LibraryError> {
        let borrower = required(borrower, "borrower")?;
        let book = self.book_mut(id)?;
        if book.status != BookStatus::Available {
            return Err(LibraryError::AlreadyBorrowed(book.title.clone()));
        }
        book.status = BookStatus::Borrowed;
        book.history.push(HistoryEntry {
            borrower,
            borrow_date,
            return_date: None,
        });
        Ok(())
    }

    /// Take a borrowed book back, closing its open history entry.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`] or [`LibraryError::NotBorrowed`].
    pub fn return_book(&mut self, id: &str, returned_on: String) -> Result<(), LibraryError> {
        let book = self.book_mut(id)?;
        if book.status != BookStatus::Borrowed {
            return Err(LibraryError::NotBorrowed(book.title.clone()));
        }
        book.status = BookStatus::Available;
        if let Some(entry) = book.history.last_mut().filter(|e| e.is_open()) {
            entry.return_date = Some(returned_on);
        }
        Ok(())
    }

    /// Loan history for a book, oldest first.
    ///
    /// # Errors
    ///
    /// [`LibraryError::NotFound`] when no book has `id`.
    pub fn history(&self, id: &str) -> Result<&[HistoryEntry], LibraryError> {
        self.book(id)
            .map(|b| b.history.as_slice())
            .ok_or_else(|| LibraryError::NotFound(id.to_owned()))
    }

    #[must_use]
    pub fn visible_books(&self) -> Vec<&Book> {
        self.filter.apply(&self.books)
    }

    #[must_use]
    pub fn stats(&self) -> LibraryStats {
        let borrowed = self.books.iter().filter(|b| b.is_borrowed()).count();
        LibraryStats {
            total: self.books.len(),
            available: self.books.len() - borrowed,
            borrowed,
        }
    }
}

fn required(value: &str, field: &'static str) -> Result<String, LibraryError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LibraryError::MissingField(field));
    }
    Ok(value.to_owned())
}
