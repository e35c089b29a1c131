//! Collection filter: search text, category, and status predicates.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use super::book::{Book, BookStatus};

/// UI value meaning "no restriction" for category and status selectors.
pub const ALL_VALUE: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a sidebar button value (`"all"` or a category name).
    #[must_use]
    pub fn from_value(raw: &str) -> Self {
        if raw == ALL_VALUE {
            Self::All
        } else {
            Self::Only(raw.to_owned())
        }
    }

    #[must_use]
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_VALUE,
            Self::Only(category) => category,
        }
    }

    #[must_use]
    pub fn allows(&self, book: &Book) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => book.category == *category,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookStatus),
}

impl StatusFilter {
    /// Parse a status radio value. Unknown values select everything.
    #[must_use]
    pub fn from_value(raw: &str) -> Self {
        BookStatus::parse(raw).map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub fn as_value(self) -> &'static str {
        match self {
            Self::All => ALL_VALUE,
            Self::Only(status) => status.as_str(),
        }
    }

    #[must_use]
    pub fn allows(self, book: &Book) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => book.status == status,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LibraryFilter {
    pub search: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

impl LibraryFilter {
    /// Case-insensitive substring match on title or author. Empty search
    /// text matches everything; whitespace is significant.
    #[must_use]
    pub fn matches_search(&self, book: &Book) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        book.title.to_lowercase().contains(&term) || book.author.to_lowercase().contains(&term)
    }

    #[must_use]
    pub fn allows(&self, book: &Book) -> bool {
        self.matches_search(book) && self.category.allows(book) && self.status.allows(book)
    }

    /// Books passing all three predicates, in collection order.
    #[must_use]
    pub fn apply<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        books.iter().filter(|b| self.allows(b)).collect()
    }
}

/// Grid header text: `"1 book"`, otherwise `"N books"`.
#[must_use]
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 book".to_owned()
    } else {
        format!("{count} books")
    }
}
