//! Sample catalog stored on first launch.

use super::book::{Book, BookStatus, HistoryEntry};

/// Categories merged into the list when seeding, appended in this order.
pub const SEED_CATEGORIES: &[&str] = &[
    "Fiction",
    "Technology",
    "Sci-Fi",
    "Non-Fiction",
    "Biography",
    "Philosophy",
    "Conspiracy",
];

struct SeedBook {
    title: &'static str,
    author: &'static str,
    category: &'static str,
    image: &'static str,
    borrower: Option<&'static str>,
}

const SEED_BOOKS: &[SeedBook] = &[
    SeedBook {
        title: "The Great Gatsby",
        author: "F. Scott Fitzgerald",
        category: "Fiction",
        image: "https://api.getlitt.co/storage/books/medium/the-great-gatsby.jpeg",
        borrower: None,
    },
    SeedBook {
        title: "Echoes of Tomorrow",
        author: "Robert C. Martin",
        category: "Philosophy",
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTLkuf9f3HWABQ-TeBtgdrzMsuvDedV0Y4Yvw&s",
        borrower: Some("John Doe"),
    },
    SeedBook {
        title: "Crown of Secret",
        author: "Frank Herbert",
        category: "Conspiracy",
        image: "https://images.template.net/454183/Modern-Royal-Book-Cover-Template-edit-online.png",
        borrower: None,
    },
    SeedBook {
        title: "The Quantum Paradox",
        author: "James Clear",
        category: "Non-Fiction",
        image: "https://images.template.net/454185/Aesthetic-Ebook-Cover-Template-edit-online.png",
        borrower: None,
    },
    SeedBook {
        title: "Whispers of the heart",
        author: "J.R.R. Tolkien",
        category: "Fiction",
        image: "https://images.template.net/455456/5x8-Book-Cover-Template-edit-online.png",
        borrower: None,
    },
    SeedBook {
        title: "The Last Train Home",
        author: "Walter Isaacson",
        category: "Fiction",
        image: "https://images.template.net/455460/Paperback-Book-Cover-Template-edit-online.png",
        borrower: None,
    },
    SeedBook {
        title: "The Art of Resilience",
        author: "Dr. Michael Thompson",
        category: "Non-Fiction",
        image: "https://images.template.net/454179/Outline-Book-Cover-Template-edit-online.png",
        borrower: None,
    },
    SeedBook {
        title: "Bound by Time",
        author: "Jonathan Wells",
        category: "Fiction",
        image: "https://images.template.net/454184/Leather-Book-Cover-Template-edit-online.png",
        borrower: None,
    },
];

/// Build the sample books, stamping every `addedDate` (and the one open
/// loan) with `now`. `new_id` supplies a fresh id per book.
pub fn seed_books(now: &str, mut new_id: impl FnMut() -> String) -> Vec<Book> {
    SEED_BOOKS
        .iter()
        .map(|seed| {
            let history = seed
                .borrower
                .map(|borrower| HistoryEntry {
                    borrower: borrower.to_owned(),
                    borrow_date: now.to_owned(),
                    return_date: None,
                })
                .into_iter()
                .collect::<Vec<_>>();
            Book {
                id: new_id(),
                title: seed.title.to_owned(),
                author: seed.author.to_owned(),
                category: seed.category.to_owned(),
                status: if history.is_empty() { BookStatus::Available } else { BookStatus::Borrowed },
                image: Some(seed.image.to_owned()),
                added_date: now.to_owned(),
                history,
            }
        })
        .collect()
}
