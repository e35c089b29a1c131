//! Library and UI state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`book` records, `filter` predicates, the
//! `library` collection, `ui` dialogs) so components depend on small focused
//! models. None of these modules touch storage.

pub mod book;
pub mod filter;
pub mod library;
pub mod seed;
pub mod ui;
