use super::*;

fn make_book(id: &str, title: &str, author: &str, category: &str, status: BookStatus) -> Book {
    Book {
        id: id.to_owned(),
        title: title.to_owned(),
        author: author.to_owned(),
        category: category.to_owned(),
        status,
        image: None,
        added_date: String::new(),
        history: Vec::new(),
    }
}

fn shelf() -> Vec<Book> {
    vec![
        make_book("1", "The Great Gatsby", "F. Scott Fitzgerald", "Fiction", BookStatus::Available),
        make_book("2", "Dune", "Frank Herbert", "Sci-Fi", BookStatus::Borrowed),
        make_book("3", "Bound by Time", "Jonathan Wells", "Fiction", BookStatus::Borrowed),
        make_book("4", "Steve Jobs", "Walter Isaacson", "Biography", BookStatus::Available),
    ]
}

fn ids(books: &[&Book]) -> Vec<String> {
    books.iter().map(|b| b.id.clone()).collect()
}

// =============================================================
// Search predicate
// =============================================================

#[test]
fn empty_filter_keeps_everything_in_order() {
    let books = shelf();
    let filter = LibraryFilter::default();
    assert_eq!(ids(&filter.apply(&books)), vec!["1", "2", "3", "4"]);
}

#[test]
fn search_matches_title_case_insensitively() {
    let books = shelf();
    let filter = LibraryFilter {
        search: "GATSBY".to_owned(),
        ..LibraryFilter::default()
    };
    assert_eq!(ids(&filter.apply(&books)), vec!["1"]);
}

#[test]
fn search_matches_author() {
    let books = shelf();
    let filter = LibraryFilter {
        search: "herb".to_owned(),
        ..LibraryFilter::default()
    };
    assert_eq!(ids(&filter.apply(&books)), vec!["2"]);
}

#[test]
fn search_whitespace_is_significant() {
    let books = shelf();
    let filter = LibraryFilter {
        search: "by ".to_owned(),
        ..LibraryFilter::default()
    };
    // "Bound by Time" contains "by "; "Gatsby" ends without a trailing space.
    assert_eq!(ids(&filter.apply(&books)), vec!["3"]);
}

// =============================================================
// Category and status predicates
// =============================================================

#[test]
fn category_filter_is_exact_and_case_sensitive() {
    let books = shelf();
    let mut filter = LibraryFilter {
        category: CategoryFilter::Only("Fiction".to_owned()),
        ..LibraryFilter::default()
    };
    assert_eq!(ids(&filter.apply(&books)), vec!["1", "3"]);

    filter.category = CategoryFilter::Only("fiction".to_owned());
    assert!(filter.apply(&books).is_empty());
}

#[test]
fn status_filter_selects_one_state() {
    let books = shelf();
    let filter = LibraryFilter {
        status: StatusFilter::Only(BookStatus::Borrowed),
        ..LibraryFilter::default()
    };
    assert_eq!(ids(&filter.apply(&books)), vec!["2", "3"]);
}

#[test]
fn predicates_combine_as_conjunction() {
    let books = shelf();
    let filter = LibraryFilter {
        search: "t".to_owned(),
        category: CategoryFilter::Only("Fiction".to_owned()),
        status: StatusFilter::Only(BookStatus::Available),
    };
    assert_eq!(ids(&filter.apply(&books)), vec!["1"]);
}

// =============================================================
// UI value round-trips
// =============================================================

#[test]
fn category_values_parse_all_and_names() {
    assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
    assert_eq!(
        CategoryFilter::from_value("Sci-Fi"),
        CategoryFilter::Only("Sci-Fi".to_owned())
    );
    assert_eq!(CategoryFilter::Only("Sci-Fi".to_owned()).as_value(), "Sci-Fi");
    assert_eq!(CategoryFilter::All.as_value(), ALL_VALUE);
}

#[test]
fn status_values_parse_known_states() {
    assert_eq!(StatusFilter::from_value("all"), StatusFilter::All);
    assert_eq!(
        StatusFilter::from_value("Available"),
        StatusFilter::Only(BookStatus::Available)
    );
    assert_eq!(StatusFilter::from_value("lost"), StatusFilter::All);
    assert_eq!(StatusFilter::Only(BookStatus::Borrowed).as_value(), "Borrowed");
}

#[test]
fn count_label_pluralizes() {
    assert_eq!(count_label(0), "0 books");
    assert_eq!(count_label(1), "1 book");
    assert_eq!(count_label(8), "8 books");
}
