use super::*;

#[test]
fn category_entries_start_with_all_books() {
    let entries = category_entries(&["Fiction".to_owned(), "Sci-Fi".to_owned()]);
    assert_eq!(
        entries,
        vec![
            ("all".to_owned(), "All Books".to_owned()),
            ("Fiction".to_owned(), "Fiction".to_owned()),
            ("Sci-Fi".to_owned(), "Sci-Fi".to_owned()),
        ]
    );
}

#[test]
fn category_entries_with_no_categories() {
    assert_eq!(category_entries(&[]).len(), 1);
}

#[test]
fn status_option_values_parse_to_filters() {
    let parsed: Vec<StatusFilter> = STATUS_OPTIONS
        .iter()
        .map(|o| StatusFilter::from_value(o.value))
        .collect();
    assert_eq!(
        parsed,
        vec![
            StatusFilter::All,
            StatusFilter::Only(BookStatus::Available),
            StatusFilter::Only(BookStatus::Borrowed),
        ]
    );
}
