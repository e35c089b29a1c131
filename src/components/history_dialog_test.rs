use super::*;

fn entry(borrower: &str, borrowed: &str, returned: Option<&str>) -> HistoryEntry {
    HistoryEntry {
        borrower: borrower.to_owned(),
        borrow_date: borrowed.to_owned(),
        return_date: returned.map(str::to_owned),
    }
}

#[test]
fn history_rows_empty_for_no_loans() {
    assert!(history_rows(&[]).is_empty());
}

#[test]
fn history_rows_format_dates_and_mark_open_loan() {
    let rows = history_rows(&[
        entry("Ada", "2026-10-02", Some("2026-10-09")),
        entry("John Doe", "2026-10-14T09:30:00Z", None),
    ]);
    assert_eq!(
        rows,
        vec![
            HistoryRow {
                borrower: "Ada".to_owned(),
                borrowed: "10/2/2026".to_owned(),
                returned: "10/9/2026".to_owned(),
                open: false,
            },
            HistoryRow {
                borrower: "John Doe".to_owned(),
                borrowed: "10/14/2026".to_owned(),
                returned: OPEN_LOAN_LABEL.to_owned(),
                open: true,
            },
        ]
    );
}
