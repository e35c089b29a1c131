use super::*;
use time::macros::{date, datetime, offset};

// =============================================================
// Stamping
// =============================================================

#[test]
fn timestamp_is_rfc3339_utc() {
    let now = datetime!(2026-10-14 09:30:00 UTC);
    assert_eq!(timestamp(now), "2026-10-14T09:30:00Z");
}

#[test]
fn date_value_zero_pads() {
    assert_eq!(date_value(date!(2026-03-07)), "2026-03-07");
}

#[test]
fn fixed_clock_returns_pinned_instant() {
    let now = datetime!(2026-10-14 09:30:00 UTC);
    assert_eq!(FixedClock(now).now(), now);
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_date_value_accepts_input_form() {
    assert_eq!(parse_date_value("2026-10-14").unwrap(), date!(2026-10-14));
    assert_eq!(parse_date_value(" 2026-10-14 ").unwrap(), date!(2026-10-14));
}

#[test]
fn parse_date_value_rejects_garbage() {
    let err = parse_date_value("14/10/2026").unwrap_err();
    assert!(matches!(err, LibraryError::InvalidDate(raw) if raw == "14/10/2026"));
    assert!(parse_date_value("2026-02-30").is_err());
}

// =============================================================
// Display
// =============================================================

#[test]
fn display_date_formats_both_stored_forms() {
    assert_eq!(display_date("2026-10-04"), "10/4/2026");
    assert_eq!(display_date_in("2026-01-09T17:45:12.345Z", UtcOffset::UTC), "1/9/2026");
}

#[test]
fn display_date_passes_through_unparsable() {
    assert_eq!(display_date("yesterday"), "yesterday");
    assert_eq!(display_date(""), "");
}

#[test]
fn display_date_converts_timestamps_to_offset() {
    // Late evening in New York is already the next day in UTC.
    assert_eq!(display_date_in("2026-10-15T02:30:00Z", offset!(-5)), "10/14/2026");
    assert_eq!(display_date_in("2026-10-14T23:30:00Z", offset!(+2)), "10/15/2026");
}

#[test]
fn display_date_keeps_bare_dates_regardless_of_offset() {
    assert_eq!(display_date_in("2026-10-14", offset!(-5)), "10/14/2026");
    assert_eq!(display_date_in("2026-10-14", offset!(+9)), "10/14/2026");
}
