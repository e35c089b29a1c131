//! Date stamping, parsing, and display for book records.
//!
//! Two stored forms exist: RFC 3339 timestamps (`addedDate`, seeded loans) and
//! bare `YYYY-MM-DD` values (borrow form input, return stamps). All stamps are
//! taken in UTC. Timestamps are shown in the viewer's local offset; bare dates
//! are shown as stored.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

use crate::error::LibraryError;

/// Source of the current instant. Injected so stamps are testable.
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Clock pinned to one instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// RFC 3339 timestamp, e.g. `2026-10-14T09:30:00Z`.
#[must_use]
pub fn timestamp(now: OffsetDateTime) -> String {
    now.format(&Rfc3339).unwrap_or_else(|_| date_value(now.date()))
}

/// `YYYY-MM-DD`, the form a date `<input>` produces.
#[must_use]
pub fn date_value(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Parse a `YYYY-MM-DD` input value.
///
/// # Errors
///
/// Returns [`LibraryError::InvalidDate`] carrying the raw input.
pub fn parse_date_value(raw: &str) -> Result<Date, LibraryError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| LibraryError::InvalidDate(raw.to_owned()))
}

/// The browser's UTC offset, or UTC where it cannot be determined.
#[must_use]
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Render a stored date as `M/D/YYYY` in the local offset.
#[must_use]
pub fn display_date(stored: &str) -> String {
    display_date_in(stored, local_offset())
}

/// Render a stored date as `M/D/YYYY`, converting timestamps to `offset`.
/// Unparsable values pass through.
#[must_use]
pub fn display_date_in(stored: &str, offset: UtcOffset) -> String {
    let date = match OffsetDateTime::parse(stored, &Rfc3339) {
        Ok(instant) => instant.to_offset(offset).date(),
        Err(_) => match parse_date_value(stored.get(..10).unwrap_or(stored)) {
            Ok(date) => date,
            Err(_) => return stored.to_owned(),
        },
    };
    format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
}
