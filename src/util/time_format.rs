//! Console timestamp formatting (`YYYY-MM-DD HH:MM:SS`).

#[cfg(test)]
#[path = "time_format_test.rs"]
mod tests;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

const CONSOLE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Returned when a timestamp cannot be represented.
pub const INVALID_TIME: &str = "0000-00-00 00:00:00";

/// Format `date` in its own offset.
#[must_use]
pub fn format_time(date: OffsetDateTime) -> String {
    date.format(CONSOLE_FORMAT)
        .unwrap_or_else(|_| INVALID_TIME.to_owned())
}

/// Format `date` in the host's local offset.
#[must_use]
pub fn format_time_local(date: OffsetDateTime) -> String {
    match date.checked_to_offset(local_offset()) {
        Some(local) => format_time(local),
        None => INVALID_TIME.to_owned(),
    }
}

/// Format an epoch-millisecond timestamp in the host's local offset.
#[must_use]
pub fn format_unix_millis(millis: i64) -> String {
    let nanos = i128::from(millis) * 1_000_000;
    match OffsetDateTime::from_unix_timestamp_nanos(nanos) {
        Ok(date) => format_time_local(date),
        Err(_) => INVALID_TIME.to_owned(),
    }
}

/// The current local time, formatted.
#[must_use]
pub fn now_local() -> String {
    format_time_local(OffsetDateTime::now_utc())
}

/// Host offset, or UTC when the platform cannot report one soundly.
fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}
