//! Validation helpers for wizard field input.

use time::{Date, OffsetDateTime};

use crate::settings::settings;

/// Parse a date in the configured format. `None` when the text is not a
/// valid calendar date (so `2024/13/45` is rejected, not just malformed
/// shapes).
pub fn parse_date(text: &str) -> Option<Date> {
    Date::parse(text, settings().date.format_items()).ok()
}

/// `true` when the text is a non-empty run of ASCII digits.
pub fn is_count(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Today's date formatted per settings. Local time zone, falling back to UTC
/// when the local offset cannot be determined.
pub fn today() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.date()
        .format(settings().date.format_items())
        .unwrap_or_default()
}
