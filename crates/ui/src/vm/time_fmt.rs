use chrono::{DateTime, Utc};

/// Long calendar date, e.g. `January 15, 2024`.
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%B %-d, %Y").to_string()
}

/// Abbreviated calendar date, e.g. `Dec 5, 2023`.
#[must_use]
pub fn format_short_date(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{minutes} minutes")
    }
}
