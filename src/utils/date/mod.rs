// Date utility functions
// Formatting for saved-palette listings

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Short local date such as `Mar 4, 2025`.
pub fn format_short_date(date: DateTime<Utc>) -> String {
    format_short_date_in(date, &Local)
}

/// Short date as seen in `tz`.
pub fn format_short_date_in<Tz>(date: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.with_timezone(tz).format("%b %-d, %Y").to_string()
}

/// Creation date, with the update date appended for edited palettes.
pub fn format_palette_dates(created: DateTime<Utc>, updated: Option<DateTime<Utc>>) -> String {
    format_palette_dates_in(created, updated, &Local)
}

fn format_palette_dates_in<Tz>(
    created: DateTime<Utc>,
    updated: Option<DateTime<Utc>>,
    tz: &Tz,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match updated {
        Some(updated) => format!(
            "{} (updated {})",
            format_short_date_in(created, tz),
            format_short_date_in(updated, tz)
        ),
        None => format_short_date_in(created, tz),
    }
}
