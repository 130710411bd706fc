//! Date parsing and display helpers shared by the conversion layer and the presentation layer.
//!
//! Every function is pure: the formats are constants and the reference instant `now`
//! is always passed in by the caller.

use chrono::{DateTime, Datelike, Months, NaiveDateTime, Utc};

/// Layout of a repository creation date, without its UTC designator or offset.
const REPOSITORY_DATE_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S";

/// Layout of a repository creation date carrying a numeric offset.
const REPOSITORY_DATE_LAYOUT_WITH_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Long absolute layout, e.g. `Tuesday, Oct 10, 2023`.
const ABSOLUTE_DISPLAY_LAYOUT: &str = "%A, %b %-d, %Y";

/// Dates at least this many whole months in the past are displayed relatively.
const RELATIVE_DISPLAY_THRESHOLD_MONTHS: i32 = 6;

/// Length of the `YYYY-MM-DDTHH:MM:SS` prefix.
const DATE_TIME_PREFIX_LEN: usize = 19;

fn has_repository_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() <= DATE_TIME_PREFIX_LEN {
        return false;
    }

    bytes[..DATE_TIME_PREFIX_LEN]
        .iter()
        .enumerate()
        .all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            10 => *byte == b'T',
            13 | 16 => *byte == b':',
            17 => matches!(*byte, b'0'..=b'5'),
            _ => byte.is_ascii_digit(),
        })
}

/// Parses a repository creation date such as `2023-10-10T12:00:00Z` or `2023-10-10T14:00:00+0200`.
///
/// Returns `None` for any other layout, including leap seconds.
pub fn parse_repository_date(value: &str) -> Option<DateTime<Utc>> {
    if !has_repository_date_shape(value) {
        return None;
    }

    let (date_time, offset) = value.split_at(DATE_TIME_PREFIX_LEN);
    if offset == "Z" {
        return NaiveDateTime::parse_from_str(date_time, REPOSITORY_DATE_LAYOUT)
            .ok()
            .map(|date_time| date_time.and_utc());
    }
    if !offset.starts_with(['+', '-']) {
        return None;
    }

    DateTime::parse_from_str(value, REPOSITORY_DATE_LAYOUT_WITH_OFFSET)
        .ok()
        .map(|date_time| date_time.with_timezone(&Utc))
}

/// Number of whole calendar months elapsed from `from` to `to`, negative when `to` is earlier.
pub fn months_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i32 {
    if to < from {
        return -months_between(to, from);
    }

    let mut months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    while months > 0
        && from
            .checked_add_months(Months::new(months as u32))
            .is_none_or(|shifted| shifted > to)
    {
        months -= 1;
    }

    months
}

fn pluralize(count: i32, unit: &str) -> String {
    match count {
        1 => format!("1 {unit} ago"),
        _ => format!("{count} {unit}s ago"),
    }
}

/// Formats `date` for display relative to `now`.
///
/// Dates less than six months old (or in the future) use the long absolute form,
/// e.g. `Tuesday, Oct 10, 2023`. Older dates use a relative phrase with the
/// largest whole unit, e.g. `9 months ago` or `2 years ago`.
pub fn relative_or_formatted_date(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let months = months_between(date, now);
    if months < RELATIVE_DISPLAY_THRESHOLD_MONTHS {
        return date.format(ABSOLUTE_DISPLAY_LAYOUT).to_string();
    }

    match months / 12 {
        0 => pluralize(months, "month"),
        years => pluralize(years, "year"),
    }
}

/// Number of whole days elapsed from `date` to `now`.
pub fn days_since(date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - date).num_days()
}

/// Badge label such as `42 days ago`.
pub fn days_ago_label(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format!("{} days ago", days_since(date, now))
}
