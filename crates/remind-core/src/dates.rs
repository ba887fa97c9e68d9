//! Natural-language due-date parsing.
//!
//! Three rules are tried in order, first match wins:
//!
//! 1. the literal keywords `today` / `tomorrow` / `yesterday`,
//! 2. relative offsets of the form `in <N> <unit>`,
//! 3. absolute forms: ISO date/date-time, then the `chrono-english`
//!    recognizer for phrases like "next monday" or "tomorrow 3pm".
//!
//! Parsing never samples the clock; the caller supplies `now`, and the
//! timezone it carries is the calendar context used for resolution.

use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use chrono_english::{parse_date_string, Dialect};

use crate::models::DueDate;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d"];

/// Resolves a free-form due-date string to a concrete instant, or `None`
/// when no rule matches.
pub fn parse<Tz>(input: &str, now: DateTime<Tz>) -> Option<DateTime<Tz>>
where
    Tz: TimeZone,
    Tz::Offset: Copy,
{
    let trimmed = input.trim();
    let lowered = trimmed.to_lowercase();

    match lowered.as_str() {
        "today" => return start_of_day(&now, 0),
        "tomorrow" => return start_of_day(&now, 1),
        "yesterday" => return start_of_day(&now, -1),
        _ => {}
    }

    if let Some(rest) = lowered.strip_prefix("in ") {
        // A malformed number or unrecognized unit falls through to the
        // absolute-form rule rather than failing outright.
        if let Some(resolved) = relative_offset(rest, &now) {
            return Some(resolved);
        }
    }

    absolute(trimmed, now)
}

/// Parses a due-date string into a [`DueDate`], preserving whether the input
/// specified a time of day.
///
/// Time-bearing-ness is judged from the raw input string alone: the input
/// carries a time iff it contains `:` or the case-insensitive substrings
/// `am`, `pm`, or `at`. Date-only inputs never carry a spurious time value,
/// even when the resolved instant has a non-midnight time component.
pub fn parse_components<Tz>(input: &str, now: DateTime<Tz>) -> Option<DueDate>
where
    Tz: TimeZone,
    Tz::Offset: Copy,
{
    let resolved = parse(input, now)?;

    let mut due = DueDate {
        year: Some(resolved.year()),
        month: Some(resolved.month()),
        day: Some(resolved.day()),
        ..Default::default()
    };
    if carries_time_of_day(input) {
        due.hour = Some(resolved.hour());
        due.minute = Some(resolved.minute());
    }
    Some(due)
}

fn carries_time_of_day(input: &str) -> bool {
    let lowered = input.to_lowercase();
    input.contains(':')
        || lowered.contains("am")
        || lowered.contains("pm")
        || lowered.contains("at")
}

fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>, day_offset: i64) -> Option<DateTime<Tz>> {
    let date = if day_offset >= 0 {
        now.date_naive().checked_add_days(Days::new(day_offset as u64))?
    } else {
        now.date_naive()
            .checked_sub_days(Days::new(day_offset.unsigned_abs()))?
    };
    date.and_hms_opt(0, 0, 0)?
        .and_local_timezone(now.timezone())
        .earliest()
}

/// Rule 2: `<N> <unit>` after the `in ` prefix has been stripped. Requires at
/// least two tokens; extra tokens are ignored. Month and year offsets use
/// calendar-aware addition with chrono's rollover clamping.
fn relative_offset<Tz: TimeZone>(rest: &str, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let mut tokens = rest.split_whitespace();
    let value: u32 = tokens.next()?.parse().ok()?;
    let unit = tokens.next()?;

    match unit {
        "day" | "days" => now.clone().checked_add_days(Days::new(u64::from(value))),
        "week" | "weeks" => now
            .clone()
            .checked_add_days(Days::new(u64::from(value) * 7)),
        "month" | "months" => now.clone().checked_add_months(Months::new(value)),
        "year" | "years" => now
            .clone()
            .checked_add_months(Months::new(value.checked_mul(12)?)),
        "hour" | "hours" => now.clone().checked_add_signed(Duration::hours(i64::from(value))),
        "minute" | "minutes" => now
            .clone()
            .checked_add_signed(Duration::minutes(i64::from(value))),
        _ => None,
    }
}

/// Rule 3: the explicit ISO grammar first, then the bounded
/// natural-English fallback.
fn absolute<Tz>(input: &str, now: DateTime<Tz>) -> Option<DateTime<Tz>>
where
    Tz: TimeZone,
    Tz::Offset: Copy,
{
    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return parsed.and_local_timezone(now.timezone()).earliest();
        }
    }

    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(input, format) {
            return parsed
                .and_hms_opt(0, 0, 0)?
                .and_local_timezone(now.timezone())
                .earliest();
        }
    }

    parse_date_string(input, now, Dialect::Us).ok()
}
