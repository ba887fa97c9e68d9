//! Human-readable rendering of due dates.

use chrono::{DateTime, Days, TimeZone};
use chrono_humanize::{Accuracy, HumanTime, Tense};

use crate::models::DueDate;

const TIME_FORMAT: &str = "%-I:%M %p";
const DATE_TIME_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";

/// Renders a due date for interactive display, classified against `now`:
/// `"Today"` / `"Tomorrow"` (with an `at <time>` suffix when the due date is
/// time-bearing), `"Overdue: <date and time>"` for past instants, or a
/// relative phrase ("in 3 days") for anything further out.
///
/// Returns `None` when there is no due date or its calendar date is
/// incomplete; that is "nothing to display", not an error.
pub fn format_due_date<Tz: TimeZone>(due: Option<&DueDate>, now: &DateTime<Tz>) -> Option<String> {
    let due = due?;
    let resolved = due.resolve(&now.timezone())?;

    let today = now.date_naive();
    let due_day = resolved.date_naive();

    if due_day == today {
        Some(day_label("Today", due, &resolved))
    } else if today.checked_add_days(Days::new(1)) == Some(due_day) {
        Some(day_label("Tomorrow", due, &resolved))
    } else if resolved < *now {
        Some(format!(
            "Overdue: {}",
            resolved.naive_local().format(DATE_TIME_FORMAT)
        ))
    } else {
        let until = resolved - now.clone();
        Some(HumanTime::from(until).to_text_en(Accuracy::Rough, Tense::Future))
    }
}

fn day_label<Tz: TimeZone>(day: &str, due: &DueDate, resolved: &DateTime<Tz>) -> String {
    if due.has_time() {
        format!("{} at {}", day, resolved.naive_local().format(TIME_FORMAT))
    } else {
        day.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    }

    fn date_only(year: i32, month: u32, day: u32) -> DueDate {
        DueDate {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            ..Default::default()
        }
    }

    fn timed(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DueDate {
        DueDate {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            hour: Some(hour),
            minute: Some(minute),
        }
    }

    #[test]
    fn no_due_date_renders_nothing() {
        assert_eq!(format_due_date(None, &now()), None);
    }

    #[test]
    fn incomplete_calendar_date_renders_nothing() {
        let due = DueDate {
            year: Some(2024),
            ..Default::default()
        };
        assert_eq!(format_due_date(Some(&due), &now()), None);
    }

    #[rstest]
    #[case(date_only(2024, 1, 1), "Today")]
    #[case(date_only(2024, 1, 2), "Tomorrow")]
    fn same_and_next_day_use_plain_labels(#[case] due: DueDate, #[case] expected: &str) {
        assert_eq!(format_due_date(Some(&due), &now()).unwrap(), expected);
    }

    #[test]
    fn time_bearing_today_includes_the_local_time() {
        let due = timed(2024, 1, 1, 15, 0);
        assert_eq!(
            format_due_date(Some(&due), &now()).unwrap(),
            "Today at 3:00 PM"
        );
    }

    #[test]
    fn time_bearing_tomorrow_includes_the_local_time() {
        let due = timed(2024, 1, 2, 8, 5);
        assert_eq!(
            format_due_date(Some(&due), &now()).unwrap(),
            "Tomorrow at 8:05 AM"
        );
    }

    #[test]
    fn today_takes_priority_over_overdue() {
        // Earlier today is still "Today", not overdue.
        let due = timed(2024, 1, 1, 0, 30);
        assert_eq!(
            format_due_date(Some(&due), &now()).unwrap(),
            "Today at 12:30 AM"
        );
    }

    #[test]
    fn past_instants_render_as_overdue() {
        let due = timed(2023, 12, 25, 15, 0);
        assert_eq!(
            format_due_date(Some(&due), &now()).unwrap(),
            "Overdue: Dec 25, 2023 at 3:00 PM"
        );
    }

    #[test]
    fn date_only_past_renders_as_overdue_at_midnight() {
        let due = date_only(2023, 12, 30);
        assert_eq!(
            format_due_date(Some(&due), &now()).unwrap(),
            "Overdue: Dec 30, 2023 at 12:00 AM"
        );
    }

    #[test]
    fn further_future_uses_a_relative_phrase() {
        let due = timed(2024, 1, 8, 9, 0);
        let rendered = format_due_date(Some(&due), &now()).unwrap();
        assert!(rendered.starts_with("in "), "got '{}'", rendered);
        assert!(rendered.contains("week") || rendered.contains("day"), "got '{}'", rendered);
    }
}
