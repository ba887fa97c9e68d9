use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate, Utc};
use remind_core::dates;
use remind_core::error::CoreError;
use remind_core::models::Reminder;
use remind_core::store::{ReminderFilter, ReminderStore};
use uuid::Uuid;

use crate::cli::SortBy;

/// Resolves an identifier to a reminder in a list. A numeric identifier is
/// an index into the currently visible reminders; anything else must be the
/// reminder's full ID.
pub fn find_reminder(
    store: &impl ReminderStore,
    list_name: &str,
    identifier: &str,
    include_completed: bool,
) -> Result<Reminder> {
    let filter = ReminderFilter {
        include_completed,
        ..Default::default()
    };
    let reminders = store.reminders(Some(list_name), &filter)?;

    let found = if let Ok(index) = identifier.parse::<usize>() {
        reminders.get(index).map(|(_, reminder)| reminder.clone())
    } else if let Ok(id) = Uuid::parse_str(identifier) {
        reminders
            .iter()
            .find(|(_, reminder)| reminder.id == id)
            .map(|(_, reminder)| reminder.clone())
    } else {
        None
    };

    found.ok_or_else(|| {
        anyhow!(CoreError::ReminderNotFound(format!(
            "Reminder '{}' not found in list '{}'.",
            identifier, list_name
        )))
    })
}

/// Parses a `--due-date` filter value down to the calendar day it names.
pub fn parse_due_filter(raw: &str) -> Result<NaiveDate> {
    dates::parse(raw, Local::now())
        .map(|resolved| resolved.date_naive())
        .ok_or_else(|| {
            anyhow!(CoreError::InvalidInput(format!(
                "Invalid date format: '{}'",
                raw
            )))
        })
}

/// Sorts for display. Reminders without the sort key order last.
pub fn sort_reminders(reminders: &mut [(String, Reminder)], sort_by: SortBy) {
    match sort_by {
        SortBy::DueDate => reminders.sort_by_key(|(_, reminder)| {
            let due = reminder
                .due_date
                .and_then(|due| due.resolve(&Local))
                .map(|resolved| resolved.with_timezone(&Utc));
            (due.is_none(), due)
        }),
        SortBy::CreationDate => {
            reminders.sort_by_key(|(_, reminder)| reminder.creation_date);
        }
    }
}
