use anyhow::{anyhow, Result};
use chrono::Local;
use remind_core::dates;
use remind_core::error::CoreError;
use remind_core::store::ReminderStore;

use crate::cli::EditCommand;
use crate::util::find_reminder;

pub fn edit_reminder(store: &mut impl ReminderStore, command: EditCommand) -> Result<()> {
    if command.text.is_none()
        && command.notes.is_none()
        && command.due_date.is_none()
        && !command.clear_due_date
    {
        return Err(anyhow!(CoreError::InvalidInput(
            "Nothing to update. Provide new text, notes, due date, or --clear-due-date."
                .to_string()
        )));
    }

    let mut reminder = find_reminder(store, &command.list_name, &command.identifier, false)?;

    if let Some(raw) = command.due_date.as_deref() {
        let due = dates::parse_components(raw, Local::now()).ok_or_else(|| {
            anyhow!(CoreError::InvalidInput(format!(
                "Invalid date format: '{}'",
                raw
            )))
        })?;
        reminder.due_date = Some(due);
    }
    if command.clear_due_date {
        reminder.due_date = None;
    }
    if let Some(text) = command.text {
        reminder.title = text;
    }
    if let Some(notes) = command.notes {
        reminder.notes = Some(notes);
    }

    // The store re-derives the alarm from the (possibly changed) due date.
    store.update_reminder(&command.list_name, reminder)?;

    println!("Reminder updated successfully.");
    Ok(())
}
