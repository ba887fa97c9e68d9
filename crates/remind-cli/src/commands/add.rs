use anyhow::{anyhow, Result};
use chrono::Local;
use remind_core::dates;
use remind_core::error::CoreError;
use remind_core::models::NewReminderData;
use remind_core::store::ReminderStore;

use crate::cli::AddCommand;

const MAX_PRIORITY: u8 = 3;

pub fn add_reminder(store: &mut impl ReminderStore, command: AddCommand) -> Result<()> {
    let now = Local::now();
    let due_date = command
        .due_date
        .as_deref()
        .map(|raw| {
            dates::parse_components(raw, now).ok_or_else(|| {
                anyhow!(CoreError::InvalidInput(format!(
                    "Invalid date format: '{}'",
                    raw
                )))
            })
        })
        .transpose()?;

    store.add_reminder(
        &command.list_name,
        NewReminderData {
            title: command.text,
            notes: command.notes,
            due_date,
            priority: command.priority.min(MAX_PRIORITY),
        },
    )?;

    println!("Reminder added successfully.");
    Ok(())
}
