use anyhow::Result;
use chrono::Utc;
use remind_core::store::ReminderStore;

use crate::cli::CompleteCommand;
use crate::util::find_reminder;

pub fn complete_reminder(store: &mut impl ReminderStore, command: CompleteCommand) -> Result<()> {
    let mut reminder = find_reminder(store, &command.list_name, &command.identifier, false)?;

    if reminder.completed {
        println!("Reminder is already completed.");
        return Ok(());
    }

    reminder.completed = true;
    reminder.completion_date = Some(Utc::now());
    store.update_reminder(&command.list_name, reminder)?;

    println!("Reminder marked as completed.");
    Ok(())
}
