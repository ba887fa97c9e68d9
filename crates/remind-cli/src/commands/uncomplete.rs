use anyhow::Result;
use remind_core::store::ReminderStore;

use crate::cli::UncompleteCommand;
use crate::util::find_reminder;

pub fn uncomplete_reminder(
    store: &mut impl ReminderStore,
    command: UncompleteCommand,
) -> Result<()> {
    let mut reminder = find_reminder(store, &command.list_name, &command.identifier, true)?;

    if !reminder.completed {
        println!("Reminder is already uncompleted.");
        return Ok(());
    }

    reminder.completed = false;
    reminder.completion_date = None;
    store.update_reminder(&command.list_name, reminder)?;

    println!("Reminder marked as uncompleted.");
    Ok(())
}
