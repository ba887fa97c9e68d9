use anyhow::Result;
use dialoguer::Confirm;
use remind_core::store::ReminderStore;

use crate::cli::DeleteCommand;
use crate::util::find_reminder;

pub fn delete_reminder(store: &mut impl ReminderStore, command: DeleteCommand) -> Result<()> {
    let reminder = find_reminder(
        store,
        &command.list_name,
        &command.identifier,
        command.include_completed,
    )?;

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to delete reminder '{}'?",
                reminder.title
            ))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let removed = store.delete_reminder(&command.list_name, reminder.id)?;
    println!("Deleted reminder: {}", removed.title);
    Ok(())
}
