use anyhow::Result;
use remind_core::store::ReminderStore;

use crate::cli::NewListCommand;

pub fn new_list(store: &mut impl ReminderStore, command: NewListCommand) -> Result<()> {
    let list = store.create_list(&command.name)?;
    println!("Created new list: {}", list.name);
    Ok(())
}
