use anyhow::Result;
use remind_core::store::ReminderStore;
use serde_json::json;

use crate::cli::ShowListsCommand;

pub fn show_lists(store: &impl ReminderStore, command: ShowListsCommand) -> Result<()> {
    let lists = store.lists();

    if command.json {
        let names: Vec<_> = lists.iter().map(|list| json!({"name": list.name})).collect();
        println!("{}", serde_json::to_string(&names)?);
    } else if lists.is_empty() {
        println!("No reminder lists found.");
    } else {
        for list in lists {
            println!("{}", list.name);
        }
    }

    Ok(())
}
