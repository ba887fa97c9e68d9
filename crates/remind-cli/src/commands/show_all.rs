use anyhow::Result;
use chrono::Local;
use remind_core::store::{ReminderFilter, ReminderStore};

use crate::cli::ShowAllCommand;
use crate::output::ReminderOutput;
use crate::util::{parse_due_filter, sort_reminders};

pub fn show_all(store: &impl ReminderStore, command: ShowAllCommand) -> Result<()> {
    let now = Local::now();
    let due_on = command
        .due_date
        .as_deref()
        .map(parse_due_filter)
        .transpose()?;

    let filter = ReminderFilter {
        include_completed: command.include_completed,
        only_completed: command.only_completed,
        due_on,
    };
    let mut reminders = store.reminders(None, &filter)?;
    sort_reminders(&mut reminders, command.sort_by);

    if command.json {
        let values: Vec<_> = reminders
            .iter()
            .map(|(list, reminder)| {
                ReminderOutput {
                    reminder,
                    index: None,
                    list: Some(list),
                }
                .to_value()
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else if reminders.is_empty() {
        println!("No reminders found.");
    } else {
        // Header printed whenever the list changes in sorted order.
        let mut current_list = String::new();
        for (list, reminder) in &reminders {
            if *list != current_list {
                if !current_list.is_empty() {
                    println!();
                }
                println!("=== {} ===", list);
                current_list = list.clone();
            }
            let output = ReminderOutput {
                reminder,
                index: None,
                list: Some(list),
            };
            println!("{}", output.display_line(&now));
        }
    }

    Ok(())
}
