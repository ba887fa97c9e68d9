use anyhow::Result;
use chrono::Local;
use remind_core::store::{ReminderFilter, ReminderStore};

use crate::cli::ShowCommand;
use crate::output::ReminderOutput;
use crate::util::{parse_due_filter, sort_reminders};

pub fn show_list(store: &impl ReminderStore, command: ShowCommand) -> Result<()> {
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
    let mut reminders = store.reminders(Some(&command.list_name), &filter)?;
    sort_reminders(&mut reminders, command.sort_by);

    if command.json {
        let values: Vec<_> = reminders
            .iter()
            .enumerate()
            .map(|(index, (_, reminder))| {
                ReminderOutput {
                    reminder,
                    index: Some(index),
                    list: None,
                }
                .to_value()
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else if reminders.is_empty() {
        println!("No reminders found.");
    } else {
        for (index, (_, reminder)) in reminders.iter().enumerate() {
            let output = ReminderOutput {
                reminder,
                index: Some(index),
                list: None,
            };
            println!("{}", output.display_line(&now));
        }
    }

    Ok(())
}
