use chrono::{DateTime, Local};
use remind_core::format::format_due_date;
use remind_core::models::Reminder;
use serde_json::{json, Value};

/// One reminder prepared for display, either as a text line or as a JSON
/// object with exactly the keys the original output contract names.
pub struct ReminderOutput<'a> {
    pub reminder: &'a Reminder,
    pub index: Option<usize>,
    pub list: Option<&'a str>,
}

impl ReminderOutput<'_> {
    pub fn display_line(&self, now: &DateTime<Local>) -> String {
        let reminder = self.reminder;
        let mut output = String::new();

        if let Some(index) = self.index {
            output.push_str(&format!("[{}] ", index));
        }
        if reminder.completed {
            output.push_str("✓ ");
        }
        output.push_str(&reminder.title);

        if let Some(due) = format_due_date(reminder.due_date.as_ref(), now) {
            output.push_str(&format!(" ({})", due));
        }

        if (1..=3).contains(&reminder.priority) {
            output.push(' ');
            output.push_str(&"!".repeat(usize::from(reminder.priority)));
        }

        if let Some(notes) = &reminder.notes {
            if !notes.is_empty() {
                output.push_str(&format!("\n    Notes: {}", notes.replace('\n', "\n    ")));
            }
        }

        output
    }

    pub fn to_value(&self) -> Value {
        let reminder = self.reminder;
        let mut object = json!({
            "id": reminder.id,
            "title": reminder.title,
            "completed": reminder.completed,
            "priority": reminder.priority,
        });

        let map = object.as_object_mut().expect("json! object");
        if let Some(index) = self.index {
            map.insert("index".to_string(), json!(index));
        }
        if let Some(notes) = &reminder.notes {
            map.insert("notes".to_string(), json!(notes));
        }
        if let Some(due) = &reminder.due_date {
            map.insert("dueDate".to_string(), json!(due));
        }
        if let Some(list) = self.list {
            map.insert("list".to_string(), json!(list));
        }

        object
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use remind_core::models::DueDate;
    use uuid::Uuid;

    fn sample_reminder() -> Reminder {
        Reminder {
            id: Uuid::new_v4(),
            title: "Water plants".to_string(),
            notes: None,
            priority: 0,
            completed: false,
            completion_date: None,
            creation_date: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
            due_date: None,
            alarm_at: None,
        }
    }

    #[test]
    fn line_carries_index_and_priority_markers() {
        let mut reminder = sample_reminder();
        reminder.priority = 2;
        let output = ReminderOutput {
            reminder: &reminder,
            index: Some(3),
            list: None,
        };
        let line = output.display_line(&Local::now());
        assert!(line.starts_with("[3] Water plants"));
        assert!(line.ends_with(" !!"));
    }

    #[test]
    fn completed_reminders_get_a_check_mark() {
        let mut reminder = sample_reminder();
        reminder.completed = true;
        let output = ReminderOutput {
            reminder: &reminder,
            index: None,
            list: None,
        };
        assert_eq!(output.display_line(&Local::now()), "✓ Water plants");
    }

    #[test]
    fn notes_are_indented_on_a_continuation_line() {
        let mut reminder = sample_reminder();
        reminder.notes = Some("first\nsecond".to_string());
        let output = ReminderOutput {
            reminder: &reminder,
            index: None,
            list: None,
        };
        assert_eq!(
            output.display_line(&Local::now()),
            "Water plants\n    Notes: first\n    second"
        );
    }

    #[test]
    fn json_object_has_only_present_optional_keys() {
        let reminder = sample_reminder();
        let value = ReminderOutput {
            reminder: &reminder,
            index: None,
            list: None,
        }
        .to_value();
        let map = value.as_object().unwrap();
        assert!(map.contains_key("id"));
        assert!(map.contains_key("title"));
        assert!(!map.contains_key("notes"));
        assert!(!map.contains_key("dueDate"));
        assert!(!map.contains_key("index"));
    }

    #[test]
    fn json_due_date_keeps_only_present_fields() {
        let mut reminder = sample_reminder();
        reminder.due_date = Some(DueDate {
            year: Some(2026),
            month: Some(5),
            day: Some(21),
            ..Default::default()
        });
        let value = ReminderOutput {
            reminder: &reminder,
            index: Some(0),
            list: Some("Inbox"),
        }
        .to_value();
        assert_eq!(
            value["dueDate"],
            json!({"year": 2026, "month": 5, "day": 21})
        );
        assert_eq!(value["list"], json!("Inbox"));
    }
}
