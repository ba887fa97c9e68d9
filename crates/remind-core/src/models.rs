use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A calendar date with independently optional fields.
///
/// Produced by [`crate::dates::parse_components`] and persisted verbatim by
/// the store. Absent hour/minute means the reminder is "all day"; the
/// serialized form contains only the present keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<u32>,
}

impl DueDate {
    /// Whether a specific time of day is attached.
    pub fn has_time(&self) -> bool {
        self.hour.is_some() || self.minute.is_some()
    }

    /// Resolves to a concrete instant in `tz`, or `None` when the calendar
    /// date is incomplete. Absent hour/minute resolve as midnight.
    pub fn resolve<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        let date = NaiveDate::from_ymd_opt(self.year?, self.month?, self.day?)?;
        date.and_hms_opt(self.hour.unwrap_or(0), self.minute.unwrap_or(0), 0)?
            .and_local_timezone(tz.clone())
            .earliest()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub priority: u8,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
    pub creation_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DueDate>,
    /// Set by the store when the due date carries a time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_at: Option<DateTime<Utc>>,
}

/// A named container of reminders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderList {
    pub name: String,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

/// Data for creating a new reminder.
#[derive(Debug, Clone, Default)]
pub struct NewReminderData {
    pub title: String,
    pub notes: Option<String>,
    pub due_date: Option<DueDate>,
    pub priority: u8,
}
