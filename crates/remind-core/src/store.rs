//! Reminder store: the persistence seam between the CLI and the data.
//!
//! [`ReminderStore`] is the access trait; [`JsonStore`] keeps every list in a
//! single JSON document on disk, loaded on open and rewritten after each
//! mutation. List lookup is case-insensitive on the list name.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::{DueDate, NewReminderData, Reminder, ReminderList};

/// Visibility filter for reminder queries.
#[derive(Debug, Clone, Default)]
pub struct ReminderFilter {
    pub include_completed: bool,
    pub only_completed: bool,
    /// Keep only reminders whose due date falls on this calendar day.
    pub due_on: Option<NaiveDate>,
}

pub trait ReminderStore {
    fn lists(&self) -> Vec<&ReminderList>;
    fn find_list(&self, name: &str) -> Option<&ReminderList>;
    fn create_list(&mut self, name: &str) -> Result<ReminderList, CoreError>;
    /// Reminders from one list (or all lists when `list_name` is `None`),
    /// paired with the name of the list they came from.
    fn reminders(
        &self,
        list_name: Option<&str>,
        filter: &ReminderFilter,
    ) -> Result<Vec<(String, Reminder)>, CoreError>;
    fn add_reminder(
        &mut self,
        list_name: &str,
        data: NewReminderData,
    ) -> Result<Reminder, CoreError>;
    fn update_reminder(&mut self, list_name: &str, reminder: Reminder) -> Result<(), CoreError>;
    fn delete_reminder(&mut self, list_name: &str, id: Uuid) -> Result<Reminder, CoreError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    lists: Vec<ReminderList>,
}

pub struct JsonStore {
    path: PathBuf,
    document: StoreDocument,
}

impl JsonStore {
    /// Opens the store at `path`, starting empty when the file does not
    /// exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let document = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => StoreDocument::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, document })
    }

    fn persist(&self) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.document)?)?;
        Ok(())
    }

    fn list_mut(&mut self, name: &str) -> Result<&mut ReminderList, CoreError> {
        let lowered = name.to_lowercase();
        self.document
            .lists
            .iter_mut()
            .find(|list| list.name.to_lowercase() == lowered)
            .ok_or_else(|| CoreError::ListNotFound(name.to_string()))
    }
}

/// The alarm decision: a time-bearing due date gets an alarm at its resolved
/// local instant, a date-only one gets none.
fn alarm_for(due: Option<&DueDate>) -> Option<DateTime<Utc>> {
    let due = due?;
    if !due.has_time() {
        return None;
    }
    due.resolve(&Local).map(|at| at.with_timezone(&Utc))
}

impl ReminderStore for JsonStore {
    fn lists(&self) -> Vec<&ReminderList> {
        self.document.lists.iter().collect()
    }

    fn find_list(&self, name: &str) -> Option<&ReminderList> {
        let lowered = name.to_lowercase();
        self.document
            .lists
            .iter()
            .find(|list| list.name.to_lowercase() == lowered)
    }

    fn create_list(&mut self, name: &str) -> Result<ReminderList, CoreError> {
        if self.find_list(name).is_some() {
            return Err(CoreError::ListExists(name.to_string()));
        }
        let list = ReminderList {
            name: name.to_string(),
            reminders: Vec::new(),
        };
        self.document.lists.push(list.clone());
        self.persist()?;
        Ok(list)
    }

    fn reminders(
        &self,
        list_name: Option<&str>,
        filter: &ReminderFilter,
    ) -> Result<Vec<(String, Reminder)>, CoreError> {
        let lists: Vec<&ReminderList> = match list_name {
            Some(name) => vec![self
                .find_list(name)
                .ok_or_else(|| CoreError::ListNotFound(name.to_string()))?],
            None => self.document.lists.iter().collect(),
        };

        let mut found = Vec::new();
        for list in lists {
            for reminder in &list.reminders {
                if filter.only_completed {
                    if !reminder.completed {
                        continue;
                    }
                } else if !filter.include_completed && reminder.completed {
                    continue;
                }
                if let Some(day) = filter.due_on {
                    match reminder.due_date.and_then(|due| due.resolve(&Local)) {
                        Some(resolved) if resolved.date_naive() == day => {}
                        _ => continue,
                    }
                }
                found.push((list.name.clone(), reminder.clone()));
            }
        }
        Ok(found)
    }

    fn add_reminder(
        &mut self,
        list_name: &str,
        data: NewReminderData,
    ) -> Result<Reminder, CoreError> {
        let alarm_at = alarm_for(data.due_date.as_ref());
        let reminder = Reminder {
            id: Uuid::new_v4(),
            title: data.title,
            notes: data.notes,
            priority: data.priority,
            completed: false,
            completion_date: None,
            creation_date: Utc::now(),
            due_date: data.due_date,
            alarm_at,
        };
        let list = self.list_mut(list_name)?;
        list.reminders.push(reminder.clone());
        self.persist()?;
        Ok(reminder)
    }

    fn update_reminder(&mut self, list_name: &str, mut reminder: Reminder) -> Result<(), CoreError> {
        reminder.alarm_at = alarm_for(reminder.due_date.as_ref());
        let list = self.list_mut(list_name)?;
        let slot = list
            .reminders
            .iter_mut()
            .find(|existing| existing.id == reminder.id)
            .ok_or_else(|| {
                CoreError::ReminderNotFound(format!(
                    "Reminder '{}' not found in list '{}'.",
                    reminder.id, list_name
                ))
            })?;
        *slot = reminder;
        self.persist()
    }

    fn delete_reminder(&mut self, list_name: &str, id: Uuid) -> Result<Reminder, CoreError> {
        let list = self.list_mut(list_name)?;
        let position = list
            .reminders
            .iter()
            .position(|reminder| reminder.id == id)
            .ok_or_else(|| {
                CoreError::ReminderNotFound(format!(
                    "Reminder '{}' not found in list '{}'.",
                    id, list_name
                ))
            })?;
        let removed = list.reminders.remove(position);
        self.persist()?;
        Ok(removed)
    }
}
