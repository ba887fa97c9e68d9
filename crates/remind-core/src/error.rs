use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error")]
    Serialization(#[from] serde_json::Error),

    #[error("List '{0}' not found.")]
    ListNotFound(String),

    #[error("A list with the name '{0}' already exists.")]
    ListExists(String),

    #[error("Reminder not found: {0}")]
    ReminderNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
