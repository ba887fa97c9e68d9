//! # Remind Core Library
//!
//! The library behind the `remind` CLI: reminder lists and items, a
//! natural-language due-date parser, a due-date display formatter, and a
//! JSON-file-backed reminder store.
//!
//! ## Core Modules
//!
//! - [`models`]: Reminder data structures and the partial due-date type
//! - [`dates`]: Natural-language due-date parsing
//! - [`format`]: Human-readable due-date rendering
//! - [`store`]: Reminder store trait and JSON file implementation
//! - [`error`]: Error types
//!
//! The parsing and formatting functions are pure: every operation takes the
//! reference instant (`now`) explicitly, and the timezone it carries is the
//! calendar context. Identical inputs always produce identical output.
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use remind_core::{dates, format};
//!
//! let now = Utc::now();
//! if let Some(due) = dates::parse_components("tomorrow 3pm", now) {
//!     assert!(due.has_time());
//!     let display = format::format_due_date(Some(&due), &now);
//!     assert!(display.is_some());
//! }
//! ```

pub mod dates;
pub mod error;
pub mod format;
pub mod models;
pub mod store;
