//! Core library for rapport.
//!
//! - `event` and `contact` hold the records users manage
//! - `occurrence` and `reminder` turn events into the upcoming-reminder feed
//! - `birthday` mirrors contact birthdays into yearly events
//! - `store` and `config` deal with the local data file and settings

pub mod assistant;
pub mod birthday;
pub mod config;
pub mod constants;
pub mod contact;
pub mod error;
pub mod event;
pub mod labels;
pub mod occurrence;
pub mod reminder;
pub mod search;
pub mod store;

pub use contact::Contact;
pub use error::{RapportError, RapportResult};
pub use event::{Event, EventType, RecurringType};
pub use occurrence::next_occurrence;
pub use reminder::{UpcomingReminder, upcoming_reminders};
