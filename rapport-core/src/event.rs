//! Dated events, optionally recurring, optionally linked to a contact.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_REMINDER_DAYS;
use crate::error::{RapportError, RapportResult};

/// A dated occurrence: birthday, anniversary, meeting, etc.
///
/// For recurring events `event_date` is the first occurrence; the next
/// one is derived by [`crate::occurrence::next_occurrence`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub event_date: NaiveDate,
    #[serde(default)]
    pub event_type: EventType,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_type: Option<RecurringType>,
    /// Size of the reminder window in days. `None` means the default of 7.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_days: Option<u32>,
    /// Weak reference to a [`crate::contact::Contact`]; may dangle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,
}

impl Event {
    /// A one-off event of type `other` with a fresh id.
    pub fn new(title: impl Into<String>, event_date: NaiveDate) -> Self {
        Event {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            event_date,
            event_type: EventType::Other,
            is_recurring: false,
            recurring_type: None,
            reminder_days: None,
            contact_id: None,
        }
    }

    /// The recurrence unit that actually applies.
    ///
    /// `None` for one-off events, and also for events flagged recurring
    /// without a recognised unit: those are treated as one-off.
    pub fn recurrence(&self) -> Option<RecurringType> {
        if !self.is_recurring {
            return None;
        }
        self.recurring_type.filter(|unit| *unit != RecurringType::Unknown)
    }

    pub fn reminder_window(&self) -> u32 {
        self.reminder_days.unwrap_or(DEFAULT_REMINDER_DAYS)
    }

    /// Check user input before it is stored.
    ///
    /// Only new or edited events go through this; data already on disk is
    /// loaded as-is.
    pub fn validate(&self) -> RapportResult<()> {
        if self.title.trim().is_empty() {
            return Err(RapportError::validation("title", "must not be empty"));
        }
        if self.is_recurring && self.recurrence().is_none() {
            return Err(RapportError::validation(
                "recurring_type",
                "recurring events need weekly, monthly or yearly",
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Birthday,
    Anniversary,
    Meeting,
    Reminder,
    #[default]
    #[serde(other)]
    Other,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Birthday,
        EventType::Anniversary,
        EventType::Meeting,
        EventType::Reminder,
        EventType::Other,
    ];

    /// Stored value, e.g. `"birthday"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Birthday => "birthday",
            EventType::Anniversary => "anniversary",
            EventType::Meeting => "meeting",
            EventType::Reminder => "reminder",
            EventType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Birthday => "Birthday",
            EventType::Anniversary => "Anniversary",
            EventType::Meeting => "Meeting",
            EventType::Reminder => "Reminder",
            EventType::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EventType::Birthday => "🎂",
            EventType::Anniversary => "❤️",
            EventType::Meeting => "📅",
            EventType::Reminder => "🔔",
            EventType::Other => "📌",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown event type '{}'. Expected one of: birthday, anniversary, meeting, reminder, other",
                    s
                )
            })
    }
}

/// Step by which a recurring event advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringType {
    Weekly,
    Monthly,
    Yearly,
    /// Any unit we don't recognise. Events carrying it never advance.
    #[serde(other)]
    Unknown,
}

impl RecurringType {
    /// Move `date` forward by one unit.
    ///
    /// Month and year steps clamp to the end of shorter months
    /// (Jan 31 + 1 month = Feb 28/29). Returns `None` for `Unknown`
    /// or when the result falls outside chrono's date range.
    pub fn advance(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            RecurringType::Weekly => date.checked_add_days(Days::new(7)),
            RecurringType::Monthly => date.checked_add_months(Months::new(1)),
            RecurringType::Yearly => date.checked_add_months(Months::new(12)),
            RecurringType::Unknown => None,
        }
    }

    /// Fewest days a single [`advance`](Self::advance) can move a date.
    pub fn min_days(&self) -> Option<u64> {
        match self {
            RecurringType::Weekly => Some(7),
            RecurringType::Monthly => Some(28),
            RecurringType::Yearly => Some(365),
            RecurringType::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecurringType::Weekly => "weekly",
            RecurringType::Monthly => "monthly",
            RecurringType::Yearly => "yearly",
            RecurringType::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecurringType::Weekly => "Every week",
            RecurringType::Monthly => "Every month",
            RecurringType::Yearly => "Every year",
            RecurringType::Unknown => "Does not repeat",
        }
    }
}

impl fmt::Display for RecurringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurringType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(RecurringType::Weekly),
            "monthly" => Ok(RecurringType::Monthly),
            "yearly" => Ok(RecurringType::Yearly),
            _ => Err(format!(
                "Unknown repeat '{}'. Expected one of: weekly, monthly, yearly",
                s
            )),
        }
    }
}
