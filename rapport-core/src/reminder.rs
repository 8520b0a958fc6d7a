//! The upcoming-reminder feed.
//!
//! Each event is projected onto its next occurrence and kept only while that
//! occurrence sits inside the event's own reminder window
//! `[today, today + reminder_days]`. The feed is rebuilt on every call and
//! holds no state between calls.

use chrono::NaiveDate;
use log::debug;

use crate::contact::Contact;
use crate::event::Event;
use crate::labels::days_text;
use crate::occurrence::{days_until, next_occurrence};

/// An event that is due for a reminder, with its computed occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingReminder<'a> {
    pub event: &'a Event,
    pub next_occurrence: NaiveDate,
    pub days_until: i64,
}

impl<'a> UpcomingReminder<'a> {
    pub fn days_text(&self) -> String {
        days_text(self.days_until)
    }

    /// Name of the linked contact, if the link still resolves.
    pub fn contact_name<'c>(&self, contacts: &'c [Contact]) -> Option<&'c str> {
        let id = self.event.contact_id.as_deref()?;
        contacts
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// One-line summary, e.g. `"tomorrow - 03-14 - Mina"`.
    pub fn summary(&self, contacts: &[Contact]) -> String {
        let base = format!(
            "{} - {}",
            self.days_text(),
            self.next_occurrence.format("%m-%d")
        );
        match self.contact_name(contacts) {
            Some(name) => format!("{} - {}", base, name),
            None => base,
        }
    }

    /// Body text for a desktop notification; the title is the event title.
    pub fn notification_body(&self, contacts: &[Contact]) -> String {
        let base = format!(
            "{} ({})",
            self.days_text(),
            self.next_occurrence.format("%m-%d")
        );
        match self.contact_name(contacts) {
            Some(name) => format!("{} - with {}", base, name),
            None => base,
        }
    }
}

/// Events due for a reminder as of `today`, soonest first.
///
/// Ties keep the order of `events`.
pub fn upcoming_reminders(events: &[Event], today: NaiveDate) -> Vec<UpcomingReminder<'_>> {
    let mut reminders: Vec<UpcomingReminder<'_>> = events
        .iter()
        .filter_map(|event| {
            let next = next_occurrence(event, today);
            let days = days_until(next, today);
            let window = i64::from(event.reminder_window());

            if (0..=window).contains(&days) {
                Some(UpcomingReminder {
                    event,
                    next_occurrence: next,
                    days_until: days,
                })
            } else {
                None
            }
        })
        .collect();

    reminders.sort_by_key(|r| r.next_occurrence);

    debug!(
        "{} of {} events due for a reminder on {}",
        reminders.len(),
        events.len(),
        today
    );

    reminders
}
