//! Keeps each contact's birthday mirrored as a yearly birthday event.

use crate::constants::DEFAULT_REMINDER_DAYS;
use crate::contact::Contact;
use crate::event::{Event, EventType, RecurringType};

/// What has to happen to the event store after a contact changes.
#[derive(Debug, Clone, PartialEq)]
pub enum BirthdaySync {
    Create(Event),
    /// Replace the existing birthday event (same id) with this one.
    Update(Event),
    Delete(String),
    Unchanged,
}

/// The birthday event belonging to `contact`, if there is one in `events`.
pub fn find_birthday_event<'a>(contact_id: &str, events: &'a [Event]) -> Option<&'a Event> {
    events.iter().find(|e| {
        e.event_type == EventType::Birthday && e.contact_id.as_deref() == Some(contact_id)
    })
}

/// Work out how the birthday event must change to match `contact`.
pub fn plan_birthday_sync(contact: &Contact, existing: Option<&Event>) -> BirthdaySync {
    match (contact.birthday, existing) {
        (Some(birthday), existing) => {
            let mut event = Event::new(format!("{}'s birthday", contact.name), birthday);
            event.description = Some(format!("Birthday reminder for {}", contact.name));
            event.event_type = EventType::Birthday;
            event.is_recurring = true;
            event.recurring_type = Some(RecurringType::Yearly);
            event.reminder_days = Some(DEFAULT_REMINDER_DAYS);
            event.contact_id = Some(contact.id.clone());

            match existing {
                Some(current) => {
                    event.id = current.id.clone();
                    if &event == current {
                        BirthdaySync::Unchanged
                    } else {
                        BirthdaySync::Update(event)
                    }
                }
                None => BirthdaySync::Create(event),
            }
        }
        (None, Some(current)) => BirthdaySync::Delete(current.id.clone()),
        (None, None) => BirthdaySync::Unchanged,
    }
}
