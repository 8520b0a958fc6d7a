use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use owo_colors::OwoColorize;
use rapport_core::store::Store;
use rapport_core::{Contact, Event, EventType, RecurringType};

use super::set_optional;
use crate::render::render_event;

pub fn run(store: &Store, event_type: Option<EventType>, today: NaiveDate) -> Result<()> {
    let events: Vec<&Event> = store
        .events()
        .iter()
        .filter(|e| event_type.is_none_or(|t| e.event_type == t))
        .collect();

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in events {
        println!("{}", render_event(event, store.contacts(), today));
    }

    Ok(())
}

/// Arguments collected from `rapport add-event`.
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub event_type: EventType,
    pub repeat: Option<RecurringType>,
    pub reminder_days: Option<u32>,
    pub contact_id: Option<String>,
    pub description: Option<String>,
}

/// Turn `add-event` arguments into an event. `default_reminder_days`
/// applies when `--remind` was not given.
fn build_event(new: NewEvent, default_reminder_days: u32, contacts: &[Contact]) -> Result<Event> {
    if let Some(id) = &new.contact_id {
        require_contact(id, contacts)?;
    }

    let mut event = Event::new(new.title, new.date);
    event.event_type = new.event_type;
    event.is_recurring = new.repeat.is_some();
    event.recurring_type = new.repeat;
    event.reminder_days = Some(new.reminder_days.unwrap_or(default_reminder_days));
    event.contact_id = new.contact_id;
    event.description = new.description;
    Ok(event)
}

pub fn add(store: &mut Store, new: NewEvent, default_reminder_days: u32) -> Result<()> {
    let event = build_event(new, default_reminder_days, store.contacts())?;

    let id = event.id.clone();
    let title = event.title.clone();
    store.add_event(event)?;
    store.save()?;

    println!("{} {} {}", "+".green(), title.green(), format!("[{}]", id).dimmed());
    Ok(())
}

/// Changes accepted by `update-event`. Unset flags leave the field alone.
#[derive(Args)]
pub struct EventEdits {
    #[arg(long)]
    title: Option<String>,

    /// New date of the (first) occurrence, YYYY-MM-DD
    #[arg(short, long)]
    date: Option<NaiveDate>,

    #[arg(short = 't', long = "type")]
    event_type: Option<EventType>,

    /// Repeat weekly, monthly or yearly
    #[arg(short, long, conflicts_with = "no_repeat")]
    repeat: Option<RecurringType>,

    /// Make the event one-off
    #[arg(long)]
    no_repeat: bool,

    /// Days of notice before the event
    #[arg(long)]
    remind: Option<u32>,

    /// Id of the contact this event is about ("" to unlink)
    #[arg(short, long)]
    contact: Option<String>,

    /// New description ("" to clear)
    #[arg(long)]
    description: Option<String>,
}

impl EventEdits {
    fn apply(self, event: &mut Event, contacts: &[Contact]) -> Result<()> {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(date) = self.date {
            event.event_date = date;
        }
        if let Some(event_type) = self.event_type {
            event.event_type = event_type;
        }
        if let Some(unit) = self.repeat {
            event.is_recurring = true;
            event.recurring_type = Some(unit);
        }
        if self.no_repeat {
            event.is_recurring = false;
            event.recurring_type = None;
        }
        if let Some(days) = self.remind {
            event.reminder_days = Some(days);
        }
        if let Some(id) = self.contact.as_deref().filter(|id| !id.trim().is_empty()) {
            require_contact(id, contacts)?;
        }
        set_optional(&mut event.contact_id, self.contact);
        set_optional(&mut event.description, self.description);
        Ok(())
    }
}

pub fn update(store: &mut Store, id: &str, edits: EventEdits) -> Result<()> {
    let Some(mut event) = store.event(id).cloned() else {
        anyhow::bail!("Event '{}' not found", id);
    };

    edits.apply(&mut event, store.contacts())?;

    let title = event.title.clone();
    store.update_event(event)?;
    store.save()?;

    println!("{} {}", "~".yellow(), title.yellow());
    Ok(())
}

fn require_contact(id: &str, contacts: &[Contact]) -> Result<()> {
    if !contacts.iter().any(|c| c.id == id) {
        anyhow::bail!("Contact '{}' not found", id);
    }
    Ok(())
}

pub fn delete(store: &mut Store, id: &str) -> Result<()> {
    let event = store.delete_event(id)?;
    store.save()?;

    println!("{} {}", "-".red(), event.title.red());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_event(remind: Option<u32>, contact_id: Option<&str>) -> NewEvent {
        NewEvent {
            title: "Anniversary dinner".to_string(),
            date: date(2020, 6, 12),
            event_type: EventType::Anniversary,
            repeat: Some(RecurringType::Yearly),
            reminder_days: remind,
            contact_id: contact_id.map(str::to_string),
            description: None,
        }
    }

    fn no_edits() -> EventEdits {
        EventEdits {
            title: None,
            date: None,
            event_type: None,
            repeat: None,
            no_repeat: false,
            remind: None,
            contact: None,
            description: None,
        }
    }

    #[test]
    fn test_build_event_uses_configured_default_window() {
        let event = build_event(new_event(None, None), 14, &[]).unwrap();

        assert_eq!(event.reminder_days, Some(14));
        assert_eq!(event.recurrence(), Some(RecurringType::Yearly));
        assert_eq!(event.event_type, EventType::Anniversary);
    }

    #[test]
    fn test_build_event_prefers_explicit_window() {
        let event = build_event(new_event(Some(2), None), 14, &[]).unwrap();

        assert_eq!(event.reminder_days, Some(2));
    }

    #[test]
    fn test_build_event_rejects_unknown_contact() {
        let mina = Contact::new("Mina");

        assert!(build_event(new_event(None, Some("nobody")), 7, &[mina.clone()]).is_err());
        let linked = build_event(new_event(None, Some(mina.id.as_str())), 7, &[mina.clone()]).unwrap();
        assert_eq!(linked.contact_id, Some(mina.id));
    }

    #[test]
    fn test_edits_change_only_given_fields() {
        let mut event = build_event(new_event(Some(3), None), 7, &[]).unwrap();
        event.description = Some("Book a table".to_string());
        let before = event.clone();

        no_edits().apply(&mut event, &[]).unwrap();
        assert_eq!(event, before);

        let edits = EventEdits {
            title: Some("Dinner".to_string()),
            date: Some(date(2020, 6, 13)),
            no_repeat: true,
            description: Some(String::new()),
            ..no_edits()
        };
        edits.apply(&mut event, &[]).unwrap();

        assert_eq!(event.title, "Dinner");
        assert_eq!(event.event_date, date(2020, 6, 13));
        assert!(!event.is_recurring);
        assert_eq!(event.recurring_type, None);
        assert_eq!(event.description, None);
        assert_eq!(event.reminder_days, Some(3));
    }

    #[test]
    fn test_edits_link_and_unlink_contacts() {
        let mina = Contact::new("Mina");
        let contacts = vec![mina.clone()];
        let mut event = build_event(new_event(None, None), 7, &contacts).unwrap();

        let dangling = EventEdits {
            contact: Some("nobody".to_string()),
            ..no_edits()
        };
        assert!(dangling.apply(&mut event, &contacts).is_err());
        assert_eq!(event.contact_id, None);

        let link = EventEdits {
            contact: Some(mina.id.clone()),
            ..no_edits()
        };
        link.apply(&mut event, &contacts).unwrap();
        assert_eq!(event.contact_id, Some(mina.id.clone()));

        let unlink = EventEdits {
            contact: Some(String::new()),
            ..no_edits()
        };
        unlink.apply(&mut event, &contacts).unwrap();
        assert_eq!(event.contact_id, None);
    }
}
