//! Colored terminal rendering for rapport types.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use rapport_core::contact::Contact;
use rapport_core::event::Event;
use rapport_core::labels::{is_highlighted, relative_days_text};
use rapport_core::next_occurrence;
use rapport_core::occurrence::days_until;
use rapport_core::reminder::UpcomingReminder;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Contact {
    fn render(&self) -> String {
        let mut line = format!("{} {}", self.group_icon(), self.name.bold());
        line.push_str(&format!(" {}", self.group_label().dimmed()));
        if let Some(birthday) = self.birthday {
            line.push_str(&format!(" 🎂 {}", birthday.format("%b %-d")));
        }
        line.push_str(&format!(" {}", format!("[{}]", self.id).dimmed()));
        line
    }
}

/// One reminder line, colored by urgency.
pub fn render_reminder(reminder: &UpcomingReminder<'_>, contacts: &[Contact]) -> String {
    let label = format!("[{}]", reminder.days_text());
    let label = match reminder.days_until {
        0 => label.red().bold().to_string(),
        1 => label.yellow().to_string(),
        _ => label,
    };

    let mut line = format!(
        "{} {} {} {}",
        reminder.event.event_type.icon(),
        reminder.event.title.bold(),
        reminder.next_occurrence.format("%a %b %-d"),
        label
    );
    if let Some(name) = reminder.contact_name(contacts) {
        line.push_str(&format!(" {}", format!("with {}", name).dimmed()));
    }
    line
}

/// One event line for listings: next occurrence and how far away it is.
pub fn render_event(event: &Event, contacts: &[Contact], today: NaiveDate) -> String {
    let next = next_occurrence(event, today);
    let days = days_until(next, today);

    let when = format!("{} ({})", next.format("%Y-%m-%d"), relative_days_text(days));
    let when = if is_highlighted(days) {
        when.green().bold().to_string()
    } else {
        when
    };

    let mut line = format!(
        "{} {} {} {}",
        event.event_type.icon(),
        event.title.bold(),
        when,
        event.event_type.label().dimmed()
    );
    if let Some(unit) = event.recurrence() {
        line.push_str(&format!(" {}", format!("↻ {}", unit.label()).dimmed()));
    }
    let contact = event
        .contact_id
        .as_deref()
        .and_then(|id| contacts.iter().find(|c| c.id == id));
    if let Some(contact) = contact {
        line.push_str(&format!(" {}", format!("👤 {}", contact.name).dimmed()));
    }
    line.push_str(&format!(" {}", format!("[{}]", event.id).dimmed()));
    line
}
