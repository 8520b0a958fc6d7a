//! Prompt context handed to the relationship assistant.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::contact::Contact;
use crate::event::Event;

const PERSONA: &str = "\
You are a warm, thoughtful assistant for personal relationships. \
You help the user keep in touch with the people who matter to them.

You can:
1. Look at the user's contacts and events and give personal, practical advice
2. Point out important dates coming up (birthdays, anniversaries, ...)
3. Suggest gift ideas for specific occasions
4. Offer communication tips and ways to maintain relationships
5. Help plan social activities";

/// Plain-text summary of the user's contacts and events.
///
/// Empty lists are left out entirely, so the result is empty when both are.
pub fn relationship_context(contacts: &[Contact], events: &[Event]) -> String {
    let mut out = String::new();

    if !contacts.is_empty() {
        out.push_str("\n\nThe user's contacts:\n");
        for contact in contacts {
            let _ = write!(out, "- {}", contact.name);
            if let Some(relationship) = &contact.relationship {
                let _ = write!(out, " ({})", relationship);
            }
            if let Some(birthday) = contact.birthday {
                let _ = write!(out, ", birthday: {}", birthday);
            }
            if let Some(notes) = &contact.notes {
                let _ = write!(out, ", notes: {}", notes);
            }
            out.push('\n');
        }
    }

    if !events.is_empty() {
        out.push_str("\nThe user's events:\n");
        for event in events {
            let _ = write!(
                out,
                "- {} ({}), date: {}",
                event.title, event.event_type, event.event_date
            );
            if let Some(description) = &event.description {
                let _ = write!(out, ", description: {}", description);
            }
            out.push('\n');
        }
    }

    out
}

/// Full system prompt for a chat session started on `today`.
pub fn system_prompt(contacts: &[Contact], events: &[Event], today: NaiveDate) -> String {
    format!(
        "{}\n\nToday's date is: {}\n{}\n\nReply in a warm, friendly tone with concrete, \
         practical suggestions. Keep replies concise but thoughtful.",
        PERSONA,
        today,
        relationship_context(contacts, events)
    )
}
