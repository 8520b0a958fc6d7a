//! Free-text search across contacts and events.

use crate::contact::Contact;
use crate::event::Event;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchHit<'a> {
    Contact(&'a Contact),
    Event(&'a Event),
}

/// Case-insensitive substring search. Contacts come first, then events,
/// each in input order. A blank query matches nothing.
pub fn search<'a>(contacts: &'a [Contact], events: &'a [Event], query: &str) -> Vec<SearchHit<'a>> {
    let raw = query.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    let term = raw.to_lowercase();

    let contact_hits = contacts
        .iter()
        .filter(|c| contact_matches(c, raw, &term))
        .map(SearchHit::Contact);

    let event_hits = events
        .iter()
        .filter(|e| event_matches(e, &term))
        .map(SearchHit::Event);

    contact_hits.chain(event_hits).collect()
}

fn contains(field: Option<&str>, term: &str) -> bool {
    field.is_some_and(|f| f.to_lowercase().contains(term))
}

fn contact_matches(contact: &Contact, raw: &str, term: &str) -> bool {
    contact.name.to_lowercase().contains(term)
        || contains(contact.relationship.as_deref(), term)
        || contains(contact.email.as_deref(), term)
        // phone numbers are matched verbatim
        || contact.phone.as_deref().is_some_and(|p| p.contains(raw))
        || contains(contact.notes.as_deref(), term)
}

fn event_matches(event: &Event, term: &str) -> bool {
    event.title.to_lowercase().contains(term)
        || contains(event.description.as_deref(), term)
        || event.event_type.as_str().contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;
    use chrono::NaiveDate;

    fn fixtures() -> (Vec<Contact>, Vec<Event>) {
        let mut mina = Contact::new("Mina Park");
        mina.phone = Some("+1 555 0101".to_string());
        mina.notes = Some("Loves jazz".to_string());
        let mut theo = Contact::new("Theo");
        theo.relationship = Some("colleague".to_string());

        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let mut concert = Event::new("Jazz night", date);
        concert.description = Some("Blue Note".to_string());
        let mut review = Event::new("Quarterly review", date);
        review.event_type = EventType::Meeting;

        (vec![mina, theo], vec![concert, review])
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let (contacts, events) = fixtures();
        assert!(search(&contacts, &events, "   ").is_empty());
    }

    #[test]
    fn test_contacts_come_before_events() {
        let (contacts, events) = fixtures();

        let hits = search(&contacts, &events, "JAZZ");

        assert_eq!(
            hits,
            vec![SearchHit::Contact(&contacts[0]), SearchHit::Event(&events[0])]
        );
    }

    #[test]
    fn test_matches_relationship_phone_and_event_type() {
        let (contacts, events) = fixtures();

        assert_eq!(
            search(&contacts, &events, "colleague"),
            vec![SearchHit::Contact(&contacts[1])]
        );
        assert_eq!(
            search(&contacts, &events, "555 0101"),
            vec![SearchHit::Contact(&contacts[0])]
        );
        assert_eq!(
            search(&contacts, &events, "meeting"),
            vec![SearchHit::Event(&events[1])]
        );
    }
}
