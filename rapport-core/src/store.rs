//! Local data file holding contacts and events.
//!
//! The whole file is read on open and rewritten on [`Store::save`]. Contact
//! edits go through birthday sync so the mirrored birthday events stay in
//! step with the contact list.

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::birthday::{BirthdaySync, find_birthday_event, plan_birthday_sync};
use crate::contact::Contact;
use crate::error::{RapportError, RapportResult};
use crate::event::{Event, EventType};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    contacts: Vec<Contact>,
    #[serde(default)]
    events: Vec<Event>,
}

pub struct Store {
    path: PathBuf,
    data: StoreData,
}

impl Store {
    /// Open the data file at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> RapportResult<Self> {
        let path = path.into();

        let data = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| {
                RapportError::Serialization(format!("Could not parse {}: {}", path.display(), e))
            })?
        } else {
            debug!("No data file at {}, starting empty", path.display());
            StoreData::default()
        };

        let mut store = Store { path, data };
        store.sort();
        Ok(store)
    }

    pub fn save(&self) -> RapportResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(&self.data)
            .map_err(|e| RapportError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;

        info!(
            "Saved {} contacts and {} events to {}",
            self.data.contacts.len(),
            self.data.events.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Contacts sorted by name.
    pub fn contacts(&self) -> &[Contact] {
        &self.data.contacts
    }

    /// Events sorted by `event_date`.
    pub fn events(&self) -> &[Event] {
        &self.data.events
    }

    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.data.contacts.iter().find(|c| c.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.data.events.iter().find(|e| e.id == id)
    }

    // =========================================================================
    // Contact operations
    // =========================================================================

    pub fn add_contact(&mut self, contact: Contact) -> RapportResult<BirthdaySync> {
        contact.validate()?;

        let sync = self.sync_birthday(&contact);
        self.data.contacts.push(contact);
        self.sort();
        Ok(sync)
    }

    pub fn update_contact(&mut self, contact: Contact) -> RapportResult<BirthdaySync> {
        contact.validate()?;

        let slot = self
            .data
            .contacts
            .iter_mut()
            .find(|c| c.id == contact.id)
            .ok_or_else(|| not_found("Contact", &contact.id))?;
        *slot = contact.clone();

        let sync = self.sync_birthday(&contact);
        self.sort();
        Ok(sync)
    }

    /// Remove a contact and its birthday event. Other events linked to the
    /// contact keep their (now dangling) `contact_id`.
    pub fn delete_contact(&mut self, id: &str) -> RapportResult<Contact> {
        let index = self
            .data
            .contacts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| not_found("Contact", id))?;
        let contact = self.data.contacts.remove(index);

        self.data.events.retain(|e| {
            !(e.event_type == EventType::Birthday && e.contact_id.as_deref() == Some(id))
        });

        Ok(contact)
    }

    // =========================================================================
    // Event operations
    // =========================================================================

    pub fn add_event(&mut self, event: Event) -> RapportResult<()> {
        event.validate()?;

        self.data.events.push(event);
        self.sort();
        Ok(())
    }

    pub fn update_event(&mut self, event: Event) -> RapportResult<()> {
        event.validate()?;

        let slot = self
            .data
            .events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or_else(|| not_found("Event", &event.id))?;
        *slot = event;

        self.sort();
        Ok(())
    }

    pub fn delete_event(&mut self, id: &str) -> RapportResult<Event> {
        let index = self
            .data
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| not_found("Event", id))?;

        Ok(self.data.events.remove(index))
    }

    fn sync_birthday(&mut self, contact: &Contact) -> BirthdaySync {
        let existing = find_birthday_event(&contact.id, &self.data.events);
        let sync = plan_birthday_sync(contact, existing);

        match &sync {
            BirthdaySync::Create(event) => self.data.events.push(event.clone()),
            BirthdaySync::Update(event) => {
                if let Some(slot) = self.data.events.iter_mut().find(|e| e.id == event.id) {
                    *slot = event.clone();
                }
            }
            BirthdaySync::Delete(id) => self.data.events.retain(|e| &e.id != id),
            BirthdaySync::Unchanged => {}
        }

        debug!("Birthday sync for '{}': {:?}", contact.name, sync);
        sync
    }

    fn sort(&mut self) {
        self.data
            .contacts
            .sort_by_cached_key(|c| c.name.to_lowercase());
        self.data.events.sort_by_key(|e| e.event_date);
    }
}

fn not_found(kind: &'static str, id: &str) -> RapportError {
    RapportError::NotFound {
        kind,
        id: id.to_string(),
    }
}
