use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use owo_colors::OwoColorize;
use rapport_core::Contact;
use rapport_core::birthday::BirthdaySync;
use rapport_core::contact::{RelationshipGroup, group_label};
use rapport_core::store::Store;

use super::set_optional;
use crate::render::Render;

/// Optional contact fields shared by `add-contact` and `update-contact`.
#[derive(Args)]
pub struct ContactFields {
    /// Relationship group: family, friend, colleague, classmate, relative, business, other ("" to clear)
    #[arg(short, long)]
    relationship: Option<String>,

    /// Birthday, YYYY-MM-DD. Creates a yearly birthday event.
    #[arg(short, long)]
    birthday: Option<NaiveDate>,

    /// Phone number ("" to clear)
    #[arg(long)]
    phone: Option<String>,

    /// Email address ("" to clear)
    #[arg(long)]
    email: Option<String>,

    /// Free-form notes ("" to clear)
    #[arg(long)]
    notes: Option<String>,
}

impl ContactFields {
    /// Copy the given flags onto `contact`. An empty value clears the
    /// field; the birthday has its own `--clear-birthday`.
    fn apply(self, contact: &mut Contact) {
        if let Some(relationship) = self.relationship.as_deref().map(str::trim) {
            if !relationship.is_empty() && RelationshipGroup::from_value(relationship).is_none() {
                log::warn!("'{}' is not a predefined relationship group", relationship);
            }
        }
        set_optional(&mut contact.relationship, self.relationship);
        if self.birthday.is_some() {
            contact.birthday = self.birthday;
        }
        set_optional(&mut contact.phone, self.phone);
        set_optional(&mut contact.email, self.email);
        set_optional(&mut contact.notes, self.notes);
    }
}

pub fn list(store: &Store, group: Option<&str>) -> Result<()> {
    let contacts: Vec<&Contact> = store
        .contacts()
        .iter()
        .filter(|c| group.is_none_or(|g| c.relationship.as_deref() == Some(g)))
        .collect();

    if contacts.is_empty() {
        match group {
            Some(g) => println!("{}", format!("No contacts in {}", group_label(Some(g))).dimmed()),
            None => println!("{}", "No contacts yet".dimmed()),
        }
        return Ok(());
    }

    for contact in contacts {
        println!("{}", contact.render());
    }

    Ok(())
}

pub fn add(store: &mut Store, name: String, fields: ContactFields) -> Result<()> {
    let mut contact = Contact::new(name);
    fields.apply(&mut contact);

    let sync = store.add_contact(contact.clone())?;
    store.save()?;

    println!("{} {}", "+".green(), contact.render());
    print_birthday_sync(&sync);
    Ok(())
}

pub fn update(
    store: &mut Store,
    id: &str,
    name: Option<String>,
    fields: ContactFields,
    clear_birthday: bool,
) -> Result<()> {
    let Some(mut contact) = store.contact(id).cloned() else {
        anyhow::bail!("Contact '{}' not found", id);
    };

    if let Some(name) = name {
        contact.name = name;
    }
    fields.apply(&mut contact);
    if clear_birthday {
        contact.birthday = None;
    }

    let sync = store.update_contact(contact.clone())?;
    store.save()?;

    println!("{} {}", "~".yellow(), contact.render());
    print_birthday_sync(&sync);
    Ok(())
}

pub fn delete(store: &mut Store, id: &str) -> Result<()> {
    let contact = store.delete_contact(id)?;
    store.save()?;

    println!("{} {}", "-".red(), contact.name.red());
    Ok(())
}

fn print_birthday_sync(sync: &BirthdaySync) {
    match sync {
        BirthdaySync::Create(event) => {
            println!("   {} {}", "+".green(), format!("🎂 {}", event.title).dimmed())
        }
        BirthdaySync::Update(event) => {
            println!("   {} {}", "~".yellow(), format!("🎂 {}", event.title).dimmed())
        }
        BirthdaySync::Delete(_) => {
            println!("   {} {}", "-".red(), "🎂 birthday event removed".dimmed())
        }
        BirthdaySync::Unchanged => {}
    }
}
