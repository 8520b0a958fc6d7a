use anyhow::Result;
use owo_colors::OwoColorize;
use rapport_core::search::{SearchHit, search};
use rapport_core::store::Store;

use crate::render::Render;

pub fn run(store: &Store, query: &str) -> Result<()> {
    let hits = search(store.contacts(), store.events(), query);

    if hits.is_empty() {
        println!("{}", format!("Nothing matches '{}'", query.trim()).dimmed());
        return Ok(());
    }

    for hit in hits {
        match hit {
            SearchHit::Contact(contact) => println!("{}", contact.render()),
            SearchHit::Event(event) => println!(
                "{} {} {} {}",
                event.event_type.icon(),
                event.title.bold(),
                event.event_date.format("%Y-%m-%d"),
                format!("[{}]", event.id).dimmed()
            ),
        }
    }

    Ok(())
}
