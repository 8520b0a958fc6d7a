use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use rapport_core::store::Store;
use rapport_core::upcoming_reminders;

use crate::render::render_reminder;

pub fn run(store: &Store, today: NaiveDate) -> Result<()> {
    let reminders = upcoming_reminders(store.events(), today);

    if reminders.is_empty() {
        println!("{}", "No upcoming reminders".dimmed());
        return Ok(());
    }

    println!("{}", format!("🔔 {} upcoming", reminders.len()).bold());
    for reminder in &reminders {
        println!("  {}", render_reminder(reminder, store.contacts()));
    }

    Ok(())
}
