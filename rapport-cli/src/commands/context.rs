use anyhow::Result;
use chrono::NaiveDate;
use rapport_core::assistant::system_prompt;
use rapport_core::store::Store;

pub fn run(store: &Store, today: NaiveDate) -> Result<()> {
    println!("{}", system_prompt(store.contacts(), store.events(), today));
    Ok(())
}
