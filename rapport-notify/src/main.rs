//! Sends a desktop notification for every event due for a reminder.
//!
//! Meant to be run once a day, e.g. from cron or a systemd timer.

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use log::{info, warn};
use notify_rust::Notification;
use rapport_core::config::RapportConfig;
use rapport_core::store::Store;
use rapport_core::upcoming_reminders;

#[derive(Parser)]
#[command(name = "rapport-notify")]
#[command(about = "Send desktop notifications for upcoming rapport reminders")]
struct Args {
    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print reminders instead of sending notifications
    #[arg(long)]
    dry_run: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let config = RapportConfig::load()?;
    let store = Store::open(config.data_path())?;

    let reminders = upcoming_reminders(store.events(), today);
    info!("{} reminders for {}", reminders.len(), today);

    let mut sent = 0;
    for reminder in &reminders {
        let title = reminder.event.title.as_str();
        let body = reminder.notification_body(store.contacts());

        if args.dry_run {
            println!("{}: {}", title, body);
            continue;
        }

        match Notification::new()
            .appname("rapport")
            .summary(title)
            .body(&body)
            .show()
        {
            Ok(_) => sent += 1,
            Err(e) => warn!("Could not show notification for '{}': {}", title, e),
        }
    }

    if !args.dry_run {
        info!("Sent {} of {} notifications", sent, reminders.len());
    }

    Ok(())
}
