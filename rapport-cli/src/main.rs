mod commands;
mod render;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rapport_core::config::RapportConfig;
use rapport_core::store::Store;
use rapport_core::{EventType, RecurringType};

#[derive(Parser)]
#[command(name = "rapport")]
#[command(about = "Keep track of the people in your life, their important dates and upcoming reminders")]
struct Cli {
    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Events due for a reminder, soonest first
    Upcoming,
    /// All events with their next occurrence
    Events {
        /// Only show events of this type
        #[arg(short = 't', long = "type")]
        event_type: Option<EventType>,
    },
    /// All contacts
    Contacts {
        /// Only show contacts in this relationship group (e.g. "family")
        #[arg(short, long)]
        group: Option<String>,
    },
    AddEvent {
        title: String,

        /// Date of the (first) occurrence, YYYY-MM-DD
        #[arg(short, long)]
        date: NaiveDate,

        #[arg(short = 't', long = "type", default_value = "other")]
        event_type: EventType,

        /// Repeat weekly, monthly or yearly
        #[arg(short, long)]
        repeat: Option<RecurringType>,

        /// Days of notice before the event (defaults to the configured value)
        #[arg(long)]
        remind: Option<u32>,

        /// Id of the contact this event is about
        #[arg(short, long)]
        contact: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    AddContact {
        name: String,

        #[command(flatten)]
        fields: commands::contact::ContactFields,
    },
    UpdateContact {
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: commands::contact::ContactFields,

        /// Remove the birthday (and its birthday event)
        #[arg(long, conflicts_with = "birthday")]
        clear_birthday: bool,
    },
    UpdateEvent {
        id: String,

        #[command(flatten)]
        edits: commands::events::EventEdits,
    },
    DeleteEvent {
        id: String,
    },
    DeleteContact {
        id: String,
    },
    /// Search contacts and events
    Search {
        query: String,
    },
    /// Print the assistant's system prompt for your data
    Context,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let config = RapportConfig::load()?;
    let mut store = Store::open(config.data_path())?;

    match cli.command {
        Commands::Upcoming => commands::upcoming::run(&store, today),
        Commands::Events { event_type } => commands::events::run(&store, event_type, today),
        Commands::Contacts { group } => commands::contact::list(&store, group.as_deref()),
        Commands::AddEvent {
            title,
            date,
            event_type,
            repeat,
            remind,
            contact,
            description,
        } => commands::events::add(
            &mut store,
            commands::events::NewEvent {
                title,
                date,
                event_type,
                repeat,
                reminder_days: remind,
                contact_id: contact,
                description,
            },
            config.default_reminder_days,
        ),
        Commands::UpdateEvent { id, edits } => commands::events::update(&mut store, &id, edits),
        Commands::AddContact { name, fields } => commands::contact::add(&mut store, name, fields),
        Commands::UpdateContact {
            id,
            name,
            fields,
            clear_birthday,
        } => commands::contact::update(&mut store, &id, name, fields, clear_birthday),
        Commands::DeleteEvent { id } => commands::events::delete(&mut store, &id),
        Commands::DeleteContact { id } => commands::contact::delete(&mut store, &id),
        Commands::Search { query } => commands::search::run(&store, &query),
        Commands::Context => commands::context::run(&store, today),
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
