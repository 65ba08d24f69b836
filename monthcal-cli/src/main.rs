mod commands;
mod render;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use monthcal_core::config::MonthcalConfig;
use monthcal_core::{CalendarView, EventColor, Month, WeekStart};
use tracing_subscriber::EnvFilter;

use commands::edit::EditArgs;
use commands::new::NewArgs;

#[derive(Parser)]
#[command(name = "monthcal")]
#[command(about = "Browse a month calendar and manage its events")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid (the current month by default)
    Show {
        /// Month to show (YYYY-MM)
        #[arg(short, long)]
        month: Option<Month>,

        /// Move this many months forward from the shown month
        #[arg(long, default_value_t = 0, conflicts_with = "prev")]
        next: u32,

        /// Move this many months back from the shown month
        #[arg(long, default_value_t = 0)]
        prev: u32,
    },
    /// List the events starting on a day
    Day {
        /// Date (YYYY-MM-DD)
        date: NaiveDate,
    },
    /// List every event
    List,
    /// Create an event
    New {
        title: Option<String>,

        /// Day to create the event on; defaults to 09:00-10:00 (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Start date/time (e.g., "2025-03-20T15:00")
        #[arg(short, long)]
        start: Option<String>,

        /// End date/time (e.g., "2025-03-20T16:00")
        #[arg(short, long, conflicts_with = "duration")]
        end: Option<String>,

        /// Duration instead of an end time (e.g., "30m", "2h")
        #[arg(long)]
        duration: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// work, personal or other
        #[arg(short, long)]
        color: Option<EventColor>,
    },
    /// Change an event (by id or unique id prefix)
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,

        /// New description ("" clears it)
        #[arg(long)]
        description: Option<String>,

        #[arg(short, long)]
        color: Option<EventColor>,
    },
    /// Delete an event (by id or unique id prefix)
    Delete { id: String },
    /// Show config and data paths
    Config {
        /// Save a new first column for the month grid (sunday or monday)
        #[arg(long)]
        week_start: Option<WeekStart>,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = MonthcalConfig::load().context("Failed to load configuration")?;
    let mut view = CalendarView::open(config.storage()).with_week_start(config.week_start);

    let command = cli.command.unwrap_or(Commands::Show {
        month: None,
        next: 0,
        prev: 0,
    });

    match command {
        Commands::Show { month, next, prev } => {
            let shift = i64::from(next) - i64::from(prev);
            commands::show::run(&mut view, month, shift)
        }
        Commands::Day { date } => commands::day::run(&view, date),
        Commands::List => commands::list::run(&view),
        Commands::New {
            title,
            date,
            start,
            end,
            duration,
            description,
            color,
        } => commands::new::run(
            &mut view,
            NewArgs {
                title,
                date,
                start,
                end,
                duration,
                description,
                color,
            },
        ),
        Commands::Edit {
            id,
            title,
            start,
            end,
            description,
            color,
        } => commands::edit::run(
            &mut view,
            &id,
            EditArgs {
                title,
                start,
                end,
                description,
                color,
            },
        ),
        Commands::Delete { id } => commands::delete::run(&mut view, &id),
        Commands::Config { week_start } => commands::config::run(&config, week_start),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MONTHCAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
