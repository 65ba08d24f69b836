use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use dialoguer::{Input, Select};
use monthcal_core::event::{format_datetime, parse_datetime};
use monthcal_core::form::EventForm;
use monthcal_core::storage::Storage;
use monthcal_core::{CalendarView, EventColor, FormOutcome};
use owo_colors::OwoColorize;

use super::day::short_id;
use crate::render::Render;

pub struct NewArgs {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub color: Option<EventColor>,
}

pub fn run<S: Storage>(view: &mut CalendarView<S>, args: NewArgs) -> Result<()> {
    let interactive = args.title.is_none();

    if let Some(date) = args.date {
        view.select_date(date);
    }
    let mut form = view.new_event_form();

    fill_form(&mut form, args, interactive)?;

    match view.submit_form(&form)? {
        FormOutcome::Created(event) => {
            if interactive {
                println!();
            }
            println!(
                "{} {}",
                format!("  Created: {}", event.title).green(),
                short_id(&event.id).dimmed()
            );
            println!("   {}", event.render());
            Ok(())
        }
        FormOutcome::Updated(_) | FormOutcome::Missing(_) => {
            anyhow::bail!("Expected a new event to be created")
        }
    }
}

/// Apply arguments to a new-event form, prompting for what is missing when
/// interactive.
fn fill_form(form: &mut EventForm, args: NewArgs, interactive: bool) -> Result<()> {
    // --- Title ---
    form.title = match args.title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Start ---
    let explicit_start = args.start.is_some();
    if let Some(start) = args.start {
        form.start_time = format_datetime(&parse_datetime(&start)?);
    } else if interactive {
        let start = prompt_with_retry("  Start", &form.start_time)?;
        form.start_time = format_datetime(&start);
    }

    // --- End ---
    if let Some(end) = args.end {
        form.end_time = format_datetime(&parse_datetime(&end)?);
    } else if let Some(duration) = args.duration {
        let start = parse_datetime(&form.start_time)?;
        form.end_time = format_datetime(&apply_duration(&start, &duration)?);
    } else if interactive {
        let start = parse_datetime(&form.start_time)?;
        form.end_time = format_datetime(&prompt_duration(&start)?);
    } else if explicit_start {
        let start = parse_datetime(&form.start_time)?;
        form.end_time = format_datetime(&default_end(&start));
    }

    // --- Description ---
    if let Some(description) = args.description {
        form.description = description;
    } else if interactive {
        form.description = Input::new()
            .with_prompt("  Description (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;
    }

    // --- Category ---
    if let Some(color) = args.color {
        form.color = color;
    } else if interactive {
        form.color = prompt_color(form.color)?;
    }

    Ok(())
}

/// Prompt for a date/time with retry on parse errors.
fn prompt_with_retry(prompt: &str, default: &str) -> Result<NaiveDateTime> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        match parse_datetime(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Prompt for duration/end with retry on parse errors.
fn prompt_duration(start: &NaiveDateTime) -> Result<NaiveDateTime> {
    loop {
        let input: String = Input::new()
            .with_prompt("  How long? (1 hour)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.is_empty() {
            return Ok(default_end(start));
        }
        match parse_end(&input, start) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn prompt_color(default: EventColor) -> Result<EventColor> {
    let items: Vec<String> = EventColor::ALL.iter().map(|c| c.render()).collect();
    let default_index = EventColor::ALL
        .iter()
        .position(|c| *c == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("  Category")
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(EventColor::ALL[selection])
}

/// Parse an end input: a duration first (humantime), then a date/time.
fn parse_end(input: &str, start: &NaiveDateTime) -> Result<NaiveDateTime> {
    if let Ok(end) = try_apply_duration(start, input) {
        return Ok(end);
    }

    let cleaned = input
        .strip_prefix("until ")
        .or_else(|| input.strip_prefix("to "))
        .unwrap_or(input);

    Ok(parse_datetime(cleaned)?)
}

/// Apply a duration string to a start time.
fn apply_duration(start: &NaiveDateTime, dur_input: &str) -> Result<NaiveDateTime> {
    try_apply_duration(start, dur_input)
        .with_context(|| format!("Could not parse duration: \"{}\"", dur_input))
}

fn try_apply_duration(start: &NaiveDateTime, dur_input: &str) -> Result<NaiveDateTime> {
    let std_dur = humantime::parse_duration(dur_input).map_err(|e| anyhow::anyhow!("{}", e))?;
    let chrono_dur = Duration::from_std(std_dur).context("Duration too large")?;

    start
        .checked_add_signed(chrono_dur)
        .context("Duration too large")
}

/// Default end time: one hour after the start.
fn default_end(start: &NaiveDateTime) -> NaiveDateTime {
    *start + Duration::hours(1)
}
