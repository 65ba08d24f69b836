use anyhow::Result;
use monthcal_core::event::{format_datetime, parse_datetime};
use monthcal_core::storage::Storage;
use monthcal_core::{CalendarView, EventColor, FormOutcome};
use owo_colors::OwoColorize;

use super::resolve_id;
use crate::render::Render;

pub struct EditArgs {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: Option<String>,
    pub color: Option<EventColor>,
}

pub fn run<S: Storage>(view: &mut CalendarView<S>, id: &str, args: EditArgs) -> Result<()> {
    let id = resolve_id(view, id)?;
    let mut form = view
        .edit_event_form(&id)
        .ok_or_else(|| anyhow::anyhow!("No event with id '{}'", id))?;

    if let Some(title) = args.title {
        form.title = title;
    }
    if let Some(start) = args.start {
        form.start_time = format_datetime(&parse_datetime(&start)?);
    }
    if let Some(end) = args.end {
        form.end_time = format_datetime(&parse_datetime(&end)?);
    }
    if let Some(description) = args.description {
        form.description = description;
    }
    if let Some(color) = args.color {
        form.color = color;
    }

    match view.submit_form(&form)? {
        FormOutcome::Updated(event) => {
            println!("{}", format!("  Updated: {}", event.title).yellow());
            println!("   {}", event.render());
            Ok(())
        }
        FormOutcome::Created(_) | FormOutcome::Missing(_) => {
            anyhow::bail!("No event with id '{}'", id)
        }
    }
}
