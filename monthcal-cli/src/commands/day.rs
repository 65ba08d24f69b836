use anyhow::Result;
use chrono::NaiveDate;
use monthcal_core::storage::Storage;
use monthcal_core::{CalendarView, Event};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: Storage>(view: &CalendarView<S>, date: NaiveDate) -> Result<()> {
    println!("{}", render_day(view, date));
    Ok(())
}

fn render_day<S: Storage>(view: &CalendarView<S>, date: NaiveDate) -> String {
    let events: Vec<&Event> = view.store().events_on(date).collect();
    let mut lines = vec![date.format("%A, %B %-d %Y").bold().to_string()];

    if events.is_empty() {
        lines.push(format!("   {}", "No events".dimmed()));
    }

    for event in events {
        lines.push(format!("   {} {}", event.render(), short_id(&event.id).dimmed()));
        if let Some(description) = &event.description {
            lines.push(format!("      {}", description.dimmed()));
        }
    }

    lines.join("\n")
}

/// First 8 characters of an id, enough to pass to `edit`/`delete`.
pub fn short_id(id: &str) -> &str {
    id.char_indices().nth(8).map_or(id, |(i, _)| &id[..i])
}
