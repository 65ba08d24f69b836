use anyhow::Result;
use monthcal_core::storage::Storage;
use monthcal_core::{CalendarView, Event};
use owo_colors::OwoColorize;

use super::day::short_id;
use crate::render::{Render, pluralize};

pub fn run<S: Storage>(view: &CalendarView<S>) -> Result<()> {
    println!("{}", render_list(view.events()));
    Ok(())
}

fn render_list(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events yet. Create one with `monthcal new`."
            .dimmed()
            .to_string();
    }

    let mut lines: Vec<String> = events
        .iter()
        .map(|event| {
            format!(
                "{}  {} {}",
                event.start_date().format("%Y-%m-%d"),
                event.render(),
                short_id(&event.id).dimmed()
            )
        })
        .collect();

    lines.push(String::new());
    lines.push(
        format!("{} {}", events.len(), pluralize("event", events.len()))
            .dimmed()
            .to_string(),
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{add, view};
    use super::*;

    #[test]
    fn lists_every_event_in_insertion_order() {
        let mut view = view();
        add(&mut view, "Retro", "2024-03-06T16:00", "2024-03-06T17:00");
        add(&mut view, "Standup", "2024-03-05T09:00", "2024-03-05T09:30");

        let out = render_list(view.events());
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("2024-03-06"));
        assert!(lines[0].contains("Retro"));
        assert!(lines[1].starts_with("2024-03-05"));
        assert!(lines[1].contains("Standup"));
        assert!(lines[3].contains("2 events"));
    }

    #[test]
    fn single_event_count_is_singular() {
        let mut view = view();
        add(&mut view, "Standup", "2024-03-05T09:00", "2024-03-05T09:30");
        assert!(render_list(view.events()).contains("1 event"));
        assert!(!render_list(view.events()).contains("1 events"));
    }

    #[test]
    fn empty_list_points_to_new() {
        let view = view();
        assert!(render_list(view.events()).contains("monthcal new"));
        assert!(run(&view).is_ok());
    }
}
