//! Terminal rendering for monthcal types.
//!
//! Extension traits and helpers that add colored output to monthcal-core
//! types using owo_colors.

use monthcal_core::grid::weeks;
use monthcal_core::{DayCell, Event, EventColor, Month, WeekStart};
use owo_colors::OwoColorize;

/// Width of one grid column, in characters
const CELL_WIDTH: usize = 12;

/// Events listed per cell before collapsing into "+N more"
const MAX_EVENTS_PER_CELL: usize = 3;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventColor {
    fn render(&self) -> String {
        colorize(*self, self.label())
    }
}

impl Render for Event {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            colorize(self.color, "●"),
            colorize(self.color, &self.title),
            self.render_time_range().dimmed()
        )
    }
}

/// Color text by event category
pub fn colorize(color: EventColor, text: &str) -> String {
    match color {
        EventColor::Work => text.blue().to_string(),
        EventColor::Personal => text.green().to_string(),
        EventColor::Other => text.magenta().to_string(),
    }
}

/// Render the month heading, weekday header and one block of lines per week.
pub fn render_month(month: Month, week_start: WeekStart, days: &[DayCell]) -> String {
    let mut lines = vec![month.title().bold().to_string()];

    let header: Vec<String> = week_start
        .weekdays()
        .iter()
        .map(|day| fit(&day.to_string(), CELL_WIDTH).bold().to_string())
        .collect();
    lines.push(header.join(" "));

    for week in weeks(days) {
        let numbers: Vec<String> = week.iter().map(render_day_number).collect();
        lines.push(numbers.join(" "));

        let rows = week
            .iter()
            .map(|cell| cell.events.len().min(MAX_EVENTS_PER_CELL))
            .max()
            .unwrap_or(0);

        for row in 0..rows {
            let slots: Vec<String> = week.iter().map(|cell| render_event_slot(cell, row)).collect();
            lines.push(slots.join(" "));
        }
    }

    lines.join("\n")
}

fn render_day_number(cell: &DayCell) -> String {
    let text = fit(&cell.date.format("%-d").to_string(), CELL_WIDTH);
    if cell.is_today {
        text.reversed().bold().to_string()
    } else if cell.is_current_month {
        text
    } else {
        text.dimmed().to_string()
    }
}

/// One line of a cell's event list: an event title, "+N more", or blank.
fn render_event_slot(cell: &DayCell, row: usize) -> String {
    let overflow = cell.events.len() > MAX_EVENTS_PER_CELL;
    let last_row = MAX_EVENTS_PER_CELL - 1;

    if overflow && row == last_row {
        let more = format!("+{} more", cell.events.len() - last_row);
        return fit(&more, CELL_WIDTH).dimmed().to_string();
    }

    match cell.events.get(row) {
        Some(event) => colorize(event.color, &fit(&event.title, CELL_WIDTH)),
        None => " ".repeat(CELL_WIDTH),
    }
}

/// Truncate to `width` characters (with an ellipsis) and pad with spaces.
pub fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    } else {
        format!("{}{}", text, " ".repeat(width - count))
    }
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use monthcal_core::EventDraft;
    use monthcal_core::event::parse_datetime;
    use monthcal_core::grid::build_month_grid;

    fn event(title: &str, start: &str) -> Event {
        let start = parse_datetime(start).unwrap();
        Event::with_id(title, EventDraft::new(title, start, start))
    }

    fn cell_with(events: Vec<Event>) -> DayCell {
        DayCell {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            is_current_month: true,
            is_today: false,
            events,
        }
    }

    #[test]
    fn fit_pads_short_text() {
        assert_eq!(fit("Mon", 6), "Mon   ");
        assert_eq!(fit("", 2), "  ");
    }

    #[test]
    fn fit_truncates_long_text() {
        assert_eq!(fit("Quarterly planning", 8), "Quarter…");
        assert_eq!(fit("Quarterly planning", 8).chars().count(), 8);
    }

    #[test]
    fn event_slot_collapses_overflow() {
        let cell = cell_with(vec![
            event("a", "2024-03-05T09:00"),
            event("b", "2024-03-05T10:00"),
            event("c", "2024-03-05T11:00"),
            event("d", "2024-03-05T12:00"),
        ]);

        assert!(render_event_slot(&cell, 0).contains('a'));
        assert!(render_event_slot(&cell, 1).contains('b'));
        assert!(render_event_slot(&cell, 2).contains("+2 more"));
    }

    #[test]
    fn event_slot_blank_past_last_event() {
        let cell = cell_with(vec![event("a", "2024-03-05T09:00")]);
        assert_eq!(render_event_slot(&cell, 1), " ".repeat(CELL_WIDTH));
    }

    #[test]
    fn render_month_has_heading_header_and_weeks() {
        let month = Month::new(2024, 3).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let events = vec![event("Standup", "2024-03-05T09:00")];
        let days = build_month_grid(month, &events, today, WeekStart::Sunday);

        let out = render_month(month, WeekStart::Sunday, &days);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].contains("March 2024"));
        assert!(lines[1].contains("Sun"));
        assert!(out.contains("Standup"));
        // heading + header + 6 weeks + one event line in the first full week
        assert_eq!(lines.len(), 2 + 6 + 1);
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize("event", 1), "event");
        assert_eq!(pluralize("event", 3), "events");
    }
}
