//! Month grid generation.
//!
//! A month is laid out as whole weeks: leading cells borrow the tail of the
//! previous month and trailing cells the head of the next one, so the cell
//! count is always a multiple of seven. Each cell carries the events that
//! start on its date, in the order they were added to the store.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::event::Event;
use crate::month::{Month, WeekStart};

pub const DAYS_IN_WEEK: usize = 7;

/// One square of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for padding days borrowed from adjacent months
    pub is_current_month: bool,
    pub is_today: bool,
    /// Events starting on `date`, in insertion order
    pub events: Vec<Event>,
}

/// Build the grid for `month`, marking `today` and bucketing `events` by
/// their start date.
pub fn build_month_grid(
    month: Month,
    events: &[Event],
    today: NaiveDate,
    week_start: WeekStart,
) -> Vec<DayCell> {
    let first = month.first_day();
    let leading = u64::from(week_start.column(first.weekday()));
    let filled = leading + u64::from(month.num_days());

    // A zero remainder must not add a spurious extra week
    let week = DAYS_IN_WEEK as u64;
    let trailing = (week - filled % week) % week;

    let mut by_day = bucket_by_start_date(events);
    let grid_start = first - Days::new(leading);

    (0..filled + trailing)
        .map(|offset| {
            let date = grid_start + Days::new(offset);
            DayCell {
                date,
                is_current_month: month.contains(date),
                is_today: date == today,
                events: by_day.remove(&date).unwrap_or_default(),
            }
        })
        .collect()
}

/// Split a grid into rows of seven.
pub fn weeks(cells: &[DayCell]) -> std::slice::Chunks<'_, DayCell> {
    cells.chunks(DAYS_IN_WEEK)
}

fn bucket_by_start_date(events: &[Event]) -> HashMap<NaiveDate, Vec<Event>> {
    let mut by_day: HashMap<NaiveDate, Vec<Event>> = HashMap::new();
    for event in events {
        by_day
            .entry(event.start_date())
            .or_default()
            .push(event.clone());
    }
    by_day
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventDraft, parse_datetime};
    use chrono::Weekday;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(id: &str, start: &str) -> Event {
        let start = parse_datetime(start).unwrap();
        Event::with_id(id, EventDraft::new(id, start, start + chrono::Duration::hours(1)))
    }

    fn grid(y: i32, m: u32, week_start: WeekStart) -> Vec<DayCell> {
        build_month_grid(Month::new(y, m).unwrap(), &[], date(1999, 1, 1), week_start)
    }

    #[test]
    fn march_2024_sunday_start() {
        // March 1, 2024 is a Friday: 5 leading days, 31 days, 6 trailing
        let cells = grid(2024, 3, WeekStart::Sunday);
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[0].date, date(2024, 2, 25));
        assert!(!cells[0].is_current_month);
        assert_eq!(cells[5].date, date(2024, 3, 1));
        assert!(cells[5].is_current_month);
        assert_eq!(cells[41].date, date(2024, 4, 6));
        assert!(!cells[41].is_current_month);
    }

    #[test]
    fn leading_days_come_from_leap_february() {
        let cells = grid(2024, 3, WeekStart::Sunday);
        assert_eq!(cells[4].date, date(2024, 2, 29));
    }

    #[test]
    fn month_starting_on_first_weekday_has_no_leading_padding() {
        // September 1, 2024 is a Sunday
        assert_eq!(date(2024, 9, 1).weekday(), Weekday::Sun);
        let cells = grid(2024, 9, WeekStart::Sunday);
        assert_eq!(cells[0].date, date(2024, 9, 1));
        assert!(cells[0].is_current_month);

        // April 1, 2024 is a Monday
        let cells = grid(2024, 4, WeekStart::Monday);
        assert_eq!(cells[0].date, date(2024, 4, 1));
    }

    #[test]
    fn month_ending_on_last_weekday_has_no_trailing_week() {
        // February 2015 starts on Sunday and has exactly 28 days
        let cells = grid(2015, 2, WeekStart::Sunday);
        assert_eq!(cells.len(), 28);
        assert!(cells.iter().all(|c| c.is_current_month));
    }

    #[test]
    fn first_day_on_last_column() {
        // June 1, 2024 is a Saturday: six leading days
        let cells = grid(2024, 6, WeekStart::Sunday);
        assert_eq!(cells[6].date, date(2024, 6, 1));
        assert!(cells[..6].iter().all(|c| !c.is_current_month));
        assert_eq!(cells.len(), 42);
    }

    #[test]
    fn today_is_marked_even_outside_current_month() {
        let month = Month::new(2024, 3).unwrap();
        let cells = build_month_grid(month, &[], date(2024, 2, 26), WeekStart::Sunday);
        let marked: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date, date(2024, 2, 26));
        assert!(!marked[0].is_current_month);
    }

    #[test]
    fn events_bucketed_by_start_day_in_insertion_order() {
        let events = vec![
            event("a", "2024-03-05T14:00"),
            event("b", "2024-03-05T09:00"),
            event("c", "2024-03-06T09:00"),
        ];
        let cells = build_month_grid(
            Month::new(2024, 3).unwrap(),
            &events,
            date(2024, 3, 1),
            WeekStart::Sunday,
        );

        let on = |d: NaiveDate| -> Vec<&str> {
            cells
                .iter()
                .find(|c| c.date == d)
                .unwrap()
                .events
                .iter()
                .map(|e| e.id.as_str())
                .collect()
        };

        assert_eq!(on(date(2024, 3, 5)), vec!["a", "b"]);
        assert_eq!(on(date(2024, 3, 6)), vec!["c"]);
        assert!(on(date(2024, 3, 7)).is_empty());
    }

    #[test]
    fn events_on_padding_days_are_shown() {
        let events = vec![event("early-april", "2024-04-02T10:00")];
        let cells = build_month_grid(
            Month::new(2024, 3).unwrap(),
            &events,
            date(2024, 3, 1),
            WeekStart::Sunday,
        );
        let cell = cells.iter().find(|c| c.date == date(2024, 4, 2)).unwrap();
        assert!(!cell.is_current_month);
        assert_eq!(cell.events.len(), 1);
    }

    #[test]
    fn weeks_are_rows_of_seven() {
        let cells = grid(2024, 3, WeekStart::Monday);
        let rows: Vec<_> = weeks(&cells).collect();
        assert_eq!(rows.len(), cells.len() / DAYS_IN_WEEK);
        assert!(rows.iter().all(|r| r.len() == DAYS_IN_WEEK));
        assert_eq!(rows[0][0].date.weekday(), Weekday::Mon);
    }

    proptest! {
        #[test]
        fn every_month_is_whole_weeks_covering_each_day_once(
            year in 1600i32..2400,
            month in 1u32..=12,
            monday in any::<bool>(),
        ) {
            let week_start = if monday { WeekStart::Monday } else { WeekStart::Sunday };
            let m = Month::new(year, month).unwrap();
            let cells = build_month_grid(m, &[], m.first_day(), week_start);

            prop_assert_eq!(cells.len() % DAYS_IN_WEEK, 0);
            prop_assert!(cells.len() >= 28 && cells.len() <= 42);
            prop_assert_eq!(cells[0].date.weekday(), week_start.weekday());

            let current: Vec<u32> = cells
                .iter()
                .filter(|c| c.is_current_month)
                .map(|c| c.date.day())
                .collect();
            let expected: Vec<u32> = (1..=m.num_days()).collect();
            prop_assert_eq!(current, expected);

            for pair in cells.windows(2) {
                prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
            }
        }
    }
}
