//! Reference month and week layout.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A year + month, always normalized to day 1.
///
/// Shifting by whole months is exact: the day component is fixed to 1
/// before the delta is applied, so Jan 31 + 1 month never skips February.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month {
    first: NaiveDate,
}

/// Which weekday sits in the first column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

/// Longest stretch a grid borrows from a neighbouring month.
const GRID_PADDING: Days = Days::new(7);

/// Whether the month starting on `first` can be laid out as a grid: its
/// neighbours' padding days must exist within chrono's date range.
fn has_grid_room(first: NaiveDate) -> bool {
    first.checked_sub_days(GRID_PADDING).is_some()
        && first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.checked_add_days(GRID_PADDING))
            .is_some()
}

impl Month {
    /// None for an invalid month or one at the very edge of the date range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .filter(|first| has_grid_room(*first))
            .map(|first| Month { first })
    }

    /// The month a date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Month {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first - Days::new(1)
    }

    pub fn num_days(&self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn next(&self) -> Self {
        self.shift(1)
    }

    pub fn prev(&self) -> Self {
        self.shift(-1)
    }

    /// Move by `delta` whole months (negative moves backwards).
    ///
    /// Panics if the result falls outside chrono's supported date range.
    pub fn shift(&self, delta: i32) -> Self {
        let months = Months::new(delta.unsigned_abs());
        let first = if delta >= 0 {
            self.first + months
        } else {
            self.first - months
        };
        Month { first }
    }

    /// Move by `delta` whole months, or None if the result (with its grid
    /// padding) would leave the supported date range.
    pub fn checked_shift(&self, delta: i64) -> Option<Self> {
        let months = Months::new(u32::try_from(delta.unsigned_abs()).ok()?);
        let first = if delta >= 0 {
            self.first.checked_add_months(months)?
        } else {
            self.first.checked_sub_months(months)?
        };
        has_grid_room(first).then_some(Month { first })
    }

    /// Heading text, e.g. "March 2024".
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.first.format("%Y-%m"))
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
            .ok()
            .filter(|first| has_grid_room(*first))
            .map(|first| Month { first })
            .ok_or_else(|| CalendarError::InvalidMonth(s.to_string()))
    }
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Column index (0..=6) of `day` in a week starting on this day.
    pub fn column(&self, day: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => day.num_days_from_sunday(),
            WeekStart::Monday => day.num_days_from_monday(),
        }
    }

    /// Weekdays in column order, for grid headers.
    pub fn weekdays(&self) -> [Weekday; 7] {
        let mut day = self.weekday();
        std::array::from_fn(|_| {
            let current = day;
            day = day.succ();
            current
        })
    }
}

impl FromStr for WeekStart {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(CalendarError::Config(format!(
                "Invalid week_start '{}'. Expected sunday or monday",
                other
            ))),
        }
    }
}
