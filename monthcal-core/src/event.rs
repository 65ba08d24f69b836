//! Calendar event types.
//!
//! Event times are floating local date-times: no timezone or UTC offset is
//! attached, and they are stored the way a `datetime-local` form field
//! produces them (`YYYY-MM-DDTHH:MM`).

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CalendarError, CalendarResult};

/// Format used for event times in storage and in forms.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Accepted on read so blobs written with seconds still load.
const DATETIME_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// A calendar event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Assigned by the store on creation
    pub id: String,
    pub title: String,
    #[serde(with = "local_datetime")]
    pub start_time: NaiveDateTime,
    #[serde(with = "local_datetime")]
    pub end_time: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub color: EventColor,
}

/// An event as submitted for creation (no id yet)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub description: Option<String>,
    pub color: EventColor,
}

/// Event category, shown as the event's color in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    Work,
    #[default]
    Personal,
    Other,
}

impl Event {
    /// Create an event from a draft with a freshly generated id.
    pub fn from_draft(draft: EventDraft) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), draft)
    }

    pub fn with_id(id: impl Into<String>, draft: EventDraft) -> Self {
        Event {
            id: id.into(),
            title: draft.title,
            start_time: draft.start_time,
            end_time: draft.end_time,
            description: draft.description,
            color: draft.color,
        }
    }

    /// The calendar day this event is bucketed under.
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// True when the event starts on `date` (day granularity).
    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start_date() == date
    }

    /// "09:00 - 10:00", or with dates when the event spans days.
    pub fn render_time_range(&self) -> String {
        if self.start_time.date() == self.end_time.date() {
            format!(
                "{} - {}",
                self.start_time.format("%H:%M"),
                self.end_time.format("%H:%M")
            )
        } else {
            format!(
                "{} - {}",
                self.start_time.format("%Y-%m-%d %H:%M"),
                self.end_time.format("%Y-%m-%d %H:%M")
            )
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl EventDraft {
    /// A draft with no description in the default category.
    pub fn new(title: impl Into<String>, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        EventDraft {
            title: title.into(),
            start_time,
            end_time,
            description: None,
            color: EventColor::default(),
        }
    }

    pub fn with_color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl EventColor {
    pub const ALL: [EventColor; 3] = [EventColor::Work, EventColor::Personal, EventColor::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventColor::Work => "work",
            EventColor::Personal => "personal",
            EventColor::Other => "other",
        }
    }

    /// Human-readable label ("Work", "Personal", "Other")
    pub fn label(&self) -> &'static str {
        match self {
            EventColor::Work => "Work",
            EventColor::Personal => "Personal",
            EventColor::Other => "Other",
        }
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventColor {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventColor::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalendarError::InvalidColor(s.to_string()))
    }
}

/// Parse a `YYYY-MM-DDTHH:MM` local date-time (seconds are tolerated).
pub fn parse_datetime(s: &str) -> CalendarResult<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, DATETIME_FORMAT_SECONDS))
        .map_err(|_| CalendarError::InvalidDateTime(s.to_string()))
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

mod local_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_datetime(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_datetime(&s).map_err(serde::de::Error::custom)
    }
}
