//! The event editing form.
//!
//! Fields are kept as the raw text a form would hold; [`EventForm::submit`]
//! turns them into an [`EventDraft`]. Only required-field and format checks
//! are made: an end time before the start time is accepted as entered.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::{CalendarError, CalendarResult};
use crate::event::{Event, EventColor, EventDraft, format_datetime, parse_datetime};

/// Start of the default window for a new event on a picked day.
const DEFAULT_START_HOUR: i64 = 9;
/// End of the default window.
const DEFAULT_END_HOUR: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventForm {
    /// Set when editing an existing event
    pub id: Option<String>,
    pub title: String,
    /// `YYYY-MM-DDTHH:MM`
    pub start_time: String,
    /// `YYYY-MM-DDTHH:MM`
    pub end_time: String,
    pub description: String,
    pub color: EventColor,
}

impl EventForm {
    /// A blank new-event form spanning 09:00-10:00 on `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        let midnight = date.and_time(NaiveTime::MIN);
        EventForm {
            start_time: format_datetime(&(midnight + Duration::hours(DEFAULT_START_HOUR))),
            end_time: format_datetime(&(midnight + Duration::hours(DEFAULT_END_HOUR))),
            ..Default::default()
        }
    }

    /// An edit form prefilled from an existing event.
    pub fn from_event(event: &Event) -> Self {
        EventForm {
            id: Some(event.id.clone()),
            title: event.title.clone(),
            start_time: format_datetime(&event.start_time),
            end_time: format_datetime(&event.end_time),
            description: event.description.clone().unwrap_or_default(),
            color: event.color,
        }
    }

    /// Validate the fields and build a draft.
    pub fn submit(&self) -> CalendarResult<EventDraft> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CalendarError::InvalidForm("title is required".into()));
        }
        if self.start_time.trim().is_empty() {
            return Err(CalendarError::InvalidForm("start time is required".into()));
        }
        if self.end_time.trim().is_empty() {
            return Err(CalendarError::InvalidForm("end time is required".into()));
        }

        let description = match self.description.trim() {
            "" => None,
            d => Some(d.to_string()),
        };

        Ok(EventDraft {
            title: title.to_string(),
            start_time: parse_datetime(&self.start_time)?,
            end_time: parse_datetime(&self.end_time)?,
            description,
            color: self.color,
        })
    }
}
