//! Calendar view state.
//!
//! [`CalendarView`] is the state container a front end owns: the event
//! store plus the selected date and the month being shown. The month grid
//! is rebuilt on demand and cached until the month, the store, today's date
//! or the week layout changes.

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::error::CalendarResult;
use crate::event::{Event, EventDraft};
use crate::form::EventForm;
use crate::grid::{DayCell, build_month_grid};
use crate::month::{Month, WeekStart};
use crate::storage::Storage;
use crate::store::EventStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// What submitting a form did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Created(Event),
    Updated(Event),
    /// The form was editing an event that no longer exists
    Missing(String),
}

pub struct CalendarView<S: Storage> {
    store: EventStore<S>,
    selected_date: NaiveDate,
    current_month: Month,
    week_start: WeekStart,
    grid: Option<CachedGrid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridKey {
    month: Month,
    version: u64,
    today: NaiveDate,
    week_start: WeekStart,
}

struct CachedGrid {
    key: GridKey,
    days: Vec<DayCell>,
}

impl<S: Storage> CalendarView<S> {
    /// A view showing the month of `today`, with `today` selected.
    pub fn new(store: EventStore<S>, today: NaiveDate) -> Self {
        CalendarView {
            store,
            selected_date: today,
            current_month: Month::containing(today),
            week_start: WeekStart::default(),
            grid: None,
        }
    }

    /// Load events from `storage` and show the current month.
    pub fn open(storage: S) -> Self {
        Self::new(EventStore::load(storage), Local::now().date_naive())
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }

    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn current_month(&self) -> Month {
        self.current_month
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    // NAVIGATION:

    /// Move one month back or forward, landing on day 1.
    ///
    /// At the edge of the supported date range the month stays put.
    pub fn navigate_month(&mut self, direction: Direction) {
        let delta = match direction {
            Direction::Prev => -1,
            Direction::Next => 1,
        };
        match self.current_month.checked_shift(delta) {
            Some(month) => {
                self.current_month = month;
                debug!(month = %self.current_month, "navigated");
            }
            None => warn!(month = %self.current_month, ?direction, "no month to navigate to"),
        }
    }

    pub fn go_to_month(&mut self, month: Month) {
        self.current_month = month;
    }

    /// Show the month of `today` and select it.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.current_month = Month::containing(today);
        self.selected_date = today;
    }

    /// Select a date. The shown month does not follow the selection.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    // GRID:

    /// The grid for the current month, as of the local date.
    pub fn days(&mut self) -> &[DayCell] {
        self.days_as_of(Local::now().date_naive())
    }

    pub fn days_as_of(&mut self, today: NaiveDate) -> &[DayCell] {
        let key = GridKey {
            month: self.current_month,
            version: self.store.version(),
            today,
            week_start: self.week_start,
        };

        let stale = self.grid.as_ref().is_none_or(|g| g.key != key);
        if stale {
            let days = build_month_grid(key.month, self.store.events(), today, key.week_start);
            self.grid = Some(CachedGrid { key, days });
        }

        match &self.grid {
            Some(grid) => &grid.days,
            None => &[],
        }
    }

    // EVENTS:

    pub fn add_event(&mut self, draft: EventDraft) -> Event {
        self.store.add(draft)
    }

    pub fn update_event(&mut self, event: Event) -> bool {
        self.store.update(event)
    }

    pub fn delete_event(&mut self, id: &str) -> bool {
        self.store.remove(id)
    }

    // FORMS:

    /// A new-event form for the selected date.
    pub fn new_event_form(&self) -> EventForm {
        EventForm::for_date(self.selected_date)
    }

    /// Select `date` and open a new-event form on it.
    pub fn pick_day(&mut self, date: NaiveDate) -> EventForm {
        self.select_date(date);
        self.new_event_form()
    }

    pub fn edit_event_form(&self, id: &str) -> Option<EventForm> {
        self.store.get(id).map(EventForm::from_event)
    }

    /// Create or update from a submitted form.
    pub fn submit_form(&mut self, form: &EventForm) -> CalendarResult<FormOutcome> {
        let draft = form.submit()?;

        let outcome = match &form.id {
            Some(id) => {
                let event = Event::with_id(id.clone(), draft);
                if self.store.update(event.clone()) {
                    FormOutcome::Updated(event)
                } else {
                    FormOutcome::Missing(id.clone())
                }
            }
            None => FormOutcome::Created(self.store.add(draft)),
        };

        Ok(outcome)
    }

    /// Delete the event an edit form was opened for.
    pub fn delete_from_form(&mut self, form: &EventForm) -> bool {
        match &form.id {
            Some(id) => self.store.remove(id),
            None => false,
        }
    }
}
