//! The event store.
//!
//! Owns the event collection and mirrors it into a [`Storage`] backend
//! after every mutation. Loading is lenient: a missing or malformed blob
//! yields an empty collection. Write failures are logged and do not undo
//! the in-memory change.

use chrono::NaiveDate;
use tracing::{debug, error, warn};

use crate::error::{CalendarError, CalendarResult};
use crate::event::{Event, EventDraft};
use crate::storage::Storage;

/// Key the event collection is stored under.
pub const STORAGE_KEY: &str = "calendar_events";

pub struct EventStore<S: Storage> {
    storage: S,
    events: Vec<Event>,
    version: u64,
}

impl<S: Storage> EventStore<S> {
    /// Read the event collection from `storage`.
    pub fn load(storage: S) -> Self {
        let events = match storage.get(STORAGE_KEY) {
            Some(blob) => match serde_json::from_str::<Vec<Event>>(&blob) {
                Ok(events) => {
                    debug!(count = events.len(), "loaded events");
                    events
                }
                Err(e) => {
                    warn!(key = STORAGE_KEY, error = %e, "stored events are malformed, starting empty");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        EventStore {
            storage,
            events,
            version: 0,
        }
    }

    /// All events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Events starting on `date`, in insertion order.
    pub fn events_on(&self, date: NaiveDate) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.starts_on(date))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Bumped on every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Append a new event with a freshly generated id.
    pub fn add(&mut self, draft: EventDraft) -> Event {
        let event = Event::from_draft(draft);
        debug!(id = %event.id, title = %event.title, "adding event");
        self.events.push(event.clone());
        self.commit();
        event
    }

    /// Replace the event with the same id.
    ///
    /// Returns false (and leaves the collection unchanged) when no event has
    /// that id. The collection is persisted either way.
    pub fn update(&mut self, event: Event) -> bool {
        let found = match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => {
                debug!(id = %event.id, "updating event");
                *slot = event;
                true
            }
            None => {
                debug!(id = %event.id, "update ignored, no event with this id");
                false
            }
        };
        self.commit();
        found
    }

    /// Remove the event with `id`. Returns false if there was none.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        let removed = self.events.len() != before;
        if !removed {
            debug!(id, "remove ignored, no event with this id");
        }
        self.commit();
        removed
    }

    fn commit(&mut self) {
        self.version += 1;
        if let Err(e) = self.persist() {
            error!(key = STORAGE_KEY, error = %e, "failed to persist events");
        }
    }

    fn persist(&mut self) -> CalendarResult<()> {
        let blob = serde_json::to_string(&self.events)
            .map_err(|e| CalendarError::Serialization(e.to_string()))?;
        self.storage.set(STORAGE_KEY, &blob)
    }
}
