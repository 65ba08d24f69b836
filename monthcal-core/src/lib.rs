//! Core types for monthcal.
//!
//! This crate provides everything below the presentation layer:
//! - `Event` and the `EventStore` that owns and persists them
//! - `grid` for laying out a month as whole weeks of day cells
//! - `CalendarView`, the state container a front end drives

pub mod config;
pub mod error;
pub mod event;
pub mod form;
pub mod grid;
pub mod month;
pub mod storage;
pub mod store;
pub mod view;

pub use error::{CalendarError, CalendarResult};
pub use event::{Event, EventColor, EventDraft};
pub use grid::DayCell;
pub use month::{Month, WeekStart};
pub use store::EventStore;
pub use view::{CalendarView, Direction, FormOutcome};
