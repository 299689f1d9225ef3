//! Core domain logic for day timelines.
//!
//! This crate contains:
//! - Layout: overlap detection and lane assignment for a day's events
//! - Events: the normalized event type and the record adapter that builds it
//! - Status: done/failed/past/upcoming classification against a clock
//! - Drafts: validation rules for newly submitted events

pub mod clock;
pub mod draft;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod schedule;
pub mod status;
pub mod time;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use draft::{DraftError, EventDraft};
pub use event::{DEFAULT_LOCATION, Event, RawEvent};
pub use geometry::LaneGeometry;
pub use layout::{Layout, LayoutAssignment, LayoutConfig, layout, layout_with, overlaps};
pub use schedule::{Schedule, ScheduleError};
pub use status::{Actions, Completion, EventStatus};
pub use time::{MINUTES_PER_DAY, TimeOfDay};
pub use types::{EventId, ValidationError};
