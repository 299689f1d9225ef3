//! Calendar events and the record adapter that produces them.

use serde::{Deserialize, Serialize};

use crate::status::Completion;
use crate::time::TimeOfDay;
use crate::types::{EventId, RawEventId, ValidationError};

/// Location tag used when a record has none.
pub const DEFAULT_LOCATION: &str = "その他";

/// A normalized event for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique within the day's event set.
    pub id: EventId,
    pub start: TimeOfDay,
    /// Not guaranteed to be after `start`.
    pub end: TimeOfDay,
    /// Free-text description.
    #[serde(default)]
    pub text: String,
    pub location: String,
    #[serde(default)]
    pub done: Completion,
}

impl Event {
    /// Creates a pending event with no description and the default location.
    pub fn new(id: EventId, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            id,
            start,
            end,
            text: String::new(),
            location: DEFAULT_LOCATION.to_string(),
            done: Completion::Pending,
        }
    }

    /// Signed length in minutes; zero or negative when `end <= start`.
    #[must_use]
    pub fn duration_minutes(&self) -> i32 {
        i32::from(self.end.minutes()) - i32::from(self.start.minutes())
    }
}

/// An event record as stored by the calendar.
///
/// Older records carry a single `time` field instead of `start_time`, and any
/// field may be missing or empty. [`RawEvent::normalize`] applies the
/// defaults once so nothing downstream has to know these field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RawEventId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Legacy start field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, rename = "event", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

impl RawEvent {
    /// Fills defaults and validates the record.
    ///
    /// - start: `start_time`, then `time`, then 00:00
    /// - end: `end_time`, then 23:59
    /// - location: `location`, then [`DEFAULT_LOCATION`]
    ///
    /// Empty strings count as absent. A missing ID or a time that is present
    /// but unparsable is rejected; `start > end` is accepted as-is.
    pub fn normalize(&self) -> Result<Event, ValidationError> {
        let id = match &self.id {
            Some(raw) => EventId::try_from(raw.clone())?,
            None => return Err(ValidationError::Empty { field: "event ID" }),
        };

        let start_field =
            non_empty(self.start_time.as_deref()).or_else(|| non_empty(self.time.as_deref()));
        let start = match start_field {
            Some(s) => TimeOfDay::parse_field(s, "start time")?,
            None => TimeOfDay::START_OF_DAY,
        };
        let end = match non_empty(self.end_time.as_deref()) {
            Some(s) => TimeOfDay::parse_field(s, "end time")?,
            None => TimeOfDay::END_OF_DAY,
        };

        Ok(Event {
            id,
            start,
            end,
            text: self.text.clone().unwrap_or_default(),
            location: non_empty(self.location.as_deref())
                .unwrap_or(DEFAULT_LOCATION)
                .to_string(),
            done: Completion::from(self.done),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
