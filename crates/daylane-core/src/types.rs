//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// A time-of-day string could not be read as `HH:MM`.
    #[error("invalid {field}: {value:?} (expected HH:MM between 00:00 and 23:59)")]
    InvalidTime { field: &'static str, value: String },

    /// A minute count fell outside a single day.
    #[error("minute of day out of range: {value} (expected 0..1440)")]
    MinuteOutOfRange { value: u32 },

    /// The event already carries a done/failed outcome.
    #[error("event outcome is already recorded")]
    AlreadyResolved,
}

/// A validated event identifier.
///
/// Event IDs must be non-empty. Source records may carry them as integers
/// (the calendar numbers events per day) or as strings; both are kept in
/// their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawEventId", into = "String")]
pub struct EventId(String);

impl EventId {
    /// Creates a new ID after validation.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::Empty { field: "event ID" });
        }
        Ok(Self(id))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An event identifier as it appears in source records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawEventId {
    Number(i64),
    Text(String),
}

impl TryFrom<RawEventId> for EventId {
    type Error = ValidationError;

    fn try_from(value: RawEventId) -> Result<Self, Self::Error> {
        match value {
            RawEventId::Number(n) => Self::new(n.to_string()),
            RawEventId::Text(s) => Self::new(s),
        }
    }
}

impl From<i64> for EventId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl From<EventId> for String {
    fn from(id: EventId) -> Self {
        id.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
