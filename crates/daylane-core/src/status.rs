//! Completion state and display status of calendar events.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;
use crate::types::ValidationError;

/// Outcome recorded for an event.
///
/// Source records store this as `true`, `false`, or `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Completion {
    /// No outcome yet.
    #[default]
    Pending,
    /// Completed successfully.
    Done,
    /// Completed unsuccessfully.
    Failed,
}

impl Completion {
    /// Records an outcome. An outcome can only be recorded once.
    pub fn resolve(self, succeeded: bool) -> Result<Self, ValidationError> {
        match self {
            Self::Pending if succeeded => Ok(Self::Done),
            Self::Pending => Ok(Self::Failed),
            Self::Done | Self::Failed => Err(ValidationError::AlreadyResolved),
        }
    }
}

impl From<Option<bool>> for Completion {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Self::Pending,
            Some(true) => Self::Done,
            Some(false) => Self::Failed,
        }
    }
}

impl From<Completion> for Option<bool> {
    fn from(value: Completion) -> Self {
        match value {
            Completion::Pending => None,
            Completion::Done => Some(true),
            Completion::Failed => Some(false),
        }
    }
}

/// How an event should be presented relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Done,
    Failed,
    /// Pending and already over.
    Past,
    /// Pending and not yet over.
    Upcoming,
}

/// What the user may still do with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Actions {
    pub can_mark_outcome: bool,
    pub can_delete: bool,
}

impl EventStatus {
    /// Classifies an event on `date` ending at `end`.
    ///
    /// A pending event is past when its day is before today, or when it is
    /// today and `end` is at or before the current minute.
    #[must_use]
    pub fn classify(done: Completion, date: NaiveDate, end: TimeOfDay, now: NaiveDateTime) -> Self {
        match done {
            Completion::Done => Self::Done,
            Completion::Failed => Self::Failed,
            Completion::Pending => {
                let today = now.date();
                let is_past =
                    date < today || (date == today && end <= TimeOfDay::from(now.time()));
                if is_past { Self::Past } else { Self::Upcoming }
            }
        }
    }

    #[must_use]
    pub const fn actions(self) -> Actions {
        match self {
            Self::Past => Actions {
                can_mark_outcome: true,
                can_delete: true,
            },
            Self::Upcoming => Actions {
                can_mark_outcome: false,
                can_delete: true,
            },
            Self::Done | Self::Failed => Actions {
                can_mark_outcome: false,
                can_delete: false,
            },
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Failed => "failed",
            Self::Past => "past",
            Self::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
