//! Rules for events submitted from the add/edit form.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::time::TimeOfDay;

/// Default length of a new event when only the start is chosen.
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Why a draft was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("end time {end} must be after start time {start}")]
    EndNotAfterStart { start: TimeOfDay, end: TimeOfDay },

    #[error("cannot add an event on a past date ({date})")]
    PastDate { date: NaiveDate },

    #[error("cannot add an event that already ended today (ends {end}, now {now})")]
    PastTime { end: TimeOfDay, now: TimeOfDay },
}

/// A user-submitted event before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDraft {
    pub date: NaiveDate,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl EventDraft {
    /// A draft whose end is `start + duration_minutes`, capped at 23:59.
    #[must_use]
    pub fn with_duration(date: NaiveDate, start: TimeOfDay, duration_minutes: u32) -> Self {
        Self {
            date,
            start,
            end: start.plus_minutes_clamped(duration_minutes),
        }
    }

    /// Checks the draft against the current time.
    ///
    /// Unlike stored records, drafts must end strictly after they start and
    /// must not lie entirely in the past.
    pub fn validate(&self, now: NaiveDateTime) -> Result<(), DraftError> {
        if self.start >= self.end {
            return Err(DraftError::EndNotAfterStart {
                start: self.start,
                end: self.end,
            });
        }

        let today = now.date();
        if self.date < today {
            return Err(DraftError::PastDate { date: self.date });
        }

        let now_time = TimeOfDay::from(now.time());
        if self.date == today && self.end < now_time {
            return Err(DraftError::PastTime {
                end: self.end,
                now: now_time,
            });
        }

        Ok(())
    }
}
