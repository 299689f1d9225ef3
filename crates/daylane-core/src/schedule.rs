//! Day-keyed event records, as the calendar page receives them.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::{Event, RawEvent};
use crate::types::{EventId, RawEventId, ValidationError};

/// Errors raised while reading a schedule.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid schedule JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("event #{index} on {date}: {source}")]
    InvalidEvent {
        date: NaiveDate,
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("event #{index} on {date} reuses ID {id} from event #{first}")]
    DuplicateId {
        date: NaiveDate,
        id: EventId,
        first: usize,
        index: usize,
    },
}

/// All event records, grouped by day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    days: BTreeMap<NaiveDate, Vec<RawEvent>>,
}

impl Schedule {
    /// Parses a JSON object keyed by `YYYY-MM-DD`.
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Days that have at least one record, in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(date, _)| *date)
    }

    /// Raw records for a day; empty when the day is unknown.
    pub fn records_for(&self, date: NaiveDate) -> &[RawEvent] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Normalized events for a day.
    ///
    /// Fails on the first malformed record rather than dropping it, and on
    /// an ID already used earlier that day. `1` and `"1"` are the same ID.
    pub fn events_for(&self, date: NaiveDate) -> Result<Vec<Event>, ScheduleError> {
        let records = self.records_for(date);
        let mut seen: HashMap<EventId, usize> = HashMap::with_capacity(records.len());
        let mut events = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let event = record
                .normalize()
                .map_err(|source| ScheduleError::InvalidEvent {
                    date,
                    index,
                    source,
                })?;
            if let Some(&first) = seen.get(&event.id) {
                return Err(ScheduleError::DuplicateId {
                    date,
                    id: event.id,
                    first,
                    index,
                });
            }
            seen.insert(event.id.clone(), index);
            events.push(event);
        }
        Ok(events)
    }

    /// Adds a record to a day.
    pub fn push(&mut self, date: NaiveDate, record: RawEvent) {
        self.days.entry(date).or_default().push(record);
    }

    /// The ID a new event on `date` should get: one past the largest numeric
    /// ID already used that day, or 1 for an empty day.
    pub fn next_id(&self, date: NaiveDate) -> i64 {
        self.records_for(date)
            .iter()
            .filter_map(|record| match &record.id {
                Some(RawEventId::Number(n)) => Some(*n),
                Some(RawEventId::Text(s)) => s.parse().ok(),
                None => None,
            })
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }
}
