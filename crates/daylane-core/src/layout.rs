//! Timeline layout for one day's events.
//!
//! Events are drawn as boxes in a fixed-height day column. Overlapping events
//! are pushed into side-by-side lanes so no two boxes collide.
//!
//! # Algorithm
//!
//! 1. Stable-sort events by start time.
//! 2. Walk the sorted events, putting each into the first lane that holds no
//!    event it overlaps, or into a new lane when every lane conflicts.
//! 3. Position each box as a percentage of the 24-hour span, with a minimum
//!    height so very short events stay visible.
//!
//! Overlap uses half-open intervals: an event ending at 10:00 and one starting
//! at 10:00 can share a lane. Greedy assignment in start order is the classic
//! interval-graph colouring, so the lane count equals the largest number of
//! events running at any one instant.

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::time::MINUTES_PER_DAY;
use crate::types::EventId;

/// Minimum rendered height, in percent of the day.
pub const DEFAULT_HEIGHT_FLOOR_PERCENT: f64 = 2.0;

/// Tunables for [`layout_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Heights below this are raised to it. Default: 2.0.
    pub height_floor_percent: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            height_floor_percent: DEFAULT_HEIGHT_FLOOR_PERCENT,
        }
    }
}

/// Where one event is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutAssignment {
    pub id: EventId,
    /// Position of the event in the input slice.
    pub index: usize,
    /// 0-based lane index.
    pub column: usize,
    /// Distance from the top of the day, in percent.
    pub top: f64,
    /// Box height, in percent; never below the configured floor.
    pub height: f64,
}

/// Layout of a whole day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    /// One entry per input event, in render order (by start time).
    pub assignments: Vec<LayoutAssignment>,
    /// Number of lanes in use.
    pub column_count: usize,
}

impl Layout {
    /// Looks up the assignment for an event ID.
    ///
    /// IDs are not checked for uniqueness here; with duplicates this returns
    /// the earliest-starting one. Use [`LayoutAssignment::index`] to pair
    /// assignments with their input events.
    pub fn get(&self, id: &EventId) -> Option<&LayoutAssignment> {
        self.assignments.iter().find(|a| &a.id == id)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Whether two events share at least one instant.
///
/// Intervals are half-open, so touching endpoints do not overlap and an event
/// with `end <= start` overlaps nothing.
#[must_use]
pub fn overlaps(a: &Event, b: &Event) -> bool {
    a.start < b.end && b.start < a.end
}

/// Lays out events with the default [`LayoutConfig`].
pub fn layout(events: &[Event]) -> Layout {
    layout_with(events, &LayoutConfig::default())
}

/// Lays out events.
///
/// The result has one assignment per input event, ordered by start time with
/// ties kept in input order.
pub fn layout_with(events: &[Event], config: &LayoutConfig) -> Layout {
    let mut sorted: Vec<(usize, &Event)> = events.iter().enumerate().collect();
    sorted.sort_by_key(|(_, event)| event.start);

    let (columns, column_count) = assign_columns(sorted.iter().map(|(_, event)| *event));

    let assignments = sorted
        .iter()
        .zip(columns)
        .map(|(&(index, event), column)| LayoutAssignment {
            id: event.id.clone(),
            index,
            column,
            top: percent_of_day(i32::from(event.start.minutes())),
            height: percent_of_day(event.duration_minutes()).max(config.height_floor_percent),
        })
        .collect();

    tracing::debug!(events = events.len(), column_count, "computed timeline layout");

    Layout {
        assignments,
        column_count,
    }
}

/// Greedy lane assignment over start-sorted events.
///
/// Returns the lane index of each event (in iteration order) and the lane count.
fn assign_columns<'a>(sorted: impl ExactSizeIterator<Item = &'a Event>) -> (Vec<usize>, usize) {
    let mut lanes: Vec<Vec<&Event>> = Vec::new();
    let mut assigned = Vec::with_capacity(sorted.len());

    for event in sorted {
        let free = lanes
            .iter()
            .position(|lane| lane.iter().all(|placed| !overlaps(event, placed)));

        let column = if let Some(index) = free {
            lanes[index].push(event);
            index
        } else {
            lanes.push(vec![event]);
            lanes.len() - 1
        };

        tracing::trace!(id = %event.id, column, "placed event");
        assigned.push(column);
    }

    (assigned, lanes.len())
}

fn percent_of_day(minutes: i32) -> f64 {
    f64::from(minutes) / f64::from(MINUTES_PER_DAY) * 100.0
}
