//! Pixel geometry of the rendered day timeline.

use serde::{Deserialize, Serialize};

use crate::time::{MINUTES_PER_DAY, TimeOfDay};

/// Fixed lane and timeline dimensions used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneGeometry {
    /// Horizontal distance between lanes.
    pub lane_width_px: u32,
    /// Left margin before lane 0.
    pub gutter_px: u32,
    /// Height of the full 24-hour timeline.
    pub timeline_height_px: u32,
    /// How far above the current-time line the view is scrolled.
    pub scroll_lead_px: u32,
}

impl Default for LaneGeometry {
    fn default() -> Self {
        Self {
            lane_width_px: 260,
            gutter_px: 8,
            timeline_height_px: 2400,
            scroll_lead_px: 200,
        }
    }
}

impl LaneGeometry {
    /// Left edge of a lane.
    #[must_use]
    pub fn left_px(&self, column: usize) -> u64 {
        let column = u64::try_from(column).unwrap_or(u64::MAX);
        column
            .saturating_mul(u64::from(self.lane_width_px))
            .saturating_add(u64::from(self.gutter_px))
    }

    /// Scroll offset that puts `now` just below the top of the view.
    #[must_use]
    pub fn scroll_offset_px(&self, now: TimeOfDay) -> f64 {
        let line = f64::from(now.minutes()) / f64::from(MINUTES_PER_DAY)
            * f64::from(self.timeline_height_px);
        (line - f64::from(self.scroll_lead_px)).max(0.0)
    }
}
