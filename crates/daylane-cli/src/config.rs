//! Configuration loading and management.

use std::path::{Path, PathBuf};

use daylane_core::draft::DEFAULT_DURATION_MINUTES;
use daylane_core::layout::DEFAULT_HEIGHT_FLOOR_PERCENT;
use daylane_core::{LaneGeometry, LayoutConfig};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Minimum event height, in percent of the day.
    pub height_floor_percent: f64,

    /// Horizontal distance between lanes, in pixels.
    pub lane_width_px: u32,

    /// Left margin before the first lane, in pixels.
    pub lane_gutter_px: u32,

    /// Height of the whole 24-hour timeline, in pixels.
    pub timeline_height_px: u32,

    /// Space kept above the current-time line when scrolling to it.
    pub scroll_lead_px: u32,

    /// Length given to a new event when only its start is supplied.
    pub default_duration_minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        let geometry = LaneGeometry::default();
        Self {
            height_floor_percent: DEFAULT_HEIGHT_FLOOR_PERCENT,
            lane_width_px: geometry.lane_width_px,
            lane_gutter_px: geometry.gutter_px,
            timeline_height_px: geometry.timeline_height_px,
            scroll_lead_px: geometry.scroll_lead_px,
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
        }
    }
}

impl Config {
    /// Loads configuration from default locations, then `config_path` if given.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (DAYLANE_*)
        figment = figment.merge(Env::prefixed("DAYLANE_"));

        figment.extract()
    }

    pub const fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            height_floor_percent: self.height_floor_percent,
        }
    }

    pub const fn geometry(&self) -> LaneGeometry {
        LaneGeometry {
            lane_width_px: self.lane_width_px,
            gutter_px: self.lane_gutter_px,
            timeline_height_px: self.timeline_height_px,
            scroll_lead_px: self.scroll_lead_px,
        }
    }
}

/// Returns the platform-specific config directory for daylane.
///
/// On Linux: `~/.config/daylane`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("daylane"))
}
