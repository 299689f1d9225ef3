//! Shared utilities for CLI commands.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use daylane_core::{Clock, Schedule, TimeOfDay};

/// Resolves `--now`, falling back to the clock.
///
/// Accepts a full local timestamp (`2025-06-01T14:30` or `2025-06-01 14:30`)
/// or a bare `HH:MM`, which is taken as that time on the clock's current day.
pub fn resolve_now(arg: Option<&str>, clock: &dyn Clock) -> Result<NaiveDateTime> {
    let Some(s) = arg else {
        return Ok(clock.now());
    };
    let s = s.trim();

    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }

    if let Ok(time) = s.parse::<TimeOfDay>() {
        let today = clock.now().date();
        return today
            .and_hms_opt(u32::from(time.hour()), u32::from(time.minute()), 0)
            .context("invalid --now time");
    }

    bail!("Invalid --now value: {s}. Use YYYY-MM-DDTHH:MM or HH:MM")
}

/// Resolves a `--date` argument: `today` or `YYYY-MM-DD`.
pub fn resolve_date(arg: &str, now: NaiveDateTime) -> Result<NaiveDate> {
    let arg = arg.trim();
    if arg.eq_ignore_ascii_case("today") {
        return Ok(now.date());
    }
    NaiveDate::parse_from_str(arg, "%Y-%m-%d")
        .with_context(|| format!("invalid date {arg:?}, expected YYYY-MM-DD or 'today'"))
}

/// Reads a day-keyed schedule file.
pub fn load_schedule(path: &Path) -> Result<Schedule> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Schedule::from_json(&json).with_context(|| format!("failed to parse {}", path.display()))
}
