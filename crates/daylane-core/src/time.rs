//! Wall-clock time of day at minute precision.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::types::ValidationError;

/// Number of minutes in the span a day timeline covers.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A time of day as minutes since midnight, in `[0, 1440)`.
///
/// Seconds and anything finer are dropped on construction, so two values
/// compare equal whenever they name the same minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// 00:00.
    pub const START_OF_DAY: Self = Self(0);

    /// 23:59, the latest representable minute.
    pub const END_OF_DAY: Self = Self(MINUTES_PER_DAY - 1);

    /// Creates a time from minutes since midnight.
    pub fn from_minutes(minutes: u32) -> Result<Self, ValidationError> {
        u16::try_from(minutes)
            .ok()
            .filter(|m| *m < MINUTES_PER_DAY)
            .map(Self)
            .ok_or(ValidationError::MinuteOutOfRange { value: minutes })
    }

    /// Creates a time from an hour and minute, if both are in range.
    #[must_use]
    pub const fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour as u16 * 60 + minute as u16))
        } else {
            None
        }
    }

    /// Parses `H:MM` or `HH:MM`, optionally followed by `:SS`.
    ///
    /// `field` names the value in the error message.
    pub fn parse_field(s: &str, field: &'static str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map(Self::from)
            .map_err(|_| ValidationError::InvalidTime {
                field,
                value: s.to_string(),
            })
    }

    /// Minutes since midnight.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    #[must_use]
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Adds `minutes`, saturating at 23:59 instead of wrapping into the next day.
    #[must_use]
    pub fn plus_minutes_clamped(self, minutes: u32) -> Self {
        let total = u32::from(self.0).saturating_add(minutes);
        Self::from_minutes(total).unwrap_or(Self::END_OF_DAY)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "hour * 60 + minute is below 1440"
        )]
        let minutes = (time.hour() * 60 + time.minute()) as u16;
        Self(minutes)
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_field(s, "time")
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
