use std::{fmt, str::FromStr};

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::GolfError;

/// Number of minutes in a day. Valid minute offsets are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A bookable wall-clock time of day.
///
/// Stored as minutes since midnight and always rendered as a zero-padded,
/// 24-hour `HH:MM` string, both by `Display` and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    minutes: u16,
}

impl TimeSlot {
    pub const fn from_minutes(minutes: u16) -> Self {
        Self { minutes }
    }

    pub const fn minutes_of_day(self) -> u16 {
        self.minutes
    }

    pub const fn hour(self) -> u16 {
        self.minutes / 60
    }

    pub const fn minute(self) -> u16 {
        self.minutes % 60
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = GolfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|e| GolfError::Validation(format!("'{}' is not a HH:MM time: {}", s, e)))?;
        // hour() < 24 and minute() < 60, so this fits in u16
        Ok(Self::from_minutes((time.hour() * 60 + time.minute()) as u16))
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
