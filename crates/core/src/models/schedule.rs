use crate::{
    errors::{GolfError, GolfResult},
    models::time_slot::{MINUTES_PER_DAY, TimeSlot},
};

/// Default first tee time, 08:00.
pub const DEFAULT_START_MINUTES: u16 = 8 * 60;
/// Default last tee time, 16:00.
pub const DEFAULT_END_MINUTES: u16 = 16 * 60;
/// Default spacing between tee times.
pub const DEFAULT_INTERVAL_MINUTES: u16 = 20;

/// The fixed daily schedule tee times are generated from.
///
/// Fields are private so every `Schedule` satisfies
/// `start <= end < 24:00` and `interval > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    start_minutes: u16,
    end_minutes: u16,
    interval_minutes: u16,
}

impl Schedule {
    /// Builds a schedule from externally supplied values.
    ///
    /// # Errors
    ///
    /// Returns [`GolfError::InvalidSchedule`] when `start > end`, when
    /// `interval` is zero, or when `end` falls outside the day.
    pub fn new(start_minutes: u16, end_minutes: u16, interval_minutes: u16) -> GolfResult<Self> {
        if interval_minutes == 0 {
            return Err(GolfError::InvalidSchedule(
                "interval must be greater than zero".to_string(),
            ));
        }
        if start_minutes > end_minutes {
            return Err(GolfError::InvalidSchedule(format!(
                "start {} is after end {}",
                TimeSlot::from_minutes(start_minutes),
                TimeSlot::from_minutes(end_minutes)
            )));
        }
        if end_minutes >= MINUTES_PER_DAY {
            return Err(GolfError::InvalidSchedule(format!(
                "end offset {} is past the end of the day",
                end_minutes
            )));
        }

        Ok(Self {
            start_minutes,
            end_minutes,
            interval_minutes,
        })
    }

    pub fn start_minutes(&self) -> u16 {
        self.start_minutes
    }

    pub fn end_minutes(&self) -> u16 {
        self.end_minutes
    }

    pub fn interval_minutes(&self) -> u16 {
        self.interval_minutes
    }

    /// Every tee time from start to end, both inclusive.
    ///
    /// The iterator owns a copy of the schedule, so calling this again always
    /// starts over from the first slot.
    pub fn slots(&self) -> impl Iterator<Item = TimeSlot> {
        (self.start_minutes..=self.end_minutes)
            .step_by(usize::from(self.interval_minutes))
            .map(TimeSlot::from_minutes)
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            start_minutes: DEFAULT_START_MINUTES,
            end_minutes: DEFAULT_END_MINUTES,
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
        }
    }
}
