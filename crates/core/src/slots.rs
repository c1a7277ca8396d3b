use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{schedule::Schedule, time_slot::TimeSlot};

/// The tee times offered on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeeSheet {
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
}

/// Produces the ordered tee times for `date`.
///
/// The date is carried through for display only; every day gets the same
/// slots. A slot is emitted at every interval from the schedule start up to
/// and including the end time, so the default schedule offers 08:00 through
/// 16:00 (25 slots).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use readygolf_core::{models::schedule::Schedule, slots::generate_slots};
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
/// let sheet = generate_slots(date, &Schedule::default());
/// assert_eq!(sheet.slots.len(), 25);
/// assert_eq!(sheet.slots[0].to_string(), "08:00");
/// ```
pub fn generate_slots(date: NaiveDate, schedule: &Schedule) -> TeeSheet {
    TeeSheet {
        date,
        slots: schedule.slots().collect(),
    }
}
