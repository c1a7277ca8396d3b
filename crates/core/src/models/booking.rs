use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{GolfError, GolfResult},
    models::{identity::Identity, time_slot::TimeSlot},
};

/// Wire format of a booking date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date submitted from the booking page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
    pub date: Option<String>,
}

impl BookingRequest {
    /// Parses the submitted `YYYY-MM-DD` date.
    pub fn parse_date(&self) -> GolfResult<NaiveDate> {
        let raw = self
            .date
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or_else(|| GolfError::InvalidDate("Please choose a date.".to_string()))?;

        NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
            GolfError::InvalidDate(format!("'{}' is not a valid date (expected YYYY-MM-DD)", raw))
        })
    }
}

/// View data for the booking page.
///
/// `selected_date` and `slots` are both `None` until a date has been
/// submitted. `error` is only set when a submission was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingView {
    pub username: String,
    pub selected_date: Option<String>,
    pub slots: Option<Vec<TimeSlot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BookingView {
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

pub fn render_booking_view(
    identity: &Identity,
    selected_date: Option<NaiveDate>,
    slots: Option<Vec<TimeSlot>>,
) -> BookingView {
    BookingView {
        username: identity.username.clone(),
        selected_date: selected_date.map(|date| date.format(DATE_FORMAT).to_string()),
        slots,
        error: None,
    }
}
