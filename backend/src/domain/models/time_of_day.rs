//! Time-of-day value that survives inconsistent storage round-trips.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A time of day as stored on a record. Values written by this application
/// are proper clock times, but a record that round-tripped through storage
/// as an already-formatted string (e.g. "09:00 AM") is kept verbatim so
/// that projecting it again does not reformat it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeOfDay {
    Clock(NaiveTime),
    Text(String),
}

impl TimeOfDay {
    /// 12-hour clock rendering used in event titles ("09:00 AM").
    /// Text values pass through unchanged.
    pub fn twelve_hour(&self) -> String {
        match self {
            TimeOfDay::Clock(time) => time.format("%I:%M %p").to_string(),
            TimeOfDay::Text(text) => text.clone(),
        }
    }

    /// 24-hour clock rendering used in event metadata ("09:00").
    /// Text values pass through unchanged.
    pub fn twenty_four_hour(&self) -> String {
        match self {
            TimeOfDay::Clock(time) => time.format("%H:%M").to_string(),
            TimeOfDay::Text(text) => text.clone(),
        }
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        TimeOfDay::Clock(time)
    }
}
