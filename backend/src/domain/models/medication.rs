//! Domain model for a medication schedule.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::time_of_day::TimeOfDay;

/// Calendar color applied to medications unless the user picks another.
pub const DEFAULT_MEDICATION_COLOR: &str = "#3788d8";

/// A validated, stored medication record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    /// Generated at creation, immutable afterwards
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub start_date: NaiveDate,
    /// When present, strictly after `start_date`
    pub end_date: Option<NaiveDate>,
    pub time_to_take: TimeOfDay,
    pub frequency: Frequency,
    pub instructions: Option<String>,
    pub color: String,
    /// Set once at creation, immutable afterwards
    pub created_at: DateTime<Utc>,
    /// Bumped on every edit; never earlier than `created_at`
    pub updated_at: DateTime<Utc>,
}

/// How often a medication is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    TwiceDaily,
    ThreeTimesDaily,
    Weekly,
    Monthly,
    AsNeeded,
}

impl Frequency {
    /// The wire value as it appears in form submissions and event metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::TwiceDaily => "twice_daily",
            Frequency::ThreeTimesDaily => "three_times_daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::AsNeeded => "as_needed",
        }
    }

    /// Parse a wire value; `None` for anything outside the allowed set.
    pub fn parse(value: &str) -> Option<Frequency> {
        match value {
            "daily" => Some(Frequency::Daily),
            "twice_daily" => Some(Frequency::TwiceDaily),
            "three_times_daily" => Some(Frequency::ThreeTimesDaily),
            "weekly" => Some(Frequency::Weekly),
            "monthly" => Some(Frequency::Monthly),
            "as_needed" => Some(Frequency::AsNeeded),
            _ => None,
        }
    }
}
