use serde::{Deserialize, Serialize};
use std::fmt;

/// A single calendar event in the shape the front-end calendar widget
/// consumes. Medications render as day-spanning entries, seizures as
/// point-in-time entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Namespaced event id ("med_<uuid>" or "seizure_<uuid>")
    pub id: String,
    pub title: String,
    /// ISO 8601 date (medications) or date-time (seizures)
    pub start: String,
    /// Exclusive end date; only present for medications with an end date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub background_color: String,
    pub border_color: String,
    pub all_day: bool,
    pub class_names: Vec<String>,
    pub extended_props: EventProps,
}

/// Per-kind event metadata, tagged with `"type"` on the wire so the
/// calendar widget can style and inspect events without guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventProps {
    Medication {
        name: String,
        dosage: String,
        frequency: String,
        instructions: String,
        time_to_take: String,
    },
    Seizure {
        seizure_type: String,
        severity: String,
        duration: Option<u32>,
        triggers: String,
        notes: String,
    },
}

/// Raw medication form fields as submitted by the browser. Everything is
/// optional text here; the validation layer decides what is missing or
/// malformed and reports all problems at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicationInput {
    pub name: Option<String>,
    pub dosage: Option<String>,
    /// ISO 8601 date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// ISO 8601 date (YYYY-MM-DD)
    pub end_date: Option<String>,
    /// Time of day (HH:MM); defaults to 09:00 when blank
    pub time_to_take: Option<String>,
    pub frequency: Option<String>,
    pub instructions: Option<String>,
    pub color: Option<String>,
}

/// Raw seizure form fields as submitted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeizureInput {
    /// ISO 8601 date (YYYY-MM-DD)
    pub seizure_date: Option<String>,
    /// Time of day (HH:MM)
    pub seizure_time: Option<String>,
    /// Duration in whole minutes
    pub duration: Option<String>,
    pub seizure_type: Option<String>,
    pub severity: Option<String>,
    pub triggers: Option<String>,
    pub notes: Option<String>,
    pub color: Option<String>,
}

/// A single validation failure attached to one input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Human-readable field label (e.g. "Medication Name")
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Successful response from the edit endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub message: String,
}

/// Error response carrying a single message (not-found, storage failure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Error response carrying the full list of field errors, formatted as
/// "Label: message" strings for direct display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub success: bool,
    pub errors: Vec<String>,
}
