//! Schema-checked validation of raw form input.
//!
//! Raw input arrives as optional strings straight off the wire. Each
//! validator coerces and checks every field, collecting all failures so the
//! caller can display the complete list at once, and produces a fully typed
//! draft only when nothing failed. No partial success, no side effects.

use chrono::{NaiveDate, NaiveTime};
use shared::{FieldError, MedicationInput, SeizureInput};

use super::models::{
    Frequency, SeizureType, Severity, TimeOfDay, DEFAULT_MEDICATION_COLOR, DEFAULT_SEIZURE_COLOR,
};

const REQUIRED: &str = "This field is required.";
const INVALID_DATE: &str = "Not a valid date value.";
const INVALID_TIME: &str = "Not a valid time value.";
const INVALID_INTEGER: &str = "Not a valid integer value.";
const INVALID_CHOICE: &str = "Not a valid choice.";
const NEGATIVE_DURATION: &str = "Number must be at least 0.";
const END_BEFORE_START: &str = "End date must be after start date";

/// A medication as accepted by validation: typed fields, no identity or
/// timestamps yet (the service stamps those).
#[derive(Debug, Clone, PartialEq)]
pub struct MedicationDraft {
    pub name: String,
    pub dosage: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub time_to_take: TimeOfDay,
    pub frequency: Frequency,
    pub instructions: Option<String>,
    pub color: String,
}

/// A seizure event as accepted by validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SeizureDraft {
    pub seizure_date: NaiveDate,
    pub seizure_time: TimeOfDay,
    pub duration: Option<u32>,
    pub seizure_type: SeizureType,
    pub severity: Severity,
    pub triggers: Option<String>,
    pub notes: Option<String>,
    pub color: String,
}

/// Validate a raw medication submission. Returns the complete error list on
/// failure; the list covers every failing field, not just the first.
pub fn validate_medication(input: &MedicationInput) -> Result<MedicationDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = required_text(&mut errors, "Medication Name", &input.name);
    let dosage = required_text(&mut errors, "Dosage", &input.dosage);
    let start_date = required_date(&mut errors, "Start Date", &input.start_date);
    let end_date = optional_date(&mut errors, "End Date", &input.end_date);

    // Blank time falls back to the form default of 09:00
    let time_to_take = match non_blank(&input.time_to_take) {
        None => Some(TimeOfDay::from(NaiveTime::from_hms_opt(9, 0, 0).unwrap())),
        Some(text) => match parse_time(text) {
            Some(time) => Some(TimeOfDay::from(time)),
            None => {
                errors.push(FieldError::new("Time to Take", INVALID_TIME));
                None
            }
        },
    };

    let frequency = match non_blank(&input.frequency) {
        None => {
            errors.push(FieldError::new("Frequency", REQUIRED));
            None
        }
        Some(text) => match Frequency::parse(text) {
            Some(frequency) => Some(frequency),
            None => {
                errors.push(FieldError::new("Frequency", INVALID_CHOICE));
                None
            }
        },
    };

    let instructions = non_blank(&input.instructions).map(str::to_string);
    let color = non_blank(&input.color)
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_MEDICATION_COLOR.to_string());

    // Cross-field rule: a present end date must strictly postdate the start
    // date. Reported as a field error like any other failure.
    if let (Some(start), Some(Some(end))) = (start_date, end_date) {
        if end <= start {
            errors.push(FieldError::new("End Date", END_BEFORE_START));
        }
    }

    match (name, dosage, start_date, end_date, time_to_take, frequency) {
        (
            Some(name),
            Some(dosage),
            Some(start_date),
            Some(end_date),
            Some(time_to_take),
            Some(frequency),
        ) if errors.is_empty() => Ok(MedicationDraft {
            name,
            dosage,
            start_date,
            end_date,
            time_to_take,
            frequency,
            instructions,
            color,
        }),
        _ => Err(errors),
    }
}

/// Validate a raw seizure submission.
pub fn validate_seizure(input: &SeizureInput) -> Result<SeizureDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    let seizure_date = required_date(&mut errors, "Seizure Date", &input.seizure_date);

    let seizure_time = match non_blank(&input.seizure_time) {
        None => {
            errors.push(FieldError::new("Seizure Time", REQUIRED));
            None
        }
        Some(text) => match parse_time(text) {
            Some(time) => Some(TimeOfDay::from(time)),
            None => {
                errors.push(FieldError::new("Seizure Time", INVALID_TIME));
                None
            }
        },
    };

    let duration = match non_blank(&input.duration) {
        None => Some(None),
        Some(text) => match text.parse::<i64>() {
            Err(_) => {
                errors.push(FieldError::new("Duration (minutes)", INVALID_INTEGER));
                None
            }
            Ok(minutes) if minutes < 0 => {
                errors.push(FieldError::new("Duration (minutes)", NEGATIVE_DURATION));
                None
            }
            Ok(minutes) => Some(Some(minutes as u32)),
        },
    };

    let seizure_type = match non_blank(&input.seizure_type) {
        None => {
            errors.push(FieldError::new("Seizure Type", REQUIRED));
            None
        }
        Some(text) => match SeizureType::parse(text) {
            Some(seizure_type) => Some(seizure_type),
            None => {
                errors.push(FieldError::new("Seizure Type", INVALID_CHOICE));
                None
            }
        },
    };

    let severity = match non_blank(&input.severity) {
        None => {
            errors.push(FieldError::new("Severity", REQUIRED));
            None
        }
        Some(text) => match Severity::parse(text) {
            Some(severity) => Some(severity),
            None => {
                errors.push(FieldError::new("Severity", INVALID_CHOICE));
                None
            }
        },
    };

    let triggers = non_blank(&input.triggers).map(str::to_string);
    let notes = non_blank(&input.notes).map(str::to_string);
    let color = non_blank(&input.color)
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_SEIZURE_COLOR.to_string());

    match (seizure_date, seizure_time, duration, seizure_type, severity) {
        (
            Some(seizure_date),
            Some(seizure_time),
            Some(duration),
            Some(seizure_type),
            Some(severity),
        ) if errors.is_empty() => Ok(SeizureDraft {
            seizure_date,
            seizure_time,
            duration,
            seizure_type,
            severity,
            triggers,
            notes,
            color,
        }),
        _ => Err(errors),
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|text| !text.is_empty())
}

fn required_text(
    errors: &mut Vec<FieldError>,
    label: &str,
    value: &Option<String>,
) -> Option<String> {
    match non_blank(value) {
        Some(text) => Some(text.to_string()),
        None => {
            errors.push(FieldError::new(label, REQUIRED));
            None
        }
    }
}

fn required_date(
    errors: &mut Vec<FieldError>,
    label: &str,
    value: &Option<String>,
) -> Option<NaiveDate> {
    match non_blank(value) {
        None => {
            errors.push(FieldError::new(label, REQUIRED));
            None
        }
        Some(text) => match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError::new(label, INVALID_DATE));
                None
            }
        },
    }
}

/// Outer `None` means the field failed to parse (error recorded); inner
/// `None` means the field was simply absent.
fn optional_date(
    errors: &mut Vec<FieldError>,
    label: &str,
    value: &Option<String>,
) -> Option<Option<NaiveDate>> {
    match non_blank(value) {
        None => Some(None),
        Some(text) => match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            Ok(date) => Some(Some(date)),
            Err(_) => {
                errors.push(FieldError::new(label, INVALID_DATE));
                None
            }
        },
    }
}

/// Accepts "HH:MM:SS" (storage round-trips) and "HH:MM" (browser time
/// inputs).
fn parse_time(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .ok()
}
