//! Domain record types for the two tracked record kinds.

pub mod medication;
pub mod seizure;
pub mod time_of_day;

pub use medication::{Frequency, Medication, DEFAULT_MEDICATION_COLOR};
pub use seizure::{SeizureEvent, SeizureType, Severity, DEFAULT_SEIZURE_COLOR};
pub use time_of_day::TimeOfDay;
