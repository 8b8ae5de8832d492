//! Domain model for a logged seizure event.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::time_of_day::TimeOfDay;

/// Calendar color applied to seizures unless the user picks another.
pub const DEFAULT_SEIZURE_COLOR: &str = "#dc3545";

/// A validated, stored seizure record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeizureEvent {
    /// Generated at creation, immutable afterwards
    pub id: String,
    pub seizure_date: NaiveDate,
    pub seizure_time: TimeOfDay,
    /// Duration in whole minutes
    pub duration: Option<u32>,
    pub seizure_type: SeizureType,
    pub severity: Severity,
    pub triggers: Option<String>,
    pub notes: Option<String>,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Clinical seizure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeizureType {
    GeneralizedTonicClonic,
    FocalAware,
    FocalImpairedAwareness,
    Absence,
    Myoclonic,
    Atonic,
    Unknown,
}

impl SeizureType {
    /// The wire value as it appears in form submissions and event metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeizureType::GeneralizedTonicClonic => "generalized_tonic_clonic",
            SeizureType::FocalAware => "focal_aware",
            SeizureType::FocalImpairedAwareness => "focal_impaired_awareness",
            SeizureType::Absence => "absence",
            SeizureType::Myoclonic => "myoclonic",
            SeizureType::Atonic => "atonic",
            SeizureType::Unknown => "unknown",
        }
    }

    /// Title-cased rendering for event titles ("Generalized Tonic Clonic").
    pub fn humanized(&self) -> &'static str {
        match self {
            SeizureType::GeneralizedTonicClonic => "Generalized Tonic Clonic",
            SeizureType::FocalAware => "Focal Aware",
            SeizureType::FocalImpairedAwareness => "Focal Impaired Awareness",
            SeizureType::Absence => "Absence",
            SeizureType::Myoclonic => "Myoclonic",
            SeizureType::Atonic => "Atonic",
            SeizureType::Unknown => "Unknown",
        }
    }

    /// Parse a wire value; `None` for anything outside the allowed set.
    pub fn parse(value: &str) -> Option<SeizureType> {
        match value {
            "generalized_tonic_clonic" => Some(SeizureType::GeneralizedTonicClonic),
            "focal_aware" => Some(SeizureType::FocalAware),
            "focal_impaired_awareness" => Some(SeizureType::FocalImpairedAwareness),
            "absence" => Some(SeizureType::Absence),
            "myoclonic" => Some(SeizureType::Myoclonic),
            "atonic" => Some(SeizureType::Atonic),
            "unknown" => Some(SeizureType::Unknown),
            _ => None,
        }
    }
}

/// How severe a seizure was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }

    pub fn parse(value: &str) -> Option<Severity> {
        match value {
            "mild" => Some(Severity::Mild),
            "moderate" => Some(Severity::Moderate),
            "severe" => Some(Severity::Severe),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seizure_type_wire_values_round_trip() {
        for value in [
            "generalized_tonic_clonic",
            "focal_aware",
            "focal_impaired_awareness",
            "absence",
            "myoclonic",
            "atonic",
            "unknown",
        ] {
            let seizure_type = SeizureType::parse(value).expect("known value");
            assert_eq!(seizure_type.as_str(), value);
            let json = serde_json::to_string(&seizure_type).unwrap();
            assert_eq!(json, format!("\"{}\"", value));
        }
    }

    #[test]
    fn test_humanized_names() {
        assert_eq!(
            SeizureType::GeneralizedTonicClonic.humanized(),
            "Generalized Tonic Clonic"
        );
        assert_eq!(SeizureType::Absence.humanized(), "Absence");
        assert_eq!(SeizureType::Unknown.humanized(), "Unknown");
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse("mild"), Some(Severity::Mild));
        assert_eq!(Severity::parse("moderate"), Some(Severity::Moderate));
        assert_eq!(Severity::parse("severe"), Some(Severity::Severe));
        assert!(Severity::parse("critical").is_none());
    }
}
