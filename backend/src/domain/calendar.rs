//! Calendar projection logic.
//!
//! Turns stored records into the event shape the calendar widget consumes.
//! Everything here is a pure transform: no I/O, no mutation, and projecting
//! the same record twice yields byte-identical output.

use shared::{CalendarEvent, EventProps};

use crate::domain::models::{Medication, SeizureEvent, TimeOfDay};

/// Calendar service handling record-to-event projection.
#[derive(Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Project a medication into a day-spanning calendar event.
    ///
    /// The event id is namespaced with "med_" so medication and seizure
    /// events can never collide in the combined feed. The end date is
    /// bumped by one day because the calendar widget treats `end` as
    /// exclusive.
    pub fn medication_event(&self, medication: &Medication) -> CalendarEvent {
        let title = format!(
            "💊 {} - {} at {}",
            medication.name,
            medication.dosage,
            medication.time_to_take.twelve_hour()
        );

        let end = medication
            .end_date
            .map(|date| (date + chrono::Duration::days(1)).format("%Y-%m-%d").to_string());

        CalendarEvent {
            id: format!("med_{}", medication.id),
            title,
            start: medication.start_date.format("%Y-%m-%d").to_string(),
            end,
            background_color: medication.color.clone(),
            border_color: medication.color.clone(),
            all_day: false,
            class_names: vec!["medication-event".to_string()],
            extended_props: EventProps::Medication {
                name: medication.name.clone(),
                dosage: medication.dosage.clone(),
                frequency: medication.frequency.as_str().to_string(),
                instructions: medication.instructions.clone().unwrap_or_default(),
                time_to_take: medication.time_to_take.twenty_four_hour(),
            },
        }
    }

    /// Project a seizure record into a point-in-time calendar event.
    pub fn seizure_event(&self, seizure: &SeizureEvent) -> CalendarEvent {
        let mut title = format!("⚡ Seizure - {}", seizure.seizure_type.humanized());
        if let Some(duration) = seizure.duration {
            title.push_str(&format!(" ({}min)", duration));
        }

        // A time that was stored as already-formatted text is appended
        // verbatim rather than re-parsed.
        let start = match &seizure.seizure_time {
            TimeOfDay::Clock(time) => seizure
                .seizure_date
                .and_time(*time)
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string(),
            TimeOfDay::Text(text) => {
                format!("{}T{}", seizure.seizure_date.format("%Y-%m-%d"), text)
            }
        };

        CalendarEvent {
            id: format!("seizure_{}", seizure.id),
            title,
            start,
            end: None,
            background_color: seizure.color.clone(),
            border_color: seizure.color.clone(),
            all_day: false,
            class_names: vec!["seizure-event".to_string()],
            extended_props: EventProps::Seizure {
                seizure_type: seizure.seizure_type.as_str().to_string(),
                severity: seizure.severity.as_str().to_string(),
                duration: seizure.duration,
                triggers: seizure.triggers.clone().unwrap_or_default(),
                notes: seizure.notes.clone().unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Frequency, SeizureType, Severity};
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn sample_medication() -> Medication {
        let now = Utc::now();
        Medication {
            id: "0f8fad5b-d9cb-469f-a165-70867728950e".to_string(),
            name: "Lamotrigine".to_string(),
            dosage: "100mg".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            time_to_take: TimeOfDay::from(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
            frequency: Frequency::Daily,
            instructions: None,
            color: "#3788d8".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_seizure() -> SeizureEvent {
        let now = Utc::now();
        SeizureEvent {
            id: "7c9e6679-7425-40de-944b-e07fc1f90ae7".to_string(),
            seizure_date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            seizure_time: TimeOfDay::from(NaiveTime::from_hms_opt(14, 30, 0).unwrap()),
            duration: None,
            seizure_type: SeizureType::Absence,
            severity: Severity::Mild,
            triggers: None,
            notes: None,
            color: "#dc3545".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_medication_event_shape() {
        let service = CalendarService::new();
        let event = service.medication_event(&sample_medication());

        assert_eq!(event.id, "med_0f8fad5b-d9cb-469f-a165-70867728950e");
        assert!(event.title.contains("Lamotrigine - 100mg"));
        assert!(event.title.contains("at 09:00 AM"));
        assert_eq!(event.start, "2024-01-01");
        // Exclusive end: one day past the stored end date
        assert_eq!(event.end.as_deref(), Some("2024-01-11"));
        assert!(!event.all_day);
        assert_eq!(event.background_color, "#3788d8");
        assert_eq!(event.border_color, "#3788d8");
        assert_eq!(event.class_names, vec!["medication-event"]);

        match event.extended_props {
            EventProps::Medication {
                name,
                dosage,
                frequency,
                instructions,
                time_to_take,
            } => {
                assert_eq!(name, "Lamotrigine");
                assert_eq!(dosage, "100mg");
                assert_eq!(frequency, "daily");
                assert_eq!(instructions, "");
                assert_eq!(time_to_take, "09:00");
            }
            other => panic!("Expected medication props, got {:?}", other),
        }
    }

    #[test]
    fn test_medication_without_end_date_has_no_end() {
        let service = CalendarService::new();
        let mut medication = sample_medication();
        medication.end_date = None;

        let event = service.medication_event(&medication);
        assert_eq!(event.end, None);
    }

    #[test]
    fn test_medication_end_date_bump_crosses_month_boundary() {
        let service = CalendarService::new();
        let mut medication = sample_medication();
        medication.end_date = Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());

        let event = service.medication_event(&medication);
        assert_eq!(event.end.as_deref(), Some("2024-02-01"));
    }

    #[test]
    fn test_seizure_event_shape() {
        let service = CalendarService::new();
        let event = service.seizure_event(&sample_seizure());

        assert_eq!(event.id, "seizure_7c9e6679-7425-40de-944b-e07fc1f90ae7");
        assert_eq!(event.title, "⚡ Seizure - Absence");
        assert_eq!(event.start, "2024-02-05T14:30:00");
        assert_eq!(event.end, None);
        assert_eq!(event.class_names, vec!["seizure-event"]);

        match event.extended_props {
            EventProps::Seizure {
                seizure_type,
                severity,
                duration,
                triggers,
                notes,
            } => {
                assert_eq!(seizure_type, "absence");
                assert_eq!(severity, "mild");
                assert_eq!(duration, None);
                assert_eq!(triggers, "");
                assert_eq!(notes, "");
            }
            other => panic!("Expected seizure props, got {:?}", other),
        }
    }

    #[test]
    fn test_seizure_title_includes_duration() {
        let service = CalendarService::new();
        let mut seizure = sample_seizure();
        seizure.duration = Some(3);
        seizure.seizure_type = SeizureType::GeneralizedTonicClonic;

        let event = service.seizure_event(&seizure);
        assert_eq!(event.title, "⚡ Seizure - Generalized Tonic Clonic (3min)");
    }

    #[test]
    fn test_text_time_passes_through_unchanged() {
        let service = CalendarService::new();

        let mut medication = sample_medication();
        medication.time_to_take = TimeOfDay::Text("09:00 AM".to_string());
        let event = service.medication_event(&medication);
        assert!(event.title.ends_with("at 09:00 AM"));
        match event.extended_props {
            EventProps::Medication { time_to_take, .. } => assert_eq!(time_to_take, "09:00 AM"),
            other => panic!("Expected medication props, got {:?}", other),
        }

        let mut seizure = sample_seizure();
        seizure.seizure_time = TimeOfDay::Text("14:30".to_string());
        let event = service.seizure_event(&seizure);
        assert_eq!(event.start, "2024-02-05T14:30");
    }

    #[test]
    fn test_projection_is_idempotent() {
        let service = CalendarService::new();
        let medication = sample_medication();
        let seizure = sample_seizure();

        assert_eq!(
            service.medication_event(&medication),
            service.medication_event(&medication)
        );
        assert_eq!(service.seizure_event(&seizure), service.seizure_event(&seizure));
    }
}
