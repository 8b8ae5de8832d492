//! # REST API for the Calendar Feed
//!
//! Serves the combined events array the calendar widget loads.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::{error, info};

use crate::AppState;
use shared::CalendarEvent;

/// List every stored record as a calendar event: all medications followed
/// by all seizures. Within a kind the store's id order applies; the
/// ordering is deterministic but not part of the contract.
pub async fn list_events(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/events");

    let medications = match state.medication_service.list_medications().await {
        Ok(medications) => medications,
        Err(e) => {
            error!("Failed to load medications: {:?}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error listing events").into_response();
        }
    };

    let seizures = match state.seizure_service.list_seizures().await {
        Ok(seizures) => seizures,
        Err(e) => {
            error!("Failed to load seizure records: {:?}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error listing events").into_response();
        }
    };

    let mut events: Vec<CalendarEvent> = Vec::with_capacity(medications.len() + seizures.len());
    events.extend(
        medications
            .values()
            .map(|medication| state.calendar_service.medication_event(medication)),
    );
    events.extend(
        seizures
            .values()
            .map(|seizure| state.calendar_service.seizure_event(seizure)),
    );

    (StatusCode::OK, Json(events)).into_response()
}
