//! # REST API for Medications
//!
//! Form-driven create and delete (redirect responses) plus JSON edit.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Form,
};
use tracing::{error, info};

use super::{error_redirect, success_redirect, validation_redirect};
use crate::domain::DomainError;
use crate::AppState;
use shared::{ErrorResponse, MedicationInput, UpdateResponse, ValidationErrorResponse};

/// Create a new medication from a form submission.
pub async fn submit_medication(
    State(state): State<AppState>,
    Form(input): Form<MedicationInput>,
) -> impl IntoResponse {
    info!("POST /submit_medication");

    match state.medication_service.create_medication(input).await {
        Ok(response) => success_redirect(&response.success_message, "added", "medication"),
        Err(DomainError::Validation(errors)) => validation_redirect("/add_medication", &errors),
        Err(e) => {
            error!("Failed to create medication: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error saving medication").into_response()
        }
    }
}

/// Update an existing medication; responds with JSON.
pub async fn edit_medication(
    State(state): State<AppState>,
    Path(medication_id): Path<String>,
    Form(input): Form<MedicationInput>,
) -> impl IntoResponse {
    info!("POST /edit_medication/{}", medication_id);

    match state
        .medication_service
        .update_medication(&medication_id, input)
        .await
    {
        Ok(response) => (
            StatusCode::OK,
            Json(UpdateResponse {
                success: true,
                message: response.success_message,
            }),
        )
            .into_response(),
        Err(DomainError::NotFound(error)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                success: false,
                error,
            }),
        )
            .into_response(),
        Err(DomainError::Validation(errors)) => (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse {
                success: false,
                errors: DomainError::error_strings(&errors),
            }),
        )
            .into_response(),
        Err(DomainError::Storage(e)) => {
            error!("Failed to update medication: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    success: false,
                    error: "Error updating medication".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Delete a medication; redirects back to the calendar either way.
pub async fn delete_medication(
    State(state): State<AppState>,
    Path(medication_id): Path<String>,
) -> impl IntoResponse {
    info!("POST /delete_medication/{}", medication_id);

    match state
        .medication_service
        .delete_medication(&medication_id)
        .await
    {
        Ok(()) => success_redirect("Medication deleted successfully!", "updated", "medication"),
        Err(DomainError::NotFound(error)) => error_redirect(&error),
        Err(e) => {
            error!("Failed to delete medication: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error deleting medication",
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Medication, SeizureEvent};
    use crate::domain::{CalendarService, MedicationService, SeizureService};
    use crate::storage::memory::MemoryStore;
    use axum::http::header::LOCATION;
    use std::sync::Arc;

    fn setup_test_state() -> AppState {
        AppState {
            medication_service: MedicationService::new(Arc::new(MemoryStore::<Medication>::new())),
            seizure_service: SeizureService::new(Arc::new(MemoryStore::<SeizureEvent>::new())),
            calendar_service: CalendarService::new(),
        }
    }

    fn valid_input() -> MedicationInput {
        MedicationInput {
            name: Some("Lamotrigine".to_string()),
            dosage: Some("100mg".to_string()),
            start_date: Some("2024-01-01".to_string()),
            end_date: None,
            time_to_take: Some("09:00".to_string()),
            frequency: Some("daily".to_string()),
            instructions: None,
            color: None,
        }
    }

    fn location(response: &axum::response::Response) -> String {
        response
            .headers()
            .get(LOCATION)
            .expect("redirect should carry a Location header")
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_submit_medication_redirects_with_success() {
        let state = setup_test_state();

        let response = submit_medication(State(state), Form(valid_input()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = location(&response);
        assert!(location.starts_with("/?success="));
        assert!(location.ends_with("&added=medication"));
    }

    #[tokio::test]
    async fn test_submit_medication_redirects_back_on_validation_failure() {
        let state = setup_test_state();

        let mut input = valid_input();
        input.name = None;

        let response = submit_medication(State(state.clone()), Form(input))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = location(&response);
        assert!(location.starts_with("/add_medication?error="));

        // Nothing was stored
        let medications = state.medication_service.list_medications().await.unwrap();
        assert!(medications.is_empty());
    }

    #[tokio::test]
    async fn test_edit_medication_success() {
        let state = setup_test_state();
        let created = state
            .medication_service
            .create_medication(valid_input())
            .await
            .unwrap();

        let mut input = valid_input();
        input.dosage = Some("200mg".to_string());

        let response = edit_medication(
            State(state),
            Path(created.medication.id.clone()),
            Form(input),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_edit_medication_not_found() {
        let state = setup_test_state();

        let response = edit_medication(
            State(state),
            Path("missing".to_string()),
            Form(valid_input()),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_edit_medication_validation_error() {
        let state = setup_test_state();
        let created = state
            .medication_service
            .create_medication(valid_input())
            .await
            .unwrap();

        let mut input = valid_input();
        input.end_date = Some("2024-01-01".to_string());

        let response = edit_medication(
            State(state),
            Path(created.medication.id.clone()),
            Form(input),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_medication_then_delete_again() {
        let state = setup_test_state();
        let created = state
            .medication_service
            .create_medication(valid_input())
            .await
            .unwrap();

        let response = delete_medication(
            State(state.clone()),
            Path(created.medication.id.clone()),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(location(&response).contains("updated=medication"));

        let response = delete_medication(State(state), Path(created.medication.id))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(location(&response).starts_with("/?error="));
    }
}
