//! # REST API for Seizure Records
//!
//! Same surface as the medication endpoints, over the seizure namespace.

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
use shared::{ErrorResponse, SeizureInput, UpdateResponse, ValidationErrorResponse};

/// Create a new seizure record from a form submission.
pub async fn submit_seizure(
    State(state): State<AppState>,
    Form(input): Form<SeizureInput>,
) -> impl IntoResponse {
    info!("POST /submit_seizure");

    match state.seizure_service.create_seizure(input).await {
        Ok(response) => success_redirect(&response.success_message, "added", "seizure"),
        Err(DomainError::Validation(errors)) => validation_redirect("/add_seizure", &errors),
        Err(e) => {
            error!("Failed to create seizure record: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error saving seizure record",
            )
                .into_response()
        }
    }
}

/// Update an existing seizure record; responds with JSON.
pub async fn edit_seizure(
    State(state): State<AppState>,
    Path(seizure_id): Path<String>,
    Form(input): Form<SeizureInput>,
) -> impl IntoResponse {
    info!("POST /edit_seizure/{}", seizure_id);

    match state.seizure_service.update_seizure(&seizure_id, input).await {
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
            error!("Failed to update seizure record: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    success: false,
                    error: "Error updating seizure record".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Delete a seizure record; redirects back to the calendar either way.
pub async fn delete_seizure(
    State(state): State<AppState>,
    Path(seizure_id): Path<String>,
) -> impl IntoResponse {
    info!("POST /delete_seizure/{}", seizure_id);

    match state.seizure_service.delete_seizure(&seizure_id).await {
        Ok(()) => success_redirect("Seizure record deleted successfully!", "updated", "seizure"),
        Err(DomainError::NotFound(error)) => error_redirect(&error),
        Err(e) => {
            error!("Failed to delete seizure record: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error deleting seizure record",
            )
                .into_response()
        }
    }
}
