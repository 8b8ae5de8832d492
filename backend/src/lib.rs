//! # Health Calendar Backend
//!
//! Web backend for a personal health tracker: medications and seizure
//! events are recorded through form submissions and served back as a
//! combined calendar-event feed.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! IO Layer (REST handlers, pages)
//!     ↓
//! Domain Layer (validation, services, calendar projection)
//!     ↓
//! Storage Layer (JSON key-value files)
//! ```
//!
//! Requests are handled independently; each storage operation opens and
//! closes its backing file on its own, with no cross-request locking.

pub mod domain;
pub mod io;
pub mod storage;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::domain::{CalendarService, MedicationService, SeizureService};
use crate::storage::{JsonConnection, MedicationRepository, SeizureRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub medication_service: MedicationService,
    pub seizure_service: SeizureService,
    pub calendar_service: CalendarService,
}

/// Initialize the backend with all required services, persisting under
/// `data_dir`.
pub fn initialize_backend<P: AsRef<Path>>(data_dir: P) -> Result<AppState> {
    info!("Setting up storage");
    let connection = JsonConnection::new(data_dir)?;

    info!("Setting up domain services");
    let medication_service =
        MedicationService::new(Arc::new(MedicationRepository::new(connection.clone())));
    let seizure_service = SeizureService::new(Arc::new(SeizureRepository::new(connection)));
    let calendar_service = CalendarService::new();

    Ok(AppState {
        medication_service,
        seizure_service,
        calendar_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup so the events feed can be consumed cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new().route("/events", get(io::rest::calendar_apis::list_events));

    Router::new()
        .route("/", get(io::rest::pages::calendar_page))
        .route("/add_medication", get(io::rest::pages::add_medication_page))
        .route("/add_seizure", get(io::rest::pages::add_seizure_page))
        .route(
            "/submit_medication",
            post(io::rest::medication_apis::submit_medication),
        )
        .route(
            "/edit_medication/:medication_id",
            post(io::rest::medication_apis::edit_medication),
        )
        .route(
            "/delete_medication/:medication_id",
            post(io::rest::medication_apis::delete_medication),
        )
        .route(
            "/submit_seizure",
            post(io::rest::seizure_apis::submit_seizure),
        )
        .route(
            "/edit_seizure/:seizure_id",
            post(io::rest::seizure_apis::edit_seizure),
        )
        .route(
            "/delete_seizure/:seizure_id",
            post(io::rest::seizure_apis::delete_seizure),
        )
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn setup_test_router() -> (Router, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let state = initialize_backend(temp_dir.path()).unwrap();
        (create_router(state), temp_dir)
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_calendar_page_is_served() {
        let (router, _temp_dir) = setup_test_router();

        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_submit_then_list_events_over_http() {
        let (router, _temp_dir) = setup_test_router();

        let body = "name=Lamotrigine&dosage=100mg&start_date=2024-01-01&end_date=2024-01-10\
                    &time_to_take=09%3A00&frequency=daily";
        let response = router
            .clone()
            .oneshot(form_post("/submit_medication", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let events: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let events = events.as_array().unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0]["id"].as_str().unwrap().starts_with("med_"));
        assert_eq!(events[0]["start"], "2024-01-01");
        assert_eq!(events[0]["end"], "2024-01-11");
    }

    #[tokio::test]
    async fn test_edit_unknown_medication_is_404() {
        let (router, _temp_dir) = setup_test_router();

        let body = "name=Keppra&dosage=500mg&start_date=2024-03-01&frequency=daily";
        let response = router
            .oneshot(form_post("/edit_medication/does-not-exist", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_seizure_submission_redirects_to_form() {
        let (router, _temp_dir) = setup_test_router();

        let response = router
            .oneshot(form_post("/submit_seizure", "severity=mild"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response
            .headers()
            .get(axum::http::header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(location.starts_with("/add_seizure?error="));
    }
}
