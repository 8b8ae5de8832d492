//! # REST Interface Layer
//!
//! HTTP endpoints for the health calendar. This layer translates between
//! HTTP and the domain: form and path extraction on the way in, and on the
//! way out either JSON envelopes (edit endpoints, events feed) or
//! redirects carrying urlencoded status messages (form submissions and
//! deletes). No business logic lives here.

pub mod calendar_apis;
pub mod medication_apis;
pub mod pages;
pub mod seizure_apis;

use axum::response::{IntoResponse, Redirect, Response};
use shared::FieldError;

/// Redirect to the calendar with a success message; `outcome` is the
/// query parameter naming what happened ("added" or "updated") and `kind`
/// its record-kind value.
pub(crate) fn success_redirect(message: &str, outcome: &str, kind: &str) -> Response {
    Redirect::to(&format!(
        "/?success={}&{}={}",
        urlencoding::encode(message),
        outcome,
        kind
    ))
    .into_response()
}

/// Redirect to the calendar with an error message.
pub(crate) fn error_redirect(message: &str) -> Response {
    Redirect::to(&format!("/?error={}", urlencoding::encode(message))).into_response()
}

/// Redirect back to an entry form with the full validation error list as
/// repeated `error` query parameters.
pub(crate) fn validation_redirect(form_path: &str, errors: &[FieldError]) -> Response {
    let query: Vec<String> = errors
        .iter()
        .map(|error| format!("error={}", urlencoding::encode(&error.to_string())))
        .collect();
    Redirect::to(&format!("{}?{}", form_path, query.join("&"))).into_response()
}
