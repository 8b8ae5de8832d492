//! Error taxonomy for the domain services.

use shared::FieldError;
use thiserror::Error;

/// Everything a service operation can fail with. Validation failures carry
/// the full field-error list; storage failures are fatal for the current
/// request and never retried.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    /// Field errors rendered as "Label: message" strings for display.
    pub fn error_strings(errors: &[FieldError]) -> Vec<String> {
        errors.iter().map(ToString::to_string).collect()
    }
}
