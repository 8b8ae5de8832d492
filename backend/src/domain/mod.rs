//! # Domain Module
//!
//! Business logic for the health calendar.
//!
//! ## Module Organization
//!
//! - **models**: the two record kinds and their value types
//! - **validation**: raw-input validation producing typed drafts or
//!   field-error lists
//! - **medication_service** / **seizure_service**: CRUD orchestration over
//!   the injected storage
//! - **calendar**: pure projection from records to calendar events
//! - **error**: the Validation / NotFound / Storage error taxonomy
//!
//! Records transition Nonexistent -> Active -> (edited in place) ->
//! Nonexistent; there is no soft delete and no further state machine.

pub mod calendar;
pub mod error;
pub mod medication_service;
pub mod models;
pub mod seizure_service;
pub mod validation;

pub use calendar::CalendarService;
pub use error::DomainError;
pub use medication_service::{MedicationResponse, MedicationService};
pub use seizure_service::{SeizureResponse, SeizureService};
