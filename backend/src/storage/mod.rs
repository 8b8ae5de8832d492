//! # Storage Module
//!
//! Data persistence for the health calendar. The domain layer depends only
//! on the traits here; the JSON file backend is the durable production
//! store and the in-memory backend exists for tests.

pub mod json;
pub mod memory;
pub mod traits;

pub use json::{JsonConnection, MedicationRepository, SeizureRepository};
pub use memory::MemoryStore;
pub use traits::{MedicationStorage, SeizureStorage};
