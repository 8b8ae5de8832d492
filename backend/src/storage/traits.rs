//! Storage abstraction traits.
//!
//! The domain layer works against these traits so the backing store can be
//! swapped (JSON key-value files in production, in-memory maps in tests)
//! without touching business logic.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::models::{Medication, SeizureEvent};

/// Interface for medication persistence.
///
/// The store is a flat id-to-record mapping. Each call performs one
/// independent read or write; there is no cross-call transaction or
/// multi-writer coordination (single-process assumption).
#[async_trait]
pub trait MedicationStorage: Send + Sync {
    /// Load every stored medication, keyed by id.
    async fn get_all(&self) -> Result<BTreeMap<String, Medication>>;

    /// Insert or replace the record under `id`.
    async fn save(&self, id: &str, record: &Medication) -> Result<()>;

    /// Remove the record under `id`.
    /// Returns true if the record existed and was removed, false otherwise.
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// Interface for seizure-event persistence. Same contract as
/// [`MedicationStorage`], separate namespace.
#[async_trait]
pub trait SeizureStorage: Send + Sync {
    /// Load every stored seizure event, keyed by id.
    async fn get_all(&self) -> Result<BTreeMap<String, SeizureEvent>>;

    /// Insert or replace the record under `id`.
    async fn save(&self, id: &str, record: &SeizureEvent) -> Result<()>;

    /// Remove the record under `id`.
    /// Returns true if the record existed and was removed, false otherwise.
    async fn delete(&self, id: &str) -> Result<bool>;
}
