//! Seizure record CRUD orchestration.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::SeizureEvent;
use crate::domain::validation::{self, SeizureDraft};
use crate::storage::traits::SeizureStorage;
use shared::SeizureInput;

/// Service for managing logged seizure events.
#[derive(Clone)]
pub struct SeizureService {
    store: Arc<dyn SeizureStorage>,
}

/// Result of a successful create or update.
#[derive(Debug, Clone)]
pub struct SeizureResponse {
    pub seizure: SeizureEvent,
    pub success_message: String,
}

impl SeizureService {
    pub fn new(store: Arc<dyn SeizureStorage>) -> Self {
        Self { store }
    }

    /// Validate and store a new seizure record.
    pub async fn create_seizure(
        &self,
        input: SeizureInput,
    ) -> Result<SeizureResponse, DomainError> {
        let draft = validation::validate_seizure(&input).map_err(DomainError::Validation)?;

        let now = Utc::now();
        let seizure = build_seizure(Uuid::new_v4().to_string(), draft, now, now);

        self.store.save(&seizure.id, &seizure).await?;
        info!("Created seizure record with id {}", seizure.id);

        Ok(SeizureResponse {
            success_message: "Seizure record added successfully!".to_string(),
            seizure,
        })
    }

    /// Validate and store new field values for an existing seizure record.
    pub async fn update_seizure(
        &self,
        seizure_id: &str,
        input: SeizureInput,
    ) -> Result<SeizureResponse, DomainError> {
        let mut seizures = self.store.get_all().await?;
        let existing = seizures.remove(seizure_id).ok_or_else(|| {
            warn!("Seizure record not found: {}", seizure_id);
            DomainError::NotFound("Seizure record not found".to_string())
        })?;

        let draft = validation::validate_seizure(&input).map_err(DomainError::Validation)?;

        let seizure = build_seizure(existing.id, draft, existing.created_at, Utc::now());
        self.store.save(&seizure.id, &seizure).await?;
        info!("Updated seizure record {}", seizure.id);

        Ok(SeizureResponse {
            success_message: "Seizure record updated successfully!".to_string(),
            seizure,
        })
    }

    /// Delete a seizure record. Not-found when nothing was removed.
    pub async fn delete_seizure(&self, seizure_id: &str) -> Result<(), DomainError> {
        if self.store.delete(seizure_id).await? {
            info!("Deleted seizure record {}", seizure_id);
            Ok(())
        } else {
            warn!("Seizure record not found: {}", seizure_id);
            Err(DomainError::NotFound("Seizure record not found".to_string()))
        }
    }

    /// All stored seizure records, keyed by id.
    pub async fn list_seizures(&self) -> Result<BTreeMap<String, SeizureEvent>, DomainError> {
        Ok(self.store.get_all().await?)
    }
}

fn build_seizure(
    id: String,
    draft: SeizureDraft,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> SeizureEvent {
    SeizureEvent {
        id,
        seizure_date: draft.seizure_date,
        seizure_time: draft.seizure_time,
        duration: draft.duration,
        seizure_type: draft.seizure_type,
        severity: draft.severity,
        triggers: draft.triggers,
        notes: draft.notes,
        color: draft.color,
        created_at,
        updated_at,
    }
}
