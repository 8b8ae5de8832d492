//! Medication CRUD orchestration.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::models::Medication;
use crate::domain::validation::{self, MedicationDraft};
use crate::storage::traits::MedicationStorage;
use shared::MedicationInput;

/// Service for managing medication schedules.
#[derive(Clone)]
pub struct MedicationService {
    store: Arc<dyn MedicationStorage>,
}

/// Result of a successful create or update.
#[derive(Debug, Clone)]
pub struct MedicationResponse {
    pub medication: Medication,
    pub success_message: String,
}

impl MedicationService {
    pub fn new(store: Arc<dyn MedicationStorage>) -> Self {
        Self { store }
    }

    /// Validate and store a new medication. The server generates the id
    /// and stamps both timestamps.
    pub async fn create_medication(
        &self,
        input: MedicationInput,
    ) -> Result<MedicationResponse, DomainError> {
        let draft = validation::validate_medication(&input).map_err(DomainError::Validation)?;

        let now = Utc::now();
        let medication = build_medication(Uuid::new_v4().to_string(), draft, now, now);

        self.store.save(&medication.id, &medication).await?;
        info!(
            "Created medication '{}' with id {}",
            medication.name, medication.id
        );

        Ok(MedicationResponse {
            success_message: format!("Medication '{}' added successfully!", medication.name),
            medication,
        })
    }

    /// Validate and store new field values for an existing medication.
    /// The original `created_at` is preserved; `updated_at` is bumped.
    pub async fn update_medication(
        &self,
        medication_id: &str,
        input: MedicationInput,
    ) -> Result<MedicationResponse, DomainError> {
        let mut medications = self.store.get_all().await?;
        let existing = medications.remove(medication_id).ok_or_else(|| {
            warn!("Medication not found: {}", medication_id);
            DomainError::NotFound("Medication not found".to_string())
        })?;

        let draft = validation::validate_medication(&input).map_err(DomainError::Validation)?;

        let medication = build_medication(existing.id, draft, existing.created_at, Utc::now());
        self.store.save(&medication.id, &medication).await?;
        info!("Updated medication {}", medication.id);

        Ok(MedicationResponse {
            success_message: "Medication updated successfully!".to_string(),
            medication,
        })
    }

    /// Delete a medication. Not-found when nothing was removed.
    pub async fn delete_medication(&self, medication_id: &str) -> Result<(), DomainError> {
        if self.store.delete(medication_id).await? {
            info!("Deleted medication {}", medication_id);
            Ok(())
        } else {
            warn!("Medication not found: {}", medication_id);
            Err(DomainError::NotFound("Medication not found".to_string()))
        }
    }

    /// All stored medications, keyed by id.
    pub async fn list_medications(&self) -> Result<BTreeMap<String, Medication>, DomainError> {
        Ok(self.store.get_all().await?)
    }
}

fn build_medication(
    id: String,
    draft: MedicationDraft,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Medication {
    Medication {
        id,
        name: draft.name,
        dosage: draft.dosage,
        start_date: draft.start_date,
        end_date: draft.end_date,
        time_to_take: draft.time_to_take,
        frequency: draft.frequency,
        instructions: draft.instructions,
        color: draft.color,
        created_at,
        updated_at,
    }
}
