//! JSON-file-backed medication repository.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::debug;

use super::connection::JsonConnection;
use super::kv_file;
use crate::domain::models::Medication;
use crate::storage::traits::MedicationStorage;

/// Persists medications as a single JSON object mapping id to record.
/// Every operation opens the file, performs one read or read-modify-write,
/// and closes it.
#[derive(Clone)]
pub struct MedicationRepository {
    connection: JsonConnection,
}

impl MedicationRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl MedicationStorage for MedicationRepository {
    async fn get_all(&self) -> Result<BTreeMap<String, Medication>> {
        kv_file::load_map(&self.connection.medications_file_path())
    }

    async fn save(&self, id: &str, record: &Medication) -> Result<()> {
        let path = self.connection.medications_file_path();
        let mut records = kv_file::load_map::<Medication>(&path)?;
        records.insert(id.to_string(), record.clone());
        kv_file::store_map(&path, &records)?;
        debug!("Saved medication {}", id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let path = self.connection.medications_file_path();
        let mut records = kv_file::load_map::<Medication>(&path)?;
        let existed = records.remove(id).is_some();
        if existed {
            kv_file::store_map(&path, &records)?;
            debug!("Deleted medication {}", id);
        }
        Ok(existed)
    }
}
