//! JSON-file-backed seizure repository.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::debug;

use super::connection::JsonConnection;
use super::kv_file;
use crate::domain::models::SeizureEvent;
use crate::storage::traits::SeizureStorage;

/// Persists seizure events as a single JSON object mapping id to record,
/// in a separate file from medications so the two namespaces cannot
/// collide.
#[derive(Clone)]
pub struct SeizureRepository {
    connection: JsonConnection,
}

impl SeizureRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl SeizureStorage for SeizureRepository {
    async fn get_all(&self) -> Result<BTreeMap<String, SeizureEvent>> {
        kv_file::load_map(&self.connection.seizures_file_path())
    }

    async fn save(&self, id: &str, record: &SeizureEvent) -> Result<()> {
        let path = self.connection.seizures_file_path();
        let mut records = kv_file::load_map::<SeizureEvent>(&path)?;
        records.insert(id.to_string(), record.clone());
        kv_file::store_map(&path, &records)?;
        debug!("Saved seizure {}", id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let path = self.connection.seizures_file_path();
        let mut records = kv_file::load_map::<SeizureEvent>(&path)?;
        let existed = records.remove(id).is_some();
        if existed {
            kv_file::store_map(&path, &records)?;
            debug!("Deleted seizure {}", id);
        }
        Ok(existed)
    }
}
