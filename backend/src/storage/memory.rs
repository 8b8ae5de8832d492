//! In-memory storage backend for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::domain::models::{Medication, SeizureEvent};
use crate::storage::traits::{MedicationStorage, SeizureStorage};

/// A store backed by a shared in-memory map. Implements the same contract
/// as the JSON file repositories so services can be exercised without
/// touching the filesystem.
#[derive(Clone)]
pub struct MemoryStore<T> {
    records: Arc<Mutex<BTreeMap<String, T>>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    /// Number of stored records; used by tests asserting the store was
    /// left untouched.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MedicationStorage for MemoryStore<Medication> {
    async fn get_all(&self) -> Result<BTreeMap<String, Medication>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn save(&self, id: &str, record: &Medication) -> Result<()> {
        self.records
            .lock()
            .unwrap()
            .insert(id.to_string(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.records.lock().unwrap().remove(id).is_some())
    }
}

#[async_trait]
impl SeizureStorage for MemoryStore<SeizureEvent> {
    async fn get_all(&self) -> Result<BTreeMap<String, SeizureEvent>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn save(&self, id: &str, record: &SeizureEvent) -> Result<()> {
        self.records
            .lock()
            .unwrap()
            .insert(id.to_string(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.records.lock().unwrap().remove(id).is_some())
    }
}
