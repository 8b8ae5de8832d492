//! Connection handling for the JSON key-value store.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// JsonConnection owns the data directory and hands out the per-kind file
/// paths. Each record kind persists to its own file.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at `base_directory`, creating the
    /// directory if it does not exist yet.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// File backing the medication namespace.
    pub fn medications_file_path(&self) -> PathBuf {
        self.base_directory.join("medications.json")
    }

    /// File backing the seizure namespace.
    pub fn seizures_file_path(&self) -> PathBuf {
        self.base_directory.join("seizures.json")
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}
