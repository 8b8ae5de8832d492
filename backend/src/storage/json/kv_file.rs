//! Shared read/write helpers for the per-kind JSON map files.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Load the full id-to-record map from `path`. A missing or empty file is
/// an empty store, not an error.
pub(super) fn load_map<T: DeserializeOwned>(path: &Path) -> Result<BTreeMap<String, T>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read store file: {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse store file: {}", path.display()))
}

/// Write the full map back to `path`. The write goes through a temp file
/// and a rename so a crash mid-write cannot leave a half-written store.
pub(super) fn store_map<T: Serialize>(path: &Path, map: &BTreeMap<String, T>) -> Result<()> {
    let contents = serde_json::to_string_pretty(map).context("Failed to serialize store")?;

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, contents)
        .with_context(|| format!("Failed to write store file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace store file: {}", path.display()))?;

    Ok(())
}
