//! JSON file cache.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use fxlab_core::error::DataError;
use serde_json::Value;

/// Small persistent key/value store backed by a single JSON file.
///
/// Used for sync markers and last-seen timestamps between runs. Every call
/// reads or rewrites the whole file; the payloads are tiny.
pub struct JsonCache {
    filepath: PathBuf,
}

impl JsonCache {
    pub fn new(filepath: PathBuf) -> Self {
        Self { filepath }
    }

    /// Merge the given entries into the cache file. Existing keys are
    /// overwritten, unrelated keys survive.
    pub fn update(&self, entries: &HashMap<String, Value>) -> Result<(), DataError> {
        let mut merged = self.read_all()?;
        for (key, value) in entries {
            merged.insert(key.clone(), value.clone());
        }

        let body = serde_json::to_string(&merged)
            .map_err(|e| DataError::CacheError(e.to_string()))?;
        fs::write(&self.filepath, body).map_err(|e| DataError::CacheError(e.to_string()))
    }

    /// Look up one key. Missing file and missing key both read as `None`.
    pub fn get(&self, key: &str) -> Result<Option<Value>, DataError> {
        Ok(self.read_all()?.remove(key))
    }

    fn read_all(&self) -> Result<HashMap<String, Value>, DataError> {
        if !self.filepath.exists() {
            return Ok(HashMap::new());
        }
        let body =
            fs::read_to_string(&self.filepath).map_err(|e| DataError::CacheError(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| DataError::CacheError(e.to_string()))
    }
}
