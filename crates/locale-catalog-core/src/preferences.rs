//! Persisted user preferences.
//!
//! A store maps a top-level identifier to a nested JSON record. Only the
//! record's `appearance.language` field matters to locale resolution.

use crate::error::PreferenceError;
use fs_err as fs;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use serde_json::{Map, Value};
use std::io;
use std::path::{Path, PathBuf};

const APPEARANCE: &str = "appearance";
const LANGUAGE: &str = "language";

/// A key-value store of preference records.
pub trait PreferenceStore: Send + Sync {
    /// Returns the record stored under `key`.
    fn load(&self, key: &str) -> Option<Value>;

    /// Replaces the record stored under `key`.
    fn store(&self, key: &str, record: Value) -> Result<(), PreferenceError>;
}

/// Reads `appearance.language` from a preference record.
pub fn preferred_language(record: &Value) -> Option<&str> {
    record.get(APPEARANCE)?.get(LANGUAGE)?.as_str()
}

/// Returns `record` with `appearance.language` set to `language`.
///
/// Sibling fields are kept. Non-object values along the way are replaced by objects.
pub fn with_preferred_language(record: Option<Value>, language: &str) -> Value {
    let mut root = match record {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };

    let appearance = root
        .entry(APPEARANCE)
        .or_insert_with(|| Value::Object(Map::new()));
    if !appearance.is_object() {
        *appearance = Value::Object(Map::new());
    }
    if let Value::Object(appearance) = appearance {
        appearance.insert(LANGUAGE.to_string(), Value::String(language.to_string()));
    }

    Value::Object(root)
}

/// An in-memory store, for tests and hosts without persistence.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    records: RwLock<FxHashMap<String, Value>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(self, key: impl Into<String>, record: Value) -> Self {
        self.records.write().insert(key.into(), record);
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, key: &str) -> Option<Value> {
        self.records.read().get(key).cloned()
    }

    fn store(&self, key: &str, record: Value) -> Result<(), PreferenceError> {
        self.records.write().insert(key.to_string(), record);
        Ok(())
    }
}

/// A JSON object file mapping identifiers to records, in the manner of browser local storage.
#[derive(Clone, Debug)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, PreferenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(err.into()),
        };

        serde_json::from_str(&content).map_err(|source| PreferenceError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn load(&self, key: &str) -> Option<Value> {
        match self.read_all() {
            Ok(mut records) => records.remove(key),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "Ignoring unreadable preferences: {}", err);
                None
            },
        }
    }

    fn store(&self, key: &str, record: Value) -> Result<(), PreferenceError> {
        let mut records = self.read_all()?;
        records.insert(key.to_string(), record);

        let content = serde_json::to_string_pretty(&Value::Object(records))
            .map_err(PreferenceError::Serialize)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}
