//! In-memory settings store
//!
//! One store per engine instance, holding the full set of known window
//! records for the process lifetime. Mutated only by whole-record upsert;
//! persisted only by whole-collection serialization.

use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::error::SettingsError;
use crate::persistence;
use crate::types::{WindowKey, WindowRecord};

/// Mapping from window key to its last captured record
#[derive(Debug, Default)]
pub struct SettingsStore {
    records: HashMap<WindowKey, WindowRecord>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a settings file
    ///
    /// A missing file yields an empty store. A file that exists but cannot
    /// be read or parsed is a hard failure, never a silent fallback.
    pub fn initialize(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            info!(path = %path.display(), "no settings file, starting with empty store");
            return Ok(Self::new());
        }

        let records = persistence::load_records(path)?;
        info!(path = %path.display(), windows = records.len(), "loaded settings");

        let mut store = Self::new();
        for record in records {
            store.upsert(record);
        }
        Ok(store)
    }

    /// Replace any existing record for this key, then insert
    ///
    /// Last write wins; repeated identical upserts are idempotent.
    pub fn upsert(&mut self, record: WindowRecord) {
        self.records.insert(record.key.clone(), record);
    }

    /// Look up the saved record for a key; absence is not an error
    pub fn lookup(&self, key: &WindowKey) -> Option<&WindowRecord> {
        self.records.get(key)
    }

    /// The full current record set, sorted by key for stable serialization
    pub fn snapshot(&self) -> Vec<WindowRecord> {
        let mut records: Vec<WindowRecord> = self.records.values().cloned().collect();
        records.sort_by(|a, b| a.key.cmp(&b.key));
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
