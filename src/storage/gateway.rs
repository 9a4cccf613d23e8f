//! Persistence gateway for the workout collection.
//!
//! The whole collection is written as one JSON array under a single key.
//! Reading never fails: a missing or corrupt slot is an empty log, and
//! every record is rehydrated so derived values come from the inputs.

use std::collections::HashSet;

use super::slot::{KeyValueStore, StorageError};
use crate::workouts::types::{Workout, WorkoutRecord};

/// Default slot key.
pub const DEFAULT_SLOT_KEY: &str = "workouts";

/// Saves and loads the workout collection.
pub struct PersistenceGateway {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl PersistenceGateway {
    /// Create a gateway writing under `key` in `store`.
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Create a gateway using the default slot key.
    pub fn with_default_key(store: Box<dyn KeyValueStore>) -> Self {
        Self::new(store, DEFAULT_SLOT_KEY)
    }

    /// Serialize the full collection, overwriting the slot.
    pub fn save(&mut self, workouts: &[Workout]) -> Result<(), StorageError> {
        let records: Vec<WorkoutRecord> = workouts.iter().map(Workout::to_record).collect();
        let content = serde_json::to_string(&records)
            .map_err(|e| StorageError::SerializeError(e.to_string()))?;

        self.store.set(&self.key, &content)?;
        tracing::debug!("Saved {} workouts to slot '{}'", records.len(), self.key);
        Ok(())
    }

    /// Load the collection, rehydrating every record.
    pub fn load(&self) -> Vec<Workout> {
        let content = match self.store.get(&self.key) {
            Ok(Some(content)) => content,
            Ok(None) => {
                tracing::debug!("Slot '{}' is empty", self.key);
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read slot '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(serde_json::Value::Array(values)) => values,
            Ok(serde_json::Value::Null) => return Vec::new(),
            Ok(_) => {
                tracing::warn!("Slot '{}' does not hold a list, ignoring it", self.key);
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("Slot '{}' is not valid JSON, ignoring it: {}", self.key, e);
                return Vec::new();
            }
        };

        let total = values.len();
        let mut seen = HashSet::new();
        let workouts: Vec<Workout> = values
            .into_iter()
            .filter_map(|value| {
                let record: WorkoutRecord = match serde_json::from_value(value) {
                    Ok(record) => record,
                    Err(e) => {
                        tracing::warn!("Skipping unreadable workout record: {}", e);
                        return None;
                    }
                };
                let workout = match Workout::rehydrate(record) {
                    Ok(workout) => workout,
                    Err(e) => {
                        tracing::warn!("Skipping workout record: {}", e);
                        return None;
                    }
                };
                // First record with an id wins
                if !seen.insert(workout.id().to_string()) {
                    tracing::warn!("Skipping duplicate workout record {}", workout.id());
                    return None;
                }
                Some(workout)
            })
            .collect();

        tracing::info!(
            "Loaded {} of {} workouts from slot '{}'",
            workouts.len(),
            total,
            self.key
        );
        workouts
    }

    /// Remove the slot entirely.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.store.remove(&self.key)?;
        tracing::info!("Removed slot '{}'", self.key);
        Ok(())
    }

    /// Raw slot content, as last written.
    pub fn raw(&self) -> Result<Option<String>, StorageError> {
        self.store.get(&self.key)
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
