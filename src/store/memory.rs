use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use super::{StoreError, SubmissionStore};

/// In-process store for local development and tests.
///
/// Ids are sequential numeric strings, the same shape the hosted store hands
/// out. Listing is ordered by id. Records are kept as the JSON they arrived
/// as, plus the `id` key.
pub struct MemoryStore {
    records: DashMap<u64, Value>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn key(id: &str) -> Result<u64, StoreError> {
        id.parse()
            .map_err(|_| StoreError::NotFound(id.to_string()))
    }
}

fn with_id(record: &Value, id: &str) -> Value {
    let mut stored = record.clone();
    if let Some(object) = stored.as_object_mut() {
        object.insert("id".to_string(), Value::String(id.to_string()));
    }
    stored
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list(&self) -> Result<Value, StoreError> {
        let mut records: Vec<(u64, Value)> = self
            .records
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        records.sort_by_key(|(key, _)| *key);
        Ok(Value::Array(
            records.into_iter().map(|(_, record)| record).collect(),
        ))
    }

    async fn create(&self, record: &Value) -> Result<Value, StoreError> {
        let key = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = with_id(record, &key.to_string());
        self.records.insert(key, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: &str, record: &Value) -> Result<Value, StoreError> {
        let key = Self::key(id)?;
        let mut entry = self
            .records
            .get_mut(&key)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let stored = with_id(record, id);
        *entry.value_mut() = stored.clone();
        Ok(stored)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let key = Self::key(id)?;
        self.records
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
