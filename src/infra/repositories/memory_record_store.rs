use crate::domain::ports::RecordStore;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local store, used for `memory://` and in unit tests.
#[derive(Default)]
pub struct MemoryRecordStore {
    records: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn put_many(&self, entries: Vec<(String, Vec<u8>)>) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        records.extend(entries);
        Ok(())
    }

    async fn delete_many(&self, keys: Vec<String>) -> Result<(), AppError> {
        let mut records = self.records.write().await;
        for key in keys {
            records.remove(&key);
        }
        Ok(())
    }
}
