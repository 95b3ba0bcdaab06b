use crate::error::AppError;
use async_trait::async_trait;

/// Durable key → bytes storage standing in for the browser's local storage.
///
/// Backends only have to provide point reads and batch writes; a batch passed
/// to [`RecordStore::put_many`] must become visible all at once or not at all.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError>;
    async fn put_many(&self, entries: Vec<(String, Vec<u8>)>) -> Result<(), AppError>;
    async fn delete_many(&self, keys: Vec<String>) -> Result<(), AppError>;

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), AppError> {
        self.put_many(vec![(key.to_string(), value)]).await
    }
}
