use crate::domain::ports::RecordStore;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        sqlx::query_scalar::<_, Vec<u8>>("SELECT value FROM records WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn put_many(&self, entries: Vec<(String, Vec<u8>)>) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        for (key, value) in entries {
            sqlx::query(
                r#"INSERT INTO records (key, value, updated_at) VALUES (?, ?, ?)
                   ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at"#
            )
                .bind(key)
                .bind(value)
                .bind(now)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)
    }

    async fn delete_many(&self, keys: Vec<String>) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        for key in keys {
            sqlx::query("DELETE FROM records WHERE key = ?")
                .bind(key)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)
    }
}
