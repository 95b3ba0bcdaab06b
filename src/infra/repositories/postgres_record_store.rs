use crate::domain::ports::RecordStore;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresRecordStore {
    pool: PgPool,
}

impl PostgresRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, AppError> {
        sqlx::query_scalar::<_, Vec<u8>>("SELECT value FROM records WHERE key = $1")
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
                r#"INSERT INTO records (key, value, updated_at) VALUES ($1, $2, $3)
                   ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at"#
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
        sqlx::query("DELETE FROM records WHERE key = ANY($1)")
            .bind(keys)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
