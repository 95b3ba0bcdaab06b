use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::{info, error};
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::domain::ports::RecordStore;
use crate::domain::services::defaults;
use crate::state::AppState;
use crate::infra::repositories::{
    memory_record_store::MemoryRecordStore,
    postgres_record_store::PostgresRecordStore,
    sqlite_record_store::SqliteRecordStore,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let record_store = connect_record_store(&config.database_url).await;
    let state = AppState::new(config.clone(), record_store);

    if config.seed_demo_data {
        if let Err(e) = state.catalog.seed_if_absent(defaults::demo_events()).await {
            error!("Failed to seed demo events: {:?}", e);
        }
    }

    state
}

pub async fn connect_record_store(database_url: &str) -> Arc<dyn RecordStore> {
    if database_url.starts_with("memory:") {
        info!("Using in-memory record store, nothing will survive a restart");
        return Arc::new(MemoryRecordStore::new());
    }

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;
        Arc::new(PostgresRecordStore::new(pool))
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;
        Arc::new(SqliteRecordStore::new(pool))
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
