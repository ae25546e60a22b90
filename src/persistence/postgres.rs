//! PostgreSQL implementation of the record store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::RecordStore;
use crate::config::AppConfig;
use crate::domain::{NormalizedEvent, RecordId, StoredRecord};
use crate::error::HookError;

/// PostgreSQL-backed record store using `sqlx::PgPool`.
///
/// Each record is one row of the `records` table with the normalized
/// event kept as a JSONB document.
#[derive(Debug, Clone)]
pub struct PostgresRecordStore {
    pool: PgPool,
}

impl PostgresRecordStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool sized from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Persistence`] if the database is unreachable.
    pub async fn connect(config: &AppConfig) -> Result<Self, HookError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(config.connect_timeout())
            .connect(&config.database_url)
            .await?;

        tracing::info!(
            max_connections = config.database_max_connections,
            "connected to record database"
        );
        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Persistence`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), HookError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn insert(&self, event: &NormalizedEvent) -> Result<RecordId, HookError> {
        let id = RecordId::generate();
        let document =
            serde_json::to_value(event).map_err(|e| HookError::Internal(e.to_string()))?;

        sqlx::query("INSERT INTO records (id, document) VALUES ($1, $2)")
            .bind(id)
            .bind(&document)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<StoredRecord>, HookError> {
        let rows = sqlx::query_as::<_, (RecordId, serde_json::Value, DateTime<Utc>)>(
            "SELECT id, document, received_at FROM records ORDER BY seq ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, document, received_at)| StoredRecord {
                id,
                document,
                received_at,
            })
            .collect())
    }
}
