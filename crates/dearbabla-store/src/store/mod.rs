//! SQLite-backed translation store.
//!
//! Split into focused submodules:
//! - `words`: read, write, delete, count and random draw over the `words` table

mod words;

use dearbabla_core::error::BablaError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Persistent translation store backed by SQLite.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open the store file at `db_path`, creating the schema on first use.
    pub async fn new(db_path: &Path) -> Result<Self, BablaError> {
        let opts = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await
            .map_err(|e| BablaError::Store(format!("failed to connect to sqlite: {e}")))?;

        Self::ensure_schema(&pool).await?;

        info!("Translation store opened at {}", db_path.display());

        Ok(Self { pool })
    }

    /// Open a throwaway in-memory store.
    pub async fn in_memory() -> Result<Self, BablaError> {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| BablaError::Store(format!("invalid db path: {e}")))?;

        // A single connection that never recycles: each new in-memory
        // connection would see an empty database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opts)
            .await
            .map_err(|e| BablaError::Store(format!("failed to open in-memory sqlite: {e}")))?;

        Self::ensure_schema(&pool).await?;

        Ok(Self { pool })
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `words` table and its index unless they already exist.
    async fn ensure_schema(pool: &SqlitePool) -> Result<(), BablaError> {
        sqlx::raw_sql(include_str!("../../migrations/001_init.sql"))
            .execute(pool)
            .await
            .map_err(|e| BablaError::Store(format!("schema setup failed: {e}")))?;
        Ok(())
    }
}
