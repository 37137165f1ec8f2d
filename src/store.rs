//! SQLite persistence for the catalog and the per-store balances.
//!
//! [`Database`] owns the connection pool and is handed by reference to
//! whatever needs it; there is no process-wide connection. The submodules
//! hold the SQL, one function per statement, each taking a
//! `&mut SqliteConnection` so callers decide whether it runs inside a
//! transaction or on a plain pooled connection.

pub mod balances;
pub mod catalog;
pub mod schema;

use crate::config::InventoryConfig;
use crate::error::BookstoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{debug, info};

pub struct Database {
    pub(crate) pool: SqlitePool,
}

impl Database {
    /// Opens (creating if needed) the database described by `config` and
    /// makes sure the tables exist.
    ///
    /// Foreign keys are switched on for every pooled connection.
    ///
    /// # Errors
    /// Returns [`BookstoreError::Db`] if the URL is malformed, the file cannot
    /// be opened, or the schema cannot be created.
    pub async fn connect(config: &InventoryConfig) -> Result<Self, BookstoreError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        schema::ensure(&pool).await?;

        info!(url = %config.database_url, "inventory database ready");
        Ok(Database { pool })
    }

    /// Closes every pooled connection, waiting for in-flight work to finish.
    pub async fn close(self) {
        debug!("closing inventory database");
        self.pool.close().await;
    }
}
