//! Database access layer.
//!
//! The database is a SQLite file. There is no connection pool and no caching:
//! every request opens a fresh connection for introspection or execution and
//! closes it before returning, so a schema change between requests is always
//! visible to the next one.

pub mod executor;
pub mod schema;
pub mod types;

use crate::error::{ApiError, ApiResult};
use sqlx::ConnectOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use std::path::Path;

use crate::config::Config;

/// Handle to the SQLite database file. Cheap to clone; owns no connection.
#[derive(Debug, Clone)]
pub struct Database {
    options: SqliteConnectOptions,
}

impl Database {
    /// Create a handle from the process configuration.
    pub fn new(config: &Config) -> Self {
        Self::from_path(&config.database)
    }

    /// Create a handle for an explicit file path.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            options: SqliteConnectOptions::new().filename(path),
        }
    }

    /// Open a request-scoped connection. The caller drops or closes it before
    /// its function returns, on both success and failure paths.
    pub async fn connect(&self) -> ApiResult<SqliteConnection> {
        self.options
            .connect()
            .await
            .map_err(|e| ApiError::database(e.to_string()))
    }
}
