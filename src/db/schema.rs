//! Schema introspection.
//!
//! Reads the SQLite catalog and produces the table/column description the
//! prompt builder and the `/schema` endpoint consume. The description is
//! regenerated on every call; nothing is cached between requests.

use crate::db::Database;
use crate::error::{ApiError, ApiResult};
use crate::models::{ColumnInfo, TableSchema};
use sqlx::sqlite::SqliteConnection;
use sqlx::{Connection, Row};
use tracing::debug;

/// List every user table in catalog order. SQLite keeps its own internal
/// objects out of `type = 'table'` rows it reports here, so no extra
/// filtering is applied.
const LIST_TABLES: &str = "SELECT name FROM sqlite_master WHERE type = 'table'";

/// Describe every user table and its columns.
///
/// Opens a fresh connection, reads the catalog, and closes the connection
/// before returning. Fails with a database error if the file cannot be
/// opened or the catalog cannot be read.
pub async fn describe_database(db: &Database) -> ApiResult<Vec<TableSchema>> {
    let mut conn = db.connect().await?;
    let result = read_schema(&mut conn).await;
    // Close explicitly so the handle is released even though an error path
    // would also drop it.
    conn.close().await.ok();
    result
}

async fn read_schema(conn: &mut SqliteConnection) -> ApiResult<Vec<TableSchema>> {
    let rows = sqlx::query(LIST_TABLES)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| ApiError::database(e.to_string()))?;

    let mut tables = Vec::with_capacity(rows.len());
    for row in &rows {
        let name: String = row.get("name");
        let columns = fetch_columns(conn, &name).await?;
        tables.push(TableSchema::new(name, columns));
    }

    debug!(count = tables.len(), "Introspected SQLite tables");
    Ok(tables)
}

async fn fetch_columns(
    conn: &mut SqliteConnection,
    table_name: &str,
) -> ApiResult<Vec<ColumnInfo>> {
    let pragma_query = format!("PRAGMA table_info('{}')", table_name);
    let rows = sqlx::query(&pragma_query)
        .fetch_all(conn)
        .await
        .map_err(|e| ApiError::database(e.to_string()))?;

    Ok(rows
        .iter()
        .map(|row| {
            let name: String = row.get("name");
            let data_type: String = row.get("type");
            ColumnInfo::new(name, data_type)
        })
        .collect())
}
