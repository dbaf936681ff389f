//! Query execution.
//!
//! Runs the generated SQL string against the database and materializes every
//! row. No validation or statement-type restriction happens here: model
//! output is executed exactly as generated and the engine itself is the only
//! thing that can reject it. This is a deliberate trust boundary.

use crate::db::Database;
use crate::db::types::row_to_json_map;
use crate::error::{ApiError, ApiResult};
use crate::models::ResultRow;
use sqlx::Connection;
use tracing::debug;

/// Execute `sql` and return every result row in engine order, with each row's
/// columns in result-set order.
///
/// Opens a fresh connection and closes it before returning. Any engine
/// rejection (syntax error, unknown object, malformed statement) surfaces as
/// a query execution error.
pub async fn execute_query(db: &Database, sql: &str) -> ApiResult<Vec<ResultRow>> {
    // A failure to open the file here is still a database error, not a query
    // error; `connect` already maps it.
    let mut conn = db.connect().await?;

    let result = sqlx::query(sql)
        .fetch_all(&mut conn)
        .await
        .map_err(|e| ApiError::query_execution(e.to_string()));
    conn.close().await.ok();

    let rows = result?;
    debug!(sql = %sql, rows = rows.len(), "Executed generated query");
    Ok(rows.iter().map(row_to_json_map).collect())
}
