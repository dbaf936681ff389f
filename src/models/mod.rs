//! Data models for the text-to-SQL server.

pub mod query;
pub mod schema;

pub use query::{ApiInfo, QueryResponse, ResultRow};
pub use schema::{ColumnInfo, TableSchema};
