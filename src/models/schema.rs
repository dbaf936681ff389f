//! Schema description models.
//!
//! These types mirror the wire shape of the `/schema` endpoint:
//! `[{table, columns: [{name, type}]}]`. They are produced fresh by the
//! introspector on every request and discarded when the response is sent.

use serde::{Deserialize, Serialize};

/// A single column: its name and the storage type declared in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
        }
    }
}

/// One user table with its columns in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub table: String,
    pub columns: Vec<ColumnInfo>,
}

impl TableSchema {
    pub fn new(table: impl Into<String>, columns: Vec<ColumnInfo>) -> Self {
        Self {
            table: table.into(),
            columns,
        }
    }
}
