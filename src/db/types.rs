//! SQLite value decoding.
//!
//! Result sets have runtime-determined shape, so each column is decoded into
//! a dynamically-typed JSON value. Decoding is driven by the column's declared
//! type where SQLite reports one; expression columns fall back to trying the
//! storage classes in turn.

use serde_json::Value as JsonValue;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo};

/// Logical category for a SQLite column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    Integer,
    Float,
    Boolean,
    Binary,
    Unknown,
}

/// Classify a declared SQLite type name into a logical category.
pub fn categorize_type(type_name: &str) -> TypeCategory {
    let lower = type_name.to_lowercase();

    if lower.contains("int") {
        return TypeCategory::Integer;
    }
    if lower == "bool" || lower == "boolean" {
        return TypeCategory::Boolean;
    }
    // SQLite's NUMERIC affinity stores whatever fits; treat it as float.
    if lower.contains("real")
        || lower.contains("floa")
        || lower.contains("doub")
        || lower.contains("numeric")
        || lower.contains("decimal")
    {
        return TypeCategory::Float;
    }
    if lower.contains("blob") || lower.contains("binary") {
        return TypeCategory::Binary;
    }

    TypeCategory::Unknown
}

/// Convert a full row into an ordered column-name -> value map.
pub fn row_to_json_map(row: &SqliteRow) -> serde_json::Map<String, JsonValue> {
    row.columns()
        .iter()
        .enumerate()
        .map(|(idx, col)| {
            let category = categorize_type(col.type_info().name());
            (col.name().to_string(), decode_column(row, idx, category))
        })
        .collect()
}

fn decode_column(row: &SqliteRow, idx: usize, category: TypeCategory) -> JsonValue {
    match category {
        TypeCategory::Integer => decode_integer(row, idx),
        TypeCategory::Boolean => decode_boolean(row, idx),
        TypeCategory::Float => decode_float(row, idx),
        TypeCategory::Binary => decode_binary(row, idx),
        TypeCategory::Unknown => decode_dynamic(row, idx),
    }
}

fn decode_integer(row: &SqliteRow, idx: usize) -> JsonValue {
    match row.try_get::<Option<i64>, _>(idx) {
        Ok(Some(v)) => JsonValue::Number(v.into()),
        Ok(None) => JsonValue::Null,
        Err(_) => decode_dynamic(row, idx),
    }
}

fn decode_boolean(row: &SqliteRow, idx: usize) -> JsonValue {
    row.try_get::<Option<bool>, _>(idx)
        .ok()
        .flatten()
        .map(JsonValue::Bool)
        .unwrap_or(JsonValue::Null)
}

fn decode_float(row: &SqliteRow, idx: usize) -> JsonValue {
    match row.try_get::<Option<f64>, _>(idx) {
        Ok(Some(v)) => serde_json::Number::from_f64(v)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(v.to_string())),
        Ok(None) => JsonValue::Null,
        Err(_) => decode_dynamic(row, idx),
    }
}

fn decode_binary(row: &SqliteRow, idx: usize) -> JsonValue {
    use base64::{Engine as _, engine::general_purpose::STANDARD};

    row.try_get::<Option<Vec<u8>>, _>(idx)
        .ok()
        .flatten()
        .map(|v| JsonValue::String(STANDARD.encode(v)))
        .unwrap_or(JsonValue::Null)
}

/// Decoder for columns with no usable declared type (TEXT, dates, and any
/// expression column such as COUNT(*)). Tries the storage classes in order.
fn decode_dynamic(row: &SqliteRow, idx: usize) -> JsonValue {
    if let Ok(Some(v)) = row.try_get::<Option<String>, _>(idx) {
        return JsonValue::String(v);
    }
    if let Ok(Some(v)) = row.try_get::<Option<i64>, _>(idx) {
        return JsonValue::Number(v.into());
    }
    if let Ok(Some(v)) = row.try_get::<Option<f64>, _>(idx) {
        if let Some(n) = serde_json::Number::from_f64(v) {
            return JsonValue::Number(n);
        }
    }
    if let Ok(Some(v)) = row.try_get::<Option<Vec<u8>>, _>(idx) {
        return decode_binary_bytes(&v);
    }
    JsonValue::Null
}

fn decode_binary_bytes(bytes: &[u8]) -> JsonValue {
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    JsonValue::String(STANDARD.encode(bytes))
}
