//! Integration tests for schema introspection against real SQLite files.

use sqlx::Connection;
use tempfile::NamedTempFile;
use text2sql_server::db::{Database, schema};
use text2sql_server::error::ApiError;

async fn setup_db(statements: &[&str]) -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().unwrap();
    let db = Database::from_path(temp_file.path());

    let mut conn = db.connect().await.unwrap();
    for stmt in statements {
        sqlx::query(stmt).execute(&mut conn).await.unwrap();
    }
    conn.close().await.unwrap();

    (temp_file, db)
}

#[tokio::test]
async fn test_introspection_covers_every_table() {
    let (_file, db) = setup_db(&[
        "CREATE TABLE TELD_PRODUCTS (product_id INTEGER PRIMARY KEY, name TEXT, category TEXT, price REAL, stock_quantity INTEGER)",
        "CREATE TABLE TELD_CUSTOMER (customer_id INTEGER PRIMARY KEY, name TEXT, email TEXT)",
        "CREATE TABLE TELD_ORDERS (order_id INTEGER PRIMARY KEY, customer_id INTEGER, total_amount REAL)",
    ])
    .await;

    let tables = schema::describe_database(&db).await.unwrap();
    assert_eq!(tables.len(), 3);

    let names: Vec<&str> = tables.iter().map(|t| t.table.as_str()).collect();
    assert!(names.contains(&"TELD_PRODUCTS"));
    assert!(names.contains(&"TELD_CUSTOMER"));
    assert!(names.contains(&"TELD_ORDERS"));
}

#[tokio::test]
async fn test_columns_appear_in_catalog_order() {
    let (_file, db) = setup_db(&[
        "CREATE TABLE TELD_PRODUCTS (product_id INTEGER PRIMARY KEY, name TEXT, category TEXT, price REAL, stock_quantity INTEGER)",
    ])
    .await;

    let tables = schema::describe_database(&db).await.unwrap();
    let products = &tables[0];

    let columns: Vec<(&str, &str)> = products
        .columns
        .iter()
        .map(|c| (c.name.as_str(), c.column_type.as_str()))
        .collect();
    assert_eq!(
        columns,
        vec![
            ("product_id", "INTEGER"),
            ("name", "TEXT"),
            ("category", "TEXT"),
            ("price", "REAL"),
            ("stock_quantity", "INTEGER"),
        ]
    );
}

#[tokio::test]
async fn test_empty_database_yields_empty_schema() {
    let (_file, db) = setup_db(&[]).await;

    let tables = schema::describe_database(&db).await.unwrap();
    assert!(tables.is_empty());
}

#[tokio::test]
async fn test_schema_reflects_changes_between_calls() {
    let (_file, db) = setup_db(&["CREATE TABLE first (id INTEGER)"]).await;

    let before = schema::describe_database(&db).await.unwrap();
    assert_eq!(before.len(), 1);

    let mut conn = db.connect().await.unwrap();
    sqlx::query("CREATE TABLE second (id INTEGER)")
        .execute(&mut conn)
        .await
        .unwrap();
    conn.close().await.unwrap();

    // No caching: the new table is visible on the very next call.
    let after = schema::describe_database(&db).await.unwrap();
    assert_eq!(after.len(), 2);
}

#[tokio::test]
async fn test_missing_database_file_is_a_database_error() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::from_path(dir.path().join("does_not_exist.db"));

    let err = schema::describe_database(&db).await.unwrap_err();
    assert!(matches!(err, ApiError::Database { .. }));
}
