//! Request handlers.
//!
//! Each request is a single linear pass: introspect the schema, build the
//! prompt, call the completion API, execute the generated SQL, serialize the
//! response. Any stage failure short-circuits into a 500 with a detail
//! string; there is no local recovery.

use crate::db::{self, Database};
use crate::error::ApiResult;
use crate::llm::{SYSTEM_PROMPT, SqlGenerator, build_user_prompt};
use crate::models::{ApiInfo, QueryResponse, TableSchema};
use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Shared handler state. Nothing in here is mutable: the database handle owns
/// no connection and the generator is stateless, so concurrent requests share
/// nothing they could race on.
pub struct AppState {
    pub db: Database,
    pub generator: Arc<dyn SqlGenerator>,
}

impl AppState {
    pub fn new(db: Database, generator: Arc<dyn SqlGenerator>) -> Self {
        Self { db, generator }
    }
}

/// Parameters for the `/query` endpoint. A missing `text` is rejected by the
/// extractor before the handler runs.
#[derive(Debug, Deserialize)]
pub struct QueryParams {
    /// Natural language question to convert to SQL.
    pub text: String,
}

/// `GET /` - static description of the API surface.
pub async fn root() -> Json<ApiInfo> {
    Json(ApiInfo::new())
}

/// `GET /schema` - introspect and return the database schema. An empty
/// database yields an empty array, not an error.
pub async fn get_schema(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<TableSchema>>> {
    let schema = db::schema::describe_database(&state.db).await?;
    Ok(Json(schema))
}

/// `GET /query?text=...` - the full pipeline.
pub async fn run_query(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryParams>,
) -> ApiResult<Json<QueryResponse>> {
    info!(question = %params.text, "Handling query request");

    // Schema is re-read on every request rather than cached, so a schema
    // change between requests can never produce a stale prompt.
    let schema = db::schema::describe_database(&state.db).await?;

    let user_prompt = build_user_prompt(&schema, &params.text);
    let sql = state
        .generator
        .generate_sql(SYSTEM_PROMPT, &user_prompt)
        .await?;

    let results = db::executor::execute_query(&state.db, &sql).await?;

    info!(generated_sql = %sql, rows = results.len(), "Query pipeline complete");
    Ok(Json(QueryResponse {
        question: params.text,
        generated_sql: sql,
        results,
    }))
}
