//! Error types for the text-to-SQL server.
//!
//! Every failure in the pipeline maps to one of three variants: the database
//! could not be read, the remote completion call failed, or the generated SQL
//! was rejected by the engine. All of them surface to the client as a 500
//! response with a JSON `detail` string; none are retried.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Error calling completion API: {message}")]
    Upstream { message: String },

    #[error("Error executing SQL query: {message}")]
    QueryExecution { message: String },
}

impl ApiError {
    /// Create a database error (connection or catalog read failure).
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Create an upstream error (completion API transport or status failure).
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a query execution error (engine rejected the generated SQL).
    pub fn query_execution(message: impl Into<String>) -> Self {
        Self::QueryExecution {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::upstream(err.to_string())
    }
}

/// All pipeline failures are server-side: the client either gets a complete
/// payload or a 500 with a human-readable detail string.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": detail })),
        )
            .into_response()
    }
}

/// Result type alias for pipeline operations.
pub type ApiResult<T> = Result<T, ApiError>;
