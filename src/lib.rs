//! Text-to-SQL Query Server Library
//!
//! Translates natural language questions into SQL via a remote completion
//! API and executes the generated queries against a SQLite database.

pub mod config;
pub mod db;
pub mod error;
pub mod llm;
pub mod models;
pub mod server;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use server::AppState;
