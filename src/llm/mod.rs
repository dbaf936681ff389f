//! SQL generation via a remote completion API.
//!
//! `SqlGenerator` is the seam between the request handler and the remote
//! model: the production implementation is `CompletionClient`, and tests
//! substitute a stub so the nondeterministic remote service never runs.

pub mod client;
pub mod prompt;

use crate::error::ApiResult;
use async_trait::async_trait;

pub use client::CompletionClient;
pub use prompt::{SYSTEM_PROMPT, build_user_prompt, clean_sql, render_schema};

/// Translates a rendered prompt into a bare SQL string.
#[async_trait]
pub trait SqlGenerator: Send + Sync {
    /// Issue one completion call and return the cleaned SQL. Implementations
    /// must uphold the post-condition that the returned string contains no
    /// markdown fence marker and no consecutive whitespace.
    async fn generate_sql(&self, system_prompt: &str, user_prompt: &str) -> ApiResult<String>;
}
