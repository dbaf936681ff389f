//! Chat-completion API client.
//!
//! One synchronous (awaited) call per request: no retry, no backoff, no
//! timeout beyond the transport default. A slow remote service stalls the
//! request that issued the call and nothing else.

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::llm::SqlGenerator;
use crate::llm::prompt::clean_sql;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the remote completion service.
pub struct CompletionClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl CompletionClient {
    /// Build a client from the process configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

#[async_trait]
impl SqlGenerator for CompletionClient {
    async fn generate_sql(&self, system_prompt: &str, user_prompt: &str) -> ApiResult<String> {
        let payload = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!(model = %self.model, url = %self.api_url, "Requesting SQL completion");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::upstream(format!(
                "completion API returned status {}",
                status
            )));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| ApiError::upstream("completion API returned no choices"))?;

        Ok(clean_sql(content.trim()))
    }
}
