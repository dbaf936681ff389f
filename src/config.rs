//! Configuration handling for the text-to-SQL server.
//!
//! All settings come from CLI arguments and environment variables, parsed once
//! at startup. The resulting `Config` is passed by reference into each
//! component constructor; no business logic reads the environment directly.

use clap::Parser;

pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 8000;
pub const DEFAULT_DATABASE: &str = "sample_business.db";

// Completion API defaults. A low temperature keeps generation
// near-deterministic; max_tokens bounds the output length.
pub const DEFAULT_API_URL: &str = "https://api.sarvam.ai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "sarvam-m";
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_MAX_TOKENS: u32 = 500;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "text2sql-server",
    about = "HTTP service that translates natural language questions into SQL and runs them against SQLite",
    version,
    author
)]
pub struct Config {
    /// Path to the SQLite database file
    #[arg(
        short = 'd',
        long = "database",
        value_name = "PATH",
        default_value = DEFAULT_DATABASE,
        env = "T2S_DATABASE"
    )]
    pub database: String,

    /// Bearer credential for the completion API
    #[arg(long = "api-key", value_name = "KEY", env = "SARVAM_API_KEY")]
    pub api_key: String,

    /// Completion API endpoint URL
    #[arg(
        long = "api-url",
        value_name = "URL",
        default_value = DEFAULT_API_URL,
        env = "T2S_API_URL"
    )]
    pub api_url: String,

    /// Model identifier sent to the completion API
    #[arg(long, default_value = DEFAULT_MODEL, env = "T2S_MODEL")]
    pub model: String,

    /// Sampling temperature for SQL generation
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE, env = "T2S_TEMPERATURE")]
    pub temperature: f32,

    /// Maximum number of tokens the model may generate
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS, env = "T2S_MAX_TOKENS")]
    pub max_tokens: u32,

    /// HTTP host to bind to
    #[arg(long, default_value = DEFAULT_HTTP_HOST, env = "T2S_HTTP_HOST")]
    pub http_host: String,

    /// HTTP port to bind to
    #[arg(long, default_value_t = DEFAULT_HTTP_PORT, env = "T2S_HTTP_PORT")]
    pub http_port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "T2S_LOG_LEVEL")]
    pub log_level: String,

    /// Enable JSON logging format
    #[arg(long, env = "T2S_JSON_LOGS")]
    pub json_logs: bool,
}

impl Config {
    /// Create a default configuration (useful for testing).
    pub fn default_config() -> Self {
        Self {
            database: DEFAULT_DATABASE.to_string(),
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            http_host: DEFAULT_HTTP_HOST.to_string(),
            http_port: DEFAULT_HTTP_PORT,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Get the HTTP bind address.
    pub fn http_bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
