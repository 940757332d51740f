//! Configuration for the HTTP server.
//!
//! Settings come from an optional TOML file. The LLM API key never lives in
//! the file: it is read from the process environment at startup.

use axum::http::HeaderValue;
use clausewise_analyzer::AnalyzerConfig;
use clausewise_llm::openai::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the LLM API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The API key is not set
    #[error("{0} not found in environment variables")]
    MissingApiKey(&'static str),

    /// A field holds an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0")
    pub bind_address: String,

    /// Bind port (e.g., 8001)
    pub bind_port: u16,

    /// The single origin allowed by CORS (the web front-end)
    pub allowed_origin: String,

    /// OpenAI-compatible API base URL
    pub api_base: String,

    /// Per-call timeout for the completion service, in seconds
    pub request_timeout_secs: u64,

    /// Largest accepted upload, in bytes
    pub max_upload_bytes: usize,

    /// Model and prompt settings
    pub analyzer: AnalyzerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            bind_port: 8001,
            allowed_origin: "http://localhost:3000".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_upload_bytes: 20 * 1024 * 1024,
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.origin_header()?;
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_upload_bytes must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        self.analyzer.validate().map_err(ConfigError::Invalid)
    }

    /// Allowed origin as a header value
    pub fn origin_header(&self) -> Result<HeaderValue, ConfigError> {
        if self.allowed_origin.trim().is_empty() {
            return Err(ConfigError::Invalid("allowed_origin must not be empty".to_string()));
        }
        HeaderValue::from_str(&self.allowed_origin)
            .map_err(|e| ConfigError::Invalid(format!("allowed_origin: {}", e)))
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

/// Read the API key from the process environment
pub fn api_key_from_env() -> Result<String, ConfigError> {
    api_key_from(|name| std::env::var(name).ok())
}

/// Read the API key through `lookup`; blank values count as missing
pub fn api_key_from<F>(lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(API_KEY_ENV)
        .filter(|key| !key.trim().is_empty())
        .ok_or(ConfigError::MissingApiKey(API_KEY_ENV))
}
