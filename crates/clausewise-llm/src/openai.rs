//! OpenAI Provider Implementation
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint.
//!
//! # Features
//!
//! - Async HTTP communication with bearer-token auth
//! - Configurable API base and per-request timeout
//! - Status codes mapped onto `LlmError` variants
//!
//! Single attempt per call: there is no retry or backoff.
//!
//! # Examples
//!
//! ```no_run
//! use clausewise_llm::OpenAiProvider;
//!
//! let provider = OpenAiProvider::new("sk-...")
//!     .unwrap()
//!     .with_api_base("https://api.openai.com/v1");
//! ```

use crate::LlmError;
use async_trait::async_trait;
use clausewise_domain::{CompletionProvider, CompletionRequest};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default OpenAI API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default timeout for LLM requests (two minutes, whole contracts are slow)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// OpenAI chat completions provider
pub struct OpenAiProvider {
    api_base: String,
    api_key: String,
    client: reqwest::Client,
    timeout: Duration,
}

/// Request body for the chat completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Response from the chat completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

/// Error envelope returned on non-2xx responses
#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl OpenAiProvider {
    /// Create a new provider for the public OpenAI endpoint
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Other` if the HTTP client cannot be initialised.
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: api_key.into(),
            client,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Point the provider at another OpenAI-compatible base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the transport timeout for each call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    type Error = LlmError;

    /// Generate a completion
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The service is unreachable or times out
    /// - The API key is rejected
    /// - The rate limit or quota is exhausted
    /// - The model is unknown
    /// - The response has no usable choice
    async fn complete(&self, request: CompletionRequest) -> Result<String, Self::Error> {
        let body = ChatCompletionRequest {
            model: request.model(),
            messages: [
                ChatMessage {
                    role: "system",
                    content: request.system_instruction(),
                },
                ChatMessage {
                    role: "user",
                    content: request.user_prompt(),
                },
            ],
            temperature: request.temperature(),
        };

        debug!(
            model = request.model(),
            temperature = request.temperature(),
            prompt_chars = request.user_prompt().len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_error(status, &error_text, request.model()));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))?;

        debug!(reply_chars = content.len(), "Received chat completion");

        Ok(content)
    }
}

/// Map a non-success status onto an error, preferring the API's own message
fn status_error(status: StatusCode, body: &str, model: &str) -> LlmError {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Authentication(message),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded(message),
        StatusCode::NOT_FOUND => LlmError::ModelNotAvailable(model.to_string()),
        _ => LlmError::Communication(format!("HTTP {}: {}", status, message)),
    }
}
