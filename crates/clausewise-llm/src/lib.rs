//! Clausewise LLM Provider Layer
//!
//! Implementations of the `CompletionProvider` trait from `clausewise-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible chat completions API
//!
//! Every provider makes exactly one attempt per call. Retrying is left to
//! callers.
//!
//! # Examples
//!
//! ```
//! use clausewise_domain::{CompletionProvider, CompletionRequest};
//! use clausewise_llm::MockProvider;
//!
//! # async fn example() {
//! let provider = MockProvider::new("Hello from LLM!");
//! let request = CompletionRequest::new("system", "user", 0.3, "gpt-4");
//! let result = provider.complete(request).await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;

use async_trait::async_trait;
use clausewise_domain::{CompletionProvider, CompletionRequest};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// The service rejected the API key
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error(String),
}

#[derive(Debug, Default)]
struct MockState {
    rules: Vec<(String, MockReply)>,
    requests: Vec<CompletionRequest>,
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured replies without making any network calls. A rule
/// matches when its needle occurs in the request's system instruction or
/// user prompt; the first matching rule wins, otherwise the default reply
/// is returned.
///
/// # Examples
///
/// ```
/// use clausewise_domain::{CompletionProvider, CompletionRequest};
/// use clausewise_llm::MockProvider;
///
/// # async fn example() {
/// let mut provider = MockProvider::default();
/// provider.add_response("Summarize", "A short lease.");
/// provider.add_error("key risks", "quota exhausted");
///
/// let summary = CompletionRequest::new("sys", "Summarize this contract:\n\nX", 0.3, "m");
/// assert_eq!(provider.complete(summary).await.unwrap(), "A short lease.");
///
/// let risks = CompletionRequest::new("sys", "What are the key risks?", 0.2, "m");
/// assert!(provider.complete(risks).await.is_err());
/// assert_eq!(provider.call_count(), 2);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Create a MockProvider that fails every call with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        let mut provider = Self::default();
        provider.add_error("", message);
        provider
    }

    /// Reply with `response` when `needle` appears in the request
    pub fn add_response(&mut self, needle: impl Into<String>, response: impl Into<String>) {
        self.lock()
            .rules
            .push((needle.into(), MockReply::Text(response.into())));
    }

    /// Fail with `message` when `needle` appears in the request
    pub fn add_error(&mut self, needle: impl Into<String>, message: impl Into<String>) {
        self.lock()
            .rules
            .push((needle.into(), MockReply::Error(message.into())));
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// Requests received so far, in call order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.lock().requests.clone()
    }

    /// Forget recorded requests
    pub fn reset_call_count(&self) {
        self.lock().requests.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    type Error = LlmError;

    async fn complete(&self, request: CompletionRequest) -> Result<String, Self::Error> {
        let mut state = self.lock();

        let reply = state
            .rules
            .iter()
            .find(|(needle, _)| {
                request.system_instruction().contains(needle.as_str())
                    || request.user_prompt().contains(needle.as_str())
            })
            .map(|(_, reply)| reply.clone());

        state.requests.push(request);

        match reply {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Error(message)) => Err(LlmError::Other(message)),
            None => Ok(self.default_response.clone()),
        }
    }
}
