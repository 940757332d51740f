//! Trait definitions for external interactions
//!
//! The completion service is the only external collaborator the analysis
//! core talks to. Implementations live in `clausewise-llm`.

use crate::CompletionRequest;
use async_trait::async_trait;

/// Trait for LLM completion operations
///
/// One call, one attempt: implementations must not retry on their own.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Error type for completion operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return the primary completion text for `request`, untrimmed
    async fn complete(&self, request: CompletionRequest) -> Result<String, Self::Error>;
}
