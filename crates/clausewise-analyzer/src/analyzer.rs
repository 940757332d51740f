//! Core ContractAnalyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::parser::{parse_dates, parse_risks, parse_summary};
use crate::pdf::extract_text_blocking;
use crate::prompt::{AnalysisTask, PromptBuilder};
use crate::types::AskRequest;
use clausewise_domain::{AnalysisResult, CompletionProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Turns contract documents into summaries, risks and dates
///
/// Built once at startup and shared by every request handler. Holds no
/// per-request state.
pub struct ContractAnalyzer<P>
where
    P: CompletionProvider,
{
    provider: Arc<P>,
    config: AnalyzerConfig,
}

impl<P> ContractAnalyzer<P>
where
    P: CompletionProvider,
{
    /// Create a new ContractAnalyzer
    pub fn new(provider: P, config: AnalyzerConfig) -> Self {
        Self::with_shared_provider(Arc::new(provider), config)
    }

    /// Create a ContractAnalyzer around an already shared provider
    pub fn with_shared_provider(provider: Arc<P>, config: AnalyzerConfig) -> Self {
        Self { provider, config }
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze an uploaded PDF
    ///
    /// All-or-nothing: if extraction or any of the three completions fails,
    /// no partial result is returned. Extraction runs first, so an unreadable
    /// document never reaches the completion service.
    pub async fn analyze(&self, document: Vec<u8>) -> Result<AnalysisResult, AnalyzerError> {
        info!("Starting analysis of {} byte document", document.len());

        let text = extract_text_blocking(document).await?;
        self.analyze_text(&text).await
    }

    /// Analyze already-extracted contract text
    ///
    /// The summary, risk and date completions have no data dependency on each
    /// other and are issued concurrently.
    pub async fn analyze_text(&self, text: &str) -> Result<AnalysisResult, AnalyzerError> {
        let text = self.limit_text(text);

        let (summary, risks, dates) = tokio::try_join!(
            self.complete(PromptBuilder::new(AnalysisTask::Summary, text)),
            self.complete(PromptBuilder::new(AnalysisTask::Risks, text)),
            self.complete(PromptBuilder::new(AnalysisTask::Dates, text)),
        )?;

        let result = AnalysisResult {
            summary: parse_summary(&summary),
            risks: parse_risks(&risks),
            dates: parse_dates(&dates),
        };

        info!(
            "Analysis complete: {} risks, {} dates",
            result.risks.len(),
            result.dates.len()
        );

        Ok(result)
    }

    /// Answer a question about caller-supplied contract text
    ///
    /// Validation happens before any completion call. The answer is the raw
    /// completion text.
    pub async fn ask(&self, request: AskRequest) -> Result<String, AnalyzerError> {
        let validated = request.validate()?;
        let text = self.limit_text(&validated.text);

        self.complete(PromptBuilder::new(AnalysisTask::Question, text).with_question(&validated.question))
            .await
    }

    /// Issue one completion for a prepared prompt
    async fn complete(&self, prompt: PromptBuilder<'_>) -> Result<String, AnalyzerError> {
        let request = prompt.build(&self.config.model);
        let task = prompt.task();

        debug!(
            task = task.as_str(),
            prompt_chars = request.user_prompt().len(),
            "Requesting completion"
        );

        let reply = self.provider.complete(request).await.map_err(|e| {
            warn!(task = task.as_str(), "Completion failed: {}", e);
            AnalyzerError::gateway(e)
        })?;

        debug!(task = task.as_str(), reply_chars = reply.len(), "Completion received");
        Ok(reply)
    }

    /// Truncate to the configured character limit on a char boundary
    fn limit_text<'a>(&self, text: &'a str) -> &'a str {
        let limit = self.config.max_text_chars;
        if limit == 0 {
            return text;
        }

        match text.char_indices().nth(limit) {
            Some((byte_idx, _)) => {
                warn!("Contract text truncated to {} characters", limit);
                &text[..byte_idx]
            }
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausewise_llm::MockProvider;

    #[test]
    fn test_limit_text_unlimited() {
        let analyzer = ContractAnalyzer::new(MockProvider::default(), AnalyzerConfig::default());
        assert_eq!(analyzer.limit_text("abcdef"), "abcdef");
    }

    #[test]
    fn test_limit_text_char_boundary() {
        let config = AnalyzerConfig {
            max_text_chars: 3,
            ..AnalyzerConfig::default()
        };
        let analyzer = ContractAnalyzer::new(MockProvider::default(), config);
        assert_eq!(analyzer.limit_text("héllo"), "hél");
        assert_eq!(analyzer.limit_text("ab"), "ab");
    }
}
