//! Configuration for the Analyzer

use serde::Deserialize;

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-4-0125-preview";

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Model identifier sent with every completion request
    pub model: String,

    /// Maximum contract characters sent to the model (0 = unlimited)
    pub max_text_chars: usize,
}

impl AnalyzerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.model.trim().is_empty() {
            return Err("model must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_text_chars: 0,
        }
    }
}
