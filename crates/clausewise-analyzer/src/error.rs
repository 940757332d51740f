//! Error types for the Analyzer

use thiserror::Error;

/// Fixed message for an incomplete question request
pub const MISSING_FIELDS_MESSAGE: &str = "Missing question or contract text";

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Uploaded bytes are not a readable PDF
    #[error("Failed to extract text from PDF: {0}")]
    Extraction(String),

    /// The completion service call failed
    #[error("{0}")]
    Gateway(String),

    /// Required request fields are missing
    #[error("{0}")]
    Validation(String),
}

impl AnalyzerError {
    /// Wrap any provider error, keeping its message
    pub fn gateway(e: impl std::fmt::Display) -> Self {
        AnalyzerError::Gateway(e.to_string())
    }

    /// Whether the caller is at fault rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnalyzerError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = AnalyzerError::Validation(MISSING_FIELDS_MESSAGE.to_string());
        assert_eq!(err.to_string(), "Missing question or contract text");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_gateway_keeps_provider_message() {
        let err = AnalyzerError::gateway("Rate limit exceeded: quota");
        assert_eq!(err.to_string(), "Rate limit exceeded: quota");
        assert!(!err.is_client_error());
    }
}
