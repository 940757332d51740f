//! Request types for the question-answering path

use crate::error::{AnalyzerError, MISSING_FIELDS_MESSAGE};
use serde::{Deserialize, Serialize};

/// Question about a contract, as received from a client
///
/// Both fields are optional on the wire so that a missing field is reported
/// as a validation failure instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    /// The user's question
    #[serde(default)]
    pub question: Option<String>,

    /// Contract text the question is about
    #[serde(default)]
    pub text: Option<String>,
}

/// A question request whose required fields are present and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuestion {
    /// The user's question
    pub question: String,

    /// Contract text the question is about
    pub text: String,
}

impl AskRequest {
    /// Create a request with both fields set
    pub fn new(question: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            text: Some(text.into()),
        }
    }

    /// Check required fields
    ///
    /// # Errors
    ///
    /// `AnalyzerError::Validation` if either field is absent or empty.
    pub fn validate(self) -> Result<ValidatedQuestion, AnalyzerError> {
        match (non_empty(self.question), non_empty(self.text)) {
            (Some(question), Some(text)) => Ok(ValidatedQuestion { question, text }),
            _ => Err(AnalyzerError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
