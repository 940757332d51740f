//! Risk module - severity tags and classified risks

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk severity
///
/// Only these three tags are accepted from model output. Anything else
/// (e.g. `critical`) is not a severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Material exposure
    High,

    /// Worth negotiating
    Medium,

    /// Minor
    Low,
}

impl Severity {
    /// Get the severity tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Parse a severity candidate, trimming and ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified contract risk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskItem {
    /// Severity tag
    pub severity: Severity,

    /// Plain-text description
    pub description: String,
}

impl RiskItem {
    /// Create a new risk item
    pub fn new(severity: Severity, description: impl Into<String>) -> Self {
        Self {
            severity,
            description: description.into(),
        }
    }
}
