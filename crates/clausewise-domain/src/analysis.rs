//! Analysis result - the combined output for one contract

use crate::{DateItem, RiskItem};
use serde::{Deserialize, Serialize};

/// Summary, risks and dates for one uploaded contract
///
/// Risks and dates keep the order in which the model listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Short plain-text summary
    pub summary: String,

    /// Classified risks
    pub risks: Vec<RiskItem>,

    /// Important dates
    pub dates: Vec<DateItem>,
}
