//! Clausewise Domain Layer
//!
//! Request-scoped value types shared by every other crate in the workspace,
//! plus the trait boundary to the external completion service.
//!
//! ## Key Concepts
//!
//! - **Completion request**: system instruction, user prompt, temperature, model
//! - **Risk item**: a severity tag (`high`, `medium`, `low`) and a description
//! - **Date item**: a free-form label and a strict `YYYY-MM-DD` calendar date
//! - **Analysis result**: summary, risks and dates for one contract
//!
//! Nothing in this crate is persisted. Every value lives for a single
//! request/response cycle.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod completion;
pub mod date;
pub mod risk;
pub mod traits;

// Re-exports for convenience
pub use analysis::AnalysisResult;
pub use completion::CompletionRequest;
pub use date::{is_calendar_date, DateItem};
pub use risk::{RiskItem, Severity};
pub use traits::CompletionProvider;
