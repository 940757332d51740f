//! Clausewise Analyzer
//!
//! Turns an uploaded contract into a summary, a list of classified risks and
//! a list of important dates, and answers free-form questions about contract
//! text. The analysis itself is delegated to an LLM completion service; this
//! crate owns the prompts and the parsing of the model's replies.
//!
//! # Architecture
//!
//! ```text
//!                 ┌─▶ summary prompt ─▶ LLM ─▶ parse_summary ─┐
//! PDF → extract ──┼─▶ risk prompt    ─▶ LLM ─▶ parse_risks   ─┼─▶ AnalysisResult
//!                 └─▶ date prompt    ─▶ LLM ─▶ parse_dates   ─┘
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use clausewise_analyzer::{AnalyzerConfig, AskRequest, ContractAnalyzer};
//! use clausewise_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new("high: Uncapped liability");
//! let analyzer = ContractAnalyzer::new(llm, AnalyzerConfig::default());
//!
//! let pdf = std::fs::read("contract.pdf")?;
//! let result = analyzer.analyze(pdf).await?;
//! println!("{} risks found", result.risks.len());
//!
//! let answer = analyzer
//!     .ask(AskRequest::new("Who pays for repairs?", "The tenant pays for repairs."))
//!     .await?;
//! println!("{}", answer);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod parser;
mod pdf;
mod prompt;
mod types;

#[cfg(test)]
mod tests;

pub use analyzer::ContractAnalyzer;
pub use config::{AnalyzerConfig, DEFAULT_MODEL};
pub use error::{AnalyzerError, MISSING_FIELDS_MESSAGE};
pub use parser::{parse_dates, parse_risks, parse_summary};
pub use pdf::{extract_text, looks_like_pdf};
pub use prompt::{AnalysisTask, PromptBuilder};
pub use types::{AskRequest, ValidatedQuestion};
