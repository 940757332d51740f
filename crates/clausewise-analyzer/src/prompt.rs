//! LLM prompt templates for contract analysis
//!
//! Each task pairs a fixed system instruction with a fixed user-message
//! template and a fixed sampling temperature.

use clausewise_domain::CompletionRequest;

/// The four kinds of completion the service issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisTask {
    /// Two or three sentence plain-text summary
    Summary,
    /// Severity-tagged risk list
    Risks,
    /// Typed date list
    Dates,
    /// Free-form question about the contract
    Question,
}

impl AnalysisTask {
    /// Task name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisTask::Summary => "summary",
            AnalysisTask::Risks => "risks",
            AnalysisTask::Dates => "dates",
            AnalysisTask::Question => "question",
        }
    }

    /// System instruction sent with this task
    pub fn system_instruction(&self) -> &'static str {
        match self {
            AnalysisTask::Summary => SUMMARY_INSTRUCTIONS,
            AnalysisTask::Risks => RISK_INSTRUCTIONS,
            AnalysisTask::Dates => DATE_INSTRUCTIONS,
            AnalysisTask::Question => QUESTION_INSTRUCTIONS,
        }
    }

    /// Sampling temperature; lower for the more structured outputs
    pub fn temperature(&self) -> f32 {
        match self {
            AnalysisTask::Summary => 0.3,
            AnalysisTask::Risks => 0.2,
            AnalysisTask::Dates => 0.1,
            AnalysisTask::Question => 0.3,
        }
    }
}

/// Builds completion requests for one contract
pub struct PromptBuilder<'a> {
    task: AnalysisTask,
    text: &'a str,
    question: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(task: AnalysisTask, text: &'a str) -> Self {
        Self {
            task,
            text,
            question: "",
        }
    }

    /// Set the question (only used by `AnalysisTask::Question`)
    pub fn with_question(mut self, question: &'a str) -> Self {
        self.question = question;
        self
    }

    /// Task this prompt is for
    pub fn task(&self) -> AnalysisTask {
        self.task
    }

    /// Build the user message
    pub fn user_prompt(&self) -> String {
        match self.task {
            AnalysisTask::Summary => format!("Summarize this contract:\n\n{}", self.text),
            AnalysisTask::Risks => {
                format!("What are the key risks in this contract?\n\n{}", self.text)
            }
            AnalysisTask::Dates => format!(
                "Extract important dates from this contract. Format: type: YYYY-MM-DD (one per line):\n\n{}",
                self.text
            ),
            AnalysisTask::Question => {
                format!("Contract text: {}\n\nQuestion: {}", self.text, self.question)
            }
        }
    }

    /// Build the complete request for `model`
    pub fn build(&self, model: &str) -> CompletionRequest {
        CompletionRequest::new(
            self.task.system_instruction(),
            self.user_prompt(),
            self.task.temperature(),
            model,
        )
    }
}

const SUMMARY_INSTRUCTIONS: &str = "You are a legal document analyzer. Provide a clear, concise summary in 2-3 short sentences maximum.
Focus only on the core agreement points.
DO NOT use any special characters or formatting (no **, ##, -, etc.).
Keep it simple and direct.";

const RISK_INSTRUCTIONS: &str = "Analyze the contract for risks. For each risk:
1. Classify severity as EXACTLY 'high', 'medium', or 'low'
2. Provide a clear, direct description without any formatting
3. Limit to 3-4 most important risks

Format: severity: description";

const DATE_INSTRUCTIONS: &str = "Extract important dates in YYYY-MM-DD format only. Focus on deadlines, effective dates, and termination dates.";

const QUESTION_INSTRUCTIONS: &str =
    "You are a helpful assistant that answers questions about contracts. Provide clear, direct answers.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompts() {
        let text = "This Agreement is made...";
        assert_eq!(
            PromptBuilder::new(AnalysisTask::Summary, text).user_prompt(),
            "Summarize this contract:\n\nThis Agreement is made..."
        );
        assert_eq!(
            PromptBuilder::new(AnalysisTask::Risks, text).user_prompt(),
            "What are the key risks in this contract?\n\nThis Agreement is made..."
        );
        assert_eq!(
            PromptBuilder::new(AnalysisTask::Dates, text).user_prompt(),
            "Extract important dates from this contract. Format: type: YYYY-MM-DD (one per line):\n\nThis Agreement is made..."
        );
        assert_eq!(
            PromptBuilder::new(AnalysisTask::Question, text)
                .with_question("Who signs?")
                .user_prompt(),
            "Contract text: This Agreement is made...\n\nQuestion: Who signs?"
        );
    }

    #[test]
    fn test_temperatures() {
        assert_eq!(AnalysisTask::Summary.temperature(), 0.3);
        assert_eq!(AnalysisTask::Risks.temperature(), 0.2);
        assert_eq!(AnalysisTask::Dates.temperature(), 0.1);
        assert_eq!(AnalysisTask::Question.temperature(), 0.3);
    }

    #[test]
    fn test_risk_instructions_name_all_severities() {
        let instructions = AnalysisTask::Risks.system_instruction();
        for tag in ["'high'", "'medium'", "'low'"] {
            assert!(instructions.contains(tag));
        }
        assert!(instructions.contains("Format: severity: description"));
    }

    #[test]
    fn test_build_request() {
        let request = PromptBuilder::new(AnalysisTask::Dates, "text").build("gpt-4o");
        assert_eq!(request.model(), "gpt-4o");
        assert_eq!(request.temperature(), 0.1);
        assert!(request.system_instruction().contains("YYYY-MM-DD"));
        assert!(request.user_prompt().ends_with("\n\ntext"));
    }
}
