//! Completion request - the immutable input to one LLM call

/// Lowest accepted sampling temperature
pub const MIN_TEMPERATURE: f32 = 0.0;

/// Highest accepted sampling temperature
pub const MAX_TEMPERATURE: f32 = 1.0;

/// A single prompt sent to the completion service
///
/// Built once per call and handed to the provider by value. Fields are
/// private so the temperature invariant (`0.0..=1.0`) cannot be broken
/// after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    system_instruction: String,
    user_prompt: String,
    temperature: f32,
    model: String,
}

impl CompletionRequest {
    /// Create a new request
    ///
    /// Temperatures outside `[0, 1]` are clamped into range; NaN becomes 0.0.
    pub fn new(
        system_instruction: impl Into<String>,
        user_prompt: impl Into<String>,
        temperature: f32,
        model: impl Into<String>,
    ) -> Self {
        let temperature = if temperature.is_nan() {
            MIN_TEMPERATURE
        } else {
            temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE)
        };

        Self {
            system_instruction: system_instruction.into(),
            user_prompt: user_prompt.into(),
            temperature,
            model: model.into(),
        }
    }

    /// System (role) instruction
    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// User message
    pub fn user_prompt(&self) -> &str {
        &self.user_prompt
    }

    /// Sampling temperature in `[0, 1]`
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Model identifier
    pub fn model(&self) -> &str {
        &self.model
    }
}
