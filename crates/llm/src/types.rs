/// Provider-neutral chat request
///
/// Carries the prompt together with the model and sampling parameters the
/// caller chose, so one flow can target either provider.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Model name (e.g., "gpt-4o-mini", "claude-3-5-sonnet-20241022")
    pub model: String,

    /// Prompt text
    pub prompt: String,

    /// Sampling temperature
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a request with default sampling parameters
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the generation length limit
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}
