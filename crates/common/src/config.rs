use crate::error::LancerError;
use serde::{Deserialize, Serialize};

/// Default OpenAI API endpoint
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Default Anthropic API endpoint
const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Lancer application configuration
///
/// Every component receives its endpoint, credential, model and temperature
/// from this struct at construction time. Nothing reads the process
/// environment after `from_env` returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenAI API base URL
    pub openai_base_url: String,

    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Anthropic API base URL
    pub anthropic_base_url: String,

    /// Anthropic API key
    pub anthropic_api_key: Option<String>,

    /// OpenAI chat model name
    pub openai_chat_model: String,

    /// Anthropic chat model name
    pub anthropic_chat_model: String,

    /// Embedding model name
    pub embedding_model: String,

    /// Default sampling temperature for chat requests
    pub chat_temperature: f32,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_api_key: None,
            anthropic_base_url: DEFAULT_ANTHROPIC_BASE_URL.to_string(),
            anthropic_api_key: None,
            openai_chat_model: "gpt-4o-mini".to_string(),
            anthropic_chat_model: "claude-3-5-sonnet-20241022".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            chat_temperature: 0.7,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, LancerError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();

        let config = Self {
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or(defaults.openai_base_url),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            anthropic_base_url: std::env::var("ANTHROPIC_BASE_URL")
                .unwrap_or(defaults.anthropic_base_url),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            openai_chat_model: std::env::var("OPENAI_CHAT_MODEL")
                .unwrap_or(defaults.openai_chat_model),
            anthropic_chat_model: std::env::var("ANTHROPIC_CHAT_MODEL")
                .unwrap_or(defaults.anthropic_chat_model),
            embedding_model: std::env::var("EMBEDDING_MODEL")
                .unwrap_or(defaults.embedding_model),
            chat_temperature: std::env::var("CHAT_TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.chat_temperature),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get OpenAI API key, failing when it is not configured
    pub fn require_openai_key(&self) -> Result<&str, LancerError> {
        self.openai_api_key
            .as_deref()
            .ok_or_else(|| LancerError::config("OPENAI_API_KEY is not set"))
    }

    /// Get Anthropic API key, failing when it is not configured
    pub fn require_anthropic_key(&self) -> Result<&str, LancerError> {
        self.anthropic_api_key
            .as_deref()
            .ok_or_else(|| LancerError::config("ANTHROPIC_API_KEY is not set"))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), LancerError> {
        for (name, url) in [
            ("OpenAI base URL", &self.openai_base_url),
            ("Anthropic base URL", &self.anthropic_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(LancerError::config(format!(
                    "{name} must start with http:// or https://"
                )));
            }
        }

        if self.openai_chat_model.is_empty()
            || self.anthropic_chat_model.is_empty()
            || self.embedding_model.is_empty()
        {
            return Err(LancerError::config("Model names cannot be empty"));
        }

        if !(0.0..=2.0).contains(&self.chat_temperature) {
            return Err(LancerError::config(
                "Chat temperature must be between 0.0 and 2.0",
            ));
        }

        Ok(())
    }
}
