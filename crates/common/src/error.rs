/// Lancer error types
#[derive(Debug, thiserror::Error)]
pub enum LancerError {
    /// Chat model related error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Embedding related error
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Profile matching error
    #[error("Match error: {0}")]
    Match(String),

    /// Web page fetch/extraction error
    #[error("Scrape error: {0}")]
    Scrape(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LancerError {
    /// Create LLM error
    pub fn llm<S: Into<String>>(msg: S) -> Self {
        Self::Llm(msg.into())
    }

    /// Create embedding error
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        Self::Embedding(msg.into())
    }

    /// Create match error
    pub fn matching<S: Into<String>>(msg: S) -> Self {
        Self::Match(msg.into())
    }

    /// Create scrape error
    pub fn scrape<S: Into<String>>(msg: S) -> Self {
        Self::Scrape(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}
