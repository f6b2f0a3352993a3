use async_trait::async_trait;
use lancer_common::{LancerError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::traits::{ChatModel, TextEmbedder};
use crate::types::ChatRequest;

/// Request timeout for chat and embedding calls
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Maximum attempts per API call
const MAX_RETRIES: u32 = 3;

/// OpenAI chat completions request format
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI chat completions response format
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// OpenAI embeddings request format
#[derive(Debug, Serialize)]
struct EmbeddingsRequest {
    model: String,
    input: Vec<String>,
}

/// OpenAI embeddings response format
#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}

/// OpenAI API client
///
/// Covers the two endpoints this workspace uses: chat completions and
/// embeddings.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    embedding_model: String,
    client: Client,
}

impl OpenAiClient {
    /// Create new OpenAI client
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        embedding_model: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| LancerError::network(format!("Failed to create HTTP client: {e}")))?;

        info!("OpenAI client initialized: {}", base_url);
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            embedding_model: embedding_model.into(),
            client,
        })
    }

    /// Generate text via the chat completions endpoint (with retry)
    pub async fn generate(&self, request: ChatRequest) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        debug!(
            "Sending chat request to OpenAI - Model: {}, Prompt length: {}",
            request.model,
            request.prompt.len()
        );

        let body = ChatCompletionRequest {
            model: request.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: request.prompt,
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let mut last_error = None;

        for attempt in 1..=MAX_RETRIES {
            match self.try_generate(&url, &body).await {
                Ok(text) => {
                    debug!("Received chat response from OpenAI - Length: {}", text.len());
                    return Ok(text);
                }
                Err(e) => {
                    if attempt < MAX_RETRIES {
                        let delay = std::time::Duration::from_secs(2u64.pow(attempt - 1));
                        warn!(
                            "OpenAI chat request failed (attempt {}/{}): {}. Retrying in {:?}...",
                            attempt, MAX_RETRIES, e, delay
                        );
                        tokio::time::sleep(delay).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| LancerError::llm("All retries failed")))
    }

    /// Single chat completion attempt
    async fn try_generate(&self, url: &str, body: &ChatCompletionRequest) -> Result<String> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| LancerError::network(format!("Failed to send request: {e}")))?
            .error_for_status()
            .map_err(|e| LancerError::llm(format!("OpenAI API error: {e}")))?;

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LancerError::llm(format!("Failed to parse response: {e}")))?;

        let content = result
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(LancerError::llm("Empty response from OpenAI"));
        }

        Ok(content)
    }

    /// Generate embeddings for a batch of texts (with retry)
    ///
    /// The response order follows the vendor-reported index, so output
    /// position i corresponds to input position i.
    pub async fn embed_texts(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/v1/embeddings", self.base_url);

        debug!(
            "Generating embeddings - Model: {}, Batch size: {}",
            self.embedding_model,
            texts.len()
        );

        let body = EmbeddingsRequest {
            model: self.embedding_model.clone(),
            input: texts.to_vec(),
        };

        let mut last_error = None;

        for attempt in 1..=MAX_RETRIES {
            match self.try_embed(&url, &body).await {
                Ok(embeddings) => {
                    debug!(
                        "Received {} embeddings - Dimension: {}",
                        embeddings.len(),
                        embeddings.first().map(|e| e.len()).unwrap_or(0)
                    );
                    return Ok(embeddings);
                }
                Err(e) => {
                    last_error = Some(e);
                    if attempt < MAX_RETRIES {
                        let delay = std::time::Duration::from_secs(2u64.pow(attempt - 1));
                        warn!(
                            "Embedding request failed (attempt {}/{}). Retrying in {:?}...",
                            attempt, MAX_RETRIES, delay
                        );
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| LancerError::embedding("All retries failed")))
    }

    /// Single embeddings attempt
    async fn try_embed(&self, url: &str, body: &EmbeddingsRequest) -> Result<Vec<Vec<f32>>> {
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| LancerError::network(format!("Failed to send embedding request: {e}")))?
            .error_for_status()
            .map_err(|e| LancerError::embedding(format!("OpenAI embeddings API error: {e}")))?;

        let result: EmbeddingsResponse = response
            .json()
            .await
            .map_err(|e| LancerError::embedding(format!("Failed to parse embedding response: {e}")))?;

        if result.data.len() != body.input.len() {
            return Err(LancerError::embedding(format!(
                "Expected {} embeddings, got {}",
                body.input.len(),
                result.data.len()
            )));
        }

        // Vendor order is not guaranteed; restore input order by index.
        let mut data = result.data;
        data.sort_by_key(|d| d.index);

        Ok(data.into_iter().map(|d| d.embedding).collect())
    }
}

#[async_trait]
impl ChatModel for OpenAiClient {
    async fn generate(&self, request: ChatRequest) -> Result<String> {
        self.generate(request).await
    }
}

#[async_trait]
impl TextEmbedder for OpenAiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let embeddings = self.embed_texts(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| LancerError::embedding("Empty embedding response"))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.embed_texts(texts).await
    }
}
