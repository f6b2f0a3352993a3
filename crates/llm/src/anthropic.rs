use async_trait::async_trait;
use lancer_common::{LancerError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::traits::ChatModel;
use crate::types::ChatRequest;

/// Request timeout for messages calls
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Maximum attempts per API call
const MAX_RETRIES: u32 = 3;

/// API version header value required by the messages endpoint
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Token limit applied when the caller does not set one; the messages
/// endpoint rejects requests without max_tokens.
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Anthropic messages request format
#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

/// Anthropic messages response format
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// Anthropic API client
///
/// Messages endpoint only; the vendor has no embeddings API.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl AnthropicClient {
    /// Create new Anthropic client
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| LancerError::network(format!("Failed to create HTTP client: {e}")))?;

        info!("Anthropic client initialized: {}", base_url);
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            client,
        })
    }

    /// Generate text via the messages endpoint (with retry)
    pub async fn generate(&self, request: ChatRequest) -> Result<String> {
        let url = format!("{}/v1/messages", self.base_url);

        debug!(
            "Sending messages request to Anthropic - Model: {}, Prompt length: {}",
            request.model,
            request.prompt.len()
        );

        let body = MessagesRequest {
            model: request.model,
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            messages: vec![Message {
                role: "user".to_string(),
                content: request.prompt,
            }],
            temperature: request.temperature,
        };

        let mut last_error = None;

        for attempt in 1..=MAX_RETRIES {
            match self.try_generate(&url, &body).await {
                Ok(text) => {
                    debug!(
                        "Received messages response from Anthropic - Length: {}",
                        text.len()
                    );
                    return Ok(text);
                }
                Err(e) => {
                    if attempt < MAX_RETRIES {
                        let delay = std::time::Duration::from_secs(2u64.pow(attempt - 1));
                        warn!(
                            "Anthropic request failed (attempt {}/{}): {}. Retrying in {:?}...",
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

    /// Single messages attempt
    async fn try_generate(&self, url: &str, body: &MessagesRequest) -> Result<String> {
        let response = self
            .client
            .post(url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(body)
            .send()
            .await
            .map_err(|e| LancerError::network(format!("Failed to send request: {e}")))?
            .error_for_status()
            .map_err(|e| LancerError::llm(format!("Anthropic API error: {e}")))?;

        let result: MessagesResponse = response
            .json()
            .await
            .map_err(|e| LancerError::llm(format!("Failed to parse response: {e}")))?;

        let text: String = result
            .content
            .into_iter()
            .filter(|block| block.kind == "text")
            .map(|block| block.text)
            .collect();

        if text.is_empty() {
            return Err(LancerError::llm("Empty response from Anthropic"));
        }

        Ok(text)
    }
}

#[async_trait]
impl ChatModel for AnthropicClient {
    async fn generate(&self, request: ChatRequest) -> Result<String> {
        self.generate(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_request_serialization() {
        let body = MessagesRequest {
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 1024,
            messages: vec![Message {
                role: "user".to_string(),
                content: "다음 문장을 정리해줘".to_string(),
            }],
            temperature: Some(0.5),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "claude-3-5-sonnet-20241022");
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["temperature"], 0.5);
    }

    #[test]
    fn test_messages_response_deserialization() {
        let raw = r#"{
            "id": "msg_123",
            "content": [
                {"type": "text", "text": "정리된 "},
                {"type": "text", "text": "문장입니다."}
            ]
        }"#;

        let response: MessagesResponse = serde_json::from_str(raw).unwrap();
        let text: String = response
            .content
            .into_iter()
            .filter(|b| b.kind == "text")
            .map(|b| b.text)
            .collect();
        assert_eq!(text, "정리된 문장입니다.");
    }

    #[test]
    fn test_non_text_blocks_ignored() {
        let raw = r#"{"content": [{"type": "tool_use", "id": "t1"}]}"#;
        let response: MessagesResponse = serde_json::from_str(raw).unwrap();
        let text: String = response
            .content
            .into_iter()
            .filter(|b| b.kind == "text")
            .map(|b| b.text)
            .collect();
        assert!(text.is_empty());
    }
}
