use async_trait::async_trait;
use lancer_common::Result;

use crate::types::ChatRequest;

/// Common trait for chat-completion providers
///
/// Flows depend on this seam instead of a concrete client so they can be
/// exercised with deterministic stand-ins.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate text from a prompt
    async fn generate(&self, request: ChatRequest) -> Result<String>;
}

/// Common trait for text embedding providers
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Generate an embedding vector for one text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embedding vectors for a batch of texts
    ///
    /// Any failure aborts the whole batch; there is no partial result.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}
