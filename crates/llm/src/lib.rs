//! Lancer LLM integration
//!
//! Chat and embedding clients for the OpenAI and Anthropic APIs, plus the
//! prompt templates and summarization flows built on top of them.

mod anthropic;
mod chunking;
mod openai;
pub mod prompts;
mod summarize;
mod traits;
mod types;

pub use anthropic::AnthropicClient;
pub use chunking::chunk_text;
pub use openai::OpenAiClient;
pub use summarize::Summarizer;
pub use traits::{ChatModel, TextEmbedder};
pub use types::ChatRequest;
