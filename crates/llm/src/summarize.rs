use std::sync::Arc;

use lancer_common::Result;
use tracing::{debug, info};

use crate::chunking::chunk_text;
use crate::prompts;
use crate::traits::ChatModel;
use crate::types::ChatRequest;

/// Inputs shorter than this are summarized in one call
const DIRECT_LIMIT_CHARS: usize = 8000;

/// Window size for the map phase
const CHUNK_CHARS: usize = 6000;

/// Window overlap for the map phase
const CHUNK_OVERLAP_CHARS: usize = 600;

/// Summarizer for long text using a map-reduce strategy
///
/// Works against the `ChatModel` seam, so any provider (or a test stand-in)
/// can back it.
pub struct Summarizer {
    model: Arc<dyn ChatModel>,
    chat_model: String,
}

impl Summarizer {
    /// Create new summarizer
    pub fn new(model: Arc<dyn ChatModel>, chat_model: impl Into<String>) -> Self {
        Self {
            model,
            chat_model: chat_model.into(),
        }
    }

    /// Summarize text, chunking long inputs into a map-reduce pass
    ///
    /// Chunk summaries are produced strictly one after another; there is no
    /// parallel fan-out.
    pub async fn summarize(&self, text: &str) -> Result<String> {
        info!("Starting summarization - Text length: {} chars", text.chars().count());

        if text.chars().count() < DIRECT_LIMIT_CHARS {
            debug!("Text is short, using direct summarization");
            return self.summarize_direct(text).await;
        }

        // Map phase: summarize each window
        let chunks = chunk_text(text, CHUNK_CHARS, CHUNK_OVERLAP_CHARS);
        info!("Split text into {} chunks", chunks.len());

        let mut chunk_summaries = Vec::new();
        for (i, chunk) in chunks.iter().enumerate() {
            debug!("Summarizing chunk {}/{}", i + 1, chunks.len());
            let request = ChatRequest::new(&self.chat_model, prompts::chunk_summary_prompt(chunk))
                .with_temperature(0.3)
                .with_max_tokens(500);
            chunk_summaries.push(self.model.generate(request).await?);
        }

        // Reduce phase: merge the partial summaries
        let combined = chunk_summaries.join("\n\n");
        info!("Combined chunk summaries - Length: {} chars", combined.chars().count());

        let request = ChatRequest::new(&self.chat_model, prompts::reduce_prompt(&combined))
            .with_temperature(0.3)
            .with_max_tokens(1000);
        self.model.generate(request).await
    }

    /// Direct summarization (for shorter texts)
    async fn summarize_direct(&self, text: &str) -> Result<String> {
        let request = ChatRequest::new(&self.chat_model, prompts::chunk_summary_prompt(text))
            .with_temperature(0.3)
            .with_max_tokens(1000);
        self.model.generate(request).await
    }

    /// Extract key facts from a summary as bullet points
    pub async fn extract_keywords(&self, summary: &str) -> Result<String> {
        let request =
            ChatRequest::new(&self.chat_model, prompts::keyword_extraction_prompt(summary))
                .with_temperature(0.2)
                .with_max_tokens(500);

        let response = self.model.generate(request).await?;
        Ok(response.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every prompt it receives and replies with a canned line
    struct RecordingModel {
        prompts: Mutex<Vec<String>>,
    }

    impl RecordingModel {
        fn new() -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatModel for RecordingModel {
        async fn generate(&self, request: ChatRequest) -> Result<String> {
            self.prompts.lock().unwrap().push(request.prompt);
            Ok("요약 결과".to_string())
        }
    }

    #[tokio::test]
    async fn test_short_text_summarized_in_one_call() {
        let model = Arc::new(RecordingModel::new());
        let summarizer = Summarizer::new(model.clone(), "gpt-4o-mini");

        let summary = summarizer.summarize("짧은 회의록입니다.").await.unwrap();
        assert_eq!(summary, "요약 결과");
        assert_eq!(model.prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_long_text_runs_map_reduce() {
        let model = Arc::new(RecordingModel::new());
        let summarizer = Summarizer::new(model.clone(), "gpt-4o-mini");

        let text = "기사 문장입니다. ".repeat(1000);
        summarizer.summarize(&text).await.unwrap();

        let prompts = model.prompts.lock().unwrap();
        // At least two chunk calls plus the reduce call
        assert!(prompts.len() >= 3);
        assert!(prompts.last().unwrap().contains("최종 요약으로 통합"));
    }

    #[tokio::test]
    async fn test_extract_keywords_trims_response() {
        let model = Arc::new(RecordingModel::new());
        let summarizer = Summarizer::new(model, "gpt-4o-mini");

        let keywords = summarizer.extract_keywords("React 프로젝트 요약").await.unwrap();
        assert_eq!(keywords, "요약 결과");
    }
}
