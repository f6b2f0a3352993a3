//! Task command implementations
//!
//! Each command wires config → clients → flow → stdout explicitly. Model
//! calls inside one command run strictly one after another.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use lancer_common::{AppConfig, LancerError};
use lancer_llm::{
    prompts, AnthropicClient, ChatModel, ChatRequest, OpenAiClient, Summarizer, TextEmbedder,
};
use lancer_matcher::{load_profiles, MatchOptions, ProfileMatcher};
use lancer_scrape::fetch_page_text;

use crate::Provider;

/// Page fetch timeout; article pages are small compared to model calls
const FETCH_TIMEOUT_SECS: u64 = 30;

fn openai_client(config: &AppConfig) -> Result<OpenAiClient> {
    Ok(OpenAiClient::new(
        &config.openai_base_url,
        config.require_openai_key()?,
        &config.embedding_model,
    )?)
}

fn anthropic_client(config: &AppConfig) -> Result<AnthropicClient> {
    Ok(AnthropicClient::new(
        &config.anthropic_base_url,
        config.require_anthropic_key()?,
    )?)
}

/// One-shot prompt against the chosen provider
pub async fn run_chat(config: &AppConfig, provider: Provider, prompt: &str) -> Result<()> {
    let response = match provider {
        Provider::Openai => {
            let client = openai_client(config)?;
            let request = ChatRequest::new(&config.openai_chat_model, prompt)
                .with_temperature(config.chat_temperature);
            client.generate(request).await?
        }
        Provider::Anthropic => {
            let client = anthropic_client(config)?;
            let request = ChatRequest::new(&config.anthropic_chat_model, prompt)
                .with_temperature(config.chat_temperature);
            client.generate(request).await?
        }
    };

    println!("{response}");
    Ok(())
}

/// Summarize an email with GPT, then refine the original with Claude
pub async fn run_email(config: &AppConfig, file: Option<impl AsRef<Path>>) -> Result<()> {
    let email = match file {
        Some(path) => std::fs::read_to_string(path.as_ref())?,
        None => {
            println!("이메일 본문을 입력해 주세요. (입력을 마치면 Ctrl-D)");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if email.trim().is_empty() {
        return Err(LancerError::invalid_input("Email content is empty").into());
    }

    let gpt = openai_client(config)?;
    let summary_request =
        ChatRequest::new(&config.openai_chat_model, prompts::email_summary_prompt(&email))
            .with_temperature(0.3);
    let summary = gpt.generate(summary_request).await?;

    println!("\n📌 GPT 요약:\n{summary}");

    let claude = anthropic_client(config)?;
    let refine_request =
        ChatRequest::new(&config.anthropic_chat_model, prompts::refine_prompt(&email))
            .with_temperature(0.5);
    let refined = claude.generate(refine_request).await?;

    println!("\n📝 Claude 정리:\n{refined}");
    Ok(())
}

/// Generate marketing copy for a product
pub async fn run_marketing(config: &AppConfig, product: &str) -> Result<()> {
    let client = openai_client(config)?;
    let request = ChatRequest::new(&config.openai_chat_model, prompts::marketing_prompt(product))
        .with_temperature(config.chat_temperature);

    let copy = client.generate(request).await?;
    println!("📣 마케팅 문구:\n{copy}");
    Ok(())
}

/// Fetch a news article, summarize it and extract keywords
pub async fn run_news(config: &AppConfig, url: &str) -> Result<()> {
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(|e| LancerError::network(format!("Failed to create HTTP client: {e}")))?;

    let article = fetch_page_text(&http, url).await?;
    if article.is_empty() {
        return Err(LancerError::scrape(format!("No body text extracted from {url}")).into());
    }

    let model: Arc<dyn ChatModel> = Arc::new(openai_client(config)?);
    let summarizer = Summarizer::new(model, &config.openai_chat_model);

    let summary = summarizer.summarize(&article).await?;
    println!("✅ 요약 결과:\n{summary}");

    let keywords = summarizer.extract_keywords(&summary).await?;
    println!("\n📌 요점 및 키워드 추출:\n{keywords}");
    Ok(())
}

/// Match freelancer profiles against a project description
pub async fn run_match(
    config: &AppConfig,
    csv: &Path,
    query: &str,
    threshold: f32,
    limit: usize,
) -> Result<()> {
    let profiles = load_profiles(csv)?;

    let embedder: Arc<dyn TextEmbedder> = Arc::new(openai_client(config)?);
    let matcher = ProfileMatcher::new(embedder);
    let options = MatchOptions { threshold, limit };

    let matches = matcher.find_matches(query, &profiles, &options).await?;

    if matches.is_empty() {
        println!("조건을 만족하는 프리랜서가 없습니다.");
        return Ok(());
    }

    println!("🔍 프로젝트에 어울리는 프리랜서 추천:");
    for (index, m) in matches.iter().enumerate() {
        println!("\n#{}", index + 1);
        println!("🧑‍💻 내용: {}", m.profile.content());
        println!("📊 매칭 점수(유사도): {:.3}", m.score);
    }

    Ok(())
}
