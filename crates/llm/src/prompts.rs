//! Prompt templates for the lancer task flows

/// Prompt for one-paragraph email summarization
pub fn email_summary_prompt(email: &str) -> String {
    format!("다음 이메일을 한 문단으로 요약해줘:\n\n{}", email)
}

/// Prompt for refining a draft into more natural prose
pub fn refine_prompt(text: &str) -> String {
    format!("다음 문장을 더 자연스럽게 정리해줘:\n{}", text)
}

/// Prompt for marketing copy generation
pub fn marketing_prompt(product: &str) -> String {
    format!(
        "다음 제품에 대한 마케팅 문구를 한국어로 작성해줘: {}",
        product
    )
}

/// Prompt for summarizing a single chunk of a longer text
pub fn chunk_summary_prompt(chunk: &str) -> String {
    format!(
        "다음 텍스트를 핵심 내용을 포함하여 간결하게 요약해주세요. 중요한 정보는 빠뜨리지 마세요.\n\n텍스트:\n{}\n\n요약:",
        chunk
    )
}

/// Prompt for the reduce phase (combining chunk summaries)
pub fn reduce_prompt(summaries: &str) -> String {
    format!(
        "아래는 여러 부분 요약의 모음입니다. 중복을 제거하고 상충 내용을 조정하여 하나의 최종 요약으로 통합하세요:\n---\n{}\n---",
        summaries
    )
}

/// Prompt for extracting key facts from a summary as bullet points
pub fn keyword_extraction_prompt(summary: &str) -> String {
    format!(
        r#"다음 프로젝트 내용을 읽고 핵심 정보를 bullet point로 정리해줘.

요약: {}

출력 예시:
- 분야:
- 주요 스킬:
- 핵심 키워드:
- 투입일자:
- 위치:
- 특이사항:
"#,
        summary
    )
}
