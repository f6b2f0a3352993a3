use lancer_common::{LancerError, Result};
use tracing::{debug, info};
use url::Url;

use crate::extract::extract_body_text;

/// Fetch a page and return its extracted body text
///
/// The result may be empty when the page has no `<body>` tag; that is not an
/// error (see `extract_body_text`).
pub async fn fetch_page_text(client: &reqwest::Client, url: &str) -> Result<String> {
    let url = Url::parse(url)
        .map_err(|e| LancerError::invalid_input(format!("Invalid URL '{url}': {e}")))?;

    info!("Fetching page: {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| LancerError::network(format!("Failed to fetch {url}: {e}")))?
        .error_for_status()
        .map_err(|e| LancerError::scrape(format!("HTTP error for {url}: {e}")))?;

    let html = response
        .text()
        .await
        .map_err(|e| LancerError::scrape(format!("Failed to read body of {url}: {e}")))?;

    let text = extract_body_text(&html);
    debug!("Extracted {} chars from {}", text.chars().count(), url);

    Ok(text)
}
