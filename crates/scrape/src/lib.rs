//! Lancer web page text extraction
//!
//! Fetches a news page and reduces it to plain body text for summarization.
//! This is a narrow text-processing utility, not a general HTML parser.

mod extract;
mod fetch;

pub use extract::extract_body_text;
pub use fetch::fetch_page_text;
