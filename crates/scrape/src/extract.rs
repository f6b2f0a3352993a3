use std::sync::OnceLock;

use regex::Regex;

/// Maximum extracted length in characters, to keep prompts within model
/// context limits
pub(crate) const MAX_TEXT_CHARS: usize = 5000;

fn body_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Non-greedy so nested or repeated </body> stops at the first close tag
    RE.get_or_init(|| Regex::new(r"(?is)<body[^>]*>(.*?)</body>").expect("valid body regex"))
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid tag regex"))
}

/// Extract plain text from the `<body>` of an HTML document
///
/// Strips every tag inside the body and trims surrounding whitespace. A
/// document without a `<body>` tag yields an empty string — "no content" and
/// "nothing extractable" are deliberately the same value here, and callers
/// that care check for emptiness.
pub fn extract_body_text(html: &str) -> String {
    let body = match body_re().captures(html) {
        Some(captures) => captures[1].to_string(),
        None => return String::new(),
    };

    let text = tag_re().replace_all(&body, "");
    truncate_chars(text.trim(), MAX_TEXT_CHARS)
}

/// Truncate to at most `max` characters without splitting a code point
fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_inside_body() {
        let html = "<html><body>Hello<b>World</b></body></html>";
        assert_eq!(extract_body_text(html), "HelloWorld");
    }

    #[test]
    fn test_missing_body_yields_empty_string() {
        let html = "<html><head><title>제목</title></head></html>";
        assert_eq!(extract_body_text(html), "");
    }

    #[test]
    fn test_body_attributes_and_case() {
        let html = "<HTML><BODY class=\"page\">기사 본문</BODY></HTML>";
        assert_eq!(extract_body_text(html), "기사 본문");
    }

    #[test]
    fn test_non_greedy_stops_at_first_close() {
        let html = "<body>first</body><body>second</body>";
        assert_eq!(extract_body_text(html), "first");
    }

    #[test]
    fn test_multiline_body() {
        let html = "<body>\n<p>줄 하나</p>\n<p>줄 둘</p>\n</body>";
        assert_eq!(extract_body_text(html), "줄 하나\n줄 둘");
    }

    #[test]
    fn test_truncates_long_text() {
        let html = format!("<body>{}</body>", "가".repeat(MAX_TEXT_CHARS + 100));
        let text = extract_body_text(&html);
        assert_eq!(text.chars().count(), MAX_TEXT_CHARS);
    }
}
