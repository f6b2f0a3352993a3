/// Characters that may end a sentence, used as preferred break points
const SENTENCE_ENDINGS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Split text into overlapping windows of at most `max_chars` characters
///
/// Windows prefer to break just after a sentence ending found in the last
/// fifth of the window. Counting is by character, never by byte, so mixed
/// Korean/English input cannot split inside a code point.
pub fn chunk_text(text: &str, max_chars: usize, overlap_chars: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();

    if max_chars == 0 || chars.len() <= max_chars {
        return vec![text.to_string()];
    }

    // Overlap must leave room for forward progress.
    let overlap = overlap_chars.min(max_chars / 2);

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let ideal_end = (start + max_chars).min(chars.len());

        let end = if ideal_end < chars.len() {
            find_break_point(&chars, start, ideal_end)
        } else {
            ideal_end
        };

        chunks.push(chars[start..end].iter().collect());

        if end >= chars.len() {
            break;
        }

        start = (end - overlap).max(start + 1);
    }

    chunks
}

/// Find a break point just after the last sentence ending in the final fifth
/// of the window, falling back to the window end
fn find_break_point(chars: &[char], start: usize, ideal_end: usize) -> usize {
    let search_from = start + (ideal_end - start) * 4 / 5;

    for idx in (search_from..ideal_end).rev() {
        if SENTENCE_ENDINGS.contains(&chars[idx]) {
            return idx + 1;
        }
    }

    ideal_end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_chunk() {
        let text = "This is a short text.";
        let chunks = chunk_text(text, 100, 10);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], text);
    }

    #[test]
    fn test_long_text_multiple_chunks() {
        let text = "First sentence. Second sentence. Third sentence. Fourth sentence.";
        let chunks = chunk_text(text, 20, 4);
        assert!(chunks.len() > 1);
        // Reassembled chunks must cover the whole input
        let combined: String = chunks.concat();
        assert!(combined.len() >= text.len());
    }

    #[test]
    fn test_breaks_after_sentence_ending() {
        let text = "가나다라. 마바사아자차카타파하 구절이 이어집니다. 끝문장입니다.";
        let chunks = chunk_text(text, 30, 0);
        assert!(chunks[0].ends_with('.'));
    }

    #[test]
    fn test_korean_text_does_not_panic() {
        let text = "한글 문장입니다. ".repeat(50);
        let chunks = chunk_text(&text, 37, 5);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 37);
        }
    }

    #[test]
    fn test_zero_max_chars_returns_whole_text() {
        let chunks = chunk_text("abc", 0, 0);
        assert_eq!(chunks, vec!["abc".to_string()]);
    }
}
