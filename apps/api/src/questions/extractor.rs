//! Response Extractor — pulls the JSON candidate out of raw model text.
//!
//! Pure text transform: whether the candidate actually parses is decided by
//! the validator.

const FENCE: &str = "```";
const JSON_TAG: &str = "json";

/// Recovers the candidate JSON string from raw model output.
///
/// 1. No fence markers: the whole (trimmed) text.
/// 2. Fences present: the inner content of the first well-formed fenced block.
/// 3. Fences present but no block isolated: the text with every fence token removed.
pub fn extract_json_candidate(raw: &str) -> String {
    if !raw.contains(FENCE) {
        return raw.trim().to_string();
    }

    match first_fenced_block(raw) {
        Some(inner) => inner.trim().to_string(),
        None => strip_fence_tokens(raw),
    }
}

/// Finds the first block of the form "```[json]\n<content>\n```".
/// An opening fence that is not followed by a newline is skipped.
fn first_fenced_block(raw: &str) -> Option<&str> {
    let mut search_from = 0;

    while let Some(offset) = raw[search_from..].find(FENCE) {
        let open = search_from + offset;
        let after_fence = &raw[open + FENCE.len()..];

        if let Some(body) = strip_line_break(strip_json_tag(after_fence)) {
            if let Some(close) = body.find(&format!("\n{FENCE}")) {
                let inner = body[..close].trim_end_matches('\r');
                if !inner.trim().is_empty() {
                    return Some(inner);
                }
            }
        }

        search_from = open + FENCE.len();
    }

    None
}

fn strip_json_tag(text: &str) -> &str {
    match text.get(..JSON_TAG.len()) {
        Some(tag) if tag.eq_ignore_ascii_case(JSON_TAG) => &text[JSON_TAG.len()..],
        _ => text,
    }
}

fn strip_line_break(text: &str) -> Option<&str> {
    text.strip_prefix('\n')
        .or_else(|| text.strip_prefix("\r\n"))
}

fn strip_fence_tokens(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find(FENCE) {
        cleaned.push_str(&rest[..pos]);
        rest = strip_json_tag(&rest[pos + FENCE.len()..]);
    }
    cleaned.push_str(rest);

    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_tagged_fence_is_unwrapped() {
        let input = "```json\n[{\"text\":\"Q\"}]\n```";
        let candidate = extract_json_candidate(input);
        assert_eq!(candidate, "[{\"text\":\"Q\"}]");

        let parsed: serde_json::Value = serde_json::from_str(&candidate).unwrap();
        assert_eq!(parsed, serde_json::json!([{"text": "Q"}]));
    }

    #[test]
    fn test_untagged_fence_is_unwrapped() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json_candidate(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_no_fences_returns_trimmed_input() {
        let input = "  \n[{\"text\":\"Q\"}]\n ";
        assert_eq!(extract_json_candidate(input), "[{\"text\":\"Q\"}]");
        assert_eq!(extract_json_candidate("not json"), "not json");
    }

    #[test]
    fn test_fenced_block_surrounded_by_prose() {
        let input = "Sure! Here are your questions:\n```json\n[{\"text\":\"A\"},\n {\"text\":\"B\"}]\n```\nGood luck with the interview.";
        assert_eq!(
            extract_json_candidate(input),
            "[{\"text\":\"A\"},\n {\"text\":\"B\"}]"
        );
    }

    #[test]
    fn test_first_block_wins() {
        let input = "```json\n[1]\n```\nand also\n```json\n[2]\n```";
        assert_eq!(extract_json_candidate(input), "[1]");
    }

    #[test]
    fn test_uppercase_tag_and_crlf_are_tolerated() {
        let input = "```JSON\r\n[{\"text\":\"Q\"}]\r\n```";
        assert_eq!(extract_json_candidate(input), "[{\"text\":\"Q\"}]");
    }

    #[test]
    fn test_inline_fence_falls_back_to_stripping() {
        let input = "```json [{\"text\":\"Q\"}] ```";
        assert_eq!(extract_json_candidate(input), "[{\"text\":\"Q\"}]");
    }

    #[test]
    fn test_unterminated_fence_falls_back_to_stripping() {
        let input = "```json\n[{\"text\":\"Q\"}]";
        assert_eq!(extract_json_candidate(input), "[{\"text\":\"Q\"}]");
    }
}
