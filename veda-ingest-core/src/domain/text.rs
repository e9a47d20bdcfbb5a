// veda-ingest-core/src/domain/text.rs

/// Word budget used by card descriptions when the caller gives none.
pub const DEFAULT_MAX_WORDS: usize = 20;

const ELLIPSIS: char = '…';

/// Keeps ASCII letters, digits, `-` and `_`; everything else is dropped.
pub fn sanitize_filename(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// Shortens `text` to at most `max_words` words.
///
/// Text within the budget is returned verbatim, spacing included. Longer text is
/// rebuilt from its first words joined by single spaces, with `…` glued to the end.
pub fn truncate_words(text: Option<&str>, max_words: Option<usize>) -> String {
    let text = text.unwrap_or_default();
    let max_words = max_words.unwrap_or(DEFAULT_MAX_WORDS);

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }

    let mut truncated = words[..max_words].join(" ");
    truncated.push(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("valid-file_name-123"), "valid-file_name-123");
        assert_eq!(sanitize_filename("invalid@file#name!"), "invalidfilename");
        assert_eq!(sanitize_filename(""), "");
        assert_eq!(sanitize_filename("@#$%^&*()"), "");
    }

    #[test]
    fn test_sanitize_keeps_case_and_drops_non_ascii() {
        assert_eq!(sanitize_filename("Été Map.v2"), "tMapv2");
        assert_eq!(sanitize_filename("CamelCase_OK"), "CamelCase_OK");
    }

    #[test]
    fn test_truncate_within_budget_is_verbatim() {
        assert_eq!(truncate_words(Some("hello world"), Some(5)), "hello world");
        assert_eq!(truncate_words(Some("a b c"), Some(3)), "a b c");
        assert_eq!(truncate_words(Some("a   b"), Some(3)), "a   b");
    }

    #[test]
    fn test_truncate_over_budget() {
        insta::assert_snapshot!(
            truncate_words(Some("one two three four five"), Some(3)),
            @"one two three…"
        );
        assert_eq!(truncate_words(Some("a   b    c   d"), Some(2)), "a b…");
    }

    #[test]
    fn test_truncate_empty_inputs() {
        assert_eq!(truncate_words(Some(""), Some(3)), "");
        assert_eq!(truncate_words(None, Some(2)), "");
        assert_eq!(truncate_words(None, None), "");
    }

    #[test]
    fn test_truncate_default_budget() {
        let long = (1..=25).map(|i| i.to_string()).collect::<Vec<_>>().join(" ");
        let expected = format!(
            "{}…",
            (1..=20).map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
        );
        assert_eq!(truncate_words(Some(&long), None), expected);
    }

    #[test]
    fn test_truncate_to_zero_words() {
        assert_eq!(truncate_words(Some("one"), Some(0)), "…");
    }
}
