//! Extraction of title candidates from the service's `result` string.
//!
//! The service wraps a list-like literal in fixed framing (in practice a
//! fenced code block: "```json\n[" before and "]\n```\n" after) and returns it
//! as one string. Nothing here validates that framing: if the service changes
//! it, extraction yields garbage or nothing.

use std::sync::OnceLock;

use regex::Regex;

/// Characters dropped from the start of `result`.
pub const LEADING_WRAPPER_CHARS: usize = 9;
/// Characters dropped from the end of `result`.
pub const TRAILING_WRAPPER_CHARS: usize = 6;

fn quoted() -> &'static Regex {
    static QUOTED: OnceLock<Regex> = OnceLock::new();
    QUOTED.get_or_init(|| Regex::new(r#""(.*?)""#).expect("quoted-title pattern is valid"))
}

/// Drops the wrapper characters from `raw` and trims surrounding whitespace.
///
/// Counts characters, not bytes. Inputs no longer than the two wrappers
/// combined trim to the empty string.
#[must_use]
pub fn trim_wrapper(raw: &str) -> &str {
    let count = raw.chars().count();
    if count <= LEADING_WRAPPER_CHARS + TRAILING_WRAPPER_CHARS {
        return "";
    }
    let byte_at = |n: usize| raw.char_indices().nth(n).map_or(raw.len(), |(i, _)| i);
    let start = byte_at(LEADING_WRAPPER_CHARS);
    let end = byte_at(count - TRAILING_WRAPPER_CHARS);
    raw[start..end].trim()
}

/// Every double-quoted substring of the trimmed `raw`, in order of appearance.
#[must_use]
pub fn extract_titles(raw: &str) -> Vec<String> {
    quoted()
        .captures_iter(trim_wrapper(raw))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "PREFIX...";
    const SUFFIX: &str = "SUFFIX";

    fn wrap(inner: &str) -> String {
        format!("{PREFIX}{inner}{SUFFIX}")
    }

    #[test]
    fn wrapper_lengths_match_constants() {
        assert_eq!(PREFIX.chars().count(), LEADING_WRAPPER_CHARS);
        assert_eq!(SUFFIX.chars().count(), TRAILING_WRAPPER_CHARS);
    }

    #[test]
    fn extracts_two_titles_in_order() {
        let titles = extract_titles(&wrap(r#""Title One", "Title Two""#));
        assert_eq!(titles, vec!["Title One", "Title Two"]);
    }

    #[test]
    fn extracts_three_titles() {
        let titles = extract_titles(&wrap(r#""A", "B", "C""#));
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn fenced_code_block_framing() {
        let raw = concat!(
            "```json\n[",
            "\"I Crashed a Car on Purpose\", \"What Really Happens in a Crash\"",
            "]\n```\n"
        );
        let titles = extract_titles(raw);
        assert_eq!(titles, vec!["I Crashed a Car on Purpose", "What Really Happens in a Crash"]);
    }

    #[test]
    fn no_quotes_yields_nothing() {
        assert!(extract_titles(&wrap("")).is_empty());
        assert!(extract_titles(&wrap("just some words")).is_empty());
    }

    #[test]
    fn short_input_trims_to_empty() {
        assert_eq!(trim_wrapper(""), "");
        assert_eq!(trim_wrapper("\"A\", \"B\""), "");
        assert_eq!(trim_wrapper("123456789012345"), "");
        assert_eq!(trim_wrapper("123456789x123456"), "x");
    }

    #[test]
    fn trimming_counts_characters_not_bytes() {
        let raw = format!("ééééééééé{}¡¡¡¡¡¡", r#""Café""#);
        assert_eq!(extract_titles(&raw), vec!["Café"]);
    }

    #[test]
    fn surrounding_whitespace_is_stripped() {
        assert_eq!(trim_wrapper(&wrap("  \"A\"  ")), "\"A\"");
    }

    #[test]
    fn quotes_do_not_span_lines() {
        let titles = extract_titles(&wrap("\"A\nB\", \"C\""));
        assert_eq!(titles, vec![", "]);
    }

    #[test]
    fn empty_quotes_yield_empty_title() {
        assert_eq!(extract_titles(&wrap(r#""", "X""#)), vec!["", "X"]);
    }
}
