//! Bounded context windows around keyword occurrences.

use regex::Regex;
use seoscope_core::config::DEFAULT_SNIPPET_WINDOW;

/// Capture a character window around the first occurrence of each keyword.
///
/// For each keyword, in input order, the first case-insensitive whole-word
/// match in `text` is located and up to `window_chars` characters on each
/// side are captured (a raw character count, not word-aligned, so partial
/// words at the boundary are kept). The window never crosses a line break.
/// Keywords with no match contribute no entry, so the output may be shorter
/// than the input. Entries are trimmed of surrounding whitespace. Recomputed
/// fresh on each call; nothing is cached.
pub fn snippets(text: &str, keywords: &[String], window_chars: usize) -> Vec<String> {
    let mut out = Vec::new();
    for kw in keywords {
        let pattern = format!(
            r"(?i).{{0,{w}}}\b{kw}\b.{{0,{w}}}",
            w = window_chars,
            kw = regex::escape(kw)
        );
        if let Ok(re) = Regex::new(&pattern) {
            if let Some(m) = re.find(text) {
                out.push(m.as_str().trim().to_string());
            }
        }
    }
    out
}

/// [`snippets`] with the default window radius.
pub fn snippets_default(text: &str, keywords: &[String]) -> Vec<String> {
    snippets(text, keywords, DEFAULT_SNIPPET_WINDOW)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn captures_window_around_match() {
        let out = snippets("The quick brown fox jumps", &kws(&["fox"]), 5);
        assert_eq!(out, vec!["rown fox jump"]);
    }

    #[test]
    fn window_is_raw_characters_not_word_aligned() {
        let out = snippets("aaaa keyword bbbb", &kws(&["keyword"]), 2);
        assert_eq!(out, vec!["a keyword b"]);
    }

    #[test]
    fn only_first_occurrence_captured() {
        let out = snippets("fox here and fox there", &kws(&["fox"]), 4);
        assert_eq!(out, vec!["fox her"]);
    }

    #[test]
    fn unmatched_keywords_contribute_nothing() {
        let out = snippets("nothing relevant", &kws(&["fox", "relevant"]), 5);
        assert_eq!(out.len(), 1);
        assert!(out[0].contains("relevant"));
    }

    #[test]
    fn match_is_case_insensitive_and_whole_word() {
        assert_eq!(snippets("The Fox runs", &kws(&["fox"]), 4), vec!["The Fox run"]);
        assert!(snippets("foxes run", &kws(&["fox"]), 4).is_empty());
    }

    #[test]
    fn entries_are_trimmed() {
        let out = snippets("   fox  y", &kws(&["fox"]), 3);
        assert_eq!(out, vec!["fox  y"]);
    }

    #[test]
    fn keeps_original_case() {
        let out = snippets("Rust and Tokio shine", &kws(&["tokio"]), 6);
        assert_eq!(out, vec!["t and Tokio shine"]);
    }
}
