//! Keyword highlighting markup for the enhanced-text rendering.

use regex::Regex;

/// Inline style for the colored-span rendering.
const SPAN_OPEN: &str =
    r#"<span style="background-color:#000;color:#fff;padding:0 4px;border-radius:4px;">"#;

/// Wrap every whole-word keyword occurrence in `<mark>` tags.
///
/// The text is HTML-escaped first; the markup inserted here is the only
/// markup in the output.
pub fn highlight_marked(text: &str, keywords: &[String]) -> String {
    wrap_occurrences(text, keywords, "<mark>", "</mark>")
}

/// Like [`highlight_marked`] but with a styled inline span.
pub fn highlight_spans(text: &str, keywords: &[String]) -> String {
    wrap_occurrences(text, keywords, SPAN_OPEN, "</span>")
}

/// Shared engine for both renderings.
///
/// Keywords are processed longest first so that a keyword which is a
/// substring of another ("learning" vs "machine learning") never splits or
/// nests the longer keyword's markup. Every case-insensitive whole-word
/// occurrence is wrapped, not just the first. Match ranges are claimed
/// against the escaped text and overlapping claims are dropped before any
/// markup is spliced in.
fn wrap_occurrences(text: &str, keywords: &[String], open: &str, close: &str) -> String {
    let escaped = escape_html(text);

    let mut ordered: Vec<&String> = keywords.iter().collect();
    ordered.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    let mut claimed: Vec<(usize, usize)> = Vec::new();
    for kw in ordered {
        let kw_escaped = escape_html(kw);
        let pattern = format!(r"(?i)\b{}\b", regex::escape(&kw_escaped));
        if let Ok(re) = Regex::new(&pattern) {
            for m in re.find_iter(&escaped) {
                let overlaps = claimed
                    .iter()
                    .any(|&(start, end)| m.start() < end && start < m.end());
                if !overlaps {
                    claimed.push((m.start(), m.end()));
                }
            }
        }
    }
    claimed.sort_by_key(|&(start, _)| start);

    let mut out = String::with_capacity(escaped.len() + claimed.len() * (open.len() + close.len()));
    let mut pos = 0;
    for (start, end) in claimed {
        out.push_str(&escaped[pos..start]);
        out.push_str(open);
        out.push_str(&escaped[start..end]);
        out.push_str(close);
        pos = end;
    }
    out.push_str(&escaped[pos..]);
    out
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn wraps_all_occurrences() {
        let out = highlight_marked("fox and fox", &kws(&["fox"]));
        assert_eq!(out, "<mark>fox</mark> and <mark>fox</mark>");
    }

    #[test]
    fn preserves_matched_case() {
        let out = highlight_marked("Fox food", &kws(&["fox"]));
        assert_eq!(out, "<mark>Fox</mark> food");
    }

    #[test]
    fn longer_keyword_wins_over_contained_one() {
        let out = highlight_marked("machine learning rocks", &kws(&["learning", "machine learning"]));
        assert_eq!(out, "<mark>machine learning</mark> rocks");
    }

    #[test]
    fn shorter_keyword_still_wraps_elsewhere() {
        let out = highlight_marked(
            "machine learning and learning",
            &kws(&["learning", "machine learning"]),
        );
        assert_eq!(
            out,
            "<mark>machine learning</mark> and <mark>learning</mark>"
        );
    }

    #[test]
    fn escapes_html_before_wrapping() {
        let out = highlight_marked("<b>fox</b>", &kws(&["fox"]));
        assert_eq!(out, "&lt;b&gt;<mark>fox</mark>&lt;/b&gt;");
    }

    #[test]
    fn no_partial_word_wrapping() {
        let out = highlight_marked("category", &kws(&["cat"]));
        assert_eq!(out, "category");
    }

    #[test]
    fn span_variant_uses_styled_markup() {
        let out = highlight_spans("fox", &kws(&["fox"]));
        assert!(out.starts_with("<span style="));
        assert!(out.ends_with("</span>"));
        assert!(out.contains(">fox</span>"));
    }

    #[test]
    fn empty_keywords_return_escaped_text() {
        assert_eq!(highlight_marked("a & b", &[]), "a &amp; b");
    }
}
