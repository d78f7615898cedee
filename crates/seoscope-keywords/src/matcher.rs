//! Case-insensitive whole-word presence matching.

use regex::Regex;

/// Compile a case-insensitive whole-word pattern for a literal keyword.
///
/// The keyword is escaped so metacharacters (`.`, `(`, `+`) match
/// themselves. Multi-word keywords become a contiguous literal phrase with
/// boundary anchors only at the two ends.
pub(crate) fn word_regex(keyword: &str) -> Option<Regex> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword))).ok()
}

/// Whether `keyword` occurs in `text` as a whole word, ignoring case.
///
/// Whole word means the match is not adjacent to an alphanumeric or
/// underscore character on either side: "cat" matches in "cat food" but not
/// inside "category".
pub fn is_present(text: &str, keyword: &str) -> bool {
    word_regex(keyword).is_some_and(|re| re.is_match(text))
}
