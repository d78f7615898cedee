//! Keyword insertion at a deterministic point in the text.

use seoscope_core::types::AugmentedText;

use crate::matcher::is_present;

/// Insert absent keywords into `text` as a single clause.
///
/// Keywords already present (whole-word, case-insensitive) are left alone.
/// The rest are joined into `" including a, b, c"` and spliced immediately
/// before the last `.` in the text, with trailing whitespace stripped from
/// the prefix. A text without any `.` gets the clause appended at the end,
/// with no period added. Only the last period anchors insertion, so the
/// clause always lands in the final sentence; that is a deliberate
/// simplification over linguistic insertion.
pub fn augment(text: &str, keywords: &[String]) -> AugmentedText {
    let to_add: Vec<String> = keywords
        .iter()
        .filter(|kw| !is_present(text, kw))
        .cloned()
        .collect();

    if to_add.is_empty() {
        return AugmentedText::unchanged(text);
    }

    let insertion_point = text.rfind('.').unwrap_or(text.len());
    let clause = format!(" including {}", to_add.join(", "));
    let new_text = format!(
        "{}{}{}",
        text[..insertion_point].trim_end(),
        clause,
        &text[insertion_point..]
    );

    AugmentedText {
        text: new_text,
        was_modified: true,
        added_keywords: to_add,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kws(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn inserts_before_last_period() {
        let result = augment("Dogs are loyal.", &kws(&["dogs", "training"]));
        assert_eq!(result.text, "Dogs are loyal including training.");
        assert!(result.was_modified);
        assert_eq!(result.added_keywords, vec!["training"]);
    }

    #[test]
    fn appends_when_no_period() {
        let result = augment("No punctuation here", &kws(&["topic"]));
        assert_eq!(result.text, "No punctuation here including topic");
        assert!(result.was_modified);
    }

    #[test]
    fn only_last_period_anchors() {
        let result = augment("First. Second. Third.", &kws(&["extra"]));
        assert_eq!(result.text, "First. Second. Third including extra.");
    }

    #[test]
    fn no_op_on_empty_keywords() {
        let result = augment("Any text at all.", &[]);
        assert_eq!(result, AugmentedText::unchanged("Any text at all."));
    }

    #[test]
    fn no_op_when_all_present() {
        let result = augment("Dogs love training daily.", &kws(&["dogs", "training"]));
        assert!(!result.was_modified);
        assert_eq!(result.text, "Dogs love training daily.");
        assert!(result.added_keywords.is_empty());
    }

    #[test]
    fn added_keywords_preserve_relative_order() {
        let result = augment(
            "Bees make honey.",
            &kws(&["alpha", "honey", "beta", "gamma"]),
        );
        assert_eq!(result.added_keywords, vec!["alpha", "beta", "gamma"]);
        assert_eq!(result.text, "Bees make honey including alpha, beta, gamma.");
    }

    #[test]
    fn augmentation_is_idempotent_when_unmodified() {
        let keywords = kws(&["dogs", "loyal"]);
        let first = augment("Dogs are loyal.", &keywords);
        assert!(!first.was_modified);
        let second = augment(&first.text, &keywords);
        assert!(!second.was_modified);
    }

    #[test]
    fn inserted_keywords_are_present_afterwards() {
        let keywords = kws(&["training", "treats"]);
        let first = augment("Dogs are loyal.", &keywords);
        assert!(first.was_modified);
        let second = augment(&first.text, &keywords);
        assert!(!second.was_modified);
        assert_eq!(second.text, first.text);
    }

    #[test]
    fn case_mismatched_duplicates_both_inserted() {
        // Selection dedup is case-sensitive while matching is not, so "SEO"
        // and "seo" can both arrive here; both are absent and both get
        // spliced in. Observed upstream behavior, kept as-is.
        let result = augment("Plain text.", &kws(&["SEO", "seo"]));
        assert_eq!(result.added_keywords, vec!["SEO", "seo"]);
        assert_eq!(result.text, "Plain text including SEO, seo.");
    }

    #[test]
    fn strips_whitespace_before_insertion_point() {
        let result = augment("Trailing spaces   .", &kws(&["extra"]));
        assert_eq!(result.text, "Trailing spaces including extra.");
    }
}
