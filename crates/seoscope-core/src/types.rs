//! Analysis data model shared across the pipeline.
//!
//! Everything here is produced once per analysis request and never persisted.

use serde::{Deserialize, Serialize};

/// A label paired with a relevance score in [0, 1].
///
/// The generic shape every NLU section reduces to for keyword selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub key: String,
    pub score: f64,
}

impl ScoredItem {
    pub fn new(key: impl Into<String>, score: f64) -> Self {
        Self {
            key: key.into(),
            score,
        }
    }
}

/// A named entity extracted by the NLU service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub relevance: f64,
    pub confidence: f64,
}

/// A topic label with its score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub label: String,
    pub score: f64,
}

/// A category label with its score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub score: f64,
}

/// Spelling suggestions for a single token. Only tokens with at least one
/// suggestion are retained; pass-through display data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellingSuggestion {
    pub token: String,
    pub suggestions: Vec<String>,
}

/// One NLU response, mapped into sections.
///
/// `keywords` is the entity-derived scored list, sorted score-descending
/// (ties keep service order) and deduplicated by exact string. Matching
/// downstream is case-insensitive, so two keys differing only by case both
/// survive here; that mismatch is observed upstream behavior and is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisSections {
    pub entities: Vec<Entity>,
    pub topics: Vec<Topic>,
    pub categories: Vec<Category>,
    pub spelling: Vec<SpellingSuggestion>,
    pub keywords: Vec<ScoredItem>,
}

/// Result of inserting absent keywords into a text.
///
/// Invariant: when `was_modified` is false, `text` equals the original input
/// and `added_keywords` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AugmentedText {
    pub text: String,
    pub was_modified: bool,
    pub added_keywords: Vec<String>,
}

impl AugmentedText {
    /// The no-op result: nothing to add, text untouched.
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            was_modified: false,
            added_keywords: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_holds_invariant() {
        let a = AugmentedText::unchanged("some text");
        assert_eq!(a.text, "some text");
        assert!(!a.was_modified);
        assert!(a.added_keywords.is_empty());
    }

    #[test]
    fn augmented_text_serializes_camel_case() {
        let a = AugmentedText {
            text: "t".into(),
            was_modified: true,
            added_keywords: vec!["k".into()],
        };
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["wasModified"], true);
        assert_eq!(v["addedKeywords"][0], "k");
    }
}
