//! TextRazor API client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use seoscope_core::{
    AnalysisSections, Category, Entity, Error, Result, ScoredItem, SpellingSuggestion, Topic,
};

use crate::Analyzer;

pub const TEXTRAZOR_URL: &str = "https://api.textrazor.com";

/// Extractors requested on every analysis call.
const EXTRACTORS: &str = "entities,topics,categories,spelling";

/// HTTP client for the TextRazor analysis API.
pub struct TextRazorClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl TextRazorClient {
    pub fn new(http: Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            base_url: TEXTRAZOR_URL.to_string(),
        }
    }

    /// Construct from `TEXTRAZOR_API_KEY`, if set.
    pub fn from_env(http: Client) -> Option<Self> {
        std::env::var("TEXTRAZOR_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .map(|key| Self::new(http, key))
    }

    /// Override the endpoint (used by tests against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Analyzer for TextRazorClient {
    async fn analyze(&self, text: &str) -> Result<AnalysisSections> {
        debug!("Analyzing {} chars via TextRazor", text.len());

        let params = [("text", text), ("extractors", EXTRACTORS)];
        let response = self
            .http
            .post(&self.base_url)
            .header("x-textrazor-key", &self.api_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Analyze(format!("TextRazor error {}: {}", status, body)));
        }

        let raw: RawResponse = response
            .json()
            .await
            .map_err(|e| Error::Analyze(format!("Malformed TextRazor response: {}", e)))?;

        Ok(map_sections(raw.response))
    }
}

// ---------------------------------------------------------------
// Response mapping
// ---------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct RawResponse {
    #[serde(default)]
    response: RawAnalysis,
}

#[derive(Debug, Default, Deserialize)]
struct RawAnalysis {
    #[serde(default)]
    entities: Vec<RawEntity>,
    #[serde(default)]
    topics: Vec<RawTopic>,
    #[serde(default)]
    categories: Vec<RawCategory>,
    #[serde(default)]
    words: Vec<RawWord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEntity {
    #[serde(default)]
    entity_id: String,
    #[serde(default)]
    relevance_score: f64,
    #[serde(default)]
    confidence_score: f64,
}

#[derive(Debug, Deserialize)]
struct RawTopic {
    #[serde(default)]
    label: String,
    #[serde(default)]
    score: f64,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    #[serde(default)]
    label: String,
    #[serde(default)]
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWord {
    #[serde(default)]
    token: String,
    #[serde(default)]
    spelling_suggestions: Vec<RawSuggestion>,
}

#[derive(Debug, Deserialize)]
struct RawSuggestion {
    #[serde(default)]
    suggestion: String,
}

/// Map a raw TextRazor payload into pipeline sections.
///
/// The keyword list is derived from entities, sorted relevance-descending
/// (stable, so equal scores keep service order) and deduplicated by exact
/// string. Tokens without spelling suggestions are dropped.
fn map_sections(raw: RawAnalysis) -> AnalysisSections {
    let entities: Vec<Entity> = raw
        .entities
        .into_iter()
        .map(|e| Entity {
            id: e.entity_id,
            relevance: e.relevance_score,
            confidence: e.confidence_score,
        })
        .collect();

    let mut keywords: Vec<ScoredItem> = entities
        .iter()
        .map(|e| ScoredItem::new(e.id.clone(), e.relevance))
        .collect();
    keywords.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let mut seen = std::collections::HashSet::new();
    keywords.retain(|kw| seen.insert(kw.key.clone()));

    AnalysisSections {
        entities,
        topics: raw
            .topics
            .into_iter()
            .map(|t| Topic {
                label: t.label,
                score: t.score,
            })
            .collect(),
        categories: raw
            .categories
            .into_iter()
            .map(|c| Category {
                label: c.label,
                score: c.score,
            })
            .collect(),
        spelling: raw
            .words
            .into_iter()
            .filter(|w| !w.spelling_suggestions.is_empty())
            .map(|w| SpellingSuggestion {
                token: w.token,
                suggestions: w
                    .spelling_suggestions
                    .into_iter()
                    .map(|s| s.suggestion)
                    .collect(),
            })
            .collect(),
        keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_fixture() -> RawAnalysis {
        serde_json::from_value(serde_json::json!({
            "entities": [
                {"entityId": "Rust", "relevanceScore": 0.4, "confidenceScore": 2.1},
                {"entityId": "Tokio", "relevanceScore": 0.9, "confidenceScore": 3.0},
                {"entityId": "Rust", "relevanceScore": 0.4, "confidenceScore": 1.0},
                {"entityId": "rust", "relevanceScore": 0.3, "confidenceScore": 1.5},
            ],
            "topics": [{"label": "Programming", "score": 0.8}],
            "categories": [{"label": "Technology", "score": 0.6}],
            "words": [
                {"token": "teh", "spellingSuggestions": [{"suggestion": "the"}]},
                {"token": "fine", "spellingSuggestions": []},
            ],
        }))
        .unwrap()
    }

    #[test]
    fn keywords_sorted_by_relevance_descending() {
        let sections = map_sections(raw_fixture());
        let keys: Vec<&str> = sections.keywords.iter().map(|k| k.key.as_str()).collect();
        assert_eq!(keys, vec!["Tokio", "Rust", "rust"]);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        // "Rust" appears twice and collapses; "rust" is a distinct key and
        // survives alongside it.
        let sections = map_sections(raw_fixture());
        assert_eq!(sections.keywords.len(), 3);
    }

    #[test]
    fn empty_spelling_suggestion_lists_dropped() {
        let sections = map_sections(raw_fixture());
        assert_eq!(sections.spelling.len(), 1);
        assert_eq!(sections.spelling[0].token, "teh");
        assert_eq!(sections.spelling[0].suggestions, vec!["the"]);
    }

    #[test]
    fn entities_keep_service_order() {
        let sections = map_sections(raw_fixture());
        assert_eq!(sections.entities[0].id, "Rust");
        assert_eq!(sections.entities[1].id, "Tokio");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let raw: RawResponse = serde_json::from_value(serde_json::json!({"response": {}})).unwrap();
        let sections = map_sections(raw.response);
        assert!(sections.entities.is_empty());
        assert!(sections.keywords.is_empty());
        assert!(sections.spelling.is_empty());
    }
}
