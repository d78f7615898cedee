//! The analysis pipeline route.
//!
//! One request runs the whole flow: NLU extraction, keyword recommendation,
//! augmentation, snippets, highlighting, and the optional AI suggestion.
//! Sections degrade independently; only blank input fails the request.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use seoscope_core::{
    AnalysisSections, AugmentedText, Category, Entity, SpellingSuggestion, Topic,
};
use seoscope_keywords::{augment, highlight_marked, highlight_spans, recommend, snippets};
use seoscope_llm::prompt::{enhancement_prompt, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use seoscope_llm::providers;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/analyze", post(analyze))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub text: String,
    /// Relevance threshold override; server default when absent.
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default = "default_include_suggestion")]
    pub include_suggestion: bool,
}

fn default_include_suggestion() -> bool {
    true
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub entities: Vec<Entity>,
    pub topics: Vec<Topic>,
    pub categories: Vec<Category>,
    pub spelling: Vec<SpellingSuggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_error: Option<String>,
    pub recommended_keywords: Vec<String>,
    pub augmented: AugmentedText,
    pub snippets: Vec<String>,
    pub highlighted_html: String,
    pub highlighted_spans: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_error: Option<String>,
    pub analyzed_at: String,
    pub duration: u64,
}

async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Response {
    let start = Instant::now();

    // Blank input is rejected before any external call is made.
    if req.text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "error": "Please enter some text before analyzing",
            })),
        )
            .into_response();
    }

    let (sections, analysis_error) = match &state.analyzer {
        Some(analyzer) => match analyzer.analyze(&req.text).await {
            Ok(sections) => (sections, None),
            Err(e) => {
                warn!("Analysis failed: {}", e);
                (AnalysisSections::default(), Some(e.to_string()))
            }
        },
        None => (
            AnalysisSections::default(),
            Some("TextRazor API key not configured".to_string()),
        ),
    };

    let threshold = req.threshold.unwrap_or(state.config.relevance_threshold);
    let recommended = recommend(&sections.keywords, threshold);

    let augmented = augment(&req.text, &recommended);

    // Snippets are only meaningful when something was inserted; they are
    // taken from the augmented text so inserted keywords are in range.
    let keyword_snippets = if augmented.was_modified {
        snippets(&augmented.text, &recommended, state.config.snippet_window)
    } else {
        Vec::new()
    };

    let highlighted_html = highlight_marked(&augmented.text, &augmented.added_keywords);
    let highlighted_spans = highlight_spans(&augmented.text, &augmented.added_keywords);

    let (suggestion, suggestion_error) = if req.include_suggestion {
        generate_suggestion(&state, &augmented.text, &recommended).await
    } else {
        (None, None)
    };

    let response = AnalyzeResponse {
        entities: sections.entities,
        topics: sections.topics,
        categories: sections.categories,
        spelling: sections.spelling,
        analysis_error,
        recommended_keywords: recommended,
        augmented,
        snippets: keyword_snippets,
        highlighted_html,
        highlighted_spans,
        suggestion,
        suggestion_error,
        analyzed_at: chrono::Utc::now().to_rfc3339(),
        duration: start.elapsed().as_millis() as u64,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Ask the configured LLM for a narrative improvement summary.
///
/// Failure lands in the error slot; the rest of the response is unaffected.
async fn generate_suggestion(
    state: &AppState,
    augmented_text: &str,
    keywords: &[String],
) -> (Option<String>, Option<String>) {
    let resolved = {
        let config = state.llm_config.read();
        config.resolve()
    };

    let (provider, model, api_key) = match resolved {
        Some(r) => r,
        None => return (None, Some("No LLM provider configured".to_string())),
    };

    let prompt = enhancement_prompt(augmented_text, keywords);

    match providers::complete(
        &state.http,
        provider,
        &prompt,
        &model,
        &api_key,
        DEFAULT_TEMPERATURE,
        DEFAULT_MAX_TOKENS,
    )
    .await
    {
        Ok(text) => (Some(text), None),
        Err(e) => {
            warn!("Suggestion generation failed: {}", e);
            (None, Some(e.to_string()))
        }
    }
}
