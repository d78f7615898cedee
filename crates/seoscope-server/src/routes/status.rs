//! Service status route.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(get_status))
}

async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let config = state.llm_config.read();
    let resolved = config.resolve();

    Json(serde_json::json!({
        "analyzerAvailable": state.analyzer.is_some(),
        "llmAvailable": resolved.is_some(),
        "llmProvider": resolved.as_ref().map(|(p, _, _)| p.to_string()),
        "defaultModel": resolved.as_ref().map(|(_, m, _)| m.clone()),
        "availableModels": config.available_models(),
        "relevanceThreshold": state.config.relevance_threshold,
        "snippetWindow": state.config.snippet_window,
    }))
}
