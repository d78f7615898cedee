//! LLM provider configuration routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use seoscope_llm::providers;
use seoscope_llm::types::{LLMConfigUpdate, TestKeyRequest};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/llm/config", get(get_config).put(update_config))
        .route("/llm/config/test", post(test_key))
}

async fn get_config(State(state): State<Arc<AppState>>) -> Response {
    let config = state.llm_config.read();
    Json(config.masked()).into_response()
}

async fn update_config(
    State(state): State<Arc<AppState>>,
    Json(update): Json<LLMConfigUpdate>,
) -> Response {
    let mut config = state.llm_config.write();
    config.apply_update(&update);

    if let Err(e) = config.save() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": format!("Failed to save config: {}", e) })),
        )
            .into_response();
    }

    (StatusCode::OK, Json(config.masked())).into_response()
}

async fn test_key(Json(req): Json<TestKeyRequest>) -> impl IntoResponse {
    match providers::test_api_key(&req.provider, &req.api_key).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true })),
        ),
        Err(e) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": false, "error": e })),
        ),
    }
}
