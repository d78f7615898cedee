//! HTTP route handlers.

pub mod analyze;
pub mod llm_config;
pub mod status;
pub mod suggest;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(status::routes())
        .merge(analyze::routes())
        .merge(suggest::routes())
        .merge(llm_config::routes())
}
