//! Shared application state.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use seoscope_analyze::{Analyzer, TextRazorClient};
use seoscope_core::SeoscopeConfig;
use seoscope_llm::LLMConfig;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: SeoscopeConfig,
    /// None when no NLU API key is configured; analysis sections then
    /// degrade to empty with an error note instead of failing the request.
    pub analyzer: Option<Arc<dyn Analyzer>>,
    pub llm_config: RwLock<LLMConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: SeoscopeConfig) -> Self {
        let http = reqwest::Client::new();

        let analyzer = TextRazorClient::from_env(http.clone())
            .map(|client| Arc::new(client) as Arc<dyn Analyzer>);
        if analyzer.is_none() {
            warn!("TEXTRAZOR_API_KEY not set; analysis sections will be empty");
        }

        let llm_config = LLMConfig::load(&config.data_paths.llm_config_file);

        Self {
            config,
            analyzer,
            llm_config: RwLock::new(llm_config),
            http,
        }
    }
}
