//! LLM configuration persistence and provider selection.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::{LLMConfigResponse, LLMConfigUpdate, LLMProvider};

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

pub const OPENAI_MODELS: &[&str] = &["gpt-4o", "gpt-4o-mini", "gpt-4-turbo", "gpt-3.5-turbo"];
pub const ANTHROPIC_MODELS: &[&str] = &[
    "claude-sonnet-4-20250514",
    "claude-3-5-sonnet-20241022",
    "claude-3-5-haiku-20241022",
];
pub const GROQ_MODELS: &[&str] = &[
    "llama-3.3-70b-versatile",
    "llama-3.1-8b-instant",
    "mixtral-8x7b-32768",
    "gemma2-9b-it",
];

/// Stored LLM configuration (persisted to llm-config.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LLMConfig {
    #[serde(default = "default_preferred")]
    pub preferred_provider: String,
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default)]
    pub anthropic_api_key: Option<String>,
    #[serde(default)]
    pub groq_api_key: Option<String>,
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default = "default_anthropic_model")]
    pub anthropic_model: String,
    #[serde(default = "default_groq_model")]
    pub groq_model: String,
    /// Path to config file for saving.
    #[serde(skip)]
    pub config_path: PathBuf,
}

fn default_preferred() -> String {
    "auto".into()
}
fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.into()
}
fn default_anthropic_model() -> String {
    DEFAULT_ANTHROPIC_MODEL.into()
}
fn default_groq_model() -> String {
    DEFAULT_GROQ_MODEL.into()
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            preferred_provider: default_preferred(),
            openai_api_key: None,
            anthropic_api_key: None,
            groq_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.into(),
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.into(),
            groq_model: DEFAULT_GROQ_MODEL.into(),
            config_path: PathBuf::new(),
        }
    }
}

impl LLMConfig {
    /// Load config from file, falling back to env vars and defaults.
    pub fn load(config_path: &Path) -> Self {
        let mut config: LLMConfig = std::fs::read_to_string(config_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();

        config.config_path = config_path.to_path_buf();

        // Env vars as fallback for API keys
        if config.openai_api_key.is_none() {
            config.openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        if config.anthropic_api_key.is_none() {
            config.anthropic_api_key = std::env::var("ANTHROPIC_API_KEY").ok();
        }
        if config.groq_api_key.is_none() {
            config.groq_api_key = std::env::var("GROQ_API_KEY").ok();
        }

        config
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(&self.config_path, json)?;
        info!("Saved LLM config to {}", self.config_path.display());
        Ok(())
    }

    /// Apply an update, merging with existing config.
    pub fn apply_update(&mut self, update: &LLMConfigUpdate) {
        if let Some(p) = &update.preferred_provider {
            self.preferred_provider = p.clone();
        }
        if let Some(k) = &update.openai_api_key {
            self.openai_api_key = Some(k.clone());
        }
        if let Some(k) = &update.anthropic_api_key {
            self.anthropic_api_key = Some(k.clone());
        }
        if let Some(k) = &update.groq_api_key {
            self.groq_api_key = Some(k.clone());
        }
        if let Some(m) = &update.openai_model {
            self.openai_model = m.clone();
        }
        if let Some(m) = &update.anthropic_model {
            self.anthropic_model = m.clone();
        }
        if let Some(m) = &update.groq_model {
            self.groq_model = m.clone();
        }
    }

    /// Resolve which provider, model, and key to use.
    pub fn resolve(&self) -> Option<(LLMProvider, String, String)> {
        // Explicit preference
        if self.preferred_provider != "auto" {
            return match self.preferred_provider.as_str() {
                "openai" => self
                    .openai_api_key
                    .as_ref()
                    .map(|k| (LLMProvider::OpenAI, self.openai_model.clone(), k.clone())),
                "anthropic" => self
                    .anthropic_api_key
                    .as_ref()
                    .map(|k| (LLMProvider::Anthropic, self.anthropic_model.clone(), k.clone())),
                "groq" => self
                    .groq_api_key
                    .as_ref()
                    .map(|k| (LLMProvider::Groq, self.groq_model.clone(), k.clone())),
                _ => None,
            };
        }

        // Auto mode: Anthropic > Groq > OpenAI
        if let Some(k) = &self.anthropic_api_key {
            return Some((LLMProvider::Anthropic, self.anthropic_model.clone(), k.clone()));
        }
        if let Some(k) = &self.groq_api_key {
            return Some((LLMProvider::Groq, self.groq_model.clone(), k.clone()));
        }
        if let Some(k) = &self.openai_api_key {
            return Some((LLMProvider::OpenAI, self.openai_model.clone(), k.clone()));
        }

        None
    }

    /// Build the public config view (no API keys exposed).
    pub fn masked(&self) -> LLMConfigResponse {
        let resolved = self.resolve();
        LLMConfigResponse {
            preferred_provider: self.preferred_provider.clone(),
            openai_configured: self.openai_api_key.is_some(),
            anthropic_configured: self.anthropic_api_key.is_some(),
            groq_configured: self.groq_api_key.is_some(),
            openai_model: self.openai_model.clone(),
            anthropic_model: self.anthropic_model.clone(),
            groq_model: self.groq_model.clone(),
            active_provider: resolved.map(|(p, _, _)| p.to_string()),
        }
    }

    /// Available models for the active provider.
    pub fn available_models(&self) -> Vec<String> {
        match self.resolve() {
            Some((LLMProvider::OpenAI, _, _)) => {
                OPENAI_MODELS.iter().map(|s| s.to_string()).collect()
            }
            Some((LLMProvider::Anthropic, _, _)) => {
                ANTHROPIC_MODELS.iter().map(|s| s.to_string()).collect()
            }
            Some((LLMProvider::Groq, _, _)) => GROQ_MODELS.iter().map(|s| s.to_string()).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(path: &Path) -> LLMConfig {
        LLMConfig {
            config_path: path.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("llm-config.json");

        let mut config = bare(&path);
        config.preferred_provider = "groq".into();
        config.groq_api_key = Some("gsk_test".into());
        config.groq_model = "llama-3.1-8b-instant".into();
        config.save().unwrap();

        let loaded = LLMConfig::load(&path);
        assert_eq!(loaded.preferred_provider, "groq");
        assert_eq!(loaded.groq_api_key.as_deref(), Some("gsk_test"));
        assert_eq!(loaded.groq_model, "llama-3.1-8b-instant");
    }

    #[test]
    fn apply_update_merges_partial_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = bare(&dir.path().join("c.json"));
        config.openai_api_key = Some("sk-old".into());

        config.apply_update(&LLMConfigUpdate {
            groq_api_key: Some("gsk_new".into()),
            ..Default::default()
        });

        assert_eq!(config.openai_api_key.as_deref(), Some("sk-old"));
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk_new"));
        assert_eq!(config.preferred_provider, "auto");
    }

    #[test]
    fn auto_mode_prefers_anthropic_then_groq_then_openai() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = bare(&dir.path().join("c.json"));
        config.openai_api_key = Some("sk".into());
        config.groq_api_key = Some("gsk".into());
        config.anthropic_api_key = Some("ant".into());

        let (provider, _, _) = config.resolve().unwrap();
        assert_eq!(provider, LLMProvider::Anthropic);

        config.anthropic_api_key = None;
        let (provider, _, _) = config.resolve().unwrap();
        assert_eq!(provider, LLMProvider::Groq);

        config.groq_api_key = None;
        let (provider, _, _) = config.resolve().unwrap();
        assert_eq!(provider, LLMProvider::OpenAI);
    }

    #[test]
    fn explicit_preference_requires_its_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = bare(&dir.path().join("c.json"));
        config.preferred_provider = "groq".into();
        config.openai_api_key = Some("sk".into());
        assert!(config.resolve().is_none());

        config.groq_api_key = Some("gsk".into());
        let (provider, model, key) = config.resolve().unwrap();
        assert_eq!(provider, LLMProvider::Groq);
        assert_eq!(model, DEFAULT_GROQ_MODEL);
        assert_eq!(key, "gsk");
    }

    #[test]
    fn masked_view_never_contains_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = bare(&dir.path().join("c.json"));
        config.groq_api_key = Some("gsk_secret".into());

        let view = config.masked();
        assert!(view.groq_configured);
        assert!(!view.openai_configured);
        assert_eq!(view.active_provider.as_deref(), Some("groq"));

        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("gsk_secret"));
    }
}
