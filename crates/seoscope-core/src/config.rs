//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default relevance threshold for keyword recommendation.
pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.2;
/// Default character window captured on each side of a keyword snippet.
pub const DEFAULT_SNIPPET_WINDOW: usize = 30;

/// Paths to Seoscope data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// LLM configuration (`data/llm-config.json`).
    pub llm_config_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates the root if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        std::fs::create_dir_all(&root)?;
        Ok(Self {
            llm_config_file: root.join("llm-config.json"),
            root,
        })
    }
}

/// Top-level Seoscope configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoscopeConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data file paths.
    pub data_paths: DataPaths,
    /// Minimum relevance score for a keyword to be recommended.
    pub relevance_threshold: f64,
    /// Character radius for keyword snippets.
    pub snippet_window: usize,
}

impl SeoscopeConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3002);

        let relevance_threshold = std::env::var("SEOSCOPE_RELEVANCE_THRESHOLD")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_RELEVANCE_THRESHOLD);

        let snippet_window = std::env::var("SEOSCOPE_SNIPPET_WINDOW")
            .ok()
            .and_then(|w| w.parse().ok())
            .unwrap_or(DEFAULT_SNIPPET_WINDOW);

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            port,
            data_paths,
            relevance_threshold,
            snippet_window,
        })
    }
}
