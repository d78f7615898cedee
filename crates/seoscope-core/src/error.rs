//! Error types for Seoscope.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Analysis error: {0}")]
    Analyze(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Empty input text")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, Error>;
