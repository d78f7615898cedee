//! Seoscope Core — shared types, configuration, errors.

pub mod config;
pub mod error;
pub mod types;

pub use config::{DataPaths, SeoscopeConfig};
pub use error::{Error, Result};
pub use types::{
    AnalysisSections, AugmentedText, Category, Entity, ScoredItem, SpellingSuggestion, Topic,
};
