//! NLU analysis seam.
//!
//! The extraction service is an external collaborator: the rest of the
//! pipeline consumes its output as plain scored sections and never does NLP
//! of its own. Handlers hold an `Arc<dyn Analyzer>` so the concrete client
//! is injected once at startup rather than reached as ambient global state.

pub mod textrazor;

use async_trait::async_trait;
use seoscope_core::{AnalysisSections, Result};

pub use textrazor::TextRazorClient;

/// Capability for turning raw text into scored analysis sections.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<AnalysisSections>;
}
