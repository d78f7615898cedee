//! SEO suggestion generation via external LLM providers.
//!
//! One prompt in, narrative text out. The response is opaque to the rest of
//! the pipeline: nothing downstream parses structure out of it.

pub mod config;
pub mod prompt;
pub mod providers;
pub mod types;

pub use config::LLMConfig;
pub use types::*;
