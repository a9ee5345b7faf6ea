//! Analogy generation: wire types and the LLM-backed procedure.

pub mod service;
pub mod types;

pub use service::{AnalogyGenerator, LlmAnalogyService};
pub use types::{AnalogyData, GenerateRequest, GenerateResponse, GeneratedAnalogy};
