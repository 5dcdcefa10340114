//! Chat-completion client seam

mod cohere;

pub use cohere::CohereClient;

use crate::error::Result;

/// A hosted language model accepting a text prompt and returning generated
/// text.
///
/// One implementation is constructed at startup and injected into the
/// handler state; it holds read-only configuration only.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// Submit one prompt and return the model's reply text.
    async fn chat(&self, prompt: &str) -> Result<String>;
}
