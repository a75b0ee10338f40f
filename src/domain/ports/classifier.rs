use crate::domain::error::PipelineError;
use async_trait::async_trait;

/// Outbound port for the chat-completion service that judges sentiment.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one single-turn user prompt under the fixed market-specialist
    /// persona and return the raw response text. No conversation history,
    /// no multi-turn state. An empty completion is an error.
    async fn classify(&self, prompt: &str) -> Result<String, PipelineError>;
}
