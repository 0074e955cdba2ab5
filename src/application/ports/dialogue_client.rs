use async_trait::async_trait;

use crate::domain::Turn;

/// Chat-completion boundary. `next_message` runs the short conversational
/// profile used for interview questions; `evaluate` runs the long-form
/// low-temperature profile used once at session end.
#[async_trait]
pub trait DialogueClient: Send + Sync {
    async fn next_message(&self, turns: &[Turn]) -> Result<String, DialogueError>;

    async fn evaluate(&self, turns: &[Turn]) -> Result<String, DialogueError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DialogueError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
