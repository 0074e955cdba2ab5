use async_trait::async_trait;

/// Speech-to-text boundary: audio bytes in, transcript text out.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, TranscriberError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriberError {
    #[error("empty audio payload")]
    EmptyAudio,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("request timed out")]
    TimedOut,
}
