use async_trait::async_trait;

/// Text-to-speech boundary. Callers treat failures as non-fatal and degrade
/// to an empty audio payload.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("synthesizer not configured")]
    NotConfigured,
}
