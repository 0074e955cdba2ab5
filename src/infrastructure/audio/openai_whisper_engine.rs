use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{Transcriber, TranscriberError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Speech-to-text via the OpenAI Whisper transcription endpoint.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    language: String,
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
            language: "en".to_string(),
        }
    }
}

#[async_trait]
impl Transcriber for OpenAiWhisperEngine {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, TranscriberError> {
        if audio.is_empty() {
            return Err(TranscriberError::EmptyAudio);
        }

        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(audio.to_vec())
            .file_name("response.wav")
            .mime_str("audio/wav")
            .map_err(|e| TranscriberError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", self.language.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(model = %self.model, bytes = audio.len(), "Sending candidate audio to Whisper");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranscriberError::TimedOut
                } else {
                    TranscriberError::ApiRequestFailed(format!("request: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriberError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscriberError::ApiRequestFailed(format!("body: {}", e)))?;

        tracing::debug!(chars = transcript.len(), "Whisper transcription completed");

        Ok(transcript.trim().to_string())
    }
}
