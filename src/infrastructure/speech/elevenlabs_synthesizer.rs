use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// The provider rejects long inputs; question text beyond this is cut off.
const MAX_INPUT_CHARS: usize = 500;

/// Text-to-speech via the ElevenLabs API.
pub struct ElevenLabsSynthesizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    voice_id: String,
    model_id: String,
}

#[derive(Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
    style: f32,
    use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.6,
            similarity_boost: 0.8,
            style: 0.4,
            use_speaker_boost: true,
        }
    }
}

impl ElevenLabsSynthesizer {
    pub fn new(api_key: String, voice_id: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.elevenlabs.io".to_string()),
            voice_id,
            model_id: "eleven_monolingual_v1".to_string(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SynthesisError> {
        if self.api_key.is_empty() {
            return Err(SynthesisError::NotConfigured);
        }

        let truncated: String = text.chars().take(MAX_INPUT_CHARS).collect();
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, self.voice_id);

        let response = self
            .client
            .post(&url)
            .header("Accept", "audio/mpeg")
            .header("xi-api-key", &self.api_key)
            .json(&SynthesisRequest {
                text: &truncated,
                model_id: &self.model_id,
                voice_settings: VoiceSettings::default(),
            })
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SynthesisError::ApiRequestFailed(format!(
                "status {}",
                response.status()
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("body: {}", e)))?;

        tracing::debug!(bytes = audio.len(), "Speech synthesis completed");

        Ok(audio.to_vec())
    }
}
