use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{DialogueClient, DialogueError};
use crate::domain::{Turn, TurnRole};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Conversational profile: short interviewer replies.
const CONVERSATIONAL_MAX_TOKENS: usize = 150;
const CONVERSATIONAL_TEMPERATURE: f32 = 0.7;
/// Evaluation profile: long-form, low-temperature narrative.
const EVALUATION_MAX_TOKENS: usize = 1000;
const EVALUATION_TEMPERATURE: f32 = 0.3;

/// Chat-completion dialogue generation against an OpenAI-compatible API.
pub struct OpenAiDialogueClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiDialogueClient {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            api_key,
            model: model.unwrap_or_else(|| "gpt-4".to_string()),
        }
    }

    fn build_messages(turns: &[Turn]) -> Vec<ChatMessage> {
        turns
            .iter()
            .map(|turn| ChatMessage {
                role: match turn.role {
                    TurnRole::System => "system",
                    TurnRole::Candidate => "user",
                    TurnRole::Interviewer => "assistant",
                }
                .to_string(),
                content: turn.text.clone(),
            })
            .collect()
    }

    async fn complete(
        &self,
        turns: &[Turn],
        max_tokens: usize,
        temperature: f32,
    ) -> Result<String, DialogueError> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: Self::build_messages(turns),
            max_tokens,
            temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| DialogueError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DialogueError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DialogueError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| DialogueError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| DialogueError::InvalidResponse("empty choices".to_string()))
    }
}

#[async_trait]
impl DialogueClient for OpenAiDialogueClient {
    async fn next_message(&self, turns: &[Turn]) -> Result<String, DialogueError> {
        self.complete(turns, CONVERSATIONAL_MAX_TOKENS, CONVERSATIONAL_TEMPERATURE)
            .await
    }

    async fn evaluate(&self, turns: &[Turn]) -> Result<String, DialogueError> {
        self.complete(turns, EVALUATION_MAX_TOKENS, EVALUATION_TEMPERATURE)
            .await
    }
}
