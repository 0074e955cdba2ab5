use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{DialogueClient, SpeechSynthesizer, Transcriber};
use crate::application::services::InterviewError;
use crate::domain::SessionId;
use crate::infrastructure::observability::sanitize_transcript;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct SubmitResponseBody {
    pub transcript: String,
    pub next_question: String,
    pub audio_data: String,
    pub question_number: u32,
    pub total_questions: u32,
    pub interview_complete: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn submit_response_handler<D, T, S>(
    State(state): State<AppState<D, T, S>>,
    Path(session_id): Path<String>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    D: DialogueClient + 'static,
    T: Transcriber + 'static,
    S: SpeechSynthesizer + 'static,
{
    let session_id = match Uuid::parse_str(&session_id) {
        Ok(uuid) => SessionId::from_uuid(uuid),
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid session ID: {}", session_id),
                }),
            )
                .into_response();
        }
    };

    let audio = match read_audio_field(&mut multipart).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            tracing::warn!("Audio submission with no file field");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No audio file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart upload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read upload: {}", e),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(bytes = audio.len(), "Candidate audio received");

    match state
        .interview_service
        .submit_response(session_id, &audio)
        .await
    {
        Ok(outcome) => {
            tracing::debug!(
                transcript = %sanitize_transcript(&outcome.transcript),
                question_number = outcome.question_number,
                "Turn processed"
            );
            (
                StatusCode::OK,
                Json(SubmitResponseBody {
                    transcript: outcome.transcript,
                    next_question: outcome.next_question,
                    audio_data: BASE64.encode(&outcome.audio),
                    question_number: outcome.question_number,
                    total_questions: outcome.question_budget,
                    interview_complete: outcome.interview_complete,
                }),
            )
                .into_response()
        }
        Err(InterviewError::SessionNotFound(id)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Session not found: {}", id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to process candidate response");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to process response: {}", e),
                }),
            )
                .into_response()
        }
    }
}

/// Pulls the first `file` field (or the first field at all) out of the
/// upload. An empty payload is passed through; the controller substitutes a
/// clarification prompt rather than failing the turn.
async fn read_audio_field(multipart: &mut Multipart) -> Result<Option<Vec<u8>>, axum::Error> {
    while let Some(field) = multipart.next_field().await.map_err(axum::Error::new)? {
        let is_file = match field.name() {
            Some(name) => name == "file",
            None => true,
        };
        if is_file {
            let bytes = field.bytes().await.map_err(axum::Error::new)?;
            return Ok(Some(bytes.to_vec()));
        }
    }
    Ok(None)
}
