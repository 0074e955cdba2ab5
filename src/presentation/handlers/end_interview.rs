use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{DialogueClient, SpeechSynthesizer, Transcriber};
use crate::application::services::InterviewError;
use crate::domain::SessionId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct EndInterviewResponse {
    pub message: String,
    pub report_recipient: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn end_interview_handler<D, T, S>(
    State(state): State<AppState<D, T, S>>,
    Path(session_id): Path<String>,
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

    match state.interview_service.end(session_id).await {
        Ok(_confirmation) => (
            StatusCode::OK,
            Json(EndInterviewResponse {
                message: "Interview completed successfully".to_string(),
                report_recipient: state.settings.email.recipient.clone(),
            }),
        )
            .into_response(),
        Err(InterviewError::SessionNotFound(id)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Session not found: {}", id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to end interview");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to end interview: {}", e),
                }),
            )
                .into_response()
        }
    }
}
