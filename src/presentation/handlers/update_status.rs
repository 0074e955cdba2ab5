use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::{DialogueClient, SpeechSynthesizer, Transcriber};
use crate::application::services::InterviewError;
use crate::domain::{SessionId, SessionStatus};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateStatusResponse {
    pub message: String,
    pub session_id: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request), fields(status = %request.status))]
pub async fn update_status_handler<D, T, S>(
    State(state): State<AppState<D, T, S>>,
    Path(session_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
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

    let status: SessionStatus = match request.status.parse() {
        Ok(status) => status,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e })).into_response();
        }
    };

    match state
        .interview_service
        .update_status(session_id, status, request.notes.as_deref())
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(UpdateStatusResponse {
                message: "Status updated successfully".to_string(),
                session_id: session_id.to_string(),
            }),
        )
            .into_response(),
        Err(InterviewError::InvalidRequest(reason)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: reason }),
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
            tracing::error!(error = %e, "Failed to update session status");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to update status: {}", e),
                }),
            )
                .into_response()
        }
    }
}
