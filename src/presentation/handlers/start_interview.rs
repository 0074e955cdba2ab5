use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::application::ports::{DialogueClient, SpeechSynthesizer, Transcriber};
use crate::application::services::InterviewError;
use crate::domain::ExperienceLevel;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct StartInterviewRequest {
    pub candidate_name: String,
    pub position: String,
    #[serde(default)]
    pub experience_level: Option<String>,
}

#[derive(Serialize)]
pub struct StartInterviewResponse {
    pub session_id: String,
    pub first_question: String,
    pub audio_data: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request), fields(candidate = %request.candidate_name))]
pub async fn start_interview_handler<D, T, S>(
    State(state): State<AppState<D, T, S>>,
    Json(request): Json<StartInterviewRequest>,
) -> impl IntoResponse
where
    D: DialogueClient + 'static,
    T: Transcriber + 'static,
    S: SpeechSynthesizer + 'static,
{
    let experience_level = match request.experience_level.as_deref() {
        None | Some("") => ExperienceLevel::default(),
        Some(raw) => match raw.parse() {
            Ok(level) => level,
            Err(e) => {
                tracing::warn!(value = %raw, "Rejected unknown experience level");
                return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: e }))
                    .into_response();
            }
        },
    };

    match state
        .interview_service
        .start(&request.candidate_name, &request.position, experience_level)
        .await
    {
        Ok(started) => (
            StatusCode::CREATED,
            Json(StartInterviewResponse {
                session_id: started.session_id.to_string(),
                first_question: started.first_question,
                audio_data: BASE64.encode(&started.audio),
            }),
        )
            .into_response(),
        Err(InterviewError::InvalidRequest(reason)) => {
            tracing::warn!(reason = %reason, "Rejected interview start");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: reason }),
            )
                .into_response()
        }
        Err(e @ InterviewError::DialogueUnavailable(_)) => {
            tracing::error!(error = %e, "Cannot start interview without dialogue provider");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("Failed to start interview: {}", e),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to start interview");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to start interview: {}", e),
                }),
            )
                .into_response()
        }
    }
}
