use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{DialogueClient, SpeechSynthesizer, Transcriber};
use crate::domain::SessionStatus;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub active_sessions: usize,
    pub completed_sessions: usize,
}

pub async fn health_handler<D, T, S>(State(state): State<AppState<D, T, S>>) -> impl IntoResponse
where
    D: DialogueClient + 'static,
    T: Transcriber + 'static,
    S: SpeechSynthesizer + 'static,
{
    let (active, completed) = match state.interview_service.list_sessions().await {
        Ok(sessions) => {
            let active = sessions
                .iter()
                .filter(|s| s.status == SessionStatus::InProgress)
                .count();
            (active, sessions.len() - active)
        }
        Err(_) => (0, 0),
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            active_sessions: active,
            completed_sessions: completed,
        }),
    )
}
