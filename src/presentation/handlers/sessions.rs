use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{DialogueClient, SpeechSynthesizer, Transcriber};
use crate::domain::{InterviewSession, SessionStatus};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub candidate_name: String,
    pub position: String,
    pub experience_level: String,
    pub started_at: String,
    pub ended_at: Option<String>,
    pub question_number: u32,
    pub total_questions: u32,
    pub status: String,
    pub scores: BTreeMap<String, u8>,
    pub recommendation: Option<String>,
    pub report_sent: bool,
}

#[derive(Serialize)]
pub struct SessionsResponse {
    pub active_count: usize,
    pub completed_count: usize,
    pub sessions: Vec<SessionSummary>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state))]
pub async fn list_sessions_handler<D, T, S>(
    State(state): State<AppState<D, T, S>>,
) -> impl IntoResponse
where
    D: DialogueClient + 'static,
    T: Transcriber + 'static,
    S: SpeechSynthesizer + 'static,
{
    match state.interview_service.list_sessions().await {
        Ok(sessions) => {
            let active_count = sessions
                .iter()
                .filter(|s| s.status == SessionStatus::InProgress)
                .count();
            let completed_count = sessions.len() - active_count;

            let summaries = sessions.iter().map(summarize).collect();

            (
                StatusCode::OK,
                Json(SessionsResponse {
                    active_count,
                    completed_count,
                    sessions: summaries,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list sessions");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to list sessions: {}", e),
                }),
            )
                .into_response()
        }
    }
}

fn summarize(session: &InterviewSession) -> SessionSummary {
    SessionSummary {
        session_id: session.id.to_string(),
        candidate_name: session.candidate_name.clone(),
        position: session.position.clone(),
        experience_level: session.experience_level.as_str().to_string(),
        started_at: session.started_at.to_rfc3339(),
        ended_at: session.ended_at.map(|t| t.to_rfc3339()),
        question_number: session.question_number,
        total_questions: session.question_budget,
        status: session.status.as_str().to_string(),
        scores: session.scores.clone(),
        recommendation: session.recommendation.map(|r| r.as_str().to_string()),
        report_sent: session.report_sent,
    }
}
