use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{DialogueClient, SpeechSynthesizer, Transcriber};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    end_interview_handler, health_handler, list_sessions_handler, start_interview_handler,
    submit_response_handler, update_status_handler,
};
use crate::presentation::state::AppState;

/// Candidate audio clips routinely exceed axum's default body limit.
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

pub fn create_router<D, T, S>(state: AppState<D, T, S>) -> Router
where
    D: DialogueClient + 'static,
    T: Transcriber + 'static,
    S: SpeechSynthesizer + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler::<D, T, S>))
        .route(
            "/api/v1/interviews",
            post(start_interview_handler::<D, T, S>).get(list_sessions_handler::<D, T, S>),
        )
        .route(
            "/api/v1/interviews/{session_id}/response",
            post(submit_response_handler::<D, T, S>),
        )
        .route(
            "/api/v1/interviews/{session_id}/end",
            post(end_interview_handler::<D, T, S>),
        )
        .route(
            "/api/v1/interviews/{session_id}/status",
            post(update_status_handler::<D, T, S>),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
