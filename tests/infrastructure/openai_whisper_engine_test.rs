use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use voxhire::application::ports::{Transcriber, TranscriberError};
use voxhire::infrastructure::audio::OpenAiWhisperEngine;

async fn start_mock_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/audio/transcriptions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

#[tokio::test]
async fn given_valid_audio_when_transcribing_then_returns_trimmed_text() {
    let (base_url, shutdown_tx) = start_mock_server(200, "  Hello from Whisper \n").await;

    let engine = OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url), None);
    let result = engine.transcribe(b"fake audio bytes").await;

    assert_eq!(result.unwrap(), "Hello from Whisper");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_api_error_status_when_transcribing_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_server(500, "backend exploded").await;

    let engine = OpenAiWhisperEngine::new("test-key".to_string(), Some(base_url), None);
    let result = engine.transcribe(b"bad audio").await;

    assert!(matches!(result, Err(TranscriberError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_payload_when_transcribing_then_fails_before_any_request() {
    let engine = OpenAiWhisperEngine::new(
        "test-key".to_string(),
        Some("http://127.0.0.1:1".to_string()),
        None,
    );
    let result = engine.transcribe(b"").await;

    assert!(matches!(result, Err(TranscriberError::EmptyAudio)));
}
