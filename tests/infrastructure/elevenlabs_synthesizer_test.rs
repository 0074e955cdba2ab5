use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use voxhire::application::ports::{SpeechSynthesizer, SynthesisError};
use voxhire::infrastructure::speech::ElevenLabsSynthesizer;

async fn start_mock_server(
    response_status: u16,
    response_body: &'static [u8],
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/v1/text-to-speech/{voice_id}",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body.to_vec()).into_response()
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
async fn given_successful_synthesis_then_returns_audio_bytes() {
    let (base_url, shutdown_tx) = start_mock_server(200, b"mp3 bytes").await;

    let synthesizer = ElevenLabsSynthesizer::new(
        "test-key".to_string(),
        "voice-a".to_string(),
        Some(base_url),
    );
    let result = synthesizer.synthesize("Welcome to the interview.").await;

    assert_eq!(result.unwrap(), b"mp3 bytes".to_vec());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_provider_error_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_server(401, b"unauthorized").await;

    let synthesizer = ElevenLabsSynthesizer::new(
        "bad-key".to_string(),
        "voice-a".to_string(),
        Some(base_url),
    );
    let result = synthesizer.synthesize("Welcome.").await;

    assert!(matches!(result, Err(SynthesisError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_api_key_then_fails_before_any_request() {
    let synthesizer = ElevenLabsSynthesizer::new(
        String::new(),
        "voice-a".to_string(),
        Some("http://127.0.0.1:1".to_string()),
    );
    let result = synthesizer.synthesize("Welcome.").await;

    assert!(matches!(result, Err(SynthesisError::NotConfigured)));
}
