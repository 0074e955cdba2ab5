use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use voxhire::application::ports::{DialogueClient, DialogueError};
use voxhire::domain::{Turn, TurnRole};
use voxhire::infrastructure::llm::OpenAiDialogueClient;

async fn start_mock_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/chat/completions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (
                status,
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                response_body,
            )
                .into_response()
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

fn turns() -> Vec<Turn> {
    vec![
        Turn::new(TurnRole::System, "You are an interviewer.".to_string()),
        Turn::new(TurnRole::Candidate, "I build backend services.".to_string()),
    ]
}

#[tokio::test]
async fn given_successful_completion_then_returns_message_content() {
    let body = r#"{"choices": [{"message": {"role": "assistant", "content": " What challenges did you face? "}}]}"#;
    let (base_url, shutdown_tx) = start_mock_server(200, body).await;

    let client = OpenAiDialogueClient::new("test-key".to_string(), Some(base_url), None);
    let result = client.next_message(&turns()).await;

    assert_eq!(result.unwrap(), "What challenges did you face?");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_status_then_returns_rate_limited() {
    let (base_url, shutdown_tx) = start_mock_server(429, "{}").await;

    let client = OpenAiDialogueClient::new("test-key".to_string(), Some(base_url), None);
    let result = client.next_message(&turns()).await;

    assert!(matches!(result, Err(DialogueError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_server(200, r#"{"choices": []}"#).await;

    let client = OpenAiDialogueClient::new("test-key".to_string(), Some(base_url), None);
    let result = client.evaluate(&turns()).await;

    assert!(matches!(result, Err(DialogueError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}
