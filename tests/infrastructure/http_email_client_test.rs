use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use voxhire::application::ports::{MailerError, OutboundReport, ReportMailer};
use voxhire::infrastructure::email::HttpEmailClient;

async fn start_mock_server(response_status: u16) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/emails:send",
        post(move || async move {
            axum::http::StatusCode::from_u16(response_status)
                .unwrap()
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

fn report() -> OutboundReport {
    OutboundReport {
        subject: "Interview Report - Jane Doe - Backend Engineer".to_string(),
        html_body: "<html></html>".to_string(),
        attachment_name: "interview_report_Jane_Doe.html".to_string(),
        attachment: b"<html></html>".to_vec(),
    }
}

#[tokio::test]
async fn given_accepted_request_then_send_succeeds() {
    let (base_url, shutdown_tx) = start_mock_server(202).await;

    let client = HttpEmailClient::new(
        base_url,
        "access-key".to_string(),
        "noreply@example.test".to_string(),
        "hiring@example.test".to_string(),
    );
    let result = client.send_report(&report()).await;

    assert!(result.is_ok());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_provider_rejection_then_send_fails() {
    let (base_url, shutdown_tx) = start_mock_server(403).await;

    let client = HttpEmailClient::new(
        base_url,
        "access-key".to_string(),
        "noreply@example.test".to_string(),
        "hiring@example.test".to_string(),
    );
    let result = client.send_report(&report()).await;

    assert!(matches!(result, Err(MailerError::Rejected(_))));
    shutdown_tx.send(()).ok();
}
