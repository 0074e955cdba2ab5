use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use voxhire::application::ports::ReportMailer;
use voxhire::application::services::{InterviewService, ReportWorker};
use voxhire::infrastructure::audio::OpenAiWhisperEngine;
use voxhire::infrastructure::email::{HttpEmailClient, NoopMailer};
use voxhire::infrastructure::llm::OpenAiDialogueClient;
use voxhire::infrastructure::observability::init_tracing;
use voxhire::infrastructure::persistence::{ArchiveFactory, InMemorySessionStore};
use voxhire::infrastructure::speech::ElevenLabsSynthesizer;
use voxhire::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();
    let environment = std::env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse::<Environment>().ok())
        .unwrap_or_default();

    init_tracing(&settings.logging, environment, settings.server.port);

    if settings.openai.api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; dialogue and transcription calls will fail");
    }

    let dialogue = Arc::new(OpenAiDialogueClient::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        Some(settings.openai.chat_model.clone()),
    ));
    let transcriber = Arc::new(OpenAiWhisperEngine::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        Some(settings.openai.whisper_model.clone()),
    ));
    let synthesizer = Arc::new(ElevenLabsSynthesizer::new(
        settings.speech.api_key.clone(),
        settings.speech.voice_id.clone(),
        settings.speech.base_url.clone(),
    ));

    let store = Arc::new(InMemorySessionStore::new());
    let archive = ArchiveFactory::create(&settings.storage)
        .map_err(|e| anyhow::anyhow!("failed to initialize archive: {}", e))?;

    let mailer: Arc<dyn ReportMailer> = match settings.email.endpoint.as_deref() {
        Some(endpoint) if !endpoint.is_empty() => Arc::new(HttpEmailClient::new(
            endpoint.to_string(),
            settings.email.access_key.clone(),
            settings.email.sender.clone(),
            settings.email.recipient.clone(),
        )),
        _ => {
            tracing::warn!("EMAIL_ENDPOINT is not set; reports will not be emailed");
            Arc::new(NoopMailer)
        }
    };

    let (report_sender, report_receiver) = mpsc::channel(settings.interview.report_queue_capacity);
    let worker = ReportWorker::new(
        report_receiver,
        Arc::clone(&archive),
        mailer,
        store.clone(),
    );
    tokio::spawn(worker.run());

    let interview_service = Arc::new(InterviewService::new(
        dialogue,
        transcriber,
        synthesizer,
        store,
        archive,
        report_sender,
    ));

    let state = AppState {
        interview_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = SocketAddr::from((
        settings
            .server
            .host
            .parse::<std::net::IpAddr>()
            .unwrap_or_else(|_| [0, 0, 0, 0].into()),
        settings.server.port,
    ));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
