use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;

use voxhire::application::ports::{
    MailerError, OutboundReport, ReportMailer, SessionStore,
};
use voxhire::application::services::{ReportMessage, ReportWorker};
use voxhire::domain::{
    Evaluation, ExperienceLevel, InterviewSession, Recommendation, SessionStatus,
};
use voxhire::infrastructure::persistence::{InMemorySessionStore, MemoryArchive};

struct CountingMailer {
    sent: AtomicUsize,
}

#[async_trait::async_trait]
impl ReportMailer for CountingMailer {
    async fn send_report(&self, _report: &OutboundReport) -> Result<(), MailerError> {
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct RejectingMailer;

#[async_trait::async_trait]
impl ReportMailer for RejectingMailer {
    async fn send_report(&self, _report: &OutboundReport) -> Result<(), MailerError> {
        Err(MailerError::Rejected("mailbox full".into()))
    }
}

async fn completed_session(store: &InMemorySessionStore) -> InterviewSession {
    let mut session = InterviewSession::new(
        "Jane Doe".to_string(),
        "Backend Engineer".to_string(),
        ExperienceLevel::Mid,
    );
    session.status = SessionStatus::Completed;
    session.ended_at = Some(Utc::now());
    store.create(session.clone()).await.unwrap();
    store.complete(session.clone()).await.unwrap();
    session
}

fn evaluation_for(session: &InterviewSession) -> Evaluation {
    Evaluation {
        session_id: session.id,
        candidate_name: session.candidate_name.clone(),
        position: session.position.clone(),
        experience_level: session.experience_level,
        started_at: session.started_at,
        ended_at: Utc::now(),
        questions_completed: 10,
        scores: BTreeMap::from([("communication".to_string(), 7)]),
        narrative: "Clear and confident.\n\nRecommendation: Hire.".to_string(),
        recommendation: Recommendation::Hire,
    }
}

#[tokio::test]
async fn given_a_report_message_then_worker_archives_and_dispatches() {
    let store = Arc::new(InMemorySessionStore::new());
    let archive = Arc::new(MemoryArchive::new());
    let mailer = Arc::new(CountingMailer {
        sent: AtomicUsize::new(0),
    });

    let session = completed_session(&store).await;
    let evaluation = evaluation_for(&session);

    let (sender, receiver) = mpsc::channel(4);
    let worker = ReportWorker::new(receiver, archive.clone(), mailer.clone(), store.clone());
    let handle = tokio::spawn(worker.run());

    sender
        .send(ReportMessage {
            session: session.clone(),
            evaluation,
        })
        .await
        .unwrap();
    drop(sender);
    handle.await.unwrap();

    assert_eq!(mailer.sent.load(Ordering::SeqCst), 1);
    assert!(archive
        .get(&format!("reports/{}.html", session.id))
        .await
        .is_some());
    assert!(archive
        .get(&format!("evaluations/{}.json", session.id))
        .await
        .is_some());

    let durable = store.list_all().await.unwrap().remove(0);
    assert!(durable.report_sent);
}

#[tokio::test]
async fn given_mailer_rejection_then_report_sent_flag_stays_unset() {
    let store = Arc::new(InMemorySessionStore::new());
    let archive = Arc::new(MemoryArchive::new());

    let session = completed_session(&store).await;
    let evaluation = evaluation_for(&session);

    let (sender, receiver) = mpsc::channel(4);
    let worker = ReportWorker::new(
        receiver,
        archive.clone(),
        Arc::new(RejectingMailer),
        store.clone(),
    );
    let handle = tokio::spawn(worker.run());

    sender
        .send(ReportMessage {
            session: session.clone(),
            evaluation,
        })
        .await
        .unwrap();
    drop(sender);
    handle.await.unwrap();

    // The document is still archived; only delivery failed.
    assert!(archive
        .get(&format!("reports/{}.html", session.id))
        .await
        .is_some());

    let durable = store.list_all().await.unwrap().remove(0);
    assert!(!durable.report_sent);
}
