use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use object_store::memory::InMemory;

use voxhire::application::ports::{ExchangeRecord, InterviewArchive, SessionRecord};
use voxhire::domain::{ExperienceLevel, InterviewSession, SessionId};
use voxhire::infrastructure::persistence::ObjectStoreArchive;

fn exchange(question_number: u32) -> ExchangeRecord {
    ExchangeRecord {
        timestamp: Utc::now(),
        candidate_text: "an answer".to_string(),
        interviewer_text: "a question".to_string(),
        question_number,
        scores: BTreeMap::from([("communication".to_string(), 6)]),
    }
}

#[tokio::test]
async fn given_no_existing_transcript_then_first_append_succeeds() {
    let archive = ObjectStoreArchive::new(Arc::new(InMemory::new()));
    let id = SessionId::new();

    archive.append_exchange(id, &exchange(2)).await.unwrap();
    archive.append_exchange(id, &exchange(3)).await.unwrap();
}

#[tokio::test]
async fn given_snapshot_and_report_then_writes_succeed() {
    let archive = ObjectStoreArchive::new(Arc::new(InMemory::new()));
    let session = InterviewSession::new(
        "Jane Doe".to_string(),
        "Backend Engineer".to_string(),
        ExperienceLevel::Junior,
    );

    let record = SessionRecord::from_session(&session, None);
    archive.store_snapshot(&record).await.unwrap();
    archive
        .store_report(session.id, b"<html></html>")
        .await
        .unwrap();
}

#[tokio::test]
async fn given_local_backend_then_archive_initializes_under_a_fresh_directory() {
    let base = std::env::temp_dir().join(format!("voxhire-archive-{}", SessionId::new()));
    let archive = ObjectStoreArchive::local(base.clone()).unwrap();

    archive
        .append_exchange(SessionId::new(), &exchange(2))
        .await
        .unwrap();

    std::fs::remove_dir_all(base).ok();
}
