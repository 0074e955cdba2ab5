use std::collections::BTreeMap;

use chrono::Utc;

use voxhire::application::ports::{
    ExchangeRecord, InterviewArchive, SessionRecord,
};
use voxhire::domain::{ExperienceLevel, InterviewSession, SessionId};
use voxhire::infrastructure::persistence::MemoryArchive;

fn exchange(question_number: u32) -> ExchangeRecord {
    ExchangeRecord {
        timestamp: Utc::now(),
        candidate_text: "an answer".to_string(),
        interviewer_text: "a question".to_string(),
        question_number,
        scores: BTreeMap::new(),
    }
}

#[tokio::test]
async fn given_repeated_exchanges_then_transcript_accumulates_in_order() {
    let archive = MemoryArchive::new();
    let id = SessionId::new();

    archive.append_exchange(id, &exchange(2)).await.unwrap();
    archive.append_exchange(id, &exchange(3)).await.unwrap();

    let raw = archive
        .get(&format!("transcripts/{}.json", id))
        .await
        .unwrap();
    let records: Vec<ExchangeRecord> = serde_json::from_slice(&raw).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].question_number, 2);
    assert_eq!(records[1].question_number, 3);
}

#[tokio::test]
async fn given_a_snapshot_then_it_is_stored_under_the_session_id() {
    let archive = MemoryArchive::new();
    let session = InterviewSession::new(
        "Jane Doe".to_string(),
        "Backend Engineer".to_string(),
        ExperienceLevel::Senior,
    );
    let record = SessionRecord::from_session(&session, Some("narrative".to_string()));

    archive.store_snapshot(&record).await.unwrap();

    let raw = archive
        .get(&format!("evaluations/{}.json", session.id))
        .await
        .unwrap();
    let stored: SessionRecord = serde_json::from_slice(&raw).unwrap();
    assert_eq!(stored.candidate_name, "Jane Doe");
    assert_eq!(stored.experience_level, "senior");
    assert_eq!(stored.narrative.as_deref(), Some("narrative"));
}

#[tokio::test]
async fn given_a_report_document_then_it_is_stored_under_the_session_id() {
    let archive = MemoryArchive::new();
    let id = SessionId::new();

    archive.store_report(id, b"<html></html>").await.unwrap();

    let raw = archive.get(&format!("reports/{}.html", id)).await.unwrap();
    assert_eq!(raw, b"<html></html>".to_vec());
}
