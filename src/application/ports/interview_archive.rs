use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{InterviewSession, SessionId};

/// Durable sink for interview artifacts: per-turn exchange records, final
/// session snapshots, and rendered report documents. All writes are
/// best-effort from the controller's perspective; failures are logged by the
/// caller and never abort a turn.
#[async_trait]
pub trait InterviewArchive: Send + Sync {
    /// Appends one candidate/interviewer exchange to the session transcript.
    async fn append_exchange(
        &self,
        session_id: SessionId,
        exchange: &ExchangeRecord,
    ) -> Result<(), ArchiveError>;

    /// Writes the final session record, replacing any previous snapshot.
    async fn store_snapshot(&self, record: &SessionRecord) -> Result<(), ArchiveError>;

    /// Writes a rendered report document for a completed session.
    async fn store_report(
        &self,
        session_id: SessionId,
        document: &[u8],
    ) -> Result<(), ArchiveError>;
}

/// One transcript entry: the candidate's answer, the interviewer's reply, and
/// the counters/scores as of that turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRecord {
    pub timestamp: DateTime<Utc>,
    pub candidate_text: String,
    pub interviewer_text: String,
    pub question_number: u32,
    pub scores: BTreeMap<String, u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    pub role: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Exported shape of a completed session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: String,
    pub candidate_name: String,
    pub position: String,
    pub experience_level: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub status: String,
    pub recommendation: Option<String>,
    pub report_sent: bool,
    pub turns: Vec<TurnRecord>,
    pub scores: BTreeMap<String, u8>,
    pub narrative: Option<String>,
}

impl SessionRecord {
    pub fn from_session(session: &InterviewSession, narrative: Option<String>) -> Self {
        Self {
            session_id: session.id.to_string(),
            candidate_name: session.candidate_name.clone(),
            position: session.position.clone(),
            experience_level: session.experience_level.as_str().to_string(),
            started_at: session.started_at,
            ended_at: session.ended_at,
            status: session.status.as_str().to_string(),
            recommendation: session.recommendation.map(|r| r.as_str().to_string()),
            report_sent: session.report_sent,
            turns: session
                .turns
                .iter()
                .map(|t| TurnRecord {
                    role: t.role.as_str().to_string(),
                    text: t.text.clone(),
                    timestamp: t.created_at,
                })
                .collect(),
            scores: session.scores.clone(),
            narrative,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}
