use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::{ExperienceLevel, Recommendation, SessionId};

/// Immutable record produced when an interview ends: the score snapshot, the
/// long-form narrative, and the extracted recommendation.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub session_id: SessionId,
    pub candidate_name: String,
    pub position: String,
    pub experience_level: ExperienceLevel,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub questions_completed: u32,
    pub scores: BTreeMap<String, u8>,
    pub narrative: String,
    pub recommendation: Recommendation,
}

impl Evaluation {
    pub fn duration_minutes(&self) -> f64 {
        (self.ended_at - self.started_at).num_seconds() as f64 / 60.0
    }
}
