use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::{ExperienceLevel, Recommendation, SessionId, SessionStatus, Turn, TurnRole};

pub const DEFAULT_QUESTION_BUDGET: u32 = 10;

/// One candidate's end-to-end interview interaction.
///
/// The turn sequence is append-only and chronological; the score mapping is
/// fully overwritten on each recompute; the question counter never decreases.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    pub id: SessionId,
    pub candidate_name: String,
    pub position: String,
    pub experience_level: ExperienceLevel,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub turns: Vec<Turn>,
    pub scores: BTreeMap<String, u8>,
    pub question_number: u32,
    pub question_budget: u32,
    pub status: SessionStatus,
    pub recommendation: Option<Recommendation>,
    pub report_sent: bool,
}

impl InterviewSession {
    pub fn new(
        candidate_name: String,
        position: String,
        experience_level: ExperienceLevel,
    ) -> Self {
        Self {
            id: SessionId::new(),
            candidate_name,
            position,
            experience_level,
            started_at: Utc::now(),
            ended_at: None,
            turns: Vec::new(),
            scores: BTreeMap::new(),
            question_number: 0,
            question_budget: DEFAULT_QUESTION_BUDGET,
            status: SessionStatus::InProgress,
            recommendation: None,
            report_sent: false,
        }
    }

    pub fn append_turn(&mut self, role: TurnRole, text: String) {
        self.turns.push(Turn::new(role, text));
    }

    pub fn budget_reached(&self) -> bool {
        self.question_number >= self.question_budget
    }

    /// Texts of the most recent turns, oldest first, capped at `count`.
    pub fn recent_turn_texts(&self, count: usize) -> Vec<&str> {
        let start = self.turns.len().saturating_sub(count);
        self.turns[start..].iter().map(|t| t.text.as_str()).collect()
    }
}
