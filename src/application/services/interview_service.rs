use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;

use crate::application::ports::{
    DialogueClient, DialogueError, ExchangeRecord, InterviewArchive, SessionStore,
    SessionStoreError, SpeechSynthesizer, Transcriber,
};
use crate::domain::{
    Evaluation, ExperienceLevel, InterviewSession, Recommendation, SessionId, SessionStatus, Turn,
    TurnRole,
};

use super::report_worker::ReportMessage;
use super::{prompts, scoring};

/// Drives one session through its turns: transcribe, converse, synthesize,
/// score, persist, and decide when the session terminates. The only shared
/// mutable resource it touches is the session store; every provider call
/// degrades to a safe substitute except dialogue generation during `start`.
pub struct InterviewService<D, T, S>
where
    D: DialogueClient,
    T: Transcriber,
    S: SpeechSynthesizer,
{
    dialogue: Arc<D>,
    transcriber: Arc<T>,
    synthesizer: Arc<S>,
    store: Arc<dyn SessionStore>,
    archive: Arc<dyn InterviewArchive>,
    report_sender: mpsc::Sender<ReportMessage>,
}

impl<D, T, S> InterviewService<D, T, S>
where
    D: DialogueClient,
    T: Transcriber,
    S: SpeechSynthesizer,
{
    pub fn new(
        dialogue: Arc<D>,
        transcriber: Arc<T>,
        synthesizer: Arc<S>,
        store: Arc<dyn SessionStore>,
        archive: Arc<dyn InterviewArchive>,
        report_sender: mpsc::Sender<ReportMessage>,
    ) -> Self {
        Self {
            dialogue,
            transcriber,
            synthesizer,
            store,
            archive,
            report_sender,
        }
    }

    /// Creates a session, asks the dialogue provider for the opening
    /// question, and registers the session as active. Dialogue failure here
    /// is the one provider error surfaced to the caller: without a first
    /// question there is no interview.
    pub async fn start(
        &self,
        candidate_name: &str,
        position: &str,
        experience_level: ExperienceLevel,
    ) -> Result<StartedInterview, InterviewError> {
        let candidate_name = candidate_name.trim();
        let position = position.trim();
        if candidate_name.is_empty() {
            return Err(InterviewError::InvalidRequest(
                "candidate_name must not be empty".to_string(),
            ));
        }
        if position.is_empty() {
            return Err(InterviewError::InvalidRequest(
                "position must not be empty".to_string(),
            ));
        }

        let mut session = InterviewSession::new(
            candidate_name.to_string(),
            position.to_string(),
            experience_level,
        );
        session.append_turn(
            TurnRole::System,
            prompts::interviewer_system_prompt(position, experience_level),
        );

        let mut opener = session.turns.clone();
        opener.push(Turn::new(
            TurnRole::Candidate,
            prompts::OPENING_SEED.to_string(),
        ));
        let first_question = self.dialogue.next_message(&opener).await?;

        session.append_turn(TurnRole::Interviewer, first_question.clone());
        session.question_number = 1;

        let audio = self.synthesize_or_empty(&first_question).await;

        let session_id = session.id;
        self.store
            .create(session)
            .await
            .map_err(InterviewError::Store)?;

        tracing::info!(
            session_id = %session_id,
            candidate = %candidate_name,
            position = %position,
            level = %experience_level,
            "Interview started"
        );

        Ok(StartedInterview {
            session_id,
            first_question,
            audio,
        })
    }

    /// Processes one candidate audio submission. Never fails for provider
    /// reasons: unusable audio becomes a clarification prompt, a failed
    /// dialogue call becomes a generic follow-up, failed synthesis becomes
    /// empty audio, and archive errors are logged only. The question counter
    /// is incremented exactly once, here.
    pub async fn submit_response(
        &self,
        session_id: SessionId,
        audio: &[u8],
    ) -> Result<TurnOutcome, InterviewError> {
        let mut session = self.fetch_active(session_id).await?;

        let transcript = self.transcribe_or_clarify(audio).await;
        session.append_turn(TurnRole::Candidate, transcript.clone());

        let mut turns = session.turns.clone();
        turns.push(Turn::new(
            TurnRole::System,
            prompts::next_question_reminder(
                session.question_number,
                session.question_budget,
                &session.position,
            ),
        ));
        let next_question = match self.dialogue.next_message(&turns).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    session_id = %session_id,
                    error = %e,
                    "Dialogue generation failed, substituting generic follow-up"
                );
                prompts::GENERIC_FOLLOW_UP.to_string()
            }
        };
        session.append_turn(TurnRole::Interviewer, next_question.clone());

        let audio_reply = self.synthesize_or_empty(&next_question).await;

        session.question_number += 1;
        scoring::update_scores(&mut session);

        let exchange = ExchangeRecord {
            timestamp: Utc::now(),
            candidate_text: transcript.clone(),
            interviewer_text: next_question.clone(),
            question_number: session.question_number,
            scores: session.scores.clone(),
        };
        if let Err(e) = self.archive.append_exchange(session_id, &exchange).await {
            tracing::warn!(
                session_id = %session_id,
                error = %e,
                "Failed to archive exchange record"
            );
        }

        let question_number = session.question_number;
        let question_budget = session.question_budget;
        let interview_complete = session.budget_reached();

        self.store
            .save_active(session)
            .await
            .map_err(Self::map_store_error)?;

        Ok(TurnOutcome {
            transcript,
            next_question,
            audio: audio_reply,
            question_number,
            question_budget,
            interview_complete,
        })
    }

    /// Explicitly terminates an active session: stamps the end time, obtains
    /// the long-form evaluation, extracts the recommendation, moves the
    /// session to the durable partition, and enqueues report generation
    /// without awaiting it.
    pub async fn end(&self, session_id: SessionId) -> Result<EndConfirmation, InterviewError> {
        let mut session = self.fetch_active(session_id).await?;

        let ended_at = Utc::now();
        session.ended_at = Some(ended_at);
        session.status = SessionStatus::Completed;

        let mut turns = session.turns.clone();
        turns.push(Turn::new(
            TurnRole::System,
            prompts::evaluation_prompt(
                &session.candidate_name,
                &session.position,
                session.experience_level,
                session.question_number,
            ),
        ));
        let narrative = match self.dialogue.evaluate(&turns).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    session_id = %session_id,
                    error = %e,
                    "Final evaluation failed, substituting fallback narrative"
                );
                prompts::FALLBACK_NARRATIVE.to_string()
            }
        };
        let recommendation = Recommendation::from_narrative(&narrative);
        session.recommendation = Some(recommendation);

        let evaluation = Evaluation {
            session_id,
            candidate_name: session.candidate_name.clone(),
            position: session.position.clone(),
            experience_level: session.experience_level,
            started_at: session.started_at,
            ended_at,
            questions_completed: session.question_number,
            scores: session.scores.clone(),
            narrative,
            recommendation,
        };

        let snapshot = session.clone();
        self.store
            .complete(session)
            .await
            .map_err(Self::map_store_error)?;

        if let Err(e) = self.report_sender.try_send(ReportMessage {
            session: snapshot,
            evaluation,
        }) {
            tracing::error!(
                session_id = %session_id,
                error = %e,
                "Failed to enqueue report generation"
            );
        }

        tracing::info!(
            session_id = %session_id,
            recommendation = %recommendation,
            "Interview completed"
        );

        Ok(EndConfirmation {
            session_id,
            recommendation,
        })
    }

    /// Read-only snapshot of every session in both partitions.
    pub async fn list_sessions(&self) -> Result<Vec<InterviewSession>, InterviewError> {
        self.store.list_all().await.map_err(InterviewError::Store)
    }

    /// External reviewer action on a completed session. Only the status
    /// field changes; notes are logged, not persisted.
    pub async fn update_status(
        &self,
        session_id: SessionId,
        status: SessionStatus,
        notes: Option<&str>,
    ) -> Result<(), InterviewError> {
        if !status.is_review_outcome() {
            return Err(InterviewError::InvalidRequest(format!(
                "status '{}' is not a review outcome",
                status
            )));
        }

        self.store
            .update_status(session_id, status)
            .await
            .map_err(Self::map_store_error)?;

        match notes.map(str::trim).filter(|n| !n.is_empty()) {
            Some(notes) => tracing::info!(
                session_id = %session_id,
                status = %status,
                notes = %notes,
                "Review status updated"
            ),
            None => tracing::info!(
                session_id = %session_id,
                status = %status,
                "Review status updated"
            ),
        }

        Ok(())
    }

    async fn fetch_active(
        &self,
        session_id: SessionId,
    ) -> Result<InterviewSession, InterviewError> {
        self.store
            .get_active(session_id)
            .await
            .map_err(Self::map_store_error)
    }

    async fn transcribe_or_clarify(&self, audio: &[u8]) -> String {
        if audio.is_empty() {
            return prompts::EMPTY_AUDIO_PROMPT.to_string();
        }

        match self.transcriber.transcribe(audio).await {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.chars().count() < prompts::MIN_TRANSCRIPT_CHARS {
                    prompts::CLARIFICATION_PROMPT.to_string()
                } else {
                    trimmed.to_string()
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Transcription failed, substituting clarification");
                prompts::GARBLED_AUDIO_PROMPT.to_string()
            }
        }
    }

    async fn synthesize_or_empty(&self, text: &str) -> Vec<u8> {
        match self.synthesizer.synthesize(text).await {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!(error = %e, "Speech synthesis failed, returning empty audio");
                Vec::new()
            }
        }
    }

    fn map_store_error(error: SessionStoreError) -> InterviewError {
        match error {
            SessionStoreError::NotFound(id) => InterviewError::SessionNotFound(id),
            other => InterviewError::Store(other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StartedInterview {
    pub session_id: SessionId,
    pub first_question: String,
    pub audio: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub transcript: String,
    pub next_question: String,
    pub audio: Vec<u8>,
    pub question_number: u32,
    pub question_budget: u32,
    pub interview_complete: bool,
}

#[derive(Debug, Clone)]
pub struct EndConfirmation {
    pub session_id: SessionId,
    pub recommendation: Recommendation,
}

#[derive(Debug, thiserror::Error)]
pub enum InterviewError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("session not found: {0}")]
    SessionNotFound(String),
    #[error("dialogue generation unavailable: {0}")]
    DialogueUnavailable(#[from] DialogueError),
    #[error("session store: {0}")]
    Store(SessionStoreError),
}
