use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::Instrument;

use crate::application::ports::{
    InterviewArchive, OutboundReport, ReportMailer, SessionRecord, SessionStore,
};
use crate::domain::{Evaluation, InterviewSession};

use super::report_renderer::render_report;

/// Handoff from the request path to the report pipeline: an immutable
/// snapshot of the completed session plus its evaluation.
pub struct ReportMessage {
    pub session: InterviewSession,
    pub evaluation: Evaluation,
}

/// Background task that archives completed sessions and dispatches the
/// rendered report by email. Runs outside the request lifecycle; every
/// failure is logged and isolated so nothing here can affect a response that
/// has already been returned.
pub struct ReportWorker {
    receiver: mpsc::Receiver<ReportMessage>,
    archive: Arc<dyn InterviewArchive>,
    mailer: Arc<dyn ReportMailer>,
    store: Arc<dyn SessionStore>,
}

impl ReportWorker {
    pub fn new(
        receiver: mpsc::Receiver<ReportMessage>,
        archive: Arc<dyn InterviewArchive>,
        mailer: Arc<dyn ReportMailer>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            receiver,
            archive,
            mailer,
            store,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Report worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "report_job",
                session_id = %msg.session.id,
                candidate = %msg.session.candidate_name,
            );
            self.process(msg).instrument(span).await;
        }
        tracing::info!("Report worker stopped: channel closed");
    }

    async fn process(&self, msg: ReportMessage) {
        let ReportMessage {
            session,
            evaluation,
        } = msg;
        let document = render_report(&evaluation);

        if let Err(e) = self
            .archive
            .store_report(session.id, document.as_bytes())
            .await
        {
            tracing::warn!(error = %e, "Failed to archive report document");
        }

        let record = SessionRecord::from_session(&session, Some(evaluation.narrative.clone()));
        if let Err(e) = self.archive.store_snapshot(&record).await {
            tracing::warn!(error = %e, "Failed to archive session snapshot");
        }

        let report = OutboundReport {
            subject: format!(
                "Interview Report - {} - {}",
                evaluation.candidate_name, evaluation.position
            ),
            attachment_name: format!(
                "interview_report_{}.html",
                evaluation.candidate_name.replace(' ', "_")
            ),
            html_body: document.clone(),
            attachment: document.into_bytes(),
        };

        match self.mailer.send_report(&report).await {
            Ok(()) => {
                if let Err(e) = self.store.mark_report_sent(session.id).await {
                    tracing::warn!(error = %e, "Report dispatched but flag update failed");
                }
                tracing::info!("Interview report dispatched");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to dispatch interview report");
            }
        }
    }
}
