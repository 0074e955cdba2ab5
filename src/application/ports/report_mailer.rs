use async_trait::async_trait;

/// Best-effort email dispatch of a rendered interview report. Failures are
/// logged by the report worker; the candidate-facing flow has already
/// returned by the time this runs.
#[async_trait]
pub trait ReportMailer: Send + Sync {
    async fn send_report(&self, report: &OutboundReport) -> Result<(), MailerError>;
}

#[derive(Debug, Clone)]
pub struct OutboundReport {
    pub subject: String,
    pub html_body: String,
    pub attachment_name: String,
    pub attachment: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rejected by provider: {0}")]
    Rejected(String),
}
