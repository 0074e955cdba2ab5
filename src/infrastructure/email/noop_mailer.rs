use crate::application::ports::{MailerError, OutboundReport, ReportMailer};

/// Stands in when no email provider is configured: logs the dispatch and
/// reports success so the rest of the report pipeline still runs.
pub struct NoopMailer;

#[async_trait::async_trait]
impl ReportMailer for NoopMailer {
    async fn send_report(&self, report: &OutboundReport) -> Result<(), MailerError> {
        tracing::info!(subject = %report.subject, "Email delivery disabled, report not sent");
        Ok(())
    }
}
