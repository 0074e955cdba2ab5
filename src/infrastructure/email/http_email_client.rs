use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde::Serialize;

use crate::application::ports::{MailerError, OutboundReport, ReportMailer};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const API_VERSION: &str = "2023-03-31";

/// Report delivery through an Azure Communication Services-compatible email
/// REST endpoint. The rendered document rides along as a base64 attachment.
pub struct HttpEmailClient {
    client: reqwest::Client,
    endpoint: String,
    access_key: String,
    sender: String,
    recipient: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailPayload<'a> {
    sender_address: &'a str,
    recipients: Recipients<'a>,
    content: EmailContent<'a>,
    attachments: Vec<EmailAttachment>,
}

#[derive(Serialize)]
struct Recipients<'a> {
    to: Vec<EmailAddress<'a>>,
}

#[derive(Serialize)]
struct EmailAddress<'a> {
    address: &'a str,
}

#[derive(Serialize)]
struct EmailContent<'a> {
    subject: &'a str,
    html: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailAttachment {
    name: String,
    content_type: String,
    content_in_base64: String,
}

impl HttpEmailClient {
    pub fn new(endpoint: String, access_key: String, sender: String, recipient: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            access_key,
            sender,
            recipient,
        }
    }
}

#[async_trait]
impl ReportMailer for HttpEmailClient {
    async fn send_report(&self, report: &OutboundReport) -> Result<(), MailerError> {
        let url = format!(
            "{}/emails:send?api-version={}",
            self.endpoint, API_VERSION
        );

        let payload = EmailPayload {
            sender_address: &self.sender,
            recipients: Recipients {
                to: vec![EmailAddress {
                    address: &self.recipient,
                }],
            },
            content: EmailContent {
                subject: &report.subject,
                html: &report.html_body,
            },
            attachments: vec![EmailAttachment {
                name: report.attachment_name.clone(),
                content_type: "text/html".to_string(),
                content_in_base64: base64::engine::general_purpose::STANDARD
                    .encode(&report.attachment),
            }],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| MailerError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Rejected(format!("status {}: {}", status, body)));
        }

        tracing::info!(recipient = %self.recipient, "Report email accepted by provider");
        Ok(())
    }
}
