mod http_email_client;
mod noop_mailer;

pub use http_email_client::HttpEmailClient;
pub use noop_mailer::NoopMailer;
