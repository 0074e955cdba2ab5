mod dialogue_client;
mod interview_archive;
mod report_mailer;
mod session_store;
mod speech_synthesizer;
mod transcriber;

pub use dialogue_client::{DialogueClient, DialogueError};
pub use interview_archive::{
    ArchiveError, ExchangeRecord, InterviewArchive, SessionRecord, TurnRecord,
};
pub use report_mailer::{MailerError, OutboundReport, ReportMailer};
pub use session_store::{SessionStore, SessionStoreError};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use transcriber::{Transcriber, TranscriberError};
