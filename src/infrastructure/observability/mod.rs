mod init_tracing;
mod request_id;
mod transcript_sanitizer;

pub use init_tracing::init_tracing;
pub use request_id::{request_id_middleware, REQUEST_ID_HEADER};
pub use transcript_sanitizer::sanitize_transcript;
