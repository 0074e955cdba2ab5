use async_trait::async_trait;

use crate::domain::{InterviewSession, SessionId, SessionStatus};

/// Authoritative location of every session, split into an active partition
/// (mutable by the controller during turns) and a durable partition
/// (append-only except for explicit status updates).
///
/// Implementations must serialize `create`, `complete` and `update_status` so
/// that no two calls for the same id race-overwrite each other. The
/// controller assumes exclusive ownership of a session between `get_active`
/// and the matching `save_active`; callers uphold at-most-one in-flight turn
/// per session id.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Adds a session to the active partition. Fails with `AlreadyExists` if
    /// the id is taken in either partition.
    async fn create(&self, session: InterviewSession) -> Result<(), SessionStoreError>;

    /// Clone of an active session, or `NotFound`.
    async fn get_active(&self, id: SessionId) -> Result<InterviewSession, SessionStoreError>;

    /// Writes back a mutated active session. Fails with `NotFound` if the id
    /// is no longer active.
    async fn save_active(&self, session: InterviewSession) -> Result<(), SessionStoreError>;

    /// Atomically removes the session from the active partition and inserts
    /// its final state into the durable partition. Fails with `NotFound` if
    /// the id is not active.
    async fn complete(&self, session: InterviewSession) -> Result<(), SessionStoreError>;

    /// Mutates the status of a durable session in place. Fails with
    /// `NotFound` if the id is absent from the durable partition.
    async fn update_status(
        &self,
        id: SessionId,
        status: SessionStatus,
    ) -> Result<(), SessionStoreError>;

    /// Flips the report-sent flag on a durable session.
    async fn mark_report_sent(&self, id: SessionId) -> Result<(), SessionStoreError>;

    /// Snapshot of both partitions, each entry tagged with its current
    /// status.
    async fn list_all(&self) -> Result<Vec<InterviewSession>, SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session already exists: {0}")]
    AlreadyExists(String),
    #[error("session not found: {0}")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
