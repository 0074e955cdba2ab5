use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{SessionStore, SessionStoreError};
use crate::domain::{InterviewSession, SessionId, SessionStatus};

#[derive(Default)]
struct Partitions {
    active: HashMap<SessionId, InterviewSession>,
    completed: HashMap<SessionId, InterviewSession>,
}

/// Process-local session store. Both partitions live behind one `RwLock`, so
/// `create`, `complete` and `update_status` are serialized and a session can
/// never exist in both partitions at once.
#[derive(Default)]
pub struct InMemorySessionStore {
    partitions: RwLock<Partitions>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, session: InterviewSession) -> Result<(), SessionStoreError> {
        let mut partitions = self.partitions.write().await;
        let id = session.id;
        if partitions.active.contains_key(&id) || partitions.completed.contains_key(&id) {
            return Err(SessionStoreError::AlreadyExists(id.to_string()));
        }
        partitions.active.insert(id, session);
        Ok(())
    }

    async fn get_active(&self, id: SessionId) -> Result<InterviewSession, SessionStoreError> {
        let partitions = self.partitions.read().await;
        partitions
            .active
            .get(&id)
            .cloned()
            .ok_or_else(|| SessionStoreError::NotFound(id.to_string()))
    }

    async fn save_active(&self, session: InterviewSession) -> Result<(), SessionStoreError> {
        let mut partitions = self.partitions.write().await;
        let id = session.id;
        if !partitions.active.contains_key(&id) {
            return Err(SessionStoreError::NotFound(id.to_string()));
        }
        partitions.active.insert(id, session);
        Ok(())
    }

    async fn complete(&self, session: InterviewSession) -> Result<(), SessionStoreError> {
        let mut partitions = self.partitions.write().await;
        let id = session.id;
        if partitions.active.remove(&id).is_none() {
            return Err(SessionStoreError::NotFound(id.to_string()));
        }
        partitions.completed.insert(id, session);
        Ok(())
    }

    async fn update_status(
        &self,
        id: SessionId,
        status: SessionStatus,
    ) -> Result<(), SessionStoreError> {
        let mut partitions = self.partitions.write().await;
        match partitions.completed.get_mut(&id) {
            Some(session) => {
                session.status = status;
                Ok(())
            }
            None => Err(SessionStoreError::NotFound(id.to_string())),
        }
    }

    async fn mark_report_sent(&self, id: SessionId) -> Result<(), SessionStoreError> {
        let mut partitions = self.partitions.write().await;
        match partitions.completed.get_mut(&id) {
            Some(session) => {
                session.report_sent = true;
                Ok(())
            }
            None => Err(SessionStoreError::NotFound(id.to_string())),
        }
    }

    async fn list_all(&self) -> Result<Vec<InterviewSession>, SessionStoreError> {
        let partitions = self.partitions.read().await;
        let mut sessions: Vec<InterviewSession> = partitions
            .active
            .values()
            .chain(partitions.completed.values())
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(sessions)
    }
}
