use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{ArchiveError, ExchangeRecord, InterviewArchive, SessionRecord};
use crate::domain::SessionId;

/// Keeps archived artifacts in a process-local map. Used in tests and when
/// no storage backend is configured.
#[derive(Default)]
pub struct MemoryArchive {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().await.get(key).cloned()
    }
}

#[async_trait]
impl InterviewArchive for MemoryArchive {
    async fn append_exchange(
        &self,
        session_id: SessionId,
        exchange: &ExchangeRecord,
    ) -> Result<(), ArchiveError> {
        let key = format!("transcripts/{}.json", session_id);
        let mut entries = self.entries.lock().await;

        let mut records: Vec<ExchangeRecord> = match entries.get(&key) {
            Some(bytes) => serde_json::from_slice(bytes)
                .map_err(|e| ArchiveError::MalformedRecord(e.to_string()))?,
            None => Vec::new(),
        };
        records.push(exchange.clone());

        let bytes = serde_json::to_vec_pretty(&records)
            .map_err(|e| ArchiveError::MalformedRecord(e.to_string()))?;
        entries.insert(key, bytes);
        Ok(())
    }

    async fn store_snapshot(&self, record: &SessionRecord) -> Result<(), ArchiveError> {
        let bytes = serde_json::to_vec_pretty(record)
            .map_err(|e| ArchiveError::MalformedRecord(e.to_string()))?;
        self.entries
            .lock()
            .await
            .insert(format!("evaluations/{}.json", record.session_id), bytes);
        Ok(())
    }

    async fn store_report(
        &self,
        session_id: SessionId,
        document: &[u8],
    ) -> Result<(), ArchiveError> {
        self.entries
            .lock()
            .await
            .insert(format!("reports/{}.html", session_id), document.to_vec());
        Ok(())
    }
}
