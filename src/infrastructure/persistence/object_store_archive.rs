use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ArchiveError, ExchangeRecord, InterviewArchive, SessionRecord};
use crate::domain::SessionId;

/// Interview artifact sink on any `object_store` backend. Transcripts are
/// kept as one JSON list per session and appended with a read-modify-write;
/// the caller guarantees at most one in-flight turn per session, so the
/// read-modify-write cannot lose entries.
pub struct ObjectStoreArchive {
    inner: Arc<dyn ObjectStore>,
}

impl ObjectStoreArchive {
    pub fn new(inner: Arc<dyn ObjectStore>) -> Self {
        Self { inner }
    }

    pub fn local(base_path: PathBuf) -> Result<Self, ArchiveError> {
        std::fs::create_dir_all(&base_path)
            .map_err(|e| ArchiveError::WriteFailed(e.to_string()))?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| ArchiveError::WriteFailed(e.to_string()))?;
        Ok(Self::new(Arc::new(fs)))
    }

    pub fn azure(account: &str, access_key: &str, container: &str) -> Result<Self, ArchiveError> {
        let store = MicrosoftAzureBuilder::new()
            .with_account(account)
            .with_access_key(access_key)
            .with_container_name(container)
            .build()
            .map_err(|e| ArchiveError::WriteFailed(e.to_string()))?;
        Ok(Self::new(Arc::new(store)))
    }

    fn transcript_path(session_id: SessionId) -> StorePath {
        StorePath::from(format!("transcripts/{}.json", session_id))
    }

    fn snapshot_path(session_id: &str) -> StorePath {
        StorePath::from(format!("evaluations/{}.json", session_id))
    }

    fn report_path(session_id: SessionId) -> StorePath {
        StorePath::from(format!("reports/{}.html", session_id))
    }

    async fn put(&self, path: &StorePath, bytes: Vec<u8>) -> Result<(), ArchiveError> {
        self.inner
            .put(path, PutPayload::from(bytes))
            .await
            .map(|_| ())
            .map_err(|e| ArchiveError::WriteFailed(e.to_string()))
    }
}

#[async_trait]
impl InterviewArchive for ObjectStoreArchive {
    async fn append_exchange(
        &self,
        session_id: SessionId,
        exchange: &ExchangeRecord,
    ) -> Result<(), ArchiveError> {
        let path = Self::transcript_path(session_id);

        let mut records: Vec<ExchangeRecord> = match self.inner.get(&path).await {
            Ok(result) => {
                let bytes = result
                    .bytes()
                    .await
                    .map_err(|e| ArchiveError::ReadFailed(e.to_string()))?;
                serde_json::from_slice(&bytes)
                    .map_err(|e| ArchiveError::MalformedRecord(e.to_string()))?
            }
            Err(object_store::Error::NotFound { .. }) => Vec::new(),
            Err(e) => return Err(ArchiveError::ReadFailed(e.to_string())),
        };

        records.push(exchange.clone());

        let bytes = serde_json::to_vec_pretty(&records)
            .map_err(|e| ArchiveError::MalformedRecord(e.to_string()))?;
        self.put(&path, bytes).await
    }

    async fn store_snapshot(&self, record: &SessionRecord) -> Result<(), ArchiveError> {
        let bytes = serde_json::to_vec_pretty(record)
            .map_err(|e| ArchiveError::MalformedRecord(e.to_string()))?;
        self.put(&Self::snapshot_path(&record.session_id), bytes).await
    }

    async fn store_report(
        &self,
        session_id: SessionId,
        document: &[u8],
    ) -> Result<(), ArchiveError> {
        self.put(&Self::report_path(session_id), document.to_vec())
            .await
    }
}
