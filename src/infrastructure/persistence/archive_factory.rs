use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ArchiveError, InterviewArchive};
use crate::presentation::config::{StorageBackendSetting, StorageSettings};

use super::memory_archive::MemoryArchive;
use super::object_store_archive::ObjectStoreArchive;

pub struct ArchiveFactory;

impl ArchiveFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn InterviewArchive>, ArchiveError> {
        match settings.backend {
            StorageBackendSetting::Memory => Ok(Arc::new(MemoryArchive::new())),
            StorageBackendSetting::Local => {
                let path = PathBuf::from(&settings.local_path);
                let archive = ObjectStoreArchive::local(path)?;
                Ok(Arc::new(archive))
            }
            StorageBackendSetting::Azure => {
                let account = settings
                    .azure_account
                    .as_deref()
                    .ok_or_else(|| ArchiveError::WriteFailed("azure_account required".into()))?;
                let key = settings
                    .azure_access_key
                    .as_deref()
                    .ok_or_else(|| ArchiveError::WriteFailed("azure_access_key required".into()))?;
                let container = settings
                    .azure_container
                    .as_deref()
                    .ok_or_else(|| ArchiveError::WriteFailed("azure_container required".into()))?;
                let archive = ObjectStoreArchive::azure(account, key, container)?;
                Ok(Arc::new(archive))
            }
        }
    }
}
