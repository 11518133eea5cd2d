//! Filesystem profile store: one pretty-printed JSON file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::profile::BehavioralProfile;
use crate::ports::{ProfileStore, StorageError};

pub struct FsProfileStore {
    file_path: PathBuf,
}

impl FsProfileStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Ensure parent directory exists
    async fn ensure_dir_exists(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(format!("Failed to create directory: {}", e)))?;
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for FsProfileStore {
    async fn save(&self, profile: &BehavioralProfile) -> Result<PathBuf, StorageError> {
        if self.file_path.as_os_str().is_empty() {
            return Err(StorageError::InvalidPath("output path is empty".to_string()));
        }

        let content = serde_json::to_string_pretty(profile)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        self.ensure_dir_exists().await?;

        // Write atomically using a temporary file
        let temp_path = self.file_path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to write temporary file: {}", e)))?;

        // Rename to final location (atomic operation on Unix)
        fs::rename(&temp_path, &self.file_path)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to rename file: {}", e)))?;

        info!(path = %self.file_path.display(), "Saved behavioral profile");
        Ok(self.file_path.clone())
    }

    async fn load(&self) -> Result<BehavioralProfile, StorageError> {
        let raw = fs::read_to_string(&self.file_path)
            .await
            .map_err(|e| StorageError::from_io(&e, &self.file_path))?;

        serde_json::from_str(&raw).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    fn location(&self) -> PathBuf {
        self.file_path.clone()
    }
}
