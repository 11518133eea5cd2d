//! ProfileStore port for persisting the behavioral profile artifact.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::profile::BehavioralProfile;

/// Errors that can occur during file storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Content could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StorageError {
    /// Maps an I/O error on `path` to the closest variant.
    pub fn from_io(err: &std::io::Error, path: &std::path::Path) -> Self {
        let location = path.display().to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(location),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(location),
            _ => Self::Io(format!("{}: {}", location, err)),
        }
    }
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Persistence for the single JSON artifact a run produces.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Write the profile, replacing any previous artifact.
    ///
    /// Returns the path written.
    async fn save(&self, profile: &BehavioralProfile) -> Result<PathBuf, StorageError>;

    /// Read back the last saved profile.
    async fn load(&self) -> Result<BehavioralProfile, StorageError>;

    /// Where the artifact lives.
    fn location(&self) -> PathBuf;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn io_errors_map_by_kind() {
        let path = Path::new("/tmp/x.json");
        assert_eq!(
            StorageError::from_io(&io::Error::from(io::ErrorKind::NotFound), path),
            StorageError::NotFound("/tmp/x.json".to_string())
        );
        assert!(matches!(
            StorageError::from_io(&io::Error::from(io::ErrorKind::PermissionDenied), path),
            StorageError::PermissionDenied(_)
        ));
        assert!(matches!(
            StorageError::from_io(&io::Error::new(io::ErrorKind::Other, "disk full"), path),
            StorageError::Io(_)
        ));
    }

    #[test]
    fn converts_to_domain_error() {
        let err: DomainError = StorageError::InvalidPath("".into()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("Invalid path"));
    }
}
