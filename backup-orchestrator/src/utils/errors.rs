//! Error types for the backup orchestrator.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Object does not exist: {0}")]
    ObjectNotFound(String),

    #[error("Job '{0}' has no objects to back up")]
    EmptyJob(String),

    #[error("Failed to copy {path}: {source}")]
    StorageWriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create repository {path}: {source}")]
    RepositoryInitFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Name collision in restore point {point}: more than one object is named {name}")]
    NameCollision { name: String, point: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BackupError {
    /// Short machine-friendly tag for the error kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            BackupError::ObjectNotFound(_) => "object_not_found",
            BackupError::EmptyJob(_) => "empty_job",
            BackupError::StorageWriteFailed { .. } => "storage_write_failed",
            BackupError::RepositoryInitFailed { .. } => "repository_init_failed",
            BackupError::NameCollision { .. } => "name_collision",
            BackupError::Config(_) => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, BackupError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_storage_write_failed_names_source() {
        let err = BackupError::StorageWriteFailed {
            path: "d/a.txt".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.to_string().contains("d/a.txt"));
        assert_eq!(err.kind(), "storage_write_failed");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_object_not_found_message() {
        let err = BackupError::ObjectNotFound("missing.txt".to_string());
        assert_eq!(err.to_string(), "Object does not exist: missing.txt");
    }
}
