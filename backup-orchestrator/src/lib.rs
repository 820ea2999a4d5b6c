//! Backup Orchestrator Library
//!
//! Tracks source files under backup jobs and writes point-in-time restore
//! points into a repository directory using a pluggable storage layout.

pub mod config;
pub mod fs;
pub mod job;
pub mod object;
pub mod point;
pub mod repository;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use fs::{FileSystem, LocalFileSystem};
pub use job::{BackupJob, JobSummary};
pub use object::{BackupObject, BackupObjectFactory, FileBackupObject};
pub use point::RestorePoint;
pub use repository::BackupRepository;
pub use storage::{CollisionPolicy, SingleStorage, SplitStorage, StorageAlgorithm, StorageKind};
pub use utils::errors::BackupError;
pub type Result<T> = std::result::Result<T, BackupError>;
