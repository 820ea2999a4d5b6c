//! Backup objects: the source units a job captures.

use crate::fs::FileSystem;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// One backable unit.
///
/// `size` and `exists` query storage on every call; nothing is cached.
pub trait BackupObject: fmt::Debug + Send + Sync {
    /// Source path. Two objects are the same object when their paths are equal.
    fn path(&self) -> &str;

    /// Display name, derived from the path.
    fn name(&self) -> String;

    /// Size in bytes, 0 when the object does not exist.
    fn size(&self) -> u64;

    fn exists(&self) -> bool;
}

/// A single file on the local filesystem.
#[derive(Clone)]
pub struct FileBackupObject {
    path: String,
    fs: Arc<dyn FileSystem>,
}

impl FileBackupObject {
    pub fn new(path: impl Into<String>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }
}

impl fmt::Debug for FileBackupObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileBackupObject")
            .field("path", &self.path)
            .finish()
    }
}

impl BackupObject for FileBackupObject {
    fn path(&self) -> &str {
        &self.path
    }

    fn name(&self) -> String {
        self.fs.file_name(&self.path)
    }

    fn size(&self) -> u64 {
        if !self.exists() {
            return 0;
        }
        self.fs.size(Path::new(&self.path))
    }

    fn exists(&self) -> bool {
        self.fs.exists(Path::new(&self.path))
    }
}

/// Builds backup objects from paths. Existence is left for the consumer to check.
#[derive(Clone)]
pub struct BackupObjectFactory {
    fs: Arc<dyn FileSystem>,
}

impl BackupObjectFactory {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    pub fn create_file_backup_object(&self, path: impl Into<String>) -> Arc<dyn BackupObject> {
        Arc::new(FileBackupObject::new(path, self.fs.clone()))
    }
}
