//! The repository: root directory under which restore points are written.

use crate::fs::walker::{walk_files, StoredFile};
use crate::fs::FileSystem;
use crate::{BackupError, Result};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct BackupRepository {
    path: PathBuf,
}

impl BackupRepository {
    /// Open the repository at `path`, creating the directory if it is absent.
    ///
    /// Only the last path component is created; a missing parent is an error.
    pub fn new(path: impl Into<PathBuf>, fs: &dyn FileSystem) -> Result<Self> {
        let path = path.into();

        if !fs.exists(&path) {
            fs.create_dir(&path)
                .map_err(|e| BackupError::RepositoryInitFailed {
                    path: path.display().to_string(),
                    source: e,
                })?;
            info!("Created repository at {}", path.display());
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory a restore point named `point_name` is written to.
    pub fn point_path(&self, point_name: &str) -> PathBuf {
        self.path.join(point_name)
    }

    /// Files currently stored for a restore point, sorted by relative path.
    pub fn stored_files(&self, point_name: &str) -> std::io::Result<Vec<StoredFile>> {
        walk_files(&self.point_path(point_name))
    }
}
