//! Filesystem primitives used by backup objects, storage algorithms and the repository.
//!
//! Everything that touches storage goes through the [`FileSystem`] trait so the
//! orchestration layer never calls `std::fs` directly.

pub mod walker;

#[cfg(test)]
pub(crate) mod scripted;

use std::fs;
use std::io;
use std::path::Path;

/// Side-effecting storage primitives. Implementations hold no state.
pub trait FileSystem: Send + Sync {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Byte length of the file at `path`, or 0 if it cannot be read.
    fn size(&self, path: &Path) -> u64;

    /// Create a single directory level.
    ///
    /// Returns `Ok(true)` if the directory was created, `Ok(false)` if it was
    /// already there and an error if it could not be created.
    fn create_dir(&self, path: &Path) -> io::Result<bool>;

    /// Text after the last `/` or `\` in `path`, or the whole string if there is none.
    fn file_name(&self, path: &str) -> String;

    /// Copy the bytes of `source` to `destination`, replacing any existing file.
    fn copy(&self, source: &Path, destination: &Path) -> io::Result<u64>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn size(&self, path: &Path) -> u64 {
        fs::metadata(path).map(|m| m.len()).unwrap_or(0)
    }

    fn create_dir(&self, path: &Path) -> io::Result<bool> {
        match fs::create_dir(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn file_name(&self, path: &str) -> String {
        file_name(path).to_string()
    }

    fn copy(&self, source: &Path, destination: &Path) -> io::Result<u64> {
        fs::copy(source, destination)
    }
}

/// Display name of a path string. Splits on both `/` and `\` on every platform.
pub fn file_name(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}
