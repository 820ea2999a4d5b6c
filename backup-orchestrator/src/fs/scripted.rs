//! Local filesystem with injectable failures, for tests.

use super::{FileSystem, LocalFileSystem};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Delegates to [`LocalFileSystem`] except where a failure has been scripted.
#[derive(Debug, Default)]
pub struct ScriptedFileSystem {
    inner: LocalFileSystem,
    /// Directory names whose creation fails
    failing_dirs: Mutex<HashSet<String>>,
    /// Remaining `exists` calls that answer truthfully, per path
    vanishing: Mutex<HashMap<PathBuf, usize>>,
}

impl ScriptedFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `create_dir` fail for any directory whose last component is `name`.
    pub fn fail_create_dir(&self, name: &str) {
        self.failing_dirs.lock().unwrap().insert(name.to_string());
    }

    /// Report `path` as missing once `exists` has been asked about it `checks` times.
    pub fn vanish_after(&self, path: impl Into<PathBuf>, checks: usize) {
        self.vanishing.lock().unwrap().insert(path.into(), checks);
    }
}

impl FileSystem for ScriptedFileSystem {
    fn exists(&self, path: &Path) -> bool {
        if let Some(remaining) = self.vanishing.lock().unwrap().get_mut(path) {
            if *remaining == 0 {
                return false;
            }
            *remaining -= 1;
        }
        self.inner.exists(path)
    }

    fn size(&self, path: &Path) -> u64 {
        self.inner.size(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<bool> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        if self.failing_dirs.lock().unwrap().contains(&name) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("scripted failure creating {}", path.display()),
            ));
        }
        self.inner.create_dir(path)
    }

    fn file_name(&self, path: &str) -> String {
        self.inner.file_name(path)
    }

    fn copy(&self, source: &Path, destination: &Path) -> io::Result<u64> {
        self.inner.copy(source, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_vanish_after_counts_checks() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let file = temp_dir.path().join("a.txt");
        std::fs::write(&file, b"alpha")?;

        let fs = ScriptedFileSystem::new();
        fs.vanish_after(&file, 2);

        assert!(fs.exists(&file));
        assert!(fs.exists(&file));
        assert!(!fs.exists(&file));
        assert!(file.exists());

        Ok(())
    }

    #[test]
    fn test_fail_create_dir_by_name() -> io::Result<()> {
        let temp_dir = TempDir::new()?;
        let fs = ScriptedFileSystem::new();
        fs.fail_create_dir("common");

        assert!(fs.create_dir(&temp_dir.path().join("common")).is_err());
        assert!(fs.create_dir(&temp_dir.path().join("other"))?);

        Ok(())
    }
}
