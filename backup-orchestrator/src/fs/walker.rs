//! Listing of files stored under a repository directory.
//!
//! Used to report what a restore point physically contains on disk.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A file found under a restore point directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Full path to the file
    pub path: PathBuf,

    /// Path relative to the walked root
    pub relative_path: PathBuf,

    /// File size in bytes
    pub size: u64,
}

impl StoredFile {
    fn from_entry(entry: &DirEntry, root: &Path) -> std::io::Result<Self> {
        let metadata = entry.metadata()?;
        let path = entry.path().to_path_buf();
        let relative_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();

        Ok(Self {
            path,
            relative_path,
            size: metadata.len(),
        })
    }
}

/// Walk a directory tree and collect every regular file, sorted by relative path.
///
/// # Example
/// ```no_run
/// use backup_orchestrator::fs::walker::walk_files;
/// use std::path::Path;
///
/// let files = walk_files(Path::new("./backup_repository/P1")).unwrap();
/// println!("Stored {} files", files.len());
/// ```
pub fn walk_files(root: &Path) -> std::io::Result<Vec<StoredFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;

        if !entry.file_type().is_file() {
            continue;
        }

        files.push(StoredFile::from_entry(&entry, root)?);
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_empty_directory() -> std::io::Result<()> {
        let temp_dir = TempDir::new()?;
        let files = walk_files(temp_dir.path())?;
        assert_eq!(files.len(), 0);
        Ok(())
    }

    #[test]
    fn test_walk_nested_files() -> std::io::Result<()> {
        let temp_dir = TempDir::new()?;

        fs::create_dir(temp_dir.path().join("b.txt"))?;
        fs::write(temp_dir.path().join("b.txt/b.txt"), b"content2")?;
        fs::create_dir(temp_dir.path().join("a.txt"))?;
        fs::write(temp_dir.path().join("a.txt/a.txt"), b"content1")?;

        let files = walk_files(temp_dir.path())?;
        let relative: Vec<_> = files.iter().map(|f| f.relative_path.clone()).collect();

        assert_eq!(
            relative,
            vec![PathBuf::from("a.txt/a.txt"), PathBuf::from("b.txt/b.txt")]
        );

        Ok(())
    }

    #[test]
    fn test_walk_missing_root_fails() {
        let result = walk_files(Path::new("/nonexistent_path_12345"));
        assert!(result.is_err());
    }
}
