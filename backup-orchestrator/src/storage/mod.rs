//! Storage algorithms: how a restore point's copies are laid out on disk.
//!
//! Layout under `<root>/<point>/`:
//! - [`SplitStorage`]: `<name>/<name>` per object
//! - [`SingleStorage`]: `common/<name>` per object

pub mod single;
pub mod split;

pub use single::SingleStorage;
pub use split::SplitStorage;

use crate::fs::FileSystem;
use crate::object::BackupObject;
use crate::{BackupError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Lays out copies of a set of objects for one restore point.
pub trait StorageAlgorithm: Send + Sync {
    /// Copy `objects` under `destination/point_name`.
    ///
    /// Every object is checked for existence right before it is copied. The
    /// first failure aborts the call; files already written stay on disk.
    fn store(
        &self,
        objects: &[Arc<dyn BackupObject>],
        destination: &Path,
        point_name: &str,
    ) -> Result<()>;

    /// Short name used in logs and job summaries.
    fn name(&self) -> &'static str;
}

/// Selects a storage algorithm from configuration or the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Split,
    Single,
}

impl StorageKind {
    pub fn build(self, fs: Arc<dyn FileSystem>, collision: CollisionPolicy) -> Arc<dyn StorageAlgorithm> {
        match self {
            StorageKind::Split => Arc::new(SplitStorage::new(fs)),
            StorageKind::Single => Arc::new(SingleStorage::with_policy(fs, collision)),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Split => write!(f, "split"),
            StorageKind::Single => write!(f, "single"),
        }
    }
}

/// What [`SingleStorage`] does when two objects share a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Later copies overwrite earlier ones. Each collision is logged.
    #[default]
    Overwrite,
    /// Fail with [`BackupError::NameCollision`] before anything is copied.
    Reject,
}

/// Create `destination/point_name` unless it is already there.
///
/// A failure here is only logged; the copies that follow report it.
fn prepare_point_dir(fs: &dyn FileSystem, destination: &Path, point_name: &str) -> PathBuf {
    let point_path = destination.join(point_name);
    if !fs.exists(&point_path) {
        create_dir_logged(fs, &point_path);
    }
    point_path
}

fn create_dir_logged(fs: &dyn FileSystem, path: &Path) {
    if let Err(e) = fs.create_dir(path) {
        warn!("Failed to create directory {}: {}", path.display(), e);
    }
}

/// Display names that occur more than once, in first-collision order.
fn colliding_names(objects: &[Arc<dyn BackupObject>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut collisions = Vec::new();
    for object in objects {
        let name = object.name();
        if !seen.insert(name.clone()) && !collisions.contains(&name) {
            collisions.push(name);
        }
    }
    collisions
}

fn ensure_exists(object: &dyn BackupObject) -> Result<()> {
    if object.exists() {
        Ok(())
    } else {
        Err(BackupError::ObjectNotFound(object.path().to_string()))
    }
}

fn copy_object(fs: &dyn FileSystem, object: &dyn BackupObject, destination: &Path) -> Result<()> {
    let source = object.path();
    let bytes = fs
        .copy(Path::new(source), destination)
        .map_err(|e| BackupError::StorageWriteFailed {
            path: source.to_string(),
            source: e,
        })?;

    debug!("Copied {} -> {} ({} bytes)", source, destination.display(), bytes);
    Ok(())
}
