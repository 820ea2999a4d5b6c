//! One shared directory for every object.

use super::{
    colliding_names, copy_object, create_dir_logged, ensure_exists, prepare_point_dir,
    CollisionPolicy, StorageAlgorithm,
};
use crate::fs::FileSystem;
use crate::object::BackupObject;
use crate::{BackupError, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Name of the shared directory inside a restore point.
pub const COMMON_DIR: &str = "common";

/// Stores every object as `<point>/common/<name>`.
#[derive(Clone)]
pub struct SingleStorage {
    fs: Arc<dyn FileSystem>,
    collision: CollisionPolicy,
}

impl SingleStorage {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self::with_policy(fs, CollisionPolicy::default())
    }

    pub fn with_policy(fs: Arc<dyn FileSystem>, collision: CollisionPolicy) -> Self {
        Self { fs, collision }
    }
}

impl StorageAlgorithm for SingleStorage {
    fn store(
        &self,
        objects: &[Arc<dyn BackupObject>],
        destination: &Path,
        point_name: &str,
    ) -> Result<()> {
        let collisions = colliding_names(objects);
        if let Some(name) = collisions.first() {
            match self.collision {
                CollisionPolicy::Reject => {
                    return Err(BackupError::NameCollision {
                        name: name.clone(),
                        point: point_name.to_string(),
                    });
                }
                CollisionPolicy::Overwrite => {
                    for name in &collisions {
                        warn!(
                            "Several objects are named {} in restore point {}; the last one wins",
                            name, point_name
                        );
                    }
                }
            }
        }

        let fs = self.fs.as_ref();
        let point_path = prepare_point_dir(fs, destination, point_name);

        let common_dir = point_path.join(COMMON_DIR);
        create_dir_logged(fs, &common_dir);

        for object in objects {
            ensure_exists(object.as_ref())?;
            copy_object(fs, object.as_ref(), &common_dir.join(object.name()))?;
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "single"
    }
}
