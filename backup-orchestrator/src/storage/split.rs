//! One subdirectory per object.

use super::{
    colliding_names, copy_object, create_dir_logged, ensure_exists, prepare_point_dir,
    StorageAlgorithm,
};
use crate::fs::FileSystem;
use crate::object::BackupObject;
use crate::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Stores each object as `<point>/<name>/<name>`.
#[derive(Clone)]
pub struct SplitStorage {
    fs: Arc<dyn FileSystem>,
}

impl SplitStorage {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl StorageAlgorithm for SplitStorage {
    fn store(
        &self,
        objects: &[Arc<dyn BackupObject>],
        destination: &Path,
        point_name: &str,
    ) -> Result<()> {
        for name in colliding_names(objects) {
            warn!(
                "Several objects are named {} in restore point {}; the last one wins",
                name, point_name
            );
        }

        let fs = self.fs.as_ref();
        let point_path = prepare_point_dir(fs, destination, point_name);

        for object in objects {
            ensure_exists(object.as_ref())?;

            let name = object.name();
            let object_dir = point_path.join(&name);
            // Unchecked: a failure here surfaces as a copy error below.
            create_dir_logged(fs, &object_dir);

            copy_object(fs, object.as_ref(), &object_dir.join(&name))?;
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "split"
    }
}
