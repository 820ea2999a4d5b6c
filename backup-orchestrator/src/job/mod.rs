//! Backup job - orchestrates objects, restore points and storage.
//!
//! A job owns its tracked objects and its restore point history. The storage
//! algorithm and the repository are shared handles and may serve several jobs.

pub mod summary;

pub use summary::JobSummary;

use crate::object::BackupObject;
use crate::point::RestorePoint;
use crate::repository::BackupRepository;
use crate::storage::StorageAlgorithm;
use crate::{BackupError, Result};
use std::sync::Arc;
use tracing::{error, info};

pub struct BackupJob {
    name: String,
    objects: Vec<Arc<dyn BackupObject>>,
    restore_points: Vec<RestorePoint>,
    storage: Arc<dyn StorageAlgorithm>,
    repository: Arc<BackupRepository>,
}

impl BackupJob {
    pub fn new(
        name: impl Into<String>,
        storage: Arc<dyn StorageAlgorithm>,
        repository: Arc<BackupRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            restore_points: Vec::new(),
            storage,
            repository,
        }
    }

    /// Start tracking `object`.
    ///
    /// Returns `Ok(false)` when an object with the same path is already tracked.
    pub fn add_backup_object(&mut self, object: Arc<dyn BackupObject>) -> Result<bool> {
        if !object.exists() {
            return Err(BackupError::ObjectNotFound(object.path().to_string()));
        }

        if self.objects.iter().any(|o| o.path() == object.path()) {
            info!("Object already tracked by job {}: {}", self.name, object.path());
            return Ok(false);
        }

        info!("Object added to job {}: {}", self.name, object.path());
        self.objects.push(object);
        Ok(true)
    }

    /// Stop tracking the object at `path`. Returns whether anything was removed.
    pub fn remove_backup_object(&mut self, path: &str) -> bool {
        match self.objects.iter().position(|o| o.path() == path) {
            Some(index) => {
                self.objects.remove(index);
                info!("Object removed from job {}: {}", self.name, path);
                true
            }
            None => {
                info!("Object not tracked by job {}: {}", self.name, path);
                false
            }
        }
    }

    /// Capture every tracked object into a new restore point.
    ///
    /// All objects must exist before anything is written. The point joins the
    /// history only once the storage algorithm has finished successfully.
    pub fn create_restore_point(&mut self, point_name: &str) -> Result<&RestorePoint> {
        if self.objects.is_empty() {
            return Err(BackupError::EmptyJob(self.name.clone()));
        }

        if let Some(missing) = self.objects.iter().find(|o| !o.exists()) {
            return Err(BackupError::ObjectNotFound(missing.path().to_string()));
        }

        let point = RestorePoint::new(point_name, &self.objects);

        if let Err(e) = self
            .storage
            .store(point.objects(), self.repository.path(), point_name)
        {
            error!(
                "Restore point {} of job {} failed ({}): {}",
                point_name,
                self.name,
                e.kind(),
                e
            );
            return Err(e);
        }

        info!(
            "Created restore point {} ({}) with {} objects using {} storage",
            point.name(),
            point.creation_time_string(),
            point.objects().len(),
            self.storage.name()
        );

        self.restore_points.push(point);
        self.restore_points
            .last()
            .ok_or_else(|| BackupError::EmptyJob(self.name.clone()))
    }

    /// Replace the storage algorithm used for future restore points.
    pub fn set_storage_algorithm(&mut self, storage: Arc<dyn StorageAlgorithm>) {
        info!(
            "Job {} switches storage from {} to {}",
            self.name,
            self.storage.name(),
            storage.name()
        );
        self.storage = storage;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn backup_objects(&self) -> &[Arc<dyn BackupObject>] {
        &self.objects
    }

    pub fn restore_points(&self) -> &[RestorePoint] {
        &self.restore_points
    }

    pub fn storage_algorithm(&self) -> &Arc<dyn StorageAlgorithm> {
        &self.storage
    }

    pub fn repository(&self) -> &Arc<BackupRepository> {
        &self.repository
    }

    pub fn summary(&self) -> JobSummary {
        JobSummary::from_job(self)
    }
}
