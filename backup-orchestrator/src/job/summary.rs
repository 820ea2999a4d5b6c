//! Human and machine readable report of a job's state.

use super::BackupJob;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub name: String,
    pub storage: String,
    pub repository: String,
    pub objects: Vec<ObjectSummary>,
    pub restore_points: Vec<PointSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    pub path: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSummary {
    pub name: String,
    pub created_at: String,
    pub object_count: usize,
    pub total_size: u64,
}

impl JobSummary {
    pub fn from_job(job: &BackupJob) -> Self {
        Self {
            name: job.name().to_string(),
            storage: job.storage_algorithm().name().to_string(),
            repository: job.repository().path().display().to_string(),
            objects: job
                .backup_objects()
                .iter()
                .map(|o| ObjectSummary {
                    path: o.path().to_string(),
                    size: o.size(),
                })
                .collect(),
            restore_points: job
                .restore_points()
                .iter()
                .map(|p| PointSummary {
                    name: p.name().to_string(),
                    created_at: p.creation_time_string(),
                    object_count: p.objects().len(),
                    total_size: p.total_size(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for JobSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Job: {}", self.name)?;
        writeln!(f, "Objects: {}", self.objects.len())?;
        for object in &self.objects {
            writeln!(f, "  - {} ({} bytes)", object.path, object.size)?;
        }
        writeln!(f, "Restore points: {}", self.restore_points.len())?;
        for point in &self.restore_points {
            writeln!(
                f,
                "  - {} ({}, {} bytes)",
                point.name, point.created_at, point.total_size
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{FileSystem, LocalFileSystem};
    use crate::object::BackupObjectFactory;
    use crate::repository::BackupRepository;
    use crate::storage::SplitStorage;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[test]
    fn test_summary_lists_objects_and_points_in_order() -> std::io::Result<()> {
        let temp_dir = TempDir::new()?;
        let filesystem: Arc<dyn FileSystem> = Arc::new(LocalFileSystem::new());
        let file1 = temp_dir.path().join("file1.txt");
        let file2 = temp_dir.path().join("file2.txt");
        fs::write(&file1, b"12345")?;
        fs::write(&file2, b"1234567")?;

        let repository =
            BackupRepository::new(temp_dir.path().join("repo"), filesystem.as_ref()).unwrap();
        let factory = BackupObjectFactory::new(filesystem.clone());
        let mut job = BackupJob::new(
            "DocumentsBackup",
            Arc::new(SplitStorage::new(filesystem)),
            Arc::new(repository),
        );
        job.add_backup_object(factory.create_file_backup_object(file1.to_string_lossy()))
            .unwrap();
        job.add_backup_object(factory.create_file_backup_object(file2.to_string_lossy()))
            .unwrap();
        job.create_restore_point("P1").unwrap();

        let summary = job.summary();

        assert_eq!(summary.name, "DocumentsBackup");
        assert_eq!(summary.storage, "split");
        assert_eq!(
            summary.objects.iter().map(|o| o.size).collect::<Vec<_>>(),
            vec![5, 7]
        );
        assert_eq!(summary.restore_points.len(), 1);
        assert_eq!(summary.restore_points[0].object_count, 2);
        assert_eq!(summary.restore_points[0].total_size, 12);

        let text = summary.to_string();
        assert!(text.starts_with("Job: DocumentsBackup\nObjects: 2\n"));
        assert!(text.contains(&format!("  - {} (5 bytes)", file1.display())));
        assert!(text.contains("Restore points: 1\n  - P1 ("));
        assert!(text.contains(", 12 bytes)\n"));

        Ok(())
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let summary = JobSummary {
            name: "Job".to_string(),
            storage: "single".to_string(),
            repository: "./backup_repository".to_string(),
            objects: vec![ObjectSummary {
                path: "d/a.txt".to_string(),
                size: 3,
            }],
            restore_points: vec![PointSummary {
                name: "P1".to_string(),
                created_at: "16.10.2026 09:30:00".to_string(),
                object_count: 1,
                total_size: 3,
            }],
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["objects"][0]["path"], "d/a.txt");
        assert_eq!(json["storage"], "single");
        assert_eq!(json["restore_points"][0]["total_size"], 3);

        let back: JobSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);
    }
}
