//! Restore points: immutable records of what a job captured and when.

use crate::object::BackupObject;
use chrono::{DateTime, Local};
use std::sync::Arc;

/// Format used for creation times in logs and summaries.
pub const CREATION_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

#[derive(Debug, Clone)]
pub struct RestorePoint {
    name: String,
    creation_time: DateTime<Local>,
    objects: Vec<Arc<dyn BackupObject>>,
}

impl RestorePoint {
    /// Snapshot `objects` under `name`, stamped with the current local time.
    pub fn new(name: impl Into<String>, objects: &[Arc<dyn BackupObject>]) -> Self {
        Self {
            name: name.into(),
            creation_time: Local::now(),
            objects: objects.to_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn creation_time(&self) -> DateTime<Local> {
        self.creation_time
    }

    /// Creation time as `DD.MM.YYYY HH:MM:SS`
    pub fn creation_time_string(&self) -> String {
        self.creation_time.format(CREATION_TIME_FORMAT).to_string()
    }

    pub fn objects(&self) -> &[Arc<dyn BackupObject>] {
        &self.objects
    }

    /// Current combined size of the captured objects' sources.
    pub fn total_size(&self) -> u64 {
        self.objects.iter().map(|o| o.size()).sum()
    }
}
