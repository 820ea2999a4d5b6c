//! Configuration management for the backup orchestrator.
//!
//! A job is described by a TOML file; every section except `[job]` may be omitted.

use crate::storage::{CollisionPolicy, StorageKind};
use crate::BackupError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,
    pub job: JobConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Root directory restore points are written under
    #[serde(default = "default_repository_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Job name, used in logs and summaries
    pub name: String,

    /// Storage algorithm for new restore points (split, single)
    #[serde(default)]
    pub storage: StorageKind,

    /// Source files tracked by the job, in order
    #[serde(default)]
    pub objects: Vec<String>,

    /// Restore points created when none are given on the command line
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// What single storage does with objects sharing a name (overwrite, reject)
    #[serde(default)]
    pub collision: CollisionPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_repository_path() -> PathBuf {
    PathBuf::from("./backup_repository")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            path: default_repository_path(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repository: RepositoryConfig::default(),
            job: JobConfig {
                name: "DocumentsBackup".to_string(),
                storage: StorageKind::Split,
                objects: Vec::new(),
                points: Vec::new(),
            },
            storage: StorageConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| BackupError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.job.name.trim().is_empty() {
            return Err(BackupError::Config("job.name must not be empty".to_string()));
        }
        if self.repository.path.as_os_str().is_empty() {
            return Err(BackupError::Config(
                "repository.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Fail unless the job lists at least one object to back up.
    pub fn require_objects(&self) -> crate::Result<()> {
        if self.job.objects.is_empty() {
            return Err(BackupError::Config(
                "job.objects is empty; pass --config FILE listing the files to back up"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
