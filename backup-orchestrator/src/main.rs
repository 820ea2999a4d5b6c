//! Backup Orchestrator - Main entry point
//!
//! Runs the job described by a configuration file and creates the requested
//! restore points.

use anyhow::{Context, Result};
use backup_orchestrator::{
    config::Config, utils, BackupJob, BackupObjectFactory, BackupRepository, FileSystem,
    LocalFileSystem, StorageKind,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Storage algorithm (overrides config)
    #[arg(short, long, value_enum)]
    storage: Option<StorageKind>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print the job summary as JSON
    #[arg(long)]
    json: bool,

    /// Restore points to create, in order (overrides config)
    #[arg(value_name = "POINT")]
    points: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = if let Some(config_path) = &args.config {
        Config::from_file(config_path)
            .with_context(|| format!("failed to load config {}", config_path.display()))?
    } else {
        Config::default()
    };

    // Initialize logging
    let log_level = args.log_level.as_deref().unwrap_or(&config.log.level);
    utils::logger::init(log_level)?;

    tracing::info!(
        "Starting backup-orchestrator v{} (job: {})",
        env!("CARGO_PKG_VERSION"),
        config.job.name
    );

    config.require_objects()?;

    let fs: Arc<dyn FileSystem> = Arc::new(LocalFileSystem::new());
    let repository = Arc::new(BackupRepository::new(&config.repository.path, fs.as_ref())?);

    let storage_kind = args.storage.unwrap_or(config.job.storage);
    let storage = storage_kind.build(fs.clone(), config.storage.collision);

    let mut job = BackupJob::new(config.job.name.clone(), storage, repository);
    let factory = BackupObjectFactory::new(fs);

    for path in &config.job.objects {
        if let Err(e) = job.add_backup_object(factory.create_file_backup_object(path.as_str())) {
            tracing::warn!("Skipping {}: {}", path, e);
        }
    }

    let points = if args.points.is_empty() {
        config.job.points.clone()
    } else {
        args.points.clone()
    };
    let points = if points.is_empty() {
        vec![chrono::Local::now().format("%Y%m%d-%H%M%S").to_string()]
    } else {
        points
    };

    for point in &points {
        job.create_restore_point(point)
            .with_context(|| format!("failed to create restore point {}", point))?;
    }

    let summary = job.summary();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary);
    }

    Ok(())
}
