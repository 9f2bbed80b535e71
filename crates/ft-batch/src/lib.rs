//! ft-batch: sensor package files and batch evaluation.

pub mod run;
pub mod schema;

pub use run::{BatchReport, ErrorPolicy, SkippedPackage, run_batch};
pub use schema::*;

use std::path::Path;

pub type BatchResult<T> = Result<T, BatchError>;

#[derive(thiserror::Error, Debug)]
pub enum BatchError {
    #[error("Unsupported batch version {found} (expected {expected})")]
    Version { found: u32, expected: u32 },

    #[error("Package {index} ({workout_type}): {source}")]
    Package {
        index: usize,
        workout_type: String,
        source: ft_training::TrainingError,
    },

    #[error("Training error: {0}")]
    Training(#[from] ft_training::TrainingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn validate_batch(batch: &Batch) -> BatchResult<()> {
    if batch.version != LATEST_VERSION {
        return Err(BatchError::Version {
            found: batch.version,
            expected: LATEST_VERSION,
        });
    }
    if batch.packages.is_empty() {
        tracing::warn!("batch contains no packages");
    }
    Ok(())
}

pub fn load_yaml(path: &Path) -> BatchResult<Batch> {
    let content = std::fs::read_to_string(path)?;
    let batch: Batch = serde_yaml::from_str(&content)?;
    validate_batch(&batch)?;
    Ok(batch)
}

pub fn save_yaml(path: &Path, batch: &Batch) -> BatchResult<()> {
    validate_batch(batch)?;
    let content = serde_yaml::to_string(batch)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> BatchResult<Batch> {
    let content = std::fs::read_to_string(path)?;
    let batch: Batch = serde_json::from_str(&content)?;
    validate_batch(&batch)?;
    Ok(batch)
}

pub fn save_json(path: &Path, batch: &Batch) -> BatchResult<()> {
    validate_batch(batch)?;
    let content = serde_json::to_string_pretty(batch)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a batch file, choosing JSON for a `.json` extension and YAML otherwise.
pub fn load_batch(path: &Path) -> BatchResult<Batch> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    tracing::info!(path = %path.display(), "loading batch file");
    if is_json {
        load_json(path)
    } else {
        load_yaml(path)
    }
}
