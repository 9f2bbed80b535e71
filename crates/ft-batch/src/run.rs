//! Batch evaluation: factory, then summary, for every package.

use crate::schema::Batch;
use crate::{BatchError, BatchResult};
use ft_training::{TrainingError, TrainingResult, WorkoutSummary, read_package};

/// What to do when a package cannot be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first failing package.
    #[default]
    Abort,
    /// Log the failure and continue with the next package.
    Skip,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPackage {
    pub index: usize,
    pub workout_type: String,
    pub error: TrainingError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Summaries in package order
    pub summaries: Vec<WorkoutSummary>,
    pub skipped: Vec<SkippedPackage>,
}

impl BatchReport {
    /// Summary lines ready for printing.
    pub fn messages(&self) -> Vec<String> {
        self.summaries.iter().map(WorkoutSummary::message).collect()
    }
}

fn evaluate(workout_type: &str, data: &[f64]) -> TrainingResult<WorkoutSummary> {
    read_package(workout_type, data)?.show_training_info()
}

pub fn run_batch(batch: &Batch, policy: ErrorPolicy) -> BatchResult<BatchReport> {
    let mut report = BatchReport::default();

    for (index, package) in batch.packages.iter().enumerate() {
        match evaluate(&package.workout_type, &package.data) {
            Ok(summary) => report.summaries.push(summary),
            Err(error) => match policy {
                ErrorPolicy::Abort => {
                    return Err(BatchError::Package {
                        index,
                        workout_type: package.workout_type.clone(),
                        source: error,
                    });
                }
                ErrorPolicy::Skip => {
                    tracing::warn!(
                        index,
                        workout_type = %package.workout_type,
                        %error,
                        "skipping package"
                    );
                    report.skipped.push(SkippedPackage {
                        index,
                        workout_type: package.workout_type.clone(),
                        error,
                    });
                }
            },
        }
    }

    tracing::info!(
        computed = report.summaries.len(),
        skipped = report.skipped.len(),
        "batch complete"
    );
    Ok(report)
}
