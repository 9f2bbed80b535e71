//! Error types for workout calculations.

use crate::kind::WorkoutKind;
use ft_core::error::FtError;
use thiserror::Error;

/// Errors that can occur while building or evaluating a workout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainingError {
    #[error("Unsupported operation: {what}")]
    UnsupportedOperation { what: &'static str },

    #[error("Unknown workout type: {code:?}")]
    UnknownWorkoutType { code: String },

    #[error("Invalid argument count for {kind}: expected {expected}, got {got}")]
    InvalidArgumentCount {
        kind: WorkoutKind,
        expected: usize,
        got: usize,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type TrainingResult<T> = Result<T, TrainingError>;

impl From<FtError> for TrainingError {
    fn from(e: FtError) -> Self {
        match e {
            FtError::NonFinite { what, .. } => TrainingError::NonPhysical { what },
            FtError::InvalidArg { what } => TrainingError::InvalidArg { what },
        }
    }
}
