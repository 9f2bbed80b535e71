//! Workout-type codes.

use crate::error::{TrainingError, TrainingResult};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported workout types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Short code used by sensor packages.
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    /// Label shown in summaries.
    pub fn display_name(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
        }
    }

    /// Positional inputs expected by the factory, in order.
    pub fn input_names(self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration_h", "weight_kg"],
            WorkoutKind::SportsWalking => &["action", "duration_h", "weight_kg", "height_cm"],
            WorkoutKind::Swimming => &[
                "action",
                "duration_h",
                "weight_kg",
                "length_pool_m",
                "count_pool",
            ],
        }
    }

    pub fn arity(self) -> usize {
        self.input_names().len()
    }

    pub fn from_code(code: &str) -> TrainingResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| TrainingError::UnknownWorkoutType {
                code: code.to_string(),
            })
    }
}

impl FromStr for WorkoutKind {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
