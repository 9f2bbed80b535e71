//! Computed workout summary and its text rendering.

use ft_core::units::{Length, Time, Velocity, hours, km, kmph};
use serde::Serialize;
use std::fmt;

/// Derived metrics for one workout.
///
/// Built once by `Workout::show_training_info` and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSummary {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// km/h
    pub speed: f64,
    /// kcal
    pub calories: f64,
}

impl WorkoutSummary {
    /// Fixed-format single-line message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn duration_time(&self) -> Time {
        hours(self.duration)
    }

    pub fn distance_length(&self) -> Length {
        km(self.distance)
    }

    pub fn speed_velocity(&self) -> Velocity {
        kmph(self.speed)
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
