//! Core trait for workout models.

use crate::common::check_finite;
use crate::error::{TrainingError, TrainingResult};
use crate::kind::WorkoutKind;
use crate::summary::WorkoutSummary;
use ft_core::units::M_IN_KM;
use std::fmt;

/// Default distance covered per step, in meters.
pub const LEN_STEP_M: f64 = 0.65;

/// Raw inputs shared by every workout type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommonInputs {
    /// Count of steps or strokes reported by the sensor
    pub action: u64,
    /// Workout duration in hours. Assumed positive.
    pub duration_h: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
}

impl CommonInputs {
    pub fn new(action: u64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

/// Trait for a single recorded workout.
///
/// Distance and mean speed have shared default formulas driven by
/// `step_length_m`; calories have no sensible default and must be provided
/// by every concrete workout.
pub trait Workout: fmt::Debug + Send + Sync {
    /// Workout type, which also supplies the summary label.
    fn kind(&self) -> WorkoutKind;

    /// Raw inputs common to all workout types.
    fn inputs(&self) -> &CommonInputs;

    /// Distance covered per action unit, in meters.
    fn step_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance covered in km.
    fn distance_km(&self) -> f64 {
        self.inputs().action as f64 * self.step_length_m() / M_IN_KM
    }

    /// Mean speed over the whole workout in km/h.
    ///
    /// Not guarded against a zero duration; the result is then infinite or NaN.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.inputs().duration_h
    }

    /// Energy spent during the workout, in kcal.
    ///
    /// Default implementation returns UnsupportedOperation.
    fn spent_calories(&self) -> TrainingResult<f64> {
        Err(TrainingError::UnsupportedOperation {
            what: "spent_calories not implemented for this workout",
        })
    }

    /// Compute all derived metrics and collect them into a summary.
    ///
    /// Fails with NonPhysical when a derived value is not finite, which is
    /// how a zero duration is reported.
    fn show_training_info(&self) -> TrainingResult<WorkoutSummary> {
        let duration = self.inputs().duration_h;
        let distance = check_finite(self.distance_km(), "distance")?;
        let speed = check_finite(self.mean_speed_kmh(), "mean speed")?;
        let calories = check_finite(self.spent_calories()?, "calories")?;

        tracing::debug!(
            kind = %self.kind(),
            duration,
            distance,
            speed,
            calories,
            "computed workout summary"
        );

        Ok(WorkoutSummary {
            training_type: self.kind().display_name().to_string(),
            duration,
            distance,
            speed,
            calories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A workout that relies on every default.
    #[derive(Debug)]
    struct Bare {
        inputs: CommonInputs,
    }

    impl Workout for Bare {
        fn kind(&self) -> WorkoutKind {
            WorkoutKind::Running
        }

        fn inputs(&self) -> &CommonInputs {
            &self.inputs
        }
    }

    #[test]
    fn default_distance_and_speed() {
        let bare = Bare {
            inputs: CommonInputs::new(1000, 0.5, 70.0),
        };
        assert!((bare.distance_km() - 0.65).abs() < 1e-12);
        assert!((bare.mean_speed_kmh() - 1.3).abs() < 1e-12);
    }

    #[test]
    fn calories_unsupported_by_default() {
        let bare = Bare {
            inputs: CommonInputs::new(1000, 1.0, 70.0),
        };
        assert!(matches!(
            bare.spent_calories(),
            Err(TrainingError::UnsupportedOperation { .. })
        ));
        // The summary cannot be built without a calorie formula
        assert!(matches!(
            bare.show_training_info(),
            Err(TrainingError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn zero_duration_speed_is_not_finite() {
        let bare = Bare {
            inputs: CommonInputs::new(1000, 0.0, 70.0),
        };
        assert!(bare.mean_speed_kmh().is_infinite());
    }
}
