//! Running workout.

use crate::error::TrainingResult;
use crate::kind::WorkoutKind;
use crate::traits::{CommonInputs, Workout};
use ft_core::units::{M_IN_KM, MIN_IN_H};

/// Empirical calorie coefficients for running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningCoefficients {
    /// Multiplier applied to mean speed
    pub speed_multiplier: f64,
    /// Subtracted from the scaled speed
    pub speed_shift: f64,
}

impl Default for RunningCoefficients {
    fn default() -> Self {
        Self {
            speed_multiplier: 18.0,
            speed_shift: 20.0,
        }
    }
}

/// Running: base distance and speed, speed-driven calorie formula.
#[derive(Debug, Clone)]
pub struct Running {
    inputs: CommonInputs,
    pub coefficients: RunningCoefficients,
}

impl Running {
    pub fn new(action: u64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            inputs: CommonInputs::new(action, duration_h, weight_kg),
            coefficients: RunningCoefficients::default(),
        }
    }

    pub fn with_coefficients(mut self, coefficients: RunningCoefficients) -> Self {
        self.coefficients = coefficients;
        self
    }
}

impl Workout for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn inputs(&self) -> &CommonInputs {
        &self.inputs
    }

    fn spent_calories(&self) -> TrainingResult<f64> {
        let c = &self.coefficients;
        Ok(
            (c.speed_multiplier * self.mean_speed_kmh() - c.speed_shift) * self.inputs.weight_kg
                / M_IN_KM
                * (self.inputs.duration_h * MIN_IN_H),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_reference_workout() {
        let run = Running::new(15000, 1.0, 75.0);
        assert!((run.distance_km() - 9.75).abs() < 1e-9);
        assert!((run.mean_speed_kmh() - 9.75).abs() < 1e-9);
        assert!((run.spent_calories().unwrap() - 699.75).abs() < 1e-9);
    }

    #[test]
    fn speed_scales_with_duration() {
        let run = Running::new(15000, 2.0, 75.0);
        assert!((run.mean_speed_kmh() - 4.875).abs() < 1e-9);
    }

    #[test]
    fn custom_coefficients() {
        let run = Running::new(15000, 1.0, 75.0).with_coefficients(RunningCoefficients {
            speed_multiplier: 1.0,
            speed_shift: 0.0,
        });
        // 9.75 * 75 / 1000 * 60
        assert!((run.spent_calories().unwrap() - 43.875).abs() < 1e-9);
    }
}
