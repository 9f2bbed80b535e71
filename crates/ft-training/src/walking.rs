//! Sports walking workout.

use crate::error::TrainingResult;
use crate::kind::WorkoutKind;
use crate::traits::{CommonInputs, Workout};
use ft_core::numeric::floor_div;
use ft_core::units::MIN_IN_H;

/// Empirical calorie coefficients for sports walking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingCoefficients {
    /// Multiplier applied to body weight
    pub weight_multiplier: f64,
    /// Multiplier applied to (speed² // height) * weight
    pub speed_height_multiplier: f64,
}

impl Default for WalkingCoefficients {
    fn default() -> Self {
        Self {
            weight_multiplier: 0.035,
            speed_height_multiplier: 0.029,
        }
    }
}

/// Sports walking: base distance and speed, calories depend on body height.
#[derive(Debug, Clone)]
pub struct SportsWalking {
    inputs: CommonInputs,
    /// Body height in cm
    pub height_cm: f64,
    pub coefficients: WalkingCoefficients,
}

impl SportsWalking {
    pub fn new(action: u64, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            inputs: CommonInputs::new(action, duration_h, weight_kg),
            height_cm,
            coefficients: WalkingCoefficients::default(),
        }
    }

    pub fn with_coefficients(mut self, coefficients: WalkingCoefficients) -> Self {
        self.coefficients = coefficients;
        self
    }
}

impl Workout for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn inputs(&self) -> &CommonInputs {
        &self.inputs
    }

    fn spent_calories(&self) -> TrainingResult<f64> {
        let c = &self.coefficients;
        let weight = self.inputs.weight_kg;
        // Floor division, not a plain quotient
        let speed_term = floor_div(self.mean_speed_kmh().powi(2), self.height_cm)?;
        Ok(
            (c.weight_multiplier * weight + speed_term * c.speed_height_multiplier * weight)
                * (self.inputs.duration_h * MIN_IN_H),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrainingError;

    #[test]
    fn walking_reference_workout() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 180.0);
        assert!((walk.distance_km() - 5.85).abs() < 1e-9);
        assert!((walk.mean_speed_kmh() - 5.85).abs() < 1e-9);
        // 5.85² // 180 == 0, so only the weight term remains
        assert!((walk.spent_calories().unwrap() - 157.5).abs() < 1e-9);
    }

    #[test]
    fn floor_division_is_kept() {
        // speed = 65 km/h, speed² = 4225, 4225 // 180 = 23 (not 23.47...)
        let walk = SportsWalking::new(100_000, 1.0, 70.0, 180.0);
        let expected = (0.035 * 70.0 + 23.0 * 0.029 * 70.0) * 60.0;
        assert!((walk.spent_calories().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_height_is_rejected() {
        let walk = SportsWalking::new(9000, 1.0, 75.0, 0.0);
        assert!(matches!(
            walk.spent_calories(),
            Err(TrainingError::InvalidArg { .. })
        ));
    }
}
