//! Swimming workout.

use crate::error::TrainingResult;
use crate::kind::WorkoutKind;
use crate::traits::{CommonInputs, Workout};
use ft_core::units::M_IN_KM;

/// Distance covered per stroke, in meters.
pub const SWIM_LEN_STEP_M: f64 = 1.38;

/// Empirical calorie coefficients for swimming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingCoefficients {
    /// Added to mean speed
    pub speed_shift: f64,
    /// Multiplier applied to the shifted speed
    pub speed_multiplier: f64,
}

impl Default for SwimmingCoefficients {
    fn default() -> Self {
        Self {
            speed_shift: 1.1,
            speed_multiplier: 2.0,
        }
    }
}

/// Swimming: stroke-based distance, pool-based speed.
#[derive(Debug, Clone)]
pub struct Swimming {
    inputs: CommonInputs,
    /// Pool length in meters
    pub length_pool_m: f64,
    /// Number of pool lengths swum
    pub count_pool: f64,
    pub coefficients: SwimmingCoefficients,
}

impl Swimming {
    pub fn new(
        action: u64,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            inputs: CommonInputs::new(action, duration_h, weight_kg),
            length_pool_m,
            count_pool,
            coefficients: SwimmingCoefficients::default(),
        }
    }

    pub fn with_coefficients(mut self, coefficients: SwimmingCoefficients) -> Self {
        self.coefficients = coefficients;
        self
    }
}

impl Workout for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn inputs(&self) -> &CommonInputs {
        &self.inputs
    }

    fn step_length_m(&self) -> f64 {
        SWIM_LEN_STEP_M
    }

    /// Pool distance over duration; the stroke count plays no part.
    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool_m * self.count_pool / M_IN_KM / self.inputs.duration_h
    }

    fn spent_calories(&self) -> TrainingResult<f64> {
        let c = &self.coefficients;
        Ok((self.mean_speed_kmh() + c.speed_shift) * c.speed_multiplier * self.inputs.weight_kg)
    }
}
