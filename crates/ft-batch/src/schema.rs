//! Batch file schema definitions.

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Batch {
    pub version: u32,
    #[serde(default)]
    pub packages: Vec<PackageDef>,
}

/// One raw sensor package: a workout-type code and its positional values.
///
/// The code is kept as text so unknown codes are reported by the workout
/// factory when the batch runs, not when it is parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackageDef {
    #[serde(rename = "type")]
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl PackageDef {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

impl Batch {
    pub fn new(packages: Vec<PackageDef>) -> Self {
        Self {
            version: LATEST_VERSION,
            packages,
        }
    }

    /// Reference packages, one per workout type.
    pub fn sample() -> Self {
        Self::new(vec![
            PackageDef::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            PackageDef::new("RUN", vec![15000.0, 1.0, 75.0]),
            PackageDef::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ])
    }
}
