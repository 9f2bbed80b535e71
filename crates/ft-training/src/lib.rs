//! ft-training: workout models and the derived metrics they produce.
//!
//! Provides models for three workout types:
//! - Running
//! - Sports walking (adds body height)
//! - Swimming (adds pool length and lap count, own speed formula)
//!
//! All workouts implement the `Workout` trait. Every query is a pure function
//! of the raw inputs, so a workout may be summarized any number of times.
//!
//! # Example
//!
//! ```
//! use ft_training::{Workout, read_package};
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
//! let info = workout.show_training_info().unwrap();
//! assert_eq!(
//!     info.message(),
//!     "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; \
//!      Avg speed: 9.750 km/h; Calories burned: 699.750."
//! );
//! ```

pub mod common;
pub mod error;
pub mod factory;
pub mod kind;
pub mod running;
pub mod summary;
pub mod swimming;
pub mod traits;
pub mod walking;

// Re-exports
pub use error::{TrainingError, TrainingResult};
pub use factory::{build_workout, read_package};
pub use kind::WorkoutKind;
pub use running::{Running, RunningCoefficients};
pub use summary::WorkoutSummary;
pub use swimming::{Swimming, SwimmingCoefficients};
pub use traits::{CommonInputs, LEN_STEP_M, Workout};
pub use walking::{SportsWalking, WalkingCoefficients};
