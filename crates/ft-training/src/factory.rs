//! Construction of workouts from raw sensor packages.

use crate::common::parse_action;
use crate::error::{TrainingError, TrainingResult};
use crate::kind::WorkoutKind;
use crate::running::Running;
use crate::swimming::Swimming;
use crate::traits::Workout;
use crate::walking::SportsWalking;

/// Build a workout from a workout-type code and its positional values.
///
/// Values are assigned in the order given by `WorkoutKind::input_names`.
pub fn read_package(workout_type: &str, data: &[f64]) -> TrainingResult<Box<dyn Workout>> {
    let kind = WorkoutKind::from_code(workout_type)?;
    build_workout(kind, data)
}

/// Build a workout of a known kind from its positional values.
pub fn build_workout(kind: WorkoutKind, data: &[f64]) -> TrainingResult<Box<dyn Workout>> {
    let workout: Box<dyn Workout> = match (kind, data) {
        (WorkoutKind::Running, &[action, duration, weight]) => {
            Box::new(Running::new(parse_action(action)?, duration, weight))
        }
        (WorkoutKind::SportsWalking, &[action, duration, weight, height]) => Box::new(
            SportsWalking::new(parse_action(action)?, duration, weight, height),
        ),
        (WorkoutKind::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            Box::new(Swimming::new(
                parse_action(action)?,
                duration,
                weight,
                length_pool,
                count_pool,
            ))
        }
        _ => {
            return Err(TrainingError::InvalidArgumentCount {
                kind,
                expected: kind.arity(),
                got: data.len(),
            });
        }
    };
    Ok(workout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_kind() {
        let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(swim.kind(), WorkoutKind::Swimming);

        let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(run.kind(), WorkoutKind::Running);

        let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(walk.kind(), WorkoutKind::SportsWalking);
        assert_eq!(walk.inputs().action, 9000);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            TrainingError::UnknownWorkoutType {
                code: "XYZ".to_string()
            }
        );
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).unwrap_err();
        assert_eq!(
            err,
            TrainingError::InvalidArgumentCount {
                kind: WorkoutKind::Running,
                expected: 3,
                got: 4,
            }
        );

        let err = read_package("SWM", &[720.0, 1.0, 80.0]).unwrap_err();
        assert!(matches!(
            err,
            TrainingError::InvalidArgumentCount {
                expected: 5,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn fractional_action_is_rejected() {
        let err = read_package("RUN", &[15000.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, TrainingError::InvalidArg { .. }));
    }
}
