//! Common utilities for workout calculations.

use crate::error::{TrainingError, TrainingResult};
use ft_core::numeric::ensure_finite;

/// Ensure a derived value is finite, returning TrainingError if not.
///
/// A zero duration turns mean speed (and everything built on it) into an
/// infinity or NaN; this is where that surfaces.
pub fn check_finite(value: f64, what: &'static str) -> TrainingResult<f64> {
    ensure_finite(value, what).map_err(|_| TrainingError::NonPhysical { what })
}

/// Interpret a raw sensor value as a whole count of steps or strokes.
pub fn parse_action(raw: f64) -> TrainingResult<u64> {
    if !raw.is_finite() || raw < 0.0 {
        return Err(TrainingError::InvalidArg {
            what: "action must be a finite, non-negative count",
        });
    }
    if raw.fract() != 0.0 {
        return Err(TrainingError::InvalidArg {
            what: "action must be a whole number",
        });
    }
    if raw > u64::MAX as f64 {
        return Err(TrainingError::InvalidArg {
            what: "action count out of range",
        });
    }
    Ok(raw as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite() {
        assert_eq!(check_finite(1.0, "test"), Ok(1.0));
        assert!(check_finite(f64::INFINITY, "test").is_err());
        assert!(check_finite(f64::NAN, "test").is_err());
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action(720.0), Ok(720));
        assert_eq!(parse_action(0.0), Ok(0));
        assert!(parse_action(-1.0).is_err());
        assert!(parse_action(12.5).is_err());
        assert!(parse_action(f64::NAN).is_err());
        assert!(parse_action(1e30).is_err());
    }
}
