use crate::FtError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, FtError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FtError::NonFinite { what, value: v })
    }
}

/// Floor division: the quotient rounded toward negative infinity.
///
/// The remainder is taken with `%` (C `fmod`) and the quotient is rebuilt from
/// it, so results agree with `floor(a / b)` even where the plain quotient
/// rounds across an integer boundary. A zero divisor is rejected.
pub fn floor_div(a: Real, b: Real) -> Result<Real, FtError> {
    if b == 0.0 {
        return Err(FtError::InvalidArg {
            what: "floor division by zero",
        });
    }

    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }

    if div == 0.0 {
        // Signed zero follows the sign of the true quotient
        return Ok(0.0_f64.copysign(a / b));
    }

    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    Ok(floored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn floor_div_positive() {
        assert_eq!(floor_div(34.2225, 180.0).unwrap(), 0.0);
        assert_eq!(floor_div(400.0, 180.0).unwrap(), 2.0);
        assert_eq!(floor_div(360.0, 180.0).unwrap(), 2.0);
    }

    #[test]
    fn floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(-7.0, 2.0).unwrap(), -4.0);
        assert_eq!(floor_div(7.0, -2.0).unwrap(), -4.0);
        assert_eq!(floor_div(-7.0, -2.0).unwrap(), 3.0);
        assert_eq!(floor_div(-0.5, 180.0).unwrap(), -1.0);
    }

    #[test]
    fn floor_div_zero_divisor() {
        assert!(matches!(
            floor_div(1.0, 0.0),
            Err(FtError::InvalidArg { .. })
        ));
    }
}
