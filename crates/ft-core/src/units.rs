// ft-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Mass as UomMass, Time as UomTime, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

/// Meters in one kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in one hour.
pub const MIN_IN_H: f64 = 60.0;

#[inline]
pub fn km(v: f64) -> Length {
    use uom::si::length::kilometer;
    Length::new::<kilometer>(v)
}

#[inline]
pub fn meters(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn cm(v: f64) -> Length {
    use uom::si::length::centimeter;
    Length::new::<centimeter>(v)
}

#[inline]
pub fn hours(v: f64) -> Time {
    use uom::si::time::hour;
    Time::new::<hour>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn kmph(v: f64) -> Velocity {
    use uom::si::velocity::kilometer_per_hour;
    Velocity::new::<kilometer_per_hour>(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tolerances, nearly_equal};

    #[test]
    fn constructors_smoke() {
        let _l = km(9.75);
        let _p = meters(25.0);
        let _h = cm(180.0);
        let _t = hours(1.0);
        let _w = kg(75.0);
        let _v = kmph(9.75);
    }

    #[test]
    fn conversions_agree_with_constants() {
        let tol = Tolerances::default();
        assert!(nearly_equal(km(1.0).value, meters(M_IN_KM).value, tol));
        assert!(nearly_equal(hours(1.0).value, MIN_IN_H * 60.0, tol));
        assert!(nearly_equal((km(9.75) / hours(1.0)).value, kmph(9.75).value, tol));
    }
}
