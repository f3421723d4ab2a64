//! Projective complex numbers
//!
//! A point of the extended complex plane is stored as a homogeneous pair
//! `(numerator, denominator)`; the point at infinity is `(1, 0)` exactly.
//! This representation lets Möbius transformations act by plain matrix-vector
//! multiplication with no special cases at infinity.

use num_complex::Complex64;

/// A point of the extended complex plane in homogeneous coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PComplex {
    /// Numerator of the homogeneous pair
    pub num: Complex64,
    /// Denominator of the homogeneous pair; zero denotes infinity
    pub den: Complex64,
}

impl PComplex {
    /// The point at infinity, `(1, 0)`
    pub const INFINITY: Self = Self {
        num: Complex64::new(1.0, 0.0),
        den: Complex64::ZERO,
    };

    /// Build a projective point from an explicit homogeneous pair
    pub const fn new(num: Complex64, den: Complex64) -> Self {
        Self { num, den }
    }

    /// Divide back to an ordinary complex value
    ///
    /// Only meaningful when the denominator is nonzero; the point at
    /// infinity divides to a non-finite value, matching IEEE semantics.
    pub fn value(&self) -> Complex64 {
        self.num / self.den
    }

    /// Whether this point is (numerically) the point at infinity
    pub fn is_infinity(&self) -> bool {
        self.den == Complex64::ZERO
    }
}

impl From<Complex64> for PComplex {
    /// Lift an ordinary complex value; non-finite values lift to infinity
    fn from(value: Complex64) -> Self {
        if value.re.is_infinite() || value.im.is_infinite() {
            Self::INFINITY
        } else {
            Self::new(value, Complex64::new(1.0, 0.0))
        }
    }
}

impl From<f64> for PComplex {
    fn from(value: f64) -> Self {
        Self::from(Complex64::new(value, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_lift_with_unit_denominator() {
        let z = PComplex::from(Complex64::new(2.0, -3.0));
        assert_eq!(z.den, Complex64::new(1.0, 0.0));
        assert_eq!(z.value(), Complex64::new(2.0, -3.0));
    }

    #[test]
    fn infinite_values_lift_to_the_point_at_infinity() {
        let z = PComplex::from(Complex64::new(f64::INFINITY, 0.0));
        assert!(z.is_infinity());
        let w = PComplex::from(Complex64::new(0.0, f64::NEG_INFINITY));
        assert!(w.is_infinity());
    }
}
