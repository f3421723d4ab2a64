//! Möbius transformations
//!
//! An invertible linear map of the projective complex plane, i.e. a linear
//! fractional transformation `z ↦ (a·z + b)/(c·z + d)`, stored as its 2×2
//! complex matrix. Matrices are interpreted up to a nonzero scalar multiple;
//! `normalize` fixes the scale when absolute magnitudes matter downstream.

use super::complex::PComplex;
use num_complex::Complex64;
use std::ops::Mul;

/// A Möbius transformation as a 2×2 complex matrix `[v00 v01; v10 v11]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mobius {
    /// Top-left entry
    pub v00: Complex64,
    /// Top-right entry
    pub v01: Complex64,
    /// Bottom-left entry
    pub v10: Complex64,
    /// Bottom-right entry
    pub v11: Complex64,
}

impl Mobius {
    /// The identity transformation
    pub const IDENTITY: Self = Self {
        v00: Complex64::new(1.0, 0.0),
        v01: Complex64::ZERO,
        v10: Complex64::ZERO,
        v11: Complex64::new(1.0, 0.0),
    };

    /// Build a transformation from its four matrix entries
    pub const fn new(v00: Complex64, v01: Complex64, v10: Complex64, v11: Complex64) -> Self {
        Self { v00, v01, v10, v11 }
    }

    /// Matrix determinant
    pub fn det(&self) -> Complex64 {
        self.v00 * self.v11 - self.v01 * self.v10
    }

    /// Projective inverse: the adjugate matrix
    ///
    /// The true matrix inverse differs by the factor `1/det`, which is
    /// irrelevant under the projective interpretation.
    pub fn inverse(&self) -> Self {
        Self::new(self.v11, -self.v01, -self.v10, self.v00)
    }

    /// Rescale so the determinant becomes 1
    ///
    /// Divides all entries by a square root of the determinant. Required
    /// where the scale ambiguity is observable, e.g. before comparing
    /// transformed circle radii.
    pub fn normalize(&self) -> Self {
        let f = self.det().sqrt();
        Self::new(self.v00 / f, self.v01 / f, self.v10 / f, self.v11 / f)
    }

    /// The transformation sending `(z0, z1, z2)` to `(∞, 0, 1)`
    pub fn cross_ratio(z0: PComplex, z1: PComplex, z2: PComplex) -> Self {
        let (a0, b0) = (z0.num, z0.den);
        let (a1, b1) = (z1.num, z1.den);
        let (a2, b2) = (z2.num, z2.den);
        Self::new(
            b1 * (a0 * b2 - a2 * b0),
            a1 * (a2 * b0 - a0 * b2),
            b0 * (a1 * b2 - a2 * b1),
            a0 * (a2 * b1 - a1 * b2),
        )
    }

    /// The transformation sending `(z0, z1, z2)` to `(w0, w1, w2)`
    ///
    /// Composes two cross-ratio transforms through the canonical triple
    /// `(∞, 0, 1)` and normalizes the result.
    pub fn map_triple(
        z0: PComplex,
        z1: PComplex,
        z2: PComplex,
        w0: PComplex,
        w1: PComplex,
        w2: PComplex,
    ) -> Self {
        let p = Self::cross_ratio(z0, z1, z2);
        let q = Self::cross_ratio(w0, w1, w2);
        (q.inverse() * p).normalize()
    }

    /// Apply to a projective point by matrix-vector multiplication
    pub fn apply(&self, z: PComplex) -> PComplex {
        PComplex::new(
            self.v00 * z.num + self.v01 * z.den,
            self.v10 * z.num + self.v11 * z.den,
        )
    }

    /// Apply to an ordinary complex value via the projective lift
    pub fn apply_value(&self, z: Complex64) -> Complex64 {
        self.apply(PComplex::from(z)).value()
    }
}

impl Mul for Mobius {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(
            self.v00 * other.v00 + self.v01 * other.v10,
            self.v00 * other.v01 + self.v01 * other.v11,
            self.v10 * other.v00 + self.v11 * other.v10,
            self.v10 * other.v01 + self.v11 * other.v11,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-12
    }

    #[test]
    fn cross_ratio_sends_triple_to_canonical_points() {
        let z0 = PComplex::from(Complex64::new(2.0, 1.0));
        let z1 = PComplex::from(Complex64::new(-1.0, 0.5));
        let z2 = PComplex::from(Complex64::new(0.0, -3.0));
        let m = Mobius::cross_ratio(z0, z1, z2);

        let w0 = m.apply(z0);
        assert!(w0.den.norm() < 1e-12 * w0.num.norm());
        assert!(close(m.apply(z1).value(), Complex64::ZERO));
        assert!(close(m.apply(z2).value(), Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn map_triple_hits_all_three_targets() {
        let (z0, z1, z2) = (
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 1.0),
        );
        let (w0, w1, w2) = (
            Complex64::new(2.0, 2.0),
            Complex64::new(-1.0, 0.0),
            Complex64::new(0.5, -0.5),
        );
        let m = Mobius::map_triple(
            z0.into(),
            z1.into(),
            z2.into(),
            w0.into(),
            w1.into(),
            w2.into(),
        );
        for (zi, wi) in [(z0, w0), (z1, w1), (z2, w2)] {
            assert!(close(m.apply_value(zi), wi));
        }
    }

    #[test]
    fn inverse_composes_to_identity() {
        let m = Mobius::new(
            Complex64::new(1.0, 2.0),
            Complex64::new(0.0, -1.0),
            Complex64::new(3.0, 0.5),
            Complex64::new(1.0, 1.0),
        );
        let id = (m * m.inverse()).normalize();
        assert!(close(id.v00, id.v11));
        assert!(id.v01.norm() < 1e-12 * id.v00.norm());
        assert!(id.v10.norm() < 1e-12 * id.v00.norm());
    }

    #[test]
    fn product_inverse_reverses_factors() {
        let f = Mobius::new(
            Complex64::new(1.0, 1.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(1.0, -1.0),
        );
        let g = Mobius::new(
            Complex64::new(0.5, 0.0),
            Complex64::new(0.0, 2.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(-1.0, 1.0),
        );
        let lhs = (f * g).inverse().normalize();
        let rhs = (g.inverse() * f.inverse()).normalize();
        // Projective equality: matrices may differ by sign after normalize
        let direct = (lhs.v00 - rhs.v00).norm()
            + (lhs.v01 - rhs.v01).norm()
            + (lhs.v10 - rhs.v10).norm()
            + (lhs.v11 - rhs.v11).norm();
        let negated = (lhs.v00 + rhs.v00).norm()
            + (lhs.v01 + rhs.v01).norm()
            + (lhs.v10 + rhs.v10).norm()
            + (lhs.v11 + rhs.v11).norm();
        assert!(direct.min(negated) < 1e-12);
    }

    #[test]
    fn normalize_fixes_determinant() {
        let m = Mobius::new(
            Complex64::new(3.0, 0.0),
            Complex64::new(1.0, 1.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(2.0, -1.0),
        );
        assert!(close(m.normalize().det(), Complex64::new(1.0, 0.0)));
    }
}
