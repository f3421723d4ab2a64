//! Generalized circles
//!
//! A generalized circle is the zero locus of a Hermitian quadratic form on
//! the projective plane. The matrix `[[v00, v01], [conj(v01), v11]]` is
//! determined by one complex and two real scalars, which is all we store.
//! The form's sign selects one component of the complement (`form ≤ 0` is
//! "inside"), so the same object models a disk, a disk complement (negative
//! radius), or a half-plane (`v00 = 0`).

use super::complex::PComplex;
use super::mobius::Mobius;
use num_complex::Complex64;

/// A generalized circle as a self-adjoint quadratic form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenCircle {
    /// Real coefficient of `|z|²`
    pub v00: f64,
    /// Complex off-diagonal coefficient
    pub v01: Complex64,
    /// Real constant coefficient
    pub v11: f64,
}

/// The real line, oriented so the upper half-plane is inside
///
/// This is the canonical circle of the gasket construction: every circle the
/// engine emits is an image of this one.
pub const REAL_LINE: GenCircle = GenCircle {
    v00: 0.0,
    v01: Complex64::new(0.0, -1.0),
    v11: 0.0,
};

impl GenCircle {
    /// Build a form from its three stored scalars
    pub const fn new(v00: f64, v01: Complex64, v11: f64) -> Self {
        Self { v00, v01, v11 }
    }

    /// The disk with the given center and radius
    ///
    /// A negative radius yields the complement of the disk, consistent with
    /// [`GenCircle::radius`].
    pub fn from_center_radius(center: Complex64, radius: f64) -> Self {
        Self::new(
            1.0 / radius,
            -center / radius,
            (center.norm_sqr() - radius * radius) / radius,
        )
    }

    /// The circle through three points, oriented by their order
    ///
    /// The inside is the image of the upper half-plane under the transform
    /// sending `(∞, 0, 1)` to the given triple.
    pub fn through_points(z0: PComplex, z1: PComplex, z2: PComplex) -> Self {
        REAL_LINE.transformed(&Mobius::cross_ratio(z0, z1, z2).inverse())
    }

    /// Evaluate the quadratic form at a finite point
    pub fn form_at(&self, z: Complex64) -> f64 {
        self.v00 * z.norm_sqr() + 2.0 * (self.v01 * z.conj()).re + self.v11
    }

    /// Determinant of the Hermitian matrix
    pub fn det(&self) -> f64 {
        self.v00 * self.v11 - self.v01.norm_sqr()
    }

    /// Whether the form degenerates to a half-plane (line through infinity)
    // The zero test is exact by design: half-planes arise from exact
    // cancellation, and near-zero forms must stay on the disk path
    #[allow(clippy::float_cmp)]
    pub const fn is_half_plane(&self) -> bool {
        self.v00 == 0.0
    }

    /// Center of the disk; meaningless for half-planes
    pub fn center(&self) -> Complex64 {
        -self.v01 / self.v00
    }

    /// Signed radius; negative denotes the complement of a disk
    pub fn radius(&self) -> f64 {
        let neg_det = -self.det();
        if neg_det >= 0.0 {
            neg_det.sqrt() / self.v00
        } else {
            0.0
        }
    }

    /// Diameter used as the size metric for circle nodes
    ///
    /// Half-planes are unbounded and report infinity, so they are never
    /// pruned by size alone.
    pub fn diameter(&self) -> f64 {
        if self.is_half_plane() {
            f64::INFINITY
        } else {
            2.0 * self.radius().abs()
        }
    }

    /// Image of this circle under a Möbius transformation
    ///
    /// Computes `adjoint(m⁻¹) · C · m⁻¹` directly on the three stored
    /// scalars; the inside of the result is the image of the inside, for any
    /// matrix scale.
    pub fn transformed(&self, m: &Mobius) -> Self {
        let n = m.inverse();
        let (a, b, c) = (self.v00, self.v01, self.v11);
        let v00 = a * n.v00.norm_sqr() + 2.0 * (b * n.v10 * n.v00.conj()).re + c * n.v10.norm_sqr();
        let v01 = a * n.v01 * n.v00.conj()
            + b * n.v11 * n.v00.conj()
            + b.conj() * n.v01 * n.v10.conj()
            + c * n.v11 * n.v10.conj();
        let v11 = a * n.v01.norm_sqr() + 2.0 * (b * n.v11 * n.v01.conj()).re + c * n.v11.norm_sqr();
        Self::new(v00, v01, v11)
    }
}
